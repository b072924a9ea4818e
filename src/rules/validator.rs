//! Placement predicates.
//!
//! Pure functions over a board; none of them mutate anything. An index
//! outside the board is simply "not placeable".

use crate::cards::{Card, Rank};
use crate::zones::{Board, FOUNDATION_SUITS};

/// Can `card` go on foundation `index`?
///
/// Empty foundation: only the Ace of the foundation's assigned suit.
/// Otherwise: same suit, exactly one rank higher than the top.
#[must_use]
pub fn can_place_on_foundation(board: &Board, card: Card, index: usize) -> bool {
    let (Some(pile), Some(&suit)) = (board.foundations.get(index), FOUNDATION_SUITS.get(index))
    else {
        return false;
    };

    match pile.top() {
        None => card.rank == Rank::Ace && card.suit == suit,
        Some(top) => card.suit == top.suit && top.rank.next() == Some(card.rank),
    }
}

/// Can `card` (possibly leading a run) go on tableau column `index`?
///
/// Empty column: any King. Otherwise the top must be face-up, of the other
/// colour, and exactly one rank higher than `card`.
#[must_use]
pub fn can_place_on_tableau(board: &Board, card: Card, index: usize) -> bool {
    let Some(column) = board.tableau.get(index) else {
        return false;
    };

    match column.top() {
        None => card.rank == Rank::King,
        Some(top) => {
            top.face_up && card.color() != top.color() && top.rank.prev() == Some(card.rank)
        }
    }
}

/// Is this a movable run: all face-up, alternating colour, descending by one?
///
/// A single face-up card is a run; an empty slice is not.
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    !cards.is_empty()
        && cards.iter().all(|c| c.face_up)
        && cards
            .windows(2)
            .all(|w| w[0].color() != w[1].color() && w[0].rank.prev() == Some(w[1].rank))
}
