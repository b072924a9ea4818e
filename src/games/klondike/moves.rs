//! Move checking and execution.
//!
//! Checking is pure and runs first; execution assumes a checked move and
//! applies it to the board in one step. Keeping the two apart lets the
//! engine take its undo snapshot only for moves that will succeed.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::action::PileRef;
use crate::core::config::ScoringPolicy;
use crate::core::error::MoveError;
use crate::rules::validator::{can_place_on_foundation, can_place_on_tableau, is_valid_run};
use crate::zones::{Board, FOUNDATION_COUNT, TABLEAU_COUNT};

/// Cards carried by one move, leading card first. Never longer than 13.
pub type CardRun = SmallVec<[Card; 13]>;

/// What an applied move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: PileRef,
    pub to: PileRef,
    pub cards: CardRun,
    /// Summed delta before clamping.
    pub score_delta: i32,
    /// Tableau card turned face-up by the move, if any.
    pub revealed: Option<Card>,
}

/// The cards a move starting at `from` would carry.
///
/// Waste and foundation give their top card. A tableau ref gives the run
/// from `card_index` (or the top card) upward, which must be face-up and
/// internally ordered.
pub fn run_at(board: &Board, from: PileRef) -> Result<CardRun, MoveError> {
    match from {
        PileRef::Stock => Err(MoveError::IllegalSource),
        PileRef::Waste => single(board.waste.top()),
        PileRef::Foundation { index } => {
            let pile = board.foundations.get(index).ok_or(MoveError::IndexOutOfRange)?;
            single(pile.top())
        }
        PileRef::Tableau { index, card_index } => {
            let column = board.tableau.get(index).ok_or(MoveError::IndexOutOfRange)?;
            if column.is_empty() {
                return Err(MoveError::EmptySource);
            }
            let start = card_index.unwrap_or(column.len() - 1);
            let leading = column.get(start).ok_or(MoveError::IndexOutOfRange)?;
            if !leading.face_up {
                return Err(MoveError::FaceDownCard);
            }

            let run: CardRun = column.cards().skip(start).collect();
            if !is_valid_run(&run) {
                return Err(MoveError::BrokenRun);
            }
            Ok(run)
        }
    }
}

fn single(top: Option<Card>) -> Result<CardRun, MoveError> {
    let card = top.ok_or(MoveError::EmptySource)?;
    let mut run = CardRun::new();
    run.push(card);
    Ok(run)
}

/// Validate a move without touching the board.
pub(crate) fn check_move(board: &Board, from: PileRef, to: PileRef) -> Result<CardRun, MoveError> {
    if from.same_pile(to) {
        return Err(MoveError::SamePile);
    }
    match to {
        PileRef::Stock | PileRef::Waste => return Err(MoveError::IllegalDestination),
        PileRef::Foundation { index } if index >= FOUNDATION_COUNT => {
            return Err(MoveError::IndexOutOfRange)
        }
        PileRef::Tableau { index, .. } if index >= TABLEAU_COUNT => {
            return Err(MoveError::IndexOutOfRange)
        }
        _ => {}
    }

    let run = run_at(board, from)?;
    let leading = run[0];

    let allowed = match to {
        PileRef::Foundation { index } => {
            if run.len() != 1 {
                return Err(MoveError::RunToFoundation);
            }
            can_place_on_foundation(board, leading, index)
        }
        PileRef::Tableau { index, .. } => can_place_on_tableau(board, leading, index),
        PileRef::Stock | PileRef::Waste => false,
    };

    if allowed {
        Ok(run)
    } else {
        Err(MoveError::RuleViolation)
    }
}

/// Apply a move that `check_move` accepted.
pub(crate) fn execute(
    board: &mut Board,
    from: PileRef,
    to: PileRef,
    cards: CardRun,
    scoring: &ScoringPolicy,
) -> MoveOutcome {
    let mut revealed = None;

    match from {
        PileRef::Waste => {
            board.waste.pop();
        }
        PileRef::Foundation { index } => {
            board.foundations[index].pop();
        }
        PileRef::Tableau { index, .. } => {
            let column = &mut board.tableau[index];
            column.split_off(column.len() - cards.len());
            if column.reveal_top() {
                revealed = column.top();
            }
        }
        PileRef::Stock => {}
    }

    match to {
        PileRef::Foundation { index } => board.foundations[index].extend(cards.iter().copied()),
        PileRef::Tableau { index, .. } => board.tableau[index].extend(cards.iter().copied()),
        PileRef::Stock | PileRef::Waste => {}
    }

    let mut score_delta = 0;
    if matches!(to, PileRef::Foundation { .. }) {
        score_delta += scoring.foundation_placed;
    }
    if matches!(from, PileRef::Foundation { .. }) {
        score_delta += scoring.foundation_removed;
    }
    if matches!(from, PileRef::Waste) && matches!(to, PileRef::Tableau { .. }) {
        score_delta += scoring.waste_to_tableau;
    }
    if revealed.is_some() {
        score_delta += scoring.tableau_flip;
    }

    MoveOutcome {
        from,
        to,
        cards,
        score_delta,
        revealed,
    }
}

/// First foundation, in index order, that accepts `card`.
#[must_use]
pub fn foundation_for(board: &Board, card: Card) -> Option<usize> {
    (0..FOUNDATION_COUNT).find(|&index| can_place_on_foundation(board, card, index))
}

/// Resolve a double-click: the genuine top card of waste or a tableau
/// column, and the foundation it goes to.
pub(crate) fn resolve_auto(board: &Board, from: PileRef) -> Result<(PileRef, PileRef), MoveError> {
    let source = match from {
        PileRef::Waste => PileRef::Waste,
        PileRef::Tableau { index, card_index } => {
            let column = board.tableau.get(index).ok_or(MoveError::IndexOutOfRange)?;
            if column.is_empty() {
                return Err(MoveError::EmptySource);
            }
            if card_index.is_some_and(|i| i + 1 != column.len()) {
                return Err(MoveError::NotTopCard);
            }
            PileRef::tableau(index)
        }
        PileRef::Stock | PileRef::Foundation { .. } => return Err(MoveError::IllegalSource),
    };

    let run = run_at(board, source)?;
    let target = foundation_for(board, run[0]).ok_or(MoveError::RuleViolation)?;
    Ok((source, PileRef::foundation(target)))
}
