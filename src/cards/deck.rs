//! The 52-card deck and the initial deal.

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use crate::core::error::CardError;
use crate::core::rng::GameRng;
use crate::zones::{Board, Pile, TABLEAU_COUNT};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// A complete deck: exactly 52 distinct cards, all face-down.
///
/// The top of the deck is the end of the vec; dealing pops from there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck, suit by suit, Ace..King.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Build a deck in a given order (e.g. a known deal).
    ///
    /// Rejects anything that is not exactly the 52-card domain. Face state
    /// of the input is ignored.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CardError> {
        if cards.len() != DECK_SIZE {
            return Err(CardError::WrongDeckSize(cards.len()));
        }

        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(card.identity()) {
                return Err(CardError::DuplicateCard(*card));
            }
        }

        Ok(Self {
            cards: cards.into_iter().map(Card::flipped_down).collect(),
        })
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal the Klondike layout.
    ///
    /// Column `i` receives `i + 1` cards, dealt column by column from the
    /// top of the deck; only the last card of each column is face-up. The
    /// 24 cards left over become the stock, in deck order.
    #[must_use]
    pub fn deal(self) -> Board {
        let mut stock = self.cards;
        let mut tableau: [Pile; TABLEAU_COUNT] = Default::default();

        for (i, column) in tableau.iter_mut().enumerate() {
            for j in 0..=i {
                if let Some(card) = stock.pop() {
                    column.push(if j == i { card.flipped_up() } else { card });
                }
            }
        }

        Board::dealt(Pile::from_cards(stock), tableau)
    }
}
