//! Card model and deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Color`: the closed 52-card domain
//! - `Card`: suit, rank and face state
//! - `Deck`: 52 distinct cards, shuffling and the initial deal

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
