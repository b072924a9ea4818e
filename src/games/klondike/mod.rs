//! Klondike solitaire, draw one.
//!
//! - Deal: seven columns of 1..7 cards, top card face-up, 24 in the stock
//! - Foundations build up by suit from Ace, tableau builds down in
//!   alternating colours, only Kings go to empty columns
//! - Score, move counter and a per-game undo budget
//! - Won when every foundation holds 13 cards

mod game;
pub mod moves;

pub use game::{Klondike, KlondikeBuilder};
pub use moves::{foundation_for, run_at, CardRun, MoveOutcome};
