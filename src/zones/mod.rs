//! Piles and the board.
//!
//! ## Key Types
//!
//! - `Pile`: ordered cards, top is last
//! - `Board`: stock, waste, foundations and tableau of one game
//! - `BoardLayout`: validated construction of arbitrary boards

pub mod board;
pub mod pile;

pub use board::{Board, BoardLayout, FOUNDATION_COUNT, FOUNDATION_SUITS, TABLEAU_COUNT};
pub use pile::Pile;
