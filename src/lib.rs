//! # klondike-engine
//!
//! Rule engine for Klondike solitaire. It owns the deck and the play areas,
//! validates and executes moves, keeps score and a bounded undo history,
//! and detects the win. Rendering and input handling live elsewhere: a
//! front end calls the engine for each gesture and redraws from its state.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: one `Klondike` value owns the whole game; no
//!    globals. Every operation runs to completion before returning.
//!
//! 2. **Reject, don't fail**: illegal moves are ordinary outcomes. They
//!    leave the state untouched and report a `MoveError`. Only malformed
//!    card data at construction is an error in the usual sense.
//!
//! 3. **Cheap snapshots**: piles are `im` persistent vectors, so an undo
//!    snapshot is O(1).
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{Klondike, PileRef};
//!
//! let mut game = Klondike::builder().seed(7).build();
//! assert_eq!(game.board().stock_len(), 24);
//!
//! game.draw_from_stock();
//! // Try the waste card on every column; at most one move happens.
//! for column in 0..7 {
//!     if game.attempt_move(PileRef::Waste, PileRef::tableau(column)) {
//!         break;
//!     }
//! }
//! if game.history_len() > 0 {
//!     assert!(game.undo());
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, actions, state and undo, errors
//! - `cards`: card model and deck
//! - `zones`: piles and the board
//! - `rules`: placement predicates and the `RulesEngine` trait
//! - `games`: the Klondike engine

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, PileRef,
    EngineConfig, ScoringPolicy,
    BoardError, CardError, MoveError,
    GameRng, GameRngState,
    GameState, Snapshot,
};

pub use crate::cards::{Card, Color, Deck, Rank, Suit};

pub use crate::zones::{Board, BoardLayout, Pile, FOUNDATION_COUNT, FOUNDATION_SUITS, TABLEAU_COUNT};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::klondike::{CardRun, Klondike, KlondikeBuilder, MoveOutcome};
