//! Core engine types: RNG, configuration, actions, state, errors.
//!
//! These are the building blocks the Klondike engine is assembled from.
//! Games configure them via `EngineConfig` rather than modifying the core.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, PileRef};
pub use config::{EngineConfig, ScoringPolicy, DEFAULT_UNDO_BUDGET};
pub use error::{BoardError, CardError, MoveError};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Snapshot};
