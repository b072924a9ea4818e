//! Placement rules and the rules-engine trait.
//!
//! The validator answers "may this card land here?" without side effects.
//! `RulesEngine` is the uniform action surface a front end or a replay
//! drives.

pub mod engine;
pub mod validator;

pub use engine::{GameResult, RulesEngine};
pub use validator::{can_place_on_foundation, can_place_on_tableau, is_valid_run};
