//! Rules engine trait.
//!
//! A front end drives a game through `RulesEngine`:
//! - `apply_action`: validate and apply one gesture
//! - `is_terminal`: has the game ended?
//!
//! Concrete games also expose richer typed entry points; this trait is the
//! uniform surface used for replays and scripted play.

use crate::core::action::Action;
use crate::core::error::MoveError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// All cards reached the foundations.
    Won { score: u32, moves: u32 },
}

impl GameResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::Won { .. })
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: on `Err`, the state must be left untouched
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// Apply an action to the game state.
    fn apply_action(&mut self, action: &Action) -> Result<(), MoveError>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Apply actions in order, stopping at the first rejection.
    ///
    /// Returns how many were applied.
    fn apply_all<'a, I>(&mut self, actions: I) -> Result<usize, (usize, MoveError)>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        let mut applied = 0;
        for action in actions {
            self.apply_action(action).map_err(|e| (applied, e))?;
            applied += 1;
        }
        Ok(applied)
    }
}
