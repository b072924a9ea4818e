//! Engine configuration.
//!
//! Games are configured once at construction:
//! - `ScoringPolicy`: score delta per scoring event
//! - `EngineConfig`: undo budget, history bound, recycle policy
//!
//! Both are plain serde values so a front end can load them from its own
//! settings.

use serde::{Deserialize, Serialize};

/// Default number of undos per game.
pub const DEFAULT_UNDO_BUDGET: u8 = 3;

/// Score delta for each scoring event.
///
/// Deltas of one action are summed before the result is clamped at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Card placed on a foundation.
    pub foundation_placed: i32,

    /// Card taken back off a foundation by an ordinary move.
    pub foundation_removed: i32,

    /// Waste card placed on the tableau.
    pub waste_to_tableau: i32,

    /// Hidden tableau card turned face-up by exposure.
    pub tableau_flip: i32,
}

impl ScoringPolicy {
    /// All deltas zero; the score never moves.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            foundation_placed: 0,
            foundation_removed: 0,
            waste_to_tableau: 0,
            tableau_flip: 0,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            foundation_placed: 10,
            foundation_removed: -15,
            waste_to_tableau: 5,
            tableau_flip: 5,
        }
    }
}

/// Per-session engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Undos allowed per game. Reset only by a new game.
    pub undo_budget: u8,

    /// Maximum snapshots kept; the oldest is dropped first.
    pub history_limit: usize,

    /// Score deltas.
    pub scoring: ScoringPolicy,

    /// Does turning the waste back into the stock count towards the move
    /// counter? Recycles are never scored either way.
    pub recycle_counts_as_move: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            undo_budget: DEFAULT_UNDO_BUDGET,
            history_limit: DEFAULT_UNDO_BUDGET as usize,
            scoring: ScoringPolicy::default(),
            recycle_counts_as_move: false,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the undo budget. The history bound follows it unless it was
    /// already larger.
    #[must_use]
    pub fn with_undo_budget(mut self, budget: u8) -> Self {
        self.undo_budget = budget;
        self.history_limit = self.history_limit.max(budget as usize);
        self
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Count recycles as moves.
    #[must_use]
    pub fn counting_recycles(mut self) -> Self {
        self.recycle_counts_as_move = true;
        self
    }
}
