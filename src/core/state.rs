//! Game state and undo history.
//!
//! ## GameState
//!
//! Everything one game owns:
//! - The board (all piles)
//! - Score, move counter, remaining undo budget
//! - The action log
//! - A bounded stack of snapshots for undo
//!
//! ## Snapshots
//!
//! A `Snapshot` is a value copy of the restorable fields. Piles and the log
//! are `im` persistent structures, so taking one is O(1) and shares all
//! unchanged data with the live state.

use im::Vector;

use super::action::{Action, ActionRecord};
use super::config::EngineConfig;
use super::error::MoveError;
use crate::cards::Rank;
use crate::zones::Board;

/// Restorable part of a game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub score: u32,
    pub move_count: u32,
    pub log: Vector<ActionRecord>,
}

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    score: u32,
    move_count: u32,
    undo_budget: u8,
    log: Vector<ActionRecord>,
    history: Vector<Snapshot>,
    history_limit: usize,
}

impl GameState {
    /// Start a game on `board` with a fresh budget and empty history.
    #[must_use]
    pub fn new(board: Board, config: &EngineConfig) -> Self {
        Self {
            board,
            score: 0,
            move_count: 0,
            undo_budget: config.undo_budget,
            log: Vector::new(),
            history: Vector::new(),
            history_limit: config.history_limit,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn undo_budget(&self) -> u8 {
        self.undo_budget
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// Every foundation holds Ace..King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board
            .foundations()
            .iter()
            .all(|pile| pile.len() == Rank::ALL.len())
    }

    /// Capture the restorable fields.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            score: self.score,
            move_count: self.move_count,
            log: self.log.clone(),
        }
    }

    // === Mutation (engine only) ===

    /// Push a snapshot of the current state, dropping the oldest beyond
    /// the history limit.
    pub(crate) fn checkpoint(&mut self) {
        if self.history_limit == 0 {
            return;
        }
        self.history.push_back(self.snapshot());
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    /// Add a summed score delta, clamping at 0.
    pub(crate) fn add_score(&mut self, delta: i32) {
        let next = i64::from(self.score) + i64::from(delta);
        self.score = next.clamp(0, i64::from(u32::MAX)) as u32;
    }

    pub(crate) fn count_move(&mut self) {
        self.move_count += 1;
    }

    /// Append `action` to the log with the current score.
    pub(crate) fn record(&mut self, action: Action) {
        let sequence = self.log.len() as u32;
        self.log
            .push_back(ActionRecord::new(action, sequence, self.score));
    }

    /// Restore the most recent snapshot and spend one undo.
    pub fn undo(&mut self) -> Result<(), MoveError> {
        if self.undo_budget == 0 {
            return Err(MoveError::UndoBudgetExhausted);
        }
        let snapshot = self.history.pop_back().ok_or(MoveError::NothingToUndo)?;

        self.board = snapshot.board;
        self.score = snapshot.score;
        self.move_count = snapshot.move_count;
        self.log = snapshot.log;
        self.undo_budget -= 1;
        Ok(())
    }
}
