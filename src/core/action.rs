//! Pile references, actions and the action log.
//!
//! A `PileRef` names a pile (and, for tableau sources, the first card of a
//! run). An `Action` is one player gesture expressed in those terms. The
//! engine appends an `ActionRecord` for every action it applies.

use serde::{Deserialize, Serialize};

/// Tagged reference to a pile, or to a card within a tableau column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    Stock,
    Waste,
    Foundation {
        index: usize,
    },
    /// `card_index` is the first card of the run to move; `None` means the
    /// top card. Ignored when the column is a destination.
    Tableau {
        index: usize,
        card_index: Option<usize>,
    },
}

impl PileRef {
    #[must_use]
    pub const fn foundation(index: usize) -> Self {
        PileRef::Foundation { index }
    }

    /// A tableau column, referring to its top card.
    #[must_use]
    pub const fn tableau(index: usize) -> Self {
        PileRef::Tableau {
            index,
            card_index: None,
        }
    }

    /// A run in a tableau column starting at `card_index`.
    #[must_use]
    pub const fn tableau_run(index: usize, card_index: usize) -> Self {
        PileRef::Tableau {
            index,
            card_index: Some(card_index),
        }
    }

    /// Do two refs name the same pile (ignoring `card_index`)?
    #[must_use]
    pub fn same_pile(self, other: PileRef) -> bool {
        match (self, other) {
            (PileRef::Stock, PileRef::Stock) | (PileRef::Waste, PileRef::Waste) => true,
            (PileRef::Foundation { index: a }, PileRef::Foundation { index: b }) => a == b,
            (PileRef::Tableau { index: a, .. }, PileRef::Tableau { index: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Stock => write!(f, "stock"),
            PileRef::Waste => write!(f, "waste"),
            PileRef::Foundation { index } => write!(f, "foundation {index}"),
            PileRef::Tableau {
                index,
                card_index: Some(card),
            } => write!(f, "tableau {index}[{card}]"),
            PileRef::Tableau { index, .. } => write!(f, "tableau {index}"),
        }
    }
}

/// A mutating gesture the engine can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw one card from stock to waste, or recycle the waste.
    Draw,
    /// Move a card or run between piles.
    Move { from: PileRef, to: PileRef },
    /// Send the top card of `from` to the first foundation that takes it.
    AutoFoundation { from: PileRef },
}

/// An applied action with bookkeeping.
///
/// Used for replay and for showing a move list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action as applied. `AutoFoundation` is recorded as the concrete
    /// `Move` it resolved to.
    pub action: Action,

    /// Position in the game's log, starting at 0.
    pub sequence: u32,

    /// Score after the action.
    pub score_after: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, sequence: u32, score_after: u32) -> Self {
        Self {
            action,
            sequence,
            score_after,
        }
    }
}
