//! Error types.
//!
//! Two very different failure classes live here:
//!
//! - `CardError` / `BoardError`: construction-boundary failures. Malformed
//!   cards or layouts are rejected before a game exists.
//! - `MoveError`: gameplay rejections. These are ordinary outcomes, never
//!   fatal; the engine leaves the board untouched and reports why.

use std::fmt;

use crate::cards::Card;

/// A card or deck could not be constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardError {
    /// Rank value outside 1..=13.
    InvalidRank(u8),
    /// Text that does not name a card (e.g. "ZZ").
    Unparseable(String),
    /// The same (suit, rank) pair appears twice.
    DuplicateCard(Card),
    /// A deck must hold exactly 52 cards.
    WrongDeckSize(usize),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardError::InvalidRank(v) => write!(f, "invalid rank value: {v}"),
            CardError::Unparseable(s) => write!(f, "cannot parse card from {s:?}"),
            CardError::DuplicateCard(c) => write!(f, "duplicate card: {c}"),
            CardError::WrongDeckSize(n) => write!(f, "deck must hold 52 cards, got {n}"),
        }
    }
}

impl std::error::Error for CardError {}

/// A board layout violates the Klondike pile invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Card-level problem (including duplicates across piles).
    Card(CardError),
    /// Foundation is not Ace.. of its assigned suit, all face-up.
    BadFoundation { index: usize },
    /// Face-up part of a tableau column does not alternate and descend.
    BadTableauRun { index: usize },
    /// Non-empty tableau column with a hidden top card.
    FaceDownTop { index: usize },
    /// Waste cards must be face-up.
    FaceDownWaste,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Card(e) => write!(f, "{e}"),
            BoardError::BadFoundation { index } => {
                write!(f, "foundation {index} is not an ascending run of its suit")
            }
            BoardError::BadTableauRun { index } => {
                write!(f, "tableau column {index} has a broken face-up run")
            }
            BoardError::FaceDownTop { index } => {
                write!(f, "tableau column {index} has a face-down top card")
            }
            BoardError::FaceDownWaste => write!(f, "waste holds a face-down card"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Card(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CardError> for BoardError {
    fn from(e: CardError) -> Self {
        BoardError::Card(e)
    }
}

/// Why a gameplay operation was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Source and destination are the same pile.
    SamePile,
    /// Cards cannot be taken from this pile (the stock).
    IllegalSource,
    /// Cards cannot be dropped on this pile (stock or waste).
    IllegalDestination,
    /// Pile or card index does not exist.
    IndexOutOfRange,
    /// Nothing to take from the source pile.
    EmptySource,
    /// The leading card is face-down.
    FaceDownCard,
    /// Only the top card is eligible for this operation.
    NotTopCard,
    /// The cards below the leading card are not a valid run.
    BrokenRun,
    /// Foundations accept single cards only.
    RunToFoundation,
    /// The destination's placement rule rejects the leading card.
    RuleViolation,
    /// Stock and waste are both empty.
    NothingToDraw,
    /// No snapshot to restore.
    NothingToUndo,
    /// All undos for this game have been spent.
    UndoBudgetExhausted,
}

impl MoveError {
    /// Short, stable identifier for UI messages.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            MoveError::SamePile
            | MoveError::IllegalSource
            | MoveError::IllegalDestination
            | MoveError::IndexOutOfRange => "invalid_target",
            MoveError::EmptySource
            | MoveError::FaceDownCard
            | MoveError::NotTopCard
            | MoveError::BrokenRun => "invalid_source",
            MoveError::RunToFoundation | MoveError::RuleViolation => "illegal_move",
            MoveError::NothingToDraw => "nothing_to_draw",
            MoveError::NothingToUndo | MoveError::UndoBudgetExhausted => "undo_unavailable",
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveError::SamePile => "source and destination are the same pile",
            MoveError::IllegalSource => "cannot move cards out of this pile",
            MoveError::IllegalDestination => "cannot move cards onto this pile",
            MoveError::IndexOutOfRange => "pile or card index out of range",
            MoveError::EmptySource => "source pile is empty",
            MoveError::FaceDownCard => "leading card is face-down",
            MoveError::NotTopCard => "only the top card may be moved",
            MoveError::BrokenRun => "cards do not form a movable run",
            MoveError::RunToFoundation => "only a single card may move to a foundation",
            MoveError::RuleViolation => "placement rule rejects this card",
            MoveError::NothingToDraw => "stock and waste are both empty",
            MoveError::NothingToUndo => "no move to undo",
            MoveError::UndoBudgetExhausted => "no undos left this game",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}
