//! The Klondike board: stock, waste, four foundations, seven tableau columns.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pile::Pile;
use crate::cards::{Card, Suit};
use crate::core::error::{BoardError, CardError};
use crate::rules::validator::is_valid_run;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Suit assigned to each foundation index, fixed for every game.
pub const FOUNDATION_SUITS: [Suit; FOUNDATION_COUNT] = Suit::ALL;

/// All piles of one game.
///
/// Owned exclusively by the game state; the engine mutates it, everyone
/// else reads it through the accessors. Serialized as a `BoardLayout`;
/// deserializing runs the same checks as `BoardLayout::build`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardLayout", into = "BoardLayout")]
pub struct Board {
    pub(crate) stock: Pile,
    pub(crate) waste: Pile,
    pub(crate) foundations: [Pile; FOUNDATION_COUNT],
    pub(crate) tableau: [Pile; TABLEAU_COUNT],
}

impl Board {
    /// Fresh deal: stock and tableau set, waste and foundations empty.
    pub(crate) fn dealt(stock: Pile, tableau: [Pile; TABLEAU_COUNT]) -> Self {
        Self {
            stock,
            tableau,
            ..Self::default()
        }
    }

    /// Validate and build an arbitrary layout.
    pub fn from_layout(layout: BoardLayout) -> Result<Self, BoardError> {
        layout.build()
    }

    // === Read accessors ===

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<Card> {
        self.waste.top()
    }

    /// Foundation pile `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= FOUNDATION_COUNT`.
    #[must_use]
    pub fn foundation(&self, index: usize) -> &Pile {
        &self.foundations[index]
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    /// Tableau column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TABLEAU_COUNT`.
    #[must_use]
    pub fn tableau(&self, index: usize) -> &Pile {
        &self.tableau[index]
    }

    #[must_use]
    pub fn columns(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableau
    }

    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.tableau.iter().map(Pile::len).sum::<usize>()
    }

    /// Every card on the board, pile by pile.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.stock
            .cards()
            .chain(self.waste.cards())
            .chain(self.foundations.iter().flat_map(Pile::cards))
            .chain(self.tableau.iter().flat_map(Pile::cards))
    }
}

/// Plain-text dump, one line per area.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stock: {} | Waste: ", self.stock.len())?;
        match self.waste.top() {
            Some(card) => writeln!(f, "{card}")?,
            None => writeln!(f, "--")?,
        }

        write!(f, "Foundations:")?;
        for pile in &self.foundations {
            match pile.top() {
                Some(card) => write!(f, " {card}")?,
                None => write!(f, " --")?,
            }
        }
        writeln!(f)?;

        for (i, column) in self.tableau.iter().enumerate() {
            write!(f, "T{i}:")?;
            for card in column.cards() {
                if card.face_up {
                    write!(f, " {card}")?;
                } else {
                    write!(f, " ##")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Raw pile contents for building a board outside a normal deal.
///
/// Used for scenarios and tests. Layouts may be partial (fewer than 52
/// cards). Stock cards are always stored face-down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub tableau: [Vec<Card>; TABLEAU_COUNT],
}

impl BoardLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every pile invariant and build the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut seen = FxHashSet::default();
        let all = self
            .stock
            .iter()
            .chain(&self.waste)
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten());
        for card in all {
            if !seen.insert(card.identity()) {
                return Err(CardError::DuplicateCard(*card).into());
            }
        }

        if self.waste.iter().any(|c| !c.face_up) {
            return Err(BoardError::FaceDownWaste);
        }

        for (index, pile) in self.foundations.iter().enumerate() {
            let in_sequence = pile.iter().enumerate().all(|(i, card)| {
                card.face_up
                    && card.suit == FOUNDATION_SUITS[index]
                    && card.rank.value() as usize == i + 1
            });
            if !in_sequence {
                return Err(BoardError::BadFoundation { index });
            }
        }

        for (index, column) in self.tableau.iter().enumerate() {
            let Some(top) = column.last() else {
                continue;
            };
            if !top.face_up {
                return Err(BoardError::FaceDownTop { index });
            }
            let start = column.iter().position(|c| c.face_up).unwrap_or(column.len());
            if !is_valid_run(&column[start..]) {
                return Err(BoardError::BadTableauRun { index });
            }
        }

        Ok(Board {
            stock: Pile::from_cards(self.stock.into_iter().map(Card::flipped_down)),
            waste: Pile::from_cards(self.waste),
            foundations: self.foundations.map(Pile::from_cards),
            tableau: self.tableau.map(Pile::from_cards),
        })
    }
}

impl TryFrom<BoardLayout> for Board {
    type Error = BoardError;

    fn try_from(layout: BoardLayout) -> Result<Self, Self::Error> {
        layout.build()
    }
}

impl From<Board> for BoardLayout {
    fn from(board: Board) -> Self {
        Self {
            stock: board.stock.to_vec(),
            waste: board.waste.to_vec(),
            foundations: board.foundations.map(|pile| pile.to_vec()),
            tableau: board.tableau.map(|pile| pile.to_vec()),
        }
    }
}
