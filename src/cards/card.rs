//! Card, suit, rank and colour.
//!
//! A `Card` is a plain value: identity is the (suit, rank) pair, and the
//! `face_up` flag is the only mutable part. The 52-card domain is closed, so
//! fallible constructors exist only at the parsing boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::CardError;

/// Colour class used by the tableau alternation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Diamonds,
    Spades,
}

impl Suit {
    /// All suits in a fixed order. Foundation `i` is assigned `ALL[i]`.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Diamonds, Suit::Spades];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-character form: 'C', 'H', 'D' or 'S'.
    #[must_use]
    pub const fn short_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace..King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Construct a rank from its value (Ace = 1, King = 13).
    pub fn from_value(value: u8) -> Result<Self, CardError> {
        match value {
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }

    /// Numeric value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The rank one above, `None` for King.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1).ok()
    }

    /// The rank one below, `None` for Ace.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::from_value(self.value() - 1).ok()
    }

    /// Single-character form; Ten is 'T'.
    #[must_use]
    pub const fn short_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    fn from_text(s: &str) -> Option<Self> {
        let value = match s.to_ascii_uppercase().as_str() {
            "A" => 1,
            "T" | "10" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            digit => match digit.parse::<u8>() {
                Ok(v @ 2..=9) => v,
                _ => return None,
            },
        };
        Self::from_value(value).ok()
    }
}

/// A playing card.
///
/// Equality compares the face state too; compare [`Card::identity`] to
/// ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// Identity of the card, ignoring face state.
    #[must_use]
    pub const fn identity(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Copy of this card turned face-up.
    #[must_use]
    pub const fn flipped_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// Copy of this card turned face-down.
    #[must_use]
    pub const fn flipped_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.short_char(), self.suit.short_char())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses "AS", "td", "10H". The result is face-down.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unparseable = || CardError::Unparseable(s.to_string());

        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or_else(unparseable)?;
        let suit = Suit::from_char(suit_char).ok_or_else(unparseable)?;
        let rank = Rank::from_text(chars.as_str()).ok_or_else(unparseable)?;

        Ok(Card::new(suit, rank))
    }
}
