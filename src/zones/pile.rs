//! An ordered pile of cards.
//!
//! Backed by `im::Vector` so cloning a whole board for an undo snapshot
//! shares structure instead of copying 52 cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered cards; index 0 is the bottom, the last card is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from bottom-to-top cards.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top (last) card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Cards bottom to top.
    pub fn cards(&self) -> impl DoubleEndedIterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards().collect()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove and return the cards from `at` to the top.
    ///
    /// `at` must not exceed `len()`.
    pub fn split_off(&mut self, at: usize) -> Vector<Card> {
        self.cards.split_off(at)
    }

    /// Put cards on top, keeping their order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove every card, leaving the pile empty.
    pub fn take(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Index of the lowest face-up card, if any.
    #[must_use]
    pub fn first_face_up(&self) -> Option<usize> {
        self.cards.iter().position(|c| c.face_up)
    }

    /// Turn the top card face-up. Returns true if it was face-down.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.back_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Hearts, rank)
    }

    #[test]
    fn test_push_pop_top() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);

        pile.push(card(Rank::Ace));
        pile.push(card(Rank::Two));

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top(), Some(card(Rank::Two)));
        assert_eq!(pile.pop(), Some(card(Rank::Two)));
        assert_eq!(pile.pop(), Some(card(Rank::Ace)));
        assert_eq!(pile.pop(), None);
    }

    #[test]
    fn test_split_off_and_extend() {
        let mut pile = Pile::from_cards([card(Rank::Five), card(Rank::Four), card(Rank::Three)]);

        let tail = pile.split_off(1);
        assert_eq!(pile.to_vec(), vec![card(Rank::Five)]);
        assert_eq!(tail.len(), 2);

        let mut other = Pile::new();
        other.extend(tail);
        assert_eq!(other.to_vec(), vec![card(Rank::Four), card(Rank::Three)]);
    }

    #[test]
    fn test_reveal_top() {
        let mut pile = Pile::from_cards([card(Rank::Nine), card(Rank::Eight)]);

        assert!(pile.reveal_top());
        assert!(pile.top().unwrap().face_up);
        // Already face-up: nothing to reveal.
        assert!(!pile.reveal_top());
        assert_eq!(pile.first_face_up(), Some(1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut pile = Pile::from_cards([card(Rank::Ace)]);
        let snapshot = pile.clone();

        pile.push(card(Rank::Two));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(pile.len(), 2);
    }
}
