//! The draw pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// Face-down LIFO draw pile.
///
/// Stored bottom-to-top: the last element is the top card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from cards listed bottom-to-top.
    #[must_use]
    pub fn from_bottom_up(cards: impl IntoIterator<Item = Card>) -> Self {
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

    /// The top card, if any.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Put cards underneath the current pile, preserving their relative order
    /// (the first card given ends up at the very bottom).
    pub fn put_under(&mut self, cards: impl IntoIterator<Item = Card>) {
        let mut under: Vector<Card> = cards.into_iter().collect();
        under.append(std::mem::take(&mut self.cards));
        self.cards = under;
    }

    /// Apply a uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
