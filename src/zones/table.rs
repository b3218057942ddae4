//! The discard pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Face-up LIFO discard pile.
///
/// The top card is held apart from the rest, so a table can never be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    top: Card,
    /// Cards beneath the top, bottom-to-top.
    under: Vector<Card>,
}

impl Table {
    /// Start a table with a single face-up card.
    #[must_use]
    pub fn new(top: Card) -> Self {
        Self {
            top,
            under: Vector::new(),
        }
    }

    /// Build a table from cards listed bottom-to-top.
    ///
    /// Returns `None` when `cards` is empty.
    #[must_use]
    pub fn from_bottom_up(cards: impl IntoIterator<Item = Card>) -> Option<Self> {
        let mut under: Vector<Card> = cards.into_iter().collect();
        let top = under.pop_back()?;
        Some(Self { top, under })
    }

    #[must_use]
    pub fn top(&self) -> Card {
        self.top
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.under.len() + 1
    }

    /// Lay a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.top, card);
        self.under.push_back(previous);
    }

    /// Remove every card except the top one, returning them bottom-to-top.
    pub fn take_under(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.under).into_iter().collect()
    }
}
