//! Players and their hands.
//!
//! ## Player
//!
//! A named seat at the table, either a human (driven by the caller) or a bot
//! (driven by [`crate::bot::BotStrategy`]).
//!
//! ## Hand
//!
//! Ordered cards backed by an `im::Vector`, so handing out a copy of a
//! player is O(1) and the copy can never alias engine state.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::cards::{Card, Colour};

/// Who decides a player's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Bot,
}

/// Ordered collection of cards held by one player.
///
/// Order matters only for indexing commands and bot scanning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
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

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Count of numeric and special cards per colour, indexed by
    /// [`Colour::index`]. Wild cards are not counted.
    #[must_use]
    pub fn colour_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for colour in self.cards.iter().filter_map(Card::printed_colour) {
            counts[colour.index()] += 1;
        }
        counts
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

/// A player seated in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: String,
    kind: PlayerKind,
    hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            id: id.into(),
            kind,
            hand: Hand::new(),
        }
    }

    pub fn human(id: impl Into<String>) -> Self {
        Self::new(id, PlayerKind::Human)
    }

    pub fn bot(id: impl Into<String>) -> Self {
        Self::new(id, PlayerKind::Bot)
    }

    /// Replace the hand. Used when arranging a position.
    #[must_use]
    pub fn with_hand(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand = Hand::from_cards(cards);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

/// The highest colour counts in a hand, for reporting and bot decisions.
#[must_use]
pub fn dominant_colours(counts: &[usize; 4]) -> impl Iterator<Item = Colour> + '_ {
    let max = counts.iter().copied().max().unwrap_or(0);
    Colour::ALL.into_iter().filter(move |c| counts[c.index()] == max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{SpecialSymbol, WildSymbol};

    #[test]
    fn test_player_basics() {
        let p = Player::bot("Bot1");
        assert_eq!(p.id(), "Bot1");
        assert!(p.is_bot());
        assert!(p.hand().is_empty());
        assert_eq!(p.to_string(), "Bot1");

        let h = Player::human("ana");
        assert_eq!(h.kind(), PlayerKind::Human);
    }

    #[test]
    fn test_hand_push_and_remove() {
        let mut hand = Hand::new();
        hand.push(Card::numeric(Colour::Red, 1));
        hand.push(Card::numeric(Colour::Blue, 2));

        assert_eq!(hand.len(), 2);
        assert_eq!(hand[1], Card::numeric(Colour::Blue, 2));
        assert_eq!(hand.remove(0), Card::numeric(Colour::Red, 1));
        assert_eq!(hand.get(0), Some(&Card::numeric(Colour::Blue, 2)));
        assert_eq!(hand.get(1), None);
    }

    #[test]
    fn test_copies_do_not_alias() {
        let original = Player::human("ana").with_hand([Card::numeric(Colour::Red, 1)]);
        let mut copy = original.clone();
        copy.hand_mut().push(Card::numeric(Colour::Red, 2));

        assert_eq!(original.hand().len(), 1);
        assert_eq!(copy.hand().len(), 2);
    }

    #[test]
    fn test_colour_counts_ignore_wilds() {
        let hand = Hand::from_cards([
            Card::numeric(Colour::Green, 1),
            Card::special(Colour::Green, SpecialSymbol::Skip),
            Card::numeric(Colour::Yellow, 4),
            Card::wild(WildSymbol::Draw4),
        ]);
        assert_eq!(hand.colour_counts(), [0, 0, 2, 1]);
    }

    #[test]
    fn test_dominant_colours() {
        let ties: Vec<_> = dominant_colours(&[2, 0, 2, 1]).collect();
        assert_eq!(ties, vec![Colour::Blue, Colour::Green]);

        let all: Vec<_> = dominant_colours(&[0, 0, 0, 0]).collect();
        assert_eq!(all, Colour::ALL.to_vec());
    }
}
