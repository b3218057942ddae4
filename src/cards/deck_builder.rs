//! Construction of the canonical 108-card deck.

use super::card::{Card, Colour, SpecialSymbol, WildSymbol};
use crate::core::GameRng;
use crate::zones::Deck;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 108;

const ZEROS_PER_COLOUR: usize = 1;
const NUMERALS_PER_COLOUR: usize = 2;
const SPECIALS_PER_COLOUR: usize = 2;
const WILDS_PER_SYMBOL: usize = 4;

/// Builds fresh decks.
///
/// Every call returns an independent deck; nothing is shared between games.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeckBuilder;

impl DeckBuilder {
    /// The full catalog in a fixed, unshuffled order.
    #[must_use]
    pub fn catalog() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for colour in Colour::ALL {
            cards.extend(std::iter::repeat(Card::numeric(colour, 0)).take(ZEROS_PER_COLOUR));
            for number in 1..=9 {
                let card = Card::numeric(colour, number);
                cards.extend(std::iter::repeat(card).take(NUMERALS_PER_COLOUR));
            }
            for symbol in SpecialSymbol::ALL {
                let card = Card::special(colour, symbol);
                cards.extend(std::iter::repeat(card).take(SPECIALS_PER_COLOUR));
            }
        }

        for symbol in WildSymbol::ALL {
            cards.extend(std::iter::repeat(Card::wild(symbol)).take(WILDS_PER_SYMBOL));
        }

        debug_assert_eq!(cards.len(), DECK_SIZE);
        cards
    }

    /// Build a shuffled draw pile.
    #[must_use]
    pub fn build(rng: &mut GameRng) -> Deck {
        let mut deck = Deck::from_bottom_up(Self::catalog());
        deck.shuffle(rng);
        deck
    }
}
