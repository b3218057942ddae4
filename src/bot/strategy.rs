//! Bot move selection.
//!
//! Strategies are trait-based so callers can plug in their own:
//! - `ColourFrequency`: first legal card, wild colour by hand majority

use smallvec::SmallVec;

use crate::cards::{Card, Colour};
use crate::core::player::{dominant_colours, Hand};
use crate::core::GameRng;
use crate::rules::{is_legal, GameCommand};

/// Decides a bot's move from its own hand and the table top.
///
/// Implementations must only return plays that are legal against `top`.
pub trait BotStrategy {
    fn choose_move(&self, hand: &Hand, top: &Card, rng: &mut GameRng) -> GameCommand;
}

/// Play the first legal card in hand order, otherwise draw.
///
/// A wild card is given the colour the bot holds most of (numeric and
/// special cards only); ties are broken uniformly at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColourFrequency;

impl BotStrategy for ColourFrequency {
    fn choose_move(&self, hand: &Hand, top: &Card, rng: &mut GameRng) -> GameCommand {
        choose_move(hand, top, rng)
    }
}

/// The default heuristic as a free function.
///
/// ```
/// use uno_engine::bot::choose_move;
/// use uno_engine::cards::{Card, Colour};
/// use uno_engine::core::{GameRng, Hand};
/// use uno_engine::rules::GameCommand;
///
/// let hand = Hand::from_cards([Card::numeric(Colour::Blue, 1), Card::numeric(Colour::Red, 1)]);
/// let top = Card::numeric(Colour::Red, 8);
///
/// let command = choose_move(&hand, &top, &mut GameRng::new(0));
/// assert_eq!(command, GameCommand::play(1));
/// ```
pub fn choose_move(hand: &Hand, top: &Card, rng: &mut GameRng) -> GameCommand {
    let Some((index, card)) = hand.iter().enumerate().find(|(_, card)| is_legal(top, card)) else {
        tracing::trace!(hand_size = hand.len(), %top, "no legal card, drawing");
        return GameCommand::Draw;
    };

    if card.is_wild() {
        let colour = pick_colour(hand, rng);
        tracing::trace!(index, %card, %colour, "bot plays wild");
        GameCommand::play_wild(index, colour)
    } else {
        tracing::trace!(index, %card, "bot plays card");
        GameCommand::play(index)
    }
}

/// Colour with the highest count in `hand`, ties broken at random.
pub fn pick_colour(hand: &Hand, rng: &mut GameRng) -> Colour {
    let counts = hand.colour_counts();
    let tied: SmallVec<[Colour; 4]> = dominant_colours(&counts).collect();
    tracing::trace!(?counts, ?tied, "choosing wild colour");

    // `tied` always holds at least one colour, since the max of four counts
    // is reached somewhere.
    rng.choose(&tied).copied().unwrap_or(Colour::Blue)
}
