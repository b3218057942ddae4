//! Commands submitted to the engine and the outcomes they produce.
//!
//! On the wire a command is either `{"kind":"draw"}` or
//! `{"kind":"play","handIndex":2,"colour":"RED"}` (colour only for wilds).

use serde::{Deserialize, Serialize};

use crate::cards::Colour;
use crate::core::error::MalformedCommand;
use crate::core::player::Hand;

/// A move for the player currently in turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCommand", into = "WireCommand")]
pub enum GameCommand {
    /// Draw one card from the deck.
    Draw,
    /// Play the card at `hand_index`; `colour` is required for wild cards
    /// and forbidden otherwise.
    Play { hand_index: usize, colour: Option<Colour> },
}

impl GameCommand {
    #[must_use]
    pub const fn draw() -> Self {
        GameCommand::Draw
    }

    #[must_use]
    pub const fn play(hand_index: usize) -> Self {
        GameCommand::Play {
            hand_index,
            colour: None,
        }
    }

    #[must_use]
    pub const fn play_wild(hand_index: usize, colour: Colour) -> Self {
        GameCommand::Play {
            hand_index,
            colour: Some(colour),
        }
    }

    /// Check the command's shape against the hand it will be applied to.
    pub fn validate(&self, hand: &Hand) -> Result<(), MalformedCommand> {
        let GameCommand::Play { hand_index, colour } = *self else {
            return Ok(());
        };

        let card = hand.get(hand_index).ok_or(MalformedCommand::IndexOutOfHand {
            index: hand_index,
            hand_size: hand.len(),
        })?;

        match (card.is_wild(), colour) {
            (true, None) => Err(MalformedCommand::MissingColour),
            (false, Some(colour)) => Err(MalformedCommand::UnexpectedColour(colour)),
            _ => Ok(()),
        }
    }
}

/// Result of a well-formed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// A card was drawn and the turn passed on.
    Drew,
    /// The card was played and its effect applied.
    Played,
    /// The card does not match the table; nothing changed.
    InvalidMove,
}

/// Loose wire form; converted into [`GameCommand`] with full checking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireCommand {
    pub kind: String,
    #[serde(rename = "handIndex", default, skip_serializing_if = "Option::is_none")]
    pub hand_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,
}

impl TryFrom<WireCommand> for GameCommand {
    type Error = MalformedCommand;

    fn try_from(wire: WireCommand) -> Result<Self, Self::Error> {
        match wire.kind.as_str() {
            "draw" => {
                if wire.hand_index.is_some() {
                    return Err(MalformedCommand::DrawWithPayload("hand index"));
                }
                if wire.colour.is_some() {
                    return Err(MalformedCommand::DrawWithPayload("colour"));
                }
                Ok(GameCommand::Draw)
            }
            "play" => {
                let index = wire.hand_index.ok_or(MalformedCommand::MissingIndex)?;
                let hand_index = usize::try_from(index)
                    .map_err(|_| MalformedCommand::NegativeIndex(index))?;
                Ok(GameCommand::Play {
                    hand_index,
                    colour: wire.colour,
                })
            }
            other => Err(MalformedCommand::UnknownKind(other.to_string())),
        }
    }
}

impl From<GameCommand> for WireCommand {
    fn from(command: GameCommand) -> Self {
        match command {
            GameCommand::Draw => WireCommand {
                kind: "draw".to_string(),
                hand_index: None,
                colour: None,
            },
            GameCommand::Play { hand_index, colour } => WireCommand {
                kind: "play".to_string(),
                hand_index: Some(hand_index as i64),
                colour,
            },
        }
    }
}
