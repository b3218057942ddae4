//! Error types.
//!
//! A rule-illegal play is not an error; see `MoveOutcome::InvalidMove`.

use crate::cards::{Card, Colour};

/// Errors raised while assembling a game.
///
/// Construction aborts on any of these; no partial game is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesViolation {
    #[error("player limits {min}..={max} are invalid, a game needs at least 2 players")]
    InvalidPlayerLimits { min: usize, max: usize },

    #[error("{count} players is not enough to start a game, minimum of {min} is needed")]
    TooFewPlayers { count: usize, min: usize },

    #[error("{count} players exceed the players limit of {max}")]
    TooManyPlayers { count: usize, max: usize },

    #[error("player id `{0}` is used more than once")]
    DuplicatePlayerId(String),

    #[error("dealing needs {needed} cards but the deck only has {available}")]
    DeckTooSmall { needed: usize, available: usize },

    #[error("no numeric card left in the deck to start the table")]
    NoStartingCard,

    #[error("the table must hold at least one card")]
    EmptyTable,

    #[error("seat {seat} is out of range for {player_count} players")]
    SeatOutOfRange { seat: usize, player_count: usize },

    #[error("a wild card on top of the table must have a bound colour")]
    UnboundWildOnTable,

    #[error("{0} is not a card of the deck")]
    UnknownCard(Card),
}

/// A structurally invalid command. Never mutates state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedCommand {
    #[error("a draw command cannot carry a {0}")]
    DrawWithPayload(&'static str),

    #[error("a play command needs a hand index")]
    MissingIndex,

    #[error("hand index cannot be negative, got {0}")]
    NegativeIndex(i64),

    #[error("{index} is out of hand range of {hand_size}")]
    IndexOutOfHand { index: usize, hand_size: usize },

    #[error("a colour must be chosen to play a wild card")]
    MissingColour,

    #[error("colour {0} can only accompany a wild card")]
    UnexpectedColour(Colour),

    #[error("unknown command kind `{0}`")]
    UnknownKind(String),
}

/// Errors returned by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("malformed command: {0}")]
    Malformed(#[from] MalformedCommand),

    #[error("this game is already over")]
    GameOver,
}
