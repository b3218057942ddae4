//! Game rules: what may be played, and the commands that drive a game.
//!
//! Legality is a pure function of the table top and the candidate card;
//! the turn engine in `game` is the only place that applies effects.

pub mod command;
pub mod validator;

pub use command::{GameCommand, MoveOutcome, WireCommand};
pub use validator::is_legal;
