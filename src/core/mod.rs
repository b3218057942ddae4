//! Core engine types: players, settings, RNG and errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameSettings;
pub use error::{EngineError, MalformedCommand, RulesViolation};
pub use player::{Hand, Player, PlayerKind};
pub use rng::GameRng;
