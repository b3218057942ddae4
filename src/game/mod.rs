//! The game state machine and its factory.
//!
//! - `Game`: the turn engine, driven by `execute_move` / `go_bot`
//! - `GameBuilder` / `new_game`: seat players, deal, flip the first card
//! - `Position`: explicit arrangement for `Game::from_position`

pub mod engine;
pub mod factory;

pub use engine::{Direction, Game, Position};
pub use factory::{new_game, GameBuilder};
