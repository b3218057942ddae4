//! # uno-engine
//!
//! Rules engine for UNO-style card games.
//!
//! ## Design Principles
//!
//! 1. **Closed card model**: `Card` is a sum type (numeric, special, wild);
//!    legality and effects are exhaustive matches, never type checks.
//!
//! 2. **Single mutation path**: a `Game` changes only through
//!    `execute_move` / `go_bot`. Queries return copies.
//!
//! 3. **Deterministic when asked**: every game owns a seedable `GameRng`,
//!    so the same seed and commands replay the same game.
//!
//! ## Modules
//!
//! - `core`: players, settings, RNG, errors
//! - `cards`: card catalog and deck construction
//! - `zones`: the deck and the table
//! - `rules`: move legality and commands
//! - `bot`: automated move selection
//! - `game`: the turn engine and game factory
//!
//! ## Example
//!
//! ```
//! use uno_engine::game::GameBuilder;
//!
//! let mut game = GameBuilder::new().bots(3).seed(42).build().unwrap();
//!
//! for _ in 0..10_000 {
//!     if game.is_over() {
//!         break;
//!     }
//!     game.go_bot().unwrap();
//! }
//!
//! let winner = game.winner().unwrap();
//! assert!(winner.hand().is_empty());
//! assert_eq!(game.card_total(), 108);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod bot;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, GameSettings, Hand, MalformedCommand, Player, PlayerKind, RulesViolation,
};

pub use crate::cards::{Card, Colour, DeckBuilder, SpecialSymbol, WildSymbol, DECK_SIZE};

pub use crate::zones::{Deck, Table};

pub use crate::rules::{is_legal, GameCommand, MoveOutcome};

pub use crate::bot::{BotStrategy, ColourFrequency};

pub use crate::game::{new_game, Direction, Game, GameBuilder, Position};
