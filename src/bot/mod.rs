//! Automated players.
//!
//! The engine consults a `BotStrategy` whenever a bot is in turn; see
//! `Game::go_bot`.

pub mod strategy;

pub use strategy::{choose_move, pick_colour, BotStrategy, ColourFrequency};
