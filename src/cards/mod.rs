//! Card catalog and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: numeric, special or wild card
//! - `Colour`, `SpecialSymbol`, `WildSymbol`: the catalog's value sets
//! - `DeckBuilder`: produces the shuffled 108-card draw pile

pub mod card;
pub mod deck_builder;

pub use card::{Card, Colour, SpecialSymbol, UnknownColour, WildSymbol};
pub use deck_builder::{DeckBuilder, DECK_SIZE};
