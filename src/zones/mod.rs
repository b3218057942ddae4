//! Card piles shared by all players.
//!
//! ## Key Types
//!
//! - `Deck`: face-down draw pile, drawn from the top
//! - `Table`: face-up discard pile whose top card decides what may be played

pub mod deck;
pub mod table;

pub use deck::Deck;
pub use table::Table;
