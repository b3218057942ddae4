//! Game settings.
//!
//! Settings are plain serializable data. Where they come from (files,
//! command line) is up to the caller.

use serde::{Deserialize, Serialize};

/// Tunable parameters for assembling and running a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Fewest players a game may start with.
    pub min_players: usize,

    /// Most players a game may start with.
    pub max_players: usize,

    /// Cards dealt to each player at the start.
    pub starting_hand_size: usize,

    /// Prefix for generated bot ids; bots are numbered from 1.
    pub bot_id_prefix: String,

    /// The deck is replenished from the table before a move whenever it
    /// holds fewer cards than this. Covers the largest single grant (4).
    pub replenish_threshold: usize,

    /// Pick the first player at random instead of seat 0.
    pub random_first_player: bool,

    /// Fixed seed for a reproducible game; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 8,
            starting_hand_size: 7,
            bot_id_prefix: "Bot".to_string(),
            replenish_threshold: 4,
            random_first_player: true,
            seed: None,
        }
    }
}

impl GameSettings {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    pub fn with_bot_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bot_id_prefix = prefix.into();
        self
    }

    pub fn with_random_first_player(mut self, random: bool) -> Self {
        self.random_first_player = random;
        self
    }

    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }
}
