//! Game assembly: seating, dealing and the first flip.

use crate::cards::{Card, DeckBuilder, DECK_SIZE};
use crate::core::{GameRng, GameSettings, Player, RulesViolation};
use crate::zones::{Deck, Table};

use super::engine::{seat_map, Game};

/// Start a game with default settings.
///
/// Bots are seated first (`Bot1`, `Bot2`, …), then humans in the given order.
///
/// ```
/// use uno_engine::game::new_game;
///
/// let game = new_game(2, &["ana"]).unwrap();
/// assert_eq!(game.player_count(), 3);
/// assert_eq!(game.player_by_index(2).unwrap().id(), "ana");
/// assert_eq!(game.card_total(), 108);
/// ```
pub fn new_game<S: AsRef<str>>(
    bot_count: usize,
    human_names: &[S],
) -> Result<Game, RulesViolation> {
    GameBuilder::new().bots(bot_count).humans(human_names).build()
}

/// Builder for creating a [`Game`].
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    settings: GameSettings,
    bot_count: usize,
    human_names: Vec<String>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: GameSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.settings.seed = Some(seed);
        self
    }

    pub fn bots(mut self, count: usize) -> Self {
        self.bot_count = count;
        self
    }

    pub fn human(mut self, name: impl Into<String>) -> Self {
        self.human_names.push(name.into());
        self
    }

    pub fn humans<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.human_names.extend(names.iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Seat the players, deal, and flip the first table card.
    pub fn build(self) -> Result<Game, RulesViolation> {
        let settings = self.settings;
        let player_count = self.bot_count + self.human_names.len();
        check_player_count(player_count, &settings)?;

        let needed = player_count * settings.starting_hand_size + 1;
        if needed > DECK_SIZE {
            return Err(RulesViolation::DeckTooSmall {
                needed,
                available: DECK_SIZE,
            });
        }

        let mut players: Vec<Player> = (1..=self.bot_count)
            .map(|n| Player::bot(format!("{}{}", settings.bot_id_prefix, n)))
            .collect();
        players.extend(self.human_names.into_iter().map(Player::human));
        let seats = seat_map(&players)?;

        let mut rng = settings.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deck = DeckBuilder::build(&mut rng.fork());

        for player in &mut players {
            for _ in 0..settings.starting_hand_size {
                let card = deck.draw().ok_or(RulesViolation::DeckTooSmall {
                    needed,
                    available: DECK_SIZE,
                })?;
                player.hand_mut().push(card);
            }
        }

        let first = flip_first_card(&mut deck)?;
        let first_seat = if settings.random_first_player {
            rng.gen_range_usize(0..player_count)
        } else {
            0
        };

        tracing::info!(
            players = player_count,
            first_seat,
            first_card = %first,
            seed = rng.seed(),
            "game created"
        );

        Ok(Game::assemble(
            players,
            seats,
            deck,
            Table::new(first),
            first_seat,
            settings.replenish_threshold,
            rng,
        ))
    }
}

/// Check a player count against the configured bounds.
pub(crate) fn check_player_count(
    count: usize,
    settings: &GameSettings,
) -> Result<(), RulesViolation> {
    if settings.min_players < 2 || settings.min_players > settings.max_players {
        return Err(RulesViolation::InvalidPlayerLimits {
            min: settings.min_players,
            max: settings.max_players,
        });
    }
    if count < settings.min_players {
        return Err(RulesViolation::TooFewPlayers {
            count,
            min: settings.min_players,
        });
    }
    if count > settings.max_players {
        return Err(RulesViolation::TooManyPlayers {
            count,
            max: settings.max_players,
        });
    }
    Ok(())
}

/// Draw until a numeric card turns up. Cards passed over go back under the
/// deck.
fn flip_first_card(deck: &mut Deck) -> Result<Card, RulesViolation> {
    let mut passed_over = Vec::new();
    let first = loop {
        match deck.draw() {
            Some(card) if card.is_numeric() => break card,
            Some(card) => passed_over.push(card),
            None => return Err(RulesViolation::NoStartingCard),
        }
    };
    deck.put_under(passed_over);
    Ok(first)
}
