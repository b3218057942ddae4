//! Shared helpers for integration tests.

#![allow(dead_code)]

use tracing_subscriber::{fmt, EnvFilter};
use uno_engine::{Card, Colour, Direction, Game, GameSettings, Player, Position};

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`,
/// else `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn red(n: u8) -> Card {
    Card::numeric(Colour::Red, n)
}

pub fn blue(n: u8) -> Card {
    Card::numeric(Colour::Blue, n)
}

pub fn green(n: u8) -> Card {
    Card::numeric(Colour::Green, n)
}

pub fn yellow(n: u8) -> Card {
    Card::numeric(Colour::Yellow, n)
}

/// `n` yellow nines, for padding a deck.
pub fn filler(n: usize) -> Vec<Card> {
    vec![yellow(9); n]
}

/// Human players `p0..` holding the given hands, seat 0 in turn.
pub fn arranged(hands: Vec<Vec<Card>>, deck: Vec<Card>, table: Vec<Card>) -> Game {
    arranged_with(hands, deck, table, Direction::Forward)
}

pub fn arranged_with(
    hands: Vec<Vec<Card>>,
    deck: Vec<Card>,
    table: Vec<Card>,
    direction: Direction,
) -> Game {
    init_logging();
    let players = hands
        .into_iter()
        .enumerate()
        .map(|(i, hand)| Player::human(format!("p{i}")).with_hand(hand))
        .collect();

    let position = Position {
        players,
        deck,
        table,
        turn: 0,
        previous: 0,
        direction,
    };
    Game::from_position(position, &GameSettings::default().with_seed(7)).unwrap()
}

/// Everything observable about a game, for before/after comparisons.
#[derive(Debug, PartialEq)]
pub struct Observed {
    pub players: Vec<Player>,
    pub table_top: Card,
    pub table_len: usize,
    pub deck_top: Option<Card>,
    pub deck_len: usize,
    pub turn: usize,
    pub previous: usize,
    pub direction: Direction,
    pub over: bool,
}

pub fn observe(game: &Game) -> Observed {
    Observed {
        players: game.players(),
        table_top: game.table_top(),
        table_len: game.table_len(),
        deck_top: game.deck_top(),
        deck_len: game.deck_len(),
        turn: game.turn_index(),
        previous: game.previous_index(),
        direction: game.direction(),
        over: game.is_over(),
    }
}

pub fn hand_len(game: &Game, seat: usize) -> usize {
    game.player_by_index(seat).unwrap().hand().len()
}
