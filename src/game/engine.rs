//! The turn engine.
//!
//! `Game` owns the deck, the table, the players and the turn bookkeeping.
//! It changes only through [`Game::execute_move`] (and [`Game::go_bot`],
//! which computes a command and executes it). Every query hands out copies.
//!
//! ## Move sequence
//!
//! 1. Refuse if the game is over.
//! 2. Check the command's shape against the current hand.
//! 3. For plays, check legality against the table top; an illegal play
//!    returns [`MoveOutcome::InvalidMove`] with no state change.
//! 4. Replenish the deck from the table if it is running low.
//! 5. Apply the draw, or the played card's effect.
//! 6. Declare the mover the winner if their hand is now empty.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::bot::{BotStrategy, ColourFrequency};
use crate::cards::{Card, Colour, SpecialSymbol, WildSymbol};
use crate::core::{EngineError, GameRng, GameSettings, Player, RulesViolation};
use crate::rules::{is_legal, GameCommand, MoveOutcome};
use crate::zones::{Deck, Table};

use super::factory::check_player_count;

/// Order in which turns pass around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat index.
    #[default]
    Forward,
    /// Decreasing seat index.
    Backward,
}

impl Direction {
    /// Seat offset of one step: `+1` or `-1`.
    #[must_use]
    pub const fn offset(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// An explicit arrangement of a game, for [`Game::from_position`].
///
/// Piles are listed bottom-to-top, so the last table card is the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub players: Vec<Player>,
    pub deck: Vec<Card>,
    pub table: Vec<Card>,
    pub turn: usize,
    pub previous: usize,
    pub direction: Direction,
}

/// A running (or finished) game.
///
/// Cloning is cheap and yields a fully independent game.
#[derive(Clone, Debug)]
pub struct Game {
    players: Vec<Player>,
    seats: FxHashMap<String, usize>,
    deck: Deck,
    table: Table,
    turn: usize,
    previous: usize,
    direction: Direction,
    winner: Option<usize>,
    replenish_threshold: usize,
    rng: GameRng,
}

impl Game {
    /// Assemble a freshly dealt game. Inputs are already validated.
    pub(crate) fn assemble(
        players: Vec<Player>,
        seats: FxHashMap<String, usize>,
        deck: Deck,
        table: Table,
        first_seat: usize,
        replenish_threshold: usize,
        rng: GameRng,
    ) -> Self {
        Self {
            players,
            seats,
            deck,
            table,
            turn: first_seat,
            previous: first_seat,
            direction: Direction::Forward,
            winner: None,
            replenish_threshold,
            rng,
        }
    }

    /// Build a game from an explicit position.
    ///
    /// Cards in hands and in the deck lose any wild binding. If some hand is
    /// already empty, that player is the winner and the game is already over;
    /// the winner becomes the previous player.
    pub fn from_position(
        position: Position,
        settings: &GameSettings,
    ) -> Result<Self, RulesViolation> {
        let Position {
            players,
            deck,
            table,
            turn,
            previous,
            direction,
        } = position;

        let player_count = players.len();
        check_player_count(player_count, settings)?;
        for seat in [turn, previous] {
            if seat >= player_count {
                return Err(RulesViolation::SeatOutOfRange { seat, player_count });
            }
        }

        let unknown = players
            .iter()
            .flat_map(|p| p.hand().iter())
            .chain(&deck)
            .chain(&table)
            .find(|card| !card.is_in_catalog())
            .copied();
        if let Some(card) = unknown {
            return Err(RulesViolation::UnknownCard(card));
        }

        let table = Table::from_bottom_up(table).ok_or(RulesViolation::EmptyTable)?;
        if matches!(table.top(), Card::Wild { bound: None, .. }) {
            return Err(RulesViolation::UnboundWildOnTable);
        }

        let seats = seat_map(&players)?;
        let players: Vec<Player> = players
            .into_iter()
            .map(|player| {
                let hand: Vec<Card> = player.hand().iter().map(|card| card.unbound()).collect();
                player.with_hand(hand)
            })
            .collect();

        let winner = players.iter().position(|p| p.hand().is_empty());
        let previous = winner.unwrap_or(previous);
        let rng = settings.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            players,
            seats,
            deck: Deck::from_bottom_up(deck.into_iter().map(Card::unbound)),
            table,
            turn,
            previous,
            direction,
            winner,
            replenish_threshold: settings.replenish_threshold,
            rng,
        })
    }

    // === Commands ===

    /// Execute a command for the player in turn.
    ///
    /// Fails with [`EngineError::Malformed`] for commands that do not fit the
    /// current hand and with [`EngineError::GameOver`] once a winner exists;
    /// neither failure changes any state.
    pub fn execute_move(&mut self, command: GameCommand) -> Result<MoveOutcome, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameOver);
        }

        let seat = self.turn;
        command.validate(self.players[seat].hand())?;

        let outcome = match command {
            GameCommand::Draw => {
                self.replenish_if_low();
                self.give_cards(seat, 1);
                self.previous = seat;
                self.advance(1);
                MoveOutcome::Drew
            }
            GameCommand::Play { hand_index, colour } => self.play(hand_index, colour),
        };

        tracing::debug!(
            seat,
            player = self.players[seat].id(),
            ?command,
            ?outcome,
            next = self.turn,
            "executed move"
        );

        Ok(outcome)
    }

    /// Let the bot in turn move with the default strategy.
    ///
    /// Returns the command that was executed, or `None` when the player in
    /// turn is not a bot.
    pub fn go_bot(&mut self) -> Result<Option<GameCommand>, EngineError> {
        self.go_bot_with(&ColourFrequency)
    }

    /// Like [`Game::go_bot`] with a caller-chosen strategy.
    pub fn go_bot_with<S>(&mut self, strategy: &S) -> Result<Option<GameCommand>, EngineError>
    where
        S: BotStrategy + ?Sized,
    {
        if self.winner.is_some() {
            return Err(EngineError::GameOver);
        }

        let seat = self.turn;
        if !self.players[seat].is_bot() {
            return Ok(None);
        }

        let top = self.table.top();
        let command = strategy.choose_move(self.players[seat].hand(), &top, &mut self.rng);
        let outcome = self.execute_move(command)?;
        if outcome == MoveOutcome::InvalidMove {
            tracing::error!(seat, ?command, %top, "bot strategy chose an illegal play");
        }

        Ok(Some(command))
    }

    fn play(&mut self, hand_index: usize, colour: Option<Colour>) -> MoveOutcome {
        let seat = self.turn;
        let candidate = self.players[seat].hand()[hand_index];
        if !is_legal(&self.table.top(), &candidate) {
            return MoveOutcome::InvalidMove;
        }

        self.replenish_if_low();

        let card = self.players[seat].hand_mut().remove(hand_index);
        let card = match colour {
            Some(colour) => card.bind(colour).unwrap_or(card),
            None => card,
        };
        self.table.push(card);
        self.previous = seat;

        match card {
            Card::Numeric { .. } => self.advance(1),
            Card::Special { symbol, .. } => match symbol {
                SpecialSymbol::Skip => self.advance(2),
                SpecialSymbol::Reverse => {
                    self.direction = self.direction.reversed();
                    // With two players the one who reversed keeps the turn.
                    if self.players.len() > 2 {
                        self.advance(1);
                    }
                }
                SpecialSymbol::Draw2 => self.penalise_next(2),
            },
            Card::Wild { symbol, .. } => match symbol {
                WildSymbol::ChangeColour => self.advance(1),
                WildSymbol::Draw4 => self.penalise_next(4),
            },
        }

        if self.players[seat].hand().is_empty() {
            self.winner = Some(seat);
            tracing::info!(seat, player = self.players[seat].id(), "game won");
        }

        MoveOutcome::Played
    }

    /// Next player draws `count` cards and loses their turn.
    fn penalise_next(&mut self, count: usize) {
        self.advance(1);
        self.give_cards(self.turn, count);
        self.advance(1);
    }

    fn advance(&mut self, steps: isize) {
        let player_count = self.players.len() as isize;
        let next = self.turn as isize + self.direction.offset() * steps;
        self.turn = next.rem_euclid(player_count) as usize;
    }

    fn give_cards(&mut self, seat: usize, count: usize) {
        for dealt in 0..count {
            if self.deck.is_empty() {
                self.replenish();
            }
            let Some(card) = self.deck.draw() else {
                tracing::warn!(seat, wanted = count, dealt, "deck exhausted, draw skipped");
                return;
            };
            self.players[seat].hand_mut().push(card);
        }
    }

    fn replenish_if_low(&mut self) {
        if self.deck.len() < self.replenish_threshold {
            self.replenish();
        }
    }

    /// Shuffle every table card except the top one back under the deck.
    fn replenish(&mut self) {
        let mut recycled: Vec<Card> =
            self.table.take_under().into_iter().map(Card::unbound).collect();
        if recycled.is_empty() {
            return;
        }
        self.rng.shuffle(&mut recycled);
        tracing::debug!(
            recycled = recycled.len(),
            deck = self.deck.len(),
            "replenishing deck from table"
        );
        self.deck.put_under(recycled);
    }

    // === Queries ===

    /// Copy of the player in turn.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.players[self.turn].clone()
    }

    /// Copy of the player who made the last move.
    ///
    /// Before the first move this is the starting player.
    #[must_use]
    pub fn previous_player(&self) -> Player {
        self.players[self.previous].clone()
    }

    #[must_use]
    pub fn player_by_index(&self, index: usize) -> Option<Player> {
        self.players.get(index).cloned()
    }

    #[must_use]
    pub fn player_by_id(&self, id: &str) -> Option<Player> {
        self.index_of(id).map(|seat| self.players[seat].clone())
    }

    /// Seat index of the player with `id`.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.seats.get(id).copied()
    }

    /// Copies of all players in seat order.
    #[must_use]
    pub fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn table_top(&self) -> Card {
        self.table.top()
    }

    #[must_use]
    pub fn deck_top(&self) -> Option<Card> {
        self.deck.peek()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Copy of the winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner.map(|seat| self.players[seat].clone())
    }

    /// Whether `card` could be played on the current table top.
    #[must_use]
    pub fn is_card_playable(&self, card: &Card) -> bool {
        is_legal(&self.table.top(), card)
    }

    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn previous_index(&self) -> usize {
        self.previous
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Cards across deck, table and all hands.
    #[must_use]
    pub fn card_total(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand().len()).sum();
        self.deck.len() + self.table.len() + in_hands
    }
}

/// Map player ids to seats, rejecting duplicates.
pub(crate) fn seat_map(players: &[Player]) -> Result<FxHashMap<String, usize>, RulesViolation> {
    let mut seats = FxHashMap::default();
    for (seat, player) in players.iter().enumerate() {
        if seats.insert(player.id().to_string(), seat).is_some() {
            return Err(RulesViolation::DuplicatePlayerId(player.id().to_string()));
        }
    }
    Ok(seats)
}
