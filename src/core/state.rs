//! Game state.
//!
//! `GameState` owns everything that changes during a game: both players,
//! whose turn it is, the result once decided, the action history and the
//! random source. Every handler receives it by reference; nothing is
//! global.

use im::Vector;

use super::action::{Action, ActionRecord};
use super::config::{GameConfig, TurnAdvance};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::RandomSource;
use crate::rules::GameResult;

/// Full game state.
#[derive(Debug)]
pub struct GameState {
    /// Both players.
    pub players: PlayerMap<Player>,

    /// Player whose turn it is.
    pub active_player: PlayerId,

    result: Option<GameResult>,

    /// Actions taken so far in the game.
    history: Vector<ActionRecord>,

    rng: Box<dyn RandomSource>,
}

impl GameState {
    /// Create a new game with both players at their starting values.
    pub fn new(config: &GameConfig, rng: impl RandomSource + 'static) -> Self {
        Self {
            players: PlayerMap::new(|p| Player::new(config.player_names[p.index()].clone(), config)),
            active_player: PlayerId::FIRST,
            result: None,
            history: Vector::new(),
            rng: Box::new(rng),
        }
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Get a player mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// The active player's record.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active_player]
    }

    /// Current turn number.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.players[self.active_player].turn
    }

    /// The random source.
    pub fn rng_mut(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    /// Borrow `player` and their opponent mutably, plus the RNG.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut Player, &mut Player, &mut dyn RandomSource) {
        let (me, them) = self.players.pair_mut(player);
        (me, them, self.rng.as_mut())
    }

    // === Result ===

    /// The result, once the game is decided.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Record the result. The first result sticks.
    pub fn set_result(&mut self, result: GameResult) {
        if self.result.is_none() {
            self.result = Some(result);
        }
    }

    // === Turn Advancement ===

    /// Hand the turn to the other player and advance the turn counter.
    ///
    /// With `TurnAdvance::PerAction` both counters move after every action;
    /// with `TurnAdvance::PerRound` they move once the second player has
    /// acted.
    pub fn advance_turn(&mut self, mode: TurnAdvance) {
        let round_complete = self.active_player == PlayerId::SECOND;
        if mode == TurnAdvance::PerAction || round_complete {
            for (_, player) in self.players.iter_mut() {
                player.turn += 1;
            }
        }
        self.active_player = self.active_player.opponent();
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, player: PlayerId, action: Action, rejected: bool) {
        let record = ActionRecord {
            player,
            action,
            turn: self.players[player].turn,
            sequence: self.history.len() as u32,
            rejected,
        };
        self.history.push_back(record);
    }

    /// Every action taken so far.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
