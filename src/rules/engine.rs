//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - Win/loss conditions

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameConfig, GameState, PlayerId};
use crate::effects::ActiveEffect;
use crate::error::ActionResult;
use crate::items::{ConsumableKind, ItemKind, Stat};

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// `loser`'s health reached zero.
    Defeated { winner: PlayerId, loser: PlayerId },
    /// `quitter` left the game.
    Forfeited { winner: PlayerId, quitter: PlayerId },
}

impl GameResult {
    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match *self {
            GameResult::Defeated { winner, .. } | GameResult::Forfeited { winner, .. } => winner,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }
}

/// What a successful action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Attacked {
        target: PlayerId,
        damage: u32,
        remaining_health: u32,
    },
    Bought(ItemKind),
    Worked {
        earned: u32,
    },
    /// A consumable was used. `effect` is `None` for instant consumables.
    Used {
        kind: ConsumableKind,
        healed: u32,
        /// A healing consumable drunk at full health: spent, no effect.
        wasted: bool,
        effect: Option<ActiveEffect>,
    },
    Trained {
        stat: Stat,
        value: u32,
    },
    Exited,
}

/// Everything that happened in one player turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The player who acted.
    pub player: PlayerId,
    /// The action they chose.
    pub action: Action,
    /// Effects reversed at the start of the turn.
    pub expired: Vec<ActiveEffect>,
    /// The action's outcome, or why it was refused.
    pub outcome: ActionResult<Outcome>,
    /// Set when this turn ended the game.
    pub result: Option<GameResult>,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: return empty if the player can't act
/// - `apply_action`: a refused action returns `Err` and leaves players untouched
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Actions `player` could take right now without being refused.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Apply an action for `player`.
    fn apply_action(
        &mut self,
        state: &mut GameState,
        player: PlayerId,
        action: Action,
    ) -> ActionResult<Outcome>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}
