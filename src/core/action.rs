//! Player actions.
//!
//! Each turn a player takes exactly one `Action`. Applied actions are
//! recorded as `ActionRecord`s so a seeded game can be replayed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::items::{ConsumableKind, ItemKind, Stat};

/// One turn's choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Hit the opponent with the equipped weapon.
    Attack,
    /// Buy a weapon or consumable.
    Buy(ItemKind),
    /// Earn gold.
    Work,
    /// Consume an item from the inventory.
    Use(ConsumableKind),
    /// Pay gold to raise an attribute.
    Train(Stat),
    /// Leave the game. The opponent wins.
    Exit,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Attack => f.write_str("attack"),
            Action::Buy(item) => write!(f, "buy {item}"),
            Action::Work => f.write_str("work"),
            Action::Use(kind) => write!(f, "use {kind}"),
            Action::Train(stat) => write!(f, "train {stat}"),
            Action::Exit => f.write_str("exit"),
        }
    }
}

/// A recorded action with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position in the whole game, starting at 0.
    pub sequence: u32,

    /// Whether the action was refused (it still used up the turn).
    pub rejected: bool,
}
