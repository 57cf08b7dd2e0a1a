//! Error types.
//!
//! Every failure in the engine is terminal to the action, not to the
//! process. The console front end reports these to the player and moves on.

use thiserror::Error;

use crate::core::PlayerId;
use crate::items::{ConsumableKind, ItemKind, Stat};

/// Reasons an action is refused.
///
/// A refused action never mutates player state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Not enough gold to pay for an item or a training session.
    #[error("insufficient gold: need {required}, have {available}")]
    InsufficientGold {
        /// Gold the action costs.
        required: u32,
        /// Gold the player holds.
        available: u32,
    },

    /// An attribute is below an item's requirement.
    #[error("insufficient {stat} to buy {item}: need {required}, have {actual}")]
    InsufficientAttribute {
        /// The item being bought.
        item: ItemKind,
        /// The attribute that falls short.
        stat: Stat,
        /// Minimum value required.
        required: u32,
        /// Current value.
        actual: u32,
    },

    /// The item has no catalog entry (Bare Hands).
    #[error("{0} is not for sale")]
    NotForSale(ItemKind),

    /// No consumable of this kind in the inventory.
    #[error("you do not have any {0} in your inventory")]
    ItemNotOwned(ConsumableKind),

    /// Training would take the attribute to or past its maximum.
    #[error("{stat} is already at maximum ({max})")]
    AttributeAtMaximum {
        /// The attribute being trained.
        stat: Stat,
        /// The configured cap.
        max: u32,
    },


    /// The player is not the active player.
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    /// The game already has a result.
    #[error("the game is over")]
    GameOver,
}

/// Result type for engine actions.
pub type ActionResult<T> = Result<T, ActionError>;

/// Errors loading or validating a [`GameConfig`](crate::core::GameConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML did not parse.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values are inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors from the console front end.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the game did.
    #[error("input closed before the game finished")]
    InputClosed,
}
