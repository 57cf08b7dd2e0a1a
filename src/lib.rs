//! # archaemania
//!
//! A two-player, turn-based console combat game.
//!
//! Players alternate turns. On each turn a player attacks, buys a weapon
//! or consumable, works for gold, uses a consumable, or trains an
//! attribute, until one of them runs out of health or leaves.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: `GameState` owns both players; every handler
//!    takes it by reference.
//!
//! 2. **Injectable Randomness**: damage and income are drawn through
//!    `RandomSource`, so tests can script exact rolls and a seeded
//!    `GameRng` replays a whole game.
//!
//! 3. **Configuration Over Constants**: caps, prices of training, potion
//!    tuning and turn counting live in `GameConfig`, loadable from TOML.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, RNG, configuration
//! - `items`: weapons, consumables, attributes, the shop catalog
//! - `effects`: stat deltas and active-effect expiry
//! - `rules`: the `RulesEngine` trait and game results
//! - `games`: the Archaemania turn engine
//! - `console`: menus, input and the interactive session
//! - `error`: error types

pub mod core;
pub mod items;
pub mod effects;
pub mod rules;
pub mod games;
pub mod console;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GameState, Player, PlayerId, PlayerMap,
    RandomSource, SequenceRng, TurnAdvance,
};

pub use crate::items::{
    Attributes, Catalog, Consumable, ConsumableKind, DamageRange, ItemKind, Stat, Weapon,
    WeaponKind,
};

pub use crate::effects::{ActiveEffect, ActiveEffects, StatDelta};

pub use crate::rules::{GameResult, Outcome, RulesEngine, TurnReport};

pub use crate::games::archaemania::{ArchaemaniaBuilder, ArchaemaniaGame};

pub use crate::console::Session;

pub use crate::error::{ActionError, ActionResult, ConfigError, ConsoleError};
