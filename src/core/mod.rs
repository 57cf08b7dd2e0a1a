//! Core engine types: players, state, actions, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, SequenceRng};
pub use config::{GameConfig, TurnAdvance};
pub use action::{Action, ActionRecord};
pub use state::GameState;
