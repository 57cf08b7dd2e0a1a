//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Win/loss conditions

pub mod engine;

pub use engine::{GameResult, Outcome, RulesEngine, TurnReport};
