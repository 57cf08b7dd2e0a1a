//! Consumable effects and their expiry.
//!
//! - `effect`: `StatDelta`, the signed change a consumable makes
//! - `tracker`: `ActiveEffects`, the per-player list of bonuses in force

pub mod effect;
pub mod tracker;

pub use effect::{clamped_add, StatDelta};
pub use tracker::{ActiveEffect, ActiveEffects};
