//! Archaemania: a two-player duel.
//!
//! - Each player starts with 30 health, 20 gold and bare hands
//! - On your turn: attack, buy, work, use a consumable, train, or exit
//! - Stat potions wear off a fixed number of turns after use
//! - First player to 0 health loses

mod game;

pub use game::{ArchaemaniaBuilder, ArchaemaniaGame};
