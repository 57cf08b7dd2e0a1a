//! Players: identifiers, two-slot storage, and the player record.
//!
//! ## PlayerId
//!
//! Archaemania is strictly two-player. `PlayerId::FIRST` moves first;
//! `opponent()` flips between the two.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `[T; 2]`. `pair_mut` hands out the
//! acting player and their opponent as two disjoint mutable borrows, so
//! handlers never alias player state.
//!
//! ## Player
//!
//! Health, gold, attributes, the equipped weapon, the inventory and the
//! active effects of one player.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::GameConfig;
use crate::effects::{clamped_add, ActiveEffects, StatDelta};
use crate::items::{Attributes, Consumable, ConsumableKind, Stat, Weapon};

/// Identifies one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::FIRST, PlayerId::SECOND];

    /// Player slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data for exactly two players.
///
/// ```
/// use archaemania::core::{PlayerId, PlayerMap};
///
/// let mut gold = PlayerMap::new(|_| 20u32);
/// gold[PlayerId::SECOND] += 5;
/// assert_eq!(gold[PlayerId::FIRST], 20);
/// assert_eq!(gold[PlayerId::SECOND], 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Get a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a player's data mutably.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow `player` and their opponent mutably at the same time.
    pub fn pair_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        if player == PlayerId::FIRST {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One player's full state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Always in `0..=max_health`.
    pub health: u32,
    pub gold: u32,
    /// Turn counter. Both players' counters advance together.
    pub turn: u32,
    pub attributes: Attributes,
    pub weapon: Weapon,
    /// Unused consumables, oldest first.
    pub inventory: Vec<Consumable>,
    pub active_effects: ActiveEffects,
}

impl Player {
    /// A fresh player: full health, starting gold, bare hands, zero attributes.
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            health: config.max_health,
            gold: config.starting_gold,
            turn: 0,
            attributes: Attributes::default(),
            weapon: Weapon::bare_hands(),
            inventory: Vec::new(),
            active_effects: ActiveEffects::new(),
        }
    }

    /// Check if the player still has health.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract `amount` from health, stopping at zero.
    ///
    /// Returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Apply a delta, clamping health to `0..=max_health` and each attribute
    /// to `0..=max`. Returns the delta that was actually applied.
    pub fn apply_delta(&mut self, delta: StatDelta, config: &GameConfig) -> StatDelta {
        let (health, applied_health) = clamped_add(self.health, delta.health, config.max_health);
        self.health = health;

        let mut applied = StatDelta::health(applied_health);
        for stat in Stat::ALL {
            let (value, change) = clamped_add(
                self.attributes.get(stat),
                delta.get(stat),
                config.max_attribute(stat),
            );
            self.attributes.set(stat, value);
            applied = applied.with_stat(stat, change);
        }
        applied
    }

    /// Undo a delta previously returned by `apply_delta`.
    pub fn revert_delta(&mut self, applied: StatDelta, config: &GameConfig) {
        self.apply_delta(applied.negated(), config);
    }

    /// Index of the first inventory consumable of `kind`.
    #[must_use]
    pub fn find_consumable(&self, kind: ConsumableKind) -> Option<usize> {
        self.inventory.iter().position(|c| c.kind == kind)
    }

    /// Number of unused consumables of `kind`.
    #[must_use]
    pub fn count_consumable(&self, kind: ConsumableKind) -> usize {
        self.inventory.iter().filter(|c| c.kind == kind).count()
    }
}
