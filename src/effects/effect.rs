//! Stat deltas.
//!
//! A `StatDelta` is the effect of a consumable: signed changes to health
//! and the three attributes. Players apply deltas with clamping and keep
//! the *applied* delta around so the effect can be reversed exactly.

use serde::{Deserialize, Serialize};

use crate::items::Stat;

/// Signed changes to health and attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatDelta {
    pub health: i32,
    pub strength: i32,
    pub intellect: i32,
    pub agility: i32,
}

impl StatDelta {
    /// No change.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            health: 0,
            strength: 0,
            intellect: 0,
            agility: 0,
        }
    }

    /// Change health only.
    #[must_use]
    pub const fn health(amount: i32) -> Self {
        Self {
            health: amount,
            ..Self::zero()
        }
    }

    /// Change one attribute only.
    #[must_use]
    pub fn stat(stat: Stat, amount: i32) -> Self {
        Self::zero().with_stat(stat, amount)
    }

    /// Set the change for one attribute.
    #[must_use]
    pub fn with_stat(mut self, stat: Stat, amount: i32) -> Self {
        match stat {
            Stat::Strength => self.strength = amount,
            Stat::Intellect => self.intellect = amount,
            Stat::Agility => self.agility = amount,
        }
        self
    }

    /// The change for one attribute.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Intellect => self.intellect,
            Stat::Agility => self.agility,
        }
    }

    /// The opposite change.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self {
            health: -self.health,
            strength: -self.strength,
            intellect: -self.intellect,
            agility: -self.agility,
        }
    }

    /// Check if nothing changes.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Add a signed delta to `value`, keeping the result in `0..=max`.
///
/// Returns the new value and the delta that was actually applied.
#[must_use]
pub fn clamped_add(value: u32, delta: i32, max: u32) -> (u32, i32) {
    let raw = i64::from(value) + i64::from(delta);
    // A value already above `max` is never pushed higher, nor pulled down by a gain.
    let target = if delta >= 0 {
        raw.min(i64::from(max.max(value)))
    } else {
        raw.max(0)
    };
    let applied = target - i64::from(value);
    (target as u32, applied as i32)
}
