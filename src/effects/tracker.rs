//! Active effect bookkeeping.
//!
//! A stat potion's bonus is applied when it is used and reversed once its
//! duration runs out. `ActiveEffects` holds the potions in effect for one
//! player, each stamped with the turn it was used on.
//!
//! ## Expiry
//!
//! A consumable used on turn `T` with duration `D` expires on turn
//! `T + D - 1`. Expiry is checked at the start of the owner's turn, so the
//! bonus is reversed on the first own turn at or after that point, and the
//! effect is removed from the list when reversed so it can never be
//! reversed twice.

use serde::{Deserialize, Serialize};

use super::effect::StatDelta;
use crate::items::{Consumable, ConsumableKind};

/// A consumable whose bonus is currently applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub consumable: Consumable,
    /// The delta actually applied after clamping. Reversal undoes exactly this.
    pub applied: StatDelta,
    pub activated_on: u32,
}

impl ActiveEffect {
    /// Stamp `consumable` as used on `turn`.
    #[must_use]
    pub fn new(mut consumable: Consumable, applied: StatDelta, turn: u32) -> Self {
        consumable.activated_on = Some(turn);
        Self {
            consumable,
            applied,
            activated_on: turn,
        }
    }

    /// Consumable kind.
    #[must_use]
    pub fn kind(&self) -> ConsumableKind {
        self.consumable.kind
    }

    /// Turn on which the bonus is reversed.
    #[must_use]
    pub fn expires_on(&self) -> u32 {
        self.activated_on
            .saturating_add(self.consumable.duration.saturating_sub(1))
    }

    /// Check whether the effect is due for reversal on `turn`.
    #[must_use]
    pub fn is_expired(&self, turn: u32) -> bool {
        turn >= self.expires_on()
    }
}

/// The effects in force for one player, in activation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    effects: Vec<ActiveEffect>,
}

impl ActiveEffects {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an effect.
    pub fn push(&mut self, effect: ActiveEffect) {
        self.effects.push(effect);
    }

    /// Remove and return every effect expired on `turn`.
    ///
    /// Effects that have not expired stay in place, in order.
    pub fn take_expired(&mut self, turn: u32) -> Vec<ActiveEffect> {
        let (expired, remaining) = std::mem::take(&mut self.effects)
            .into_iter()
            .partition(|e| e.is_expired(turn));
        self.effects = remaining;
        expired
    }

    /// Iterate over active effects.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    /// Number of active effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if nothing is in effect.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Count active effects of one kind.
    #[must_use]
    pub fn count(&self, kind: ConsumableKind) -> usize {
        self.effects.iter().filter(|e| e.kind() == kind).count()
    }
}
