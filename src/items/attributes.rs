//! Trainable attributes.
//!
//! Every player has three attributes: strength, intellect and agility.
//! They start at zero, rise through training and potions, and gate
//! which weapons a player may buy.

use serde::{Deserialize, Serialize};

/// One of the three trainable attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Physical power. Required for the Sword.
    Strength,
    /// Magical aptitude. Required for the Wand.
    Intellect,
    /// Speed and finesse. Required for the Ninjaku.
    Agility,
}

impl Stat {
    /// All attributes in menu order.
    pub const ALL: [Stat; 3] = [Stat::Strength, Stat::Intellect, Stat::Agility];

    /// Lowercase name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stat::Strength => "strength",
            Stat::Intellect => "intellect",
            Stat::Agility => "agility",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's attribute values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    /// Strength value.
    pub strength: u32,
    /// Intellect value.
    pub intellect: u32,
    /// Agility value.
    pub agility: u32,
}

impl Attributes {
    /// Create attributes with every value set to `value`.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self {
            strength: value,
            intellect: value,
            agility: value,
        }
    }

    /// Read one attribute.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Intellect => self.intellect,
            Stat::Agility => self.agility,
        }
    }

    /// Mutable access to one attribute.
    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Intellect => &mut self.intellect,
            Stat::Agility => &mut self.agility,
        }
    }

    /// Overwrite one attribute.
    pub fn set(&mut self, stat: Stat, value: u32) {
        *self.get_mut(stat) = value;
    }
}
