//! Item definitions: weapons and consumables.
//!
//! `WeaponKind` and `ConsumableKind` are the type tags. `Weapon` and
//! `Consumable` are the owned values a player carries, built from a
//! [`Catalog`](super::Catalog) entry at purchase time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{Attributes, Stat};
use crate::core::RandomSource;
use crate::effects::StatDelta;

/// Weapon type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Starting weapon. Not for sale.
    BareHands,
    Knife,
    Sword,
    Ninjaku,
    Wand,
    Gophermourne,
}

impl WeaponKind {
    /// Weapons offered in the shop, in menu order.
    pub const FOR_SALE: [WeaponKind; 5] = [
        WeaponKind::Knife,
        WeaponKind::Sword,
        WeaponKind::Ninjaku,
        WeaponKind::Wand,
        WeaponKind::Gophermourne,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            WeaponKind::BareHands => "Bare Hands",
            WeaponKind::Knife => "Knife",
            WeaponKind::Sword => "Sword",
            WeaponKind::Ninjaku => "Ninjaku",
            WeaponKind::Wand => "Wand",
            WeaponKind::Gophermourne => "Gophermourne",
        }
    }
}

impl std::fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Consumable type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumableKind {
    HealthPotion,
    StrengthPotion,
    AgilityPotion,
    IntellectPotion,
}

impl ConsumableKind {
    /// Consumables in menu order.
    pub const ALL: [ConsumableKind; 4] = [
        ConsumableKind::HealthPotion,
        ConsumableKind::StrengthPotion,
        ConsumableKind::AgilityPotion,
        ConsumableKind::IntellectPotion,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ConsumableKind::HealthPotion => "Health Potion",
            ConsumableKind::StrengthPotion => "Strength Potion",
            ConsumableKind::AgilityPotion => "Agility Potion",
            ConsumableKind::IntellectPotion => "Intellect Potion",
        }
    }

    /// The attribute a stat potion boosts. `None` for the health potion.
    #[must_use]
    pub const fn boosted_stat(self) -> Option<Stat> {
        match self {
            ConsumableKind::HealthPotion => None,
            ConsumableKind::StrengthPotion => Some(Stat::Strength),
            ConsumableKind::AgilityPotion => Some(Stat::Agility),
            ConsumableKind::IntellectPotion => Some(Stat::Intellect),
        }
    }
}

impl std::fmt::Display for ConsumableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything the shop knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponKind),
    Consumable(ConsumableKind),
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Weapon(w) => w.fmt(f),
            ItemKind::Consumable(c) => c.fmt(f),
        }
    }
}

impl From<WeaponKind> for ItemKind {
    fn from(kind: WeaponKind) -> Self {
        ItemKind::Weapon(kind)
    }
}

impl From<ConsumableKind> for ItemKind {
    fn from(kind: ConsumableKind) -> Self {
        ItemKind::Consumable(kind)
    }
}

/// Damage dealt by a weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageRange {
    /// Always the same amount.
    Fixed(u32),
    /// Uniform over `min..=max`.
    Between {
        min: u32,
        max: u32,
    },
}

impl DamageRange {
    /// Build a range, collapsing `min == max` to `Fixed`.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        if min == max {
            DamageRange::Fixed(min)
        } else {
            DamageRange::Between {
                min: min.min(max),
                max: min.max(max),
            }
        }
    }

    /// Smallest possible damage.
    #[must_use]
    pub const fn min(self) -> u32 {
        match self {
            DamageRange::Fixed(v) => v,
            DamageRange::Between { min, .. } => min,
        }
    }

    /// Largest possible damage.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            DamageRange::Fixed(v) => v,
            DamageRange::Between { max, .. } => max,
        }
    }

    /// Roll a damage value. Fixed ranges never touch the RNG.
    pub fn roll(self, rng: &mut dyn RandomSource) -> u32 {
        match self {
            DamageRange::Fixed(v) => v,
            DamageRange::Between { min, max } => rng.roll(min, max),
        }
    }
}

impl std::fmt::Display for DamageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DamageRange::Fixed(v) => write!(f, "{v}"),
            DamageRange::Between { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// Minimum attribute values needed to buy an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    entries: SmallVec<[(Stat, u32); 3]>,
}

impl Requirements {
    /// No requirements.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a requirement.
    #[must_use]
    pub fn with(mut self, stat: Stat, minimum: u32) -> Self {
        self.entries.push((stat, minimum));
        self
    }

    /// Iterate over `(stat, minimum)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// The first requirement `attributes` fails, if any.
    #[must_use]
    pub fn first_unmet(&self, attributes: &Attributes) -> Option<(Stat, u32)> {
        self.iter().find(|&(stat, min)| attributes.get(stat) < min)
    }

    /// Check whether no requirements are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An equipped weapon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub damage: DamageRange,
    /// Price paid in the shop.
    pub cost: u32,
    pub requirements: Requirements,
}

impl Weapon {
    /// The starting weapon: one point of fixed damage.
    #[must_use]
    pub fn bare_hands() -> Self {
        Self {
            kind: WeaponKind::BareHands,
            damage: DamageRange::Fixed(1),
            cost: 0,
            requirements: Requirements::none(),
        }
    }
}

/// A consumable item, either in the inventory or in effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    pub kind: ConsumableKind,
    /// Effect duration in turns. Zero means instantaneous.
    pub duration: u32,
    pub effect: StatDelta,
    /// Turn the consumable was used on. `None` while in the inventory.
    pub activated_on: Option<u32>,
}

impl Consumable {
    /// Check whether the effect is applied once and never reversed.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration == 0
    }
}
