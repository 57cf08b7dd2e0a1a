//! Weapons, consumables, attributes and the shop catalog.
//!
//! - `attributes`: the three trainable stats
//! - `definition`: item type tags and the owned `Weapon`/`Consumable` values
//! - `registry`: the `Catalog` of prices and requirement sets

pub mod attributes;
pub mod definition;
pub mod registry;

pub use attributes::{Attributes, Stat};
pub use definition::{
    Consumable, ConsumableKind, DamageRange, ItemKind, Requirements, Weapon, WeaponKind,
};
pub use registry::{Catalog, ItemDefinition, ItemSpec};
