//! The shop catalog.
//!
//! `Catalog` maps every purchasable `ItemKind` to its price, requirement
//! set and stats. Purchases instantiate a fresh `Weapon` or `Consumable`
//! from the matching entry.

use rustc_hash::FxHashMap;

use super::attributes::Stat;
use super::definition::{
    Consumable, ConsumableKind, DamageRange, ItemKind, Requirements, Weapon, WeaponKind,
};
use crate::core::GameConfig;
use crate::effects::StatDelta;

/// What an item does once bought.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemSpec {
    /// A weapon with this damage.
    Weapon(DamageRange),
    /// A consumable with this effect and duration.
    Consumable {
        effect: StatDelta,
        duration: u32,
    },
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDefinition {
    pub kind: ItemKind,
    pub cost: u32,
    pub requirements: Requirements,
    pub spec: ItemSpec,
}

/// Registry of purchasable items.
///
/// ## Example
///
/// ```
/// use archaemania::core::GameConfig;
/// use archaemania::items::{Catalog, ItemKind, WeaponKind};
///
/// let catalog = Catalog::standard(&GameConfig::default());
/// let sword = catalog.get(ItemKind::Weapon(WeaponKind::Sword)).unwrap();
/// assert_eq!(sword.cost, 35);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: FxHashMap<ItemKind, ItemDefinition>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard shop. Potion strength and duration come from `config`.
    #[must_use]
    pub fn standard(config: &GameConfig) -> Self {
        let mut catalog = Self::new();

        catalog.register_weapon(WeaponKind::Knife, 10, DamageRange::new(2, 3), Requirements::none());
        catalog.register_weapon(
            WeaponKind::Sword,
            35,
            DamageRange::new(3, 5),
            Requirements::none().with(Stat::Strength, 2),
        );
        catalog.register_weapon(
            WeaponKind::Ninjaku,
            25,
            DamageRange::new(1, 7),
            Requirements::none().with(Stat::Agility, 2),
        );
        catalog.register_weapon(
            WeaponKind::Wand,
            30,
            DamageRange::Fixed(3),
            Requirements::none().with(Stat::Intellect, 2),
        );
        catalog.register_weapon(
            WeaponKind::Gophermourne,
            65,
            DamageRange::new(6, 7),
            Requirements::none()
                .with(Stat::Strength, 2)
                .with(Stat::Intellect, 2),
        );

        catalog.register_consumable(
            ConsumableKind::HealthPotion,
            5,
            StatDelta::health(saturating_i32(config.health_potion_heal)),
            0,
        );
        for kind in [
            ConsumableKind::StrengthPotion,
            ConsumableKind::AgilityPotion,
            ConsumableKind::IntellectPotion,
        ] {
            if let Some(stat) = kind.boosted_stat() {
                catalog.register_consumable(
                    kind,
                    10,
                    StatDelta::stat(stat, saturating_i32(config.stat_potion_bonus)),
                    config.stat_potion_duration,
                );
            }
        }

        catalog
    }

    /// Register an item definition, replacing any previous entry.
    pub fn register(&mut self, definition: ItemDefinition) {
        self.items.insert(definition.kind, definition);
    }

    fn register_weapon(
        &mut self,
        kind: WeaponKind,
        cost: u32,
        damage: DamageRange,
        requirements: Requirements,
    ) {
        self.register(ItemDefinition {
            kind: ItemKind::Weapon(kind),
            cost,
            requirements,
            spec: ItemSpec::Weapon(damage),
        });
    }

    fn register_consumable(&mut self, kind: ConsumableKind, cost: u32, effect: StatDelta, duration: u32) {
        self.register(ItemDefinition {
            kind: ItemKind::Consumable(kind),
            cost,
            requirements: Requirements::none(),
            spec: ItemSpec::Consumable { effect, duration },
        });
    }

    /// Look up an item.
    #[must_use]
    pub fn get(&self, kind: ItemKind) -> Option<&ItemDefinition> {
        self.items.get(&kind)
    }

    /// Check if an item can be bought.
    #[must_use]
    pub fn contains(&self, kind: ItemKind) -> bool {
        self.items.contains_key(&kind)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl ItemDefinition {
    /// Build the weapon this entry describes.
    #[must_use]
    pub fn weapon(&self) -> Option<Weapon> {
        match (self.kind, &self.spec) {
            (ItemKind::Weapon(kind), ItemSpec::Weapon(damage)) => Some(Weapon {
                kind,
                damage: *damage,
                cost: self.cost,
                requirements: self.requirements.clone(),
            }),
            _ => None,
        }
    }

    /// Build a fresh, unused consumable from this entry.
    #[must_use]
    pub fn consumable(&self) -> Option<Consumable> {
        match (self.kind, &self.spec) {
            (ItemKind::Consumable(kind), ItemSpec::Consumable { effect, duration }) => {
                Some(Consumable {
                    kind,
                    duration: *duration,
                    effect: *effect,
                    activated_on: None,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::standard(&GameConfig::default())
    }

    #[test]
    fn test_standard_prices() {
        let catalog = catalog();
        let price = |kind: ItemKind| catalog.get(kind).map(|d| d.cost);

        assert_eq!(price(WeaponKind::Knife.into()), Some(10));
        assert_eq!(price(WeaponKind::Sword.into()), Some(35));
        assert_eq!(price(WeaponKind::Ninjaku.into()), Some(25));
        assert_eq!(price(WeaponKind::Wand.into()), Some(30));
        assert_eq!(price(WeaponKind::Gophermourne.into()), Some(65));
        assert_eq!(price(ConsumableKind::HealthPotion.into()), Some(5));
        assert_eq!(price(ConsumableKind::StrengthPotion.into()), Some(10));
        assert_eq!(price(ConsumableKind::AgilityPotion.into()), Some(10));
        assert_eq!(price(ConsumableKind::IntellectPotion.into()), Some(10));
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_bare_hands_not_for_sale() {
        assert!(!catalog().contains(WeaponKind::BareHands.into()));
    }

    #[test]
    fn test_gophermourne_requirements() {
        let catalog = catalog();
        let def = catalog.get(WeaponKind::Gophermourne.into()).unwrap();
        let reqs: Vec<_> = def.requirements.iter().collect();
        assert_eq!(reqs, vec![(Stat::Strength, 2), (Stat::Intellect, 2)]);
    }

    #[test]
    fn test_instantiate_weapon() {
        let catalog = catalog();
        let sword = catalog.get(WeaponKind::Sword.into()).unwrap().weapon().unwrap();
        assert_eq!(sword.kind, WeaponKind::Sword);
        assert_eq!(sword.damage, DamageRange::Between { min: 3, max: 5 });
        assert_eq!(sword.cost, 35);
        assert!(catalog.get(WeaponKind::Sword.into()).unwrap().consumable().is_none());
    }

    #[test]
    fn test_instantiate_consumable() {
        let catalog = catalog();
        let potion = catalog
            .get(ConsumableKind::StrengthPotion.into())
            .unwrap()
            .consumable()
            .unwrap();
        assert_eq!(potion.duration, 3);
        assert_eq!(potion.effect, StatDelta::stat(Stat::Strength, 2));
        assert_eq!(potion.activated_on, None);

        let heal = catalog
            .get(ConsumableKind::HealthPotion.into())
            .unwrap()
            .consumable()
            .unwrap();
        assert!(heal.is_instant());
        assert_eq!(heal.effect, StatDelta::health(5));
    }

    #[test]
    fn test_config_drives_potions() {
        let config = GameConfig::default()
            .with_stat_potion(3, 5)
            .with_health_potion_heal(8);
        let catalog = Catalog::standard(&config);

        let agility = catalog
            .get(ConsumableKind::AgilityPotion.into())
            .and_then(ItemDefinition::consumable)
            .unwrap();
        assert_eq!(agility.effect, StatDelta::stat(Stat::Agility, 3));
        assert_eq!(agility.duration, 5);

        let heal = catalog
            .get(ConsumableKind::HealthPotion.into())
            .and_then(ItemDefinition::consumable)
            .unwrap();
        assert_eq!(heal.effect, StatDelta::health(8));
    }

    #[test]
    fn test_oversized_potions_never_turn_negative() {
        let config = GameConfig::default()
            .with_health_potion_heal(u32::MAX)
            .with_stat_potion(u32::MAX, 3);
        let catalog = Catalog::standard(&config);

        let heal = catalog
            .get(ConsumableKind::HealthPotion.into())
            .and_then(ItemDefinition::consumable)
            .unwrap();
        assert_eq!(heal.effect.health, i32::MAX);

        let strength = catalog
            .get(ConsumableKind::StrengthPotion.into())
            .and_then(ItemDefinition::consumable)
            .unwrap();
        assert_eq!(strength.effect.strength, i32::MAX);
    }
}
