//! Numbered menus.
//!
//! A `Menu` is a static list of labelled choices, printed as `1. Label`
//! lines and selected by 1-based index.

use std::io::{self, Write};

use crate::items::{ConsumableKind, Stat, WeaponKind};

/// A numbered list of choices.
#[derive(Debug)]
pub struct Menu<T: 'static> {
    pub options: &'static [(&'static str, T)],
}

impl<T: Copy> Menu<T> {
    /// Look up a 1-based selection.
    #[must_use]
    pub fn select(&self, number: usize) -> Option<T> {
        number
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(|&(_, value)| value)
    }

    /// Print the options, one per line.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for (i, (label, _)) in self.options.iter().enumerate() {
            writeln!(out, "{}. {label}", i + 1)?;
        }
        Ok(())
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the menu has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Top-level turn choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainChoice {
    Attack,
    Buy,
    Work,
    Use,
    Train,
    Exit,
}

/// Shop sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuyCategory {
    Weapons,
    Consumables,
}

pub const MAIN_MENU: Menu<MainChoice> = Menu {
    options: &[
        ("Attack", MainChoice::Attack),
        ("Buy", MainChoice::Buy),
        ("Work", MainChoice::Work),
        ("Use", MainChoice::Use),
        ("Train", MainChoice::Train),
        ("Exit", MainChoice::Exit),
    ],
};

pub const BUY_MENU: Menu<BuyCategory> = Menu {
    options: &[
        ("Weapons", BuyCategory::Weapons),
        ("Consumables", BuyCategory::Consumables),
    ],
};

pub const WEAPON_MENU: Menu<WeaponKind> = Menu {
    options: &[
        ("Knife", WeaponKind::Knife),
        ("Sword", WeaponKind::Sword),
        ("Ninjaku", WeaponKind::Ninjaku),
        ("Wand", WeaponKind::Wand),
        ("Gophermourne", WeaponKind::Gophermourne),
    ],
};

pub const CONSUMABLE_MENU: Menu<ConsumableKind> = Menu {
    options: &[
        ("Health Potion", ConsumableKind::HealthPotion),
        ("Strength Potion", ConsumableKind::StrengthPotion),
        ("Agility Potion", ConsumableKind::AgilityPotion),
        ("Intellect Potion", ConsumableKind::IntellectPotion),
    ],
};

pub const TRAIN_MENU: Menu<Stat> = Menu {
    options: &[
        ("Strength", Stat::Strength),
        ("Intellect", Stat::Intellect),
        ("Agility", Stat::Agility),
    ],
};
