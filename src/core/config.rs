//! Game configuration.
//!
//! `GameConfig` holds the rule constants: health and attribute caps,
//! starting gold, work income, training and potion tuning, player names
//! and how the turn counter advances. Defaults reproduce the classic
//! rules; a TOML file may override any subset of them.
//!
//! ```toml
//! max_health = 40
//! work_min_gold = 10
//! turn_advance = "per_round"
//! player_names = ["Alice", "Bob"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::items::Stat;

/// Largest value accepted for any cap, bonus or increment.
///
/// Stat changes are applied as `i32` deltas, so every magnitude must fit.
pub const MAX_CONFIG_VALUE: u32 = i32::MAX as u32;

/// When the shared turn counter moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnAdvance {
    /// After every single player action.
    #[default]
    PerAction,
    /// After both players have acted once.
    PerRound,
}

/// Complete rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health cap and starting health.
    pub max_health: u32,

    /// Gold each player starts with.
    pub starting_gold: u32,

    /// Smallest work payout.
    pub work_min_gold: u32,

    /// Largest work payout (inclusive).
    pub work_max_gold: u32,

    pub max_strength: u32,
    pub max_intellect: u32,
    pub max_agility: u32,

    /// Gold spent per training session.
    pub train_cost: u32,

    /// Attribute points gained per training session.
    pub train_increment: u32,

    /// Health restored by a health potion.
    pub health_potion_heal: u32,

    /// Attribute bonus granted by a stat potion.
    pub stat_potion_bonus: u32,

    /// Turns a stat potion lasts.
    pub stat_potion_duration: u32,

    /// Names of the first and second player.
    pub player_names: [String; 2],

    pub turn_advance: TurnAdvance,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_health: 30,
            starting_gold: 20,
            work_min_gold: 5,
            work_max_gold: 15,
            max_strength: 10,
            max_intellect: 10,
            max_agility: 10,
            train_cost: 5,
            train_increment: 2,
            health_potion_heal: 5,
            stat_potion_bonus: 2,
            stat_potion_duration: 3,
            player_names: ["Gopher1".to_string(), "Gopher2".to_string()],
            turn_advance: TurnAdvance::PerAction,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Check the values are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::Invalid("max_health must be positive".into()));
        }
        if self.work_min_gold > self.work_max_gold {
            return Err(ConfigError::Invalid(format!(
                "work_min_gold ({}) exceeds work_max_gold ({})",
                self.work_min_gold, self.work_max_gold
            )));
        }
        if self.train_increment == 0 {
            return Err(ConfigError::Invalid("train_increment must be positive".into()));
        }
        if self.stat_potion_duration == 0 {
            return Err(ConfigError::Invalid("stat_potion_duration must be positive".into()));
        }
        let magnitudes = [
            ("max_health", self.max_health),
            ("max_strength", self.max_strength),
            ("max_intellect", self.max_intellect),
            ("max_agility", self.max_agility),
            ("train_increment", self.train_increment),
            ("health_potion_heal", self.health_potion_heal),
            ("stat_potion_bonus", self.stat_potion_bonus),
        ];
        if let Some((name, value)) = magnitudes.iter().find(|(_, v)| *v > MAX_CONFIG_VALUE) {
            return Err(ConfigError::Invalid(format!(
                "{name} ({value}) exceeds the limit of {MAX_CONFIG_VALUE}"
            )));
        }
        if self.player_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::Invalid("player names must not be empty".into()));
        }
        Ok(())
    }

    /// Cap for one attribute.
    #[must_use]
    pub fn max_attribute(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Strength => self.max_strength,
            Stat::Intellect => self.max_intellect,
            Stat::Agility => self.max_agility,
        }
    }

    /// Set the health cap.
    #[must_use]
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Set the starting gold.
    #[must_use]
    pub fn with_starting_gold(mut self, gold: u32) -> Self {
        self.starting_gold = gold;
        self
    }

    /// Set the inclusive work payout range.
    #[must_use]
    pub fn with_work_range(mut self, min: u32, max: u32) -> Self {
        self.work_min_gold = min;
        self.work_max_gold = max;
        self
    }

    /// Set the same cap for all three attributes.
    #[must_use]
    pub fn with_max_attributes(mut self, max: u32) -> Self {
        self.max_strength = max;
        self.max_intellect = max;
        self.max_agility = max;
        self
    }

    /// Set training cost and gain.
    #[must_use]
    pub fn with_training(mut self, cost: u32, increment: u32) -> Self {
        self.train_cost = cost;
        self.train_increment = increment;
        self
    }

    /// Set the health potion's heal.
    #[must_use]
    pub fn with_health_potion_heal(mut self, heal: u32) -> Self {
        self.health_potion_heal = heal;
        self
    }

    /// Set stat potion bonus and duration.
    #[must_use]
    pub fn with_stat_potion(mut self, bonus: u32, duration: u32) -> Self {
        self.stat_potion_bonus = bonus;
        self.stat_potion_duration = duration;
        self
    }

    /// Rename the players.
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Set how the turn counter advances.
    #[must_use]
    pub fn with_turn_advance(mut self, advance: TurnAdvance) -> Self {
        self.turn_advance = advance;
        self
    }
}
