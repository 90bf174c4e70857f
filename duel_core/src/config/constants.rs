//! Tunable battle constants

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;
use crate::combatant::Archetype;

/// Tunable battle constants
///
/// Every field has a default, so a config file only needs the values it
/// overrides. Constants are passed by reference to whatever needs them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleConstants {
    #[serde(default)]
    pub battle: TurnConstants,
    #[serde(default)]
    pub skills: SkillConstants,
    #[serde(default)]
    pub archetypes: ArchetypeConstants,
}

impl BattleConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: BattleConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let constants: BattleConstants = super::parse_toml(toml)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.battle.max_turns == 0 {
            return Err(ConfigError::Validation(
                "battle.max_turns must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.skills.critical_chance) {
            return Err(ConfigError::Validation(format!(
                "skills.critical_chance must be within [0, 1], got {}",
                self.skills.critical_chance
            )));
        }
        if !self.skills.fireball_multiplier.is_finite() || self.skills.fireball_multiplier < 0.0 {
            return Err(ConfigError::Validation(format!(
                "skills.fireball_multiplier must be a non-negative number, got {}",
                self.skills.fireball_multiplier
            )));
        }
        for archetype in Archetype::all() {
            let stats = self.archetypes.stats(*archetype);
            if stats.health == 0 || stats.attack_power == 0 {
                return Err(ConfigError::Validation(format!(
                    "archetypes.{} needs positive health and attack_power",
                    archetype.key()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnConstants {
    /// Full turns (both sides acting) before the battle is called undecided
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
}

impl Default for TurnConstants {
    fn default() -> Self {
        TurnConstants {
            max_turns: default_max_turns(),
        }
    }
}

fn default_max_turns() -> u32 {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConstants {
    /// Flat damage added by the damage boost modifier
    #[serde(default = "default_damage_boost")]
    pub damage_boost: u32,
    /// Probability in [0, 1] that the critical modifier triggers
    #[serde(default = "default_critical_chance")]
    pub critical_chance: f64,
    /// Damage multiplier on a critical hit
    #[serde(default = "default_critical_multiplier")]
    pub critical_multiplier: u32,
    /// Fireball damage = floor(base power * multiplier)
    #[serde(default = "default_fireball_multiplier")]
    pub fireball_multiplier: f64,
}

impl Default for SkillConstants {
    fn default() -> Self {
        SkillConstants {
            damage_boost: default_damage_boost(),
            critical_chance: default_critical_chance(),
            critical_multiplier: default_critical_multiplier(),
            fireball_multiplier: default_fireball_multiplier(),
        }
    }
}

fn default_damage_boost() -> u32 {
    10
}
fn default_critical_chance() -> f64 {
    0.3
}
fn default_critical_multiplier() -> u32 {
    2
}
fn default_fireball_multiplier() -> f64 {
    1.5
}

/// Base stats handed to a combatant of a given archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    pub health: u32,
    pub attack_power: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeConstants {
    #[serde(default = "default_warrior")]
    pub warrior: ArchetypeStats,
    #[serde(default = "default_mage")]
    pub mage: ArchetypeStats,
}

impl ArchetypeConstants {
    /// Stats for an archetype
    pub fn stats(&self, archetype: Archetype) -> ArchetypeStats {
        match archetype {
            Archetype::Warrior => self.warrior,
            Archetype::Mage => self.mage,
        }
    }
}

impl Default for ArchetypeConstants {
    fn default() -> Self {
        ArchetypeConstants {
            warrior: default_warrior(),
            mage: default_mage(),
        }
    }
}

fn default_warrior() -> ArchetypeStats {
    ArchetypeStats {
        health: 150,
        attack_power: 20,
    }
}
fn default_mage() -> ArchetypeStats {
    ArchetypeStats {
        health: 100,
        attack_power: 30,
    }
}
