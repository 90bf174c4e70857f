//! Combatants - the two participants of a battle

use crate::config::{ArchetypeConstants, ArchetypeStats};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error constructing a combatant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatantError {
    #[error("Combatant name cannot be empty or blank")]
    BlankName,
    #[error("Health must be positive, got: {0}")]
    NonPositiveHealth(u32),
    #[error("Attack power must be positive, got: {0}")]
    NonPositiveAttackPower(u32),
}

/// Combatant category, fixing base stats and the default skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Warrior,
    Mage,
}

impl Archetype {
    /// Get all archetype variants
    pub fn all() -> &'static [Archetype] {
        &[Archetype::Warrior, Archetype::Mage]
    }

    /// Config key for this archetype
    pub fn key(&self) -> &'static str {
        match self {
            Archetype::Warrior => "warrior",
            Archetype::Mage => "mage",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Archetype::Warrior => write!(f, "Warrior"),
            Archetype::Mage => write!(f, "Mage"),
        }
    }
}

/// Which of the two battle slots a combatant occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The other side of the battle
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// A battle participant with health and attack stats
///
/// Health is the only mutable state and only changes through
/// [`Combatant::apply_damage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combatant {
    name: String,
    archetype: Archetype,
    health: u32,
    max_health: u32,
    attack_power: u32,
}

impl Combatant {
    /// Create a combatant at full health
    pub fn new(
        name: impl Into<String>,
        archetype: Archetype,
        health: u32,
        attack_power: u32,
    ) -> Result<Self, CombatantError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CombatantError::BlankName);
        }
        if health == 0 {
            return Err(CombatantError::NonPositiveHealth(health));
        }
        if attack_power == 0 {
            return Err(CombatantError::NonPositiveAttackPower(attack_power));
        }

        Ok(Combatant {
            name,
            archetype,
            health,
            max_health: health,
            attack_power,
        })
    }

    /// Create a combatant with the configured stats of its archetype
    pub fn from_archetype(
        name: impl Into<String>,
        archetype: Archetype,
        archetypes: &ArchetypeConstants,
    ) -> Result<Self, CombatantError> {
        let ArchetypeStats {
            health,
            attack_power,
        } = archetypes.stats(archetype);
        Self::new(name, archetype, health, attack_power)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    /// Reduce health by `amount`, stopping at zero
    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - HP: {}/{}, Attack: {}",
            self.name, self.archetype, self.health, self.max_health, self.attack_power
        )
    }
}

/// Create a combatant with the default stats of its archetype
///
/// Warrior: 150 health, 20 attack. Mage: 100 health, 30 attack.
pub fn create_combatant(
    name: impl Into<String>,
    archetype: Archetype,
) -> Result<Combatant, CombatantError> {
    Combatant::from_archetype(name, archetype, &ArchetypeConstants::default())
}
