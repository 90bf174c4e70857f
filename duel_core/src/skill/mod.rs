//! Skill effects - composable damage computations
//!
//! A skill is a chain of [`Effect`]s: one base effect (plain attack or an
//! archetype skill) wrapped by any number of modifiers. Each modifier owns
//! the effect it wraps and only sees it through the [`Effect`] trait, so the
//! chain evaluates innermost first.

mod base;
mod builder;
mod modifiers;

pub use base::{BasicAttack, Fireball};
pub use builder::SkillBuilder;
pub use modifiers::{CriticalHit, DamageBoost};

use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage produced by one evaluation of an effect chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    pub amount: u32,
    /// Whether a critical modifier in the chain triggered
    pub is_critical: bool,
}

impl DamageRoll {
    /// A non-critical roll
    pub fn plain(amount: u32) -> Self {
        DamageRoll {
            amount,
            is_critical: false,
        }
    }
}

/// A damage-computation strategy
pub trait Effect: fmt::Debug {
    /// Evaluate the effect, drawing from `rng` where the effect is random
    fn compute_damage(&self, rng: &mut dyn RandomSource) -> DamageRoll;

    /// Human readable name of the whole chain, e.g.
    /// `"Fireball + Damage Boost + Critical Chance"`
    fn describe(&self) -> String;
}

impl<E: Effect + ?Sized> Effect for Box<E> {
    fn compute_damage(&self, rng: &mut dyn RandomSource) -> DamageRoll {
        (**self).compute_damage(rng)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
