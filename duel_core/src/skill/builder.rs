//! Skill chain assembly

use super::{BasicAttack, CriticalHit, DamageBoost, Effect, Fireball};
use crate::combatant::{Archetype, Combatant};
use crate::config::SkillConstants;

/// Builds the decorated skill a combatant uses on a skill turn
///
/// The chain is always: archetype skill -> damage boost -> critical hit.
/// The critical modifier is outermost, so a crit multiplies the boosted
/// damage.
#[derive(Debug, Clone, Copy)]
pub struct SkillBuilder<'a> {
    constants: &'a SkillConstants,
}

impl<'a> SkillBuilder<'a> {
    pub fn new(constants: &'a SkillConstants) -> Self {
        SkillBuilder { constants }
    }

    /// Fresh skill chain for `combatant`
    pub fn build(&self, combatant: &Combatant) -> Box<dyn Effect> {
        let base = self.base_skill(combatant);
        self.apply_modifiers(base)
    }

    /// The undecorated skill for the combatant's archetype
    pub fn base_skill(&self, combatant: &Combatant) -> Box<dyn Effect> {
        match combatant.archetype() {
            Archetype::Mage => Box::new(Fireball::new(
                combatant.attack_power(),
                self.constants.fireball_multiplier,
            )),
            Archetype::Warrior => Box::new(BasicAttack::new(combatant.attack_power())),
        }
    }

    fn apply_modifiers(&self, base: Box<dyn Effect>) -> Box<dyn Effect> {
        let boosted = DamageBoost::new(base, self.constants.damage_boost);
        Box::new(CriticalHit::new(
            Box::new(boosted),
            self.constants.critical_chance,
            self.constants.critical_multiplier,
        ))
    }
}
