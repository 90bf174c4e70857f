//! Modifier effects - wrap an inner effect and alter its output

use super::{DamageRoll, Effect};
use crate::random::RandomSource;

/// Adds a flat amount to the wrapped effect's damage
#[derive(Debug)]
pub struct DamageBoost {
    inner: Box<dyn Effect>,
    amount: u32,
}

impl DamageBoost {
    pub fn new(inner: Box<dyn Effect>, amount: u32) -> Self {
        DamageBoost { inner, amount }
    }
}

impl Effect for DamageBoost {
    fn compute_damage(&self, rng: &mut dyn RandomSource) -> DamageRoll {
        let roll = self.inner.compute_damage(rng);
        DamageRoll {
            amount: roll.amount.saturating_add(self.amount),
            ..roll
        }
    }

    fn describe(&self) -> String {
        format!("{} + Damage Boost", self.inner.describe())
    }
}

/// Multiplies the wrapped effect's damage with probability `chance`
///
/// Draws exactly one uniform value per evaluation.
#[derive(Debug)]
pub struct CriticalHit {
    inner: Box<dyn Effect>,
    chance: f64,
    multiplier: u32,
}

impl CriticalHit {
    pub fn new(inner: Box<dyn Effect>, chance: f64, multiplier: u32) -> Self {
        CriticalHit {
            inner,
            chance,
            multiplier,
        }
    }
}

impl Effect for CriticalHit {
    fn compute_damage(&self, rng: &mut dyn RandomSource) -> DamageRoll {
        let roll = self.inner.compute_damage(rng);
        if rng.next_uniform() < self.chance {
            tracing::debug!(
                base = roll.amount,
                multiplier = self.multiplier,
                "Critical hit"
            );
            DamageRoll {
                amount: roll.amount.saturating_mul(self.multiplier),
                is_critical: true,
            }
        } else {
            roll
        }
    }

    fn describe(&self) -> String {
        format!("{} + Critical Chance", self.inner.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::skill::{BasicAttack, Fireball};

    #[test]
    fn test_damage_boost() {
        let mut rng = ScriptedRandom::new();
        let effect = DamageBoost::new(Box::new(BasicAttack::new(20)), 10);
        assert_eq!(effect.compute_damage(&mut rng), DamageRoll::plain(30));
        assert_eq!(effect.describe(), "Basic Attack + Damage Boost");
    }

    #[test]
    fn test_critical_hit_triggers_below_chance() {
        let effect = CriticalHit::new(Box::new(BasicAttack::new(20)), 0.3, 2);

        let mut rng = ScriptedRandom::new().with_uniforms([0.29]);
        let roll = effect.compute_damage(&mut rng);
        assert_eq!(roll.amount, 40);
        assert!(roll.is_critical);

        // The threshold itself is not a crit
        let mut rng = ScriptedRandom::new().with_uniforms([0.3]);
        let roll = effect.compute_damage(&mut rng);
        assert_eq!(roll, DamageRoll::plain(20));
        assert_eq!(rng.uniforms_drawn(), 1);
    }

    #[test]
    fn test_zero_chance_never_crits() {
        let effect = CriticalHit::new(Box::new(BasicAttack::new(20)), 0.0, 2);
        let mut rng = ScriptedRandom::new().with_uniforms([0.0]);
        assert!(!effect.compute_damage(&mut rng).is_critical);
    }

    #[test]
    fn test_crit_doubles_boosted_value() {
        // base 30 -> fireball 45 -> boost 55 -> crit 110
        let boosted = DamageBoost::new(Box::new(Fireball::new(30, 1.5)), 10);
        let effect = CriticalHit::new(Box::new(boosted), 0.3, 2);

        let mut rng = ScriptedRandom::new().with_uniforms([0.0]);
        assert_eq!(effect.compute_damage(&mut rng).amount, 110);
        assert_eq!(
            effect.describe(),
            "Fireball + Damage Boost + Critical Chance"
        );
    }

    #[test]
    fn test_boost_keeps_inner_critical_flag() {
        let crit = CriticalHit::new(Box::new(BasicAttack::new(5)), 1.0, 2);
        let effect = DamageBoost::new(Box::new(crit), 10);

        let mut rng = ScriptedRandom::new().with_uniforms([0.5]);
        let roll = effect.compute_damage(&mut rng);
        assert_eq!(roll.amount, 20);
        assert!(roll.is_critical);
    }
}
