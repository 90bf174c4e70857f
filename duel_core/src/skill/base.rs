//! Base effects - the innermost link of a skill chain

use super::{DamageRoll, Effect};
use crate::random::RandomSource;

/// Deals the base power unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicAttack {
    base_power: u32,
}

impl BasicAttack {
    pub fn new(base_power: u32) -> Self {
        BasicAttack { base_power }
    }
}

impl Effect for BasicAttack {
    fn compute_damage(&self, _rng: &mut dyn RandomSource) -> DamageRoll {
        DamageRoll::plain(self.base_power)
    }

    fn describe(&self) -> String {
        "Basic Attack".to_string()
    }
}

/// Mage skill: deals `floor(base_power * multiplier)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fireball {
    base_power: u32,
    multiplier: f64,
}

impl Fireball {
    pub fn new(base_power: u32, multiplier: f64) -> Self {
        Fireball {
            base_power,
            multiplier,
        }
    }
}

impl Effect for Fireball {
    fn compute_damage(&self, _rng: &mut dyn RandomSource) -> DamageRoll {
        // `as` saturates, so absurd multipliers cap at u32::MAX
        let amount = (f64::from(self.base_power) * self.multiplier).floor() as u32;
        DamageRoll::plain(amount)
    }

    fn describe(&self) -> String {
        "Fireball".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use proptest::prelude::*;

    #[test]
    fn test_basic_attack() {
        let mut rng = ScriptedRandom::new();
        let effect = BasicAttack::new(20);
        assert_eq!(effect.compute_damage(&mut rng), DamageRoll::plain(20));
        assert_eq!(effect.describe(), "Basic Attack");
        // No randomness consumed
        assert_eq!(rng.uniforms_drawn(), 0);
    }

    #[test]
    fn test_fireball() {
        let mut rng = ScriptedRandom::new();
        let effect = Fireball::new(30, 1.5);
        assert_eq!(effect.compute_damage(&mut rng).amount, 45);
        assert_eq!(effect.describe(), "Fireball");

        // Odd powers round down
        assert_eq!(Fireball::new(21, 1.5).compute_damage(&mut rng).amount, 31);
        assert_eq!(Fireball::new(0, 1.5).compute_damage(&mut rng).amount, 0);
    }

    proptest! {
        #[test]
        fn fireball_is_floor_of_one_and_a_half(base in 0u32..1_000_000) {
            let mut rng = ScriptedRandom::new();
            let amount = Fireball::new(base, 1.5).compute_damage(&mut rng).amount;
            prop_assert_eq!(amount, base + base / 2);
        }
    }
}
