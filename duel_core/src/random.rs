//! Injected randomness
//!
//! Everything random in a battle (attack-or-skill selection, critical rolls)
//! draws from a [`RandomSource`] handed in by the caller, so a battle is
//! reproducible from its seed or from a scripted sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the random draws a battle needs
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_uniform(&mut self) -> f64;

    /// Uniform index in `0..n`
    ///
    /// Panics if `n` is zero.
    fn next_choice(&mut self, n: usize) -> usize;
}

/// Seedable pseudo-random source backed by ChaCha8
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed this source was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn next_choice(&mut self, n: usize) -> usize {
        assert!(n > 0, "next_choice needs at least one option");
        self.rng.gen_range(0..n)
    }
}

/// Replays fixed sequences of draws, looping when a sequence runs out
///
/// Uniform draws and choice draws come from separate sequences, so a test
/// can script critical rolls independently of action selection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    uniforms: Vec<f64>,
    choices: Vec<usize>,
    next_uniform: usize,
    next_choice: usize,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values returned by `next_uniform`, in order
    pub fn with_uniforms(mut self, uniforms: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms = uniforms.into_iter().collect();
        assert!(
            self.uniforms.iter().all(|u| (0.0..1.0).contains(u)),
            "scripted uniforms must lie in [0, 1)"
        );
        self.next_uniform = 0;
        self
    }

    /// Values returned by `next_choice`, in order
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = usize>) -> Self {
        self.choices = choices.into_iter().collect();
        self.next_choice = 0;
        self
    }

    /// Number of uniform draws taken so far
    pub fn uniforms_drawn(&self) -> usize {
        self.next_uniform
    }

    /// Number of choice draws taken so far
    pub fn choices_drawn(&self) -> usize {
        self.next_choice
    }
}

impl RandomSource for ScriptedRandom {
    fn next_uniform(&mut self) -> f64 {
        assert!(!self.uniforms.is_empty(), "no scripted uniform values");
        let value = self.uniforms[self.next_uniform % self.uniforms.len()];
        self.next_uniform += 1;
        value
    }

    fn next_choice(&mut self, n: usize) -> usize {
        assert!(n > 0, "next_choice needs at least one option");
        assert!(!self.choices.is_empty(), "no scripted choice values");
        let value = self.choices[self.next_choice % self.choices.len()];
        assert!(value < n, "scripted choice {value} out of range 0..{n}");
        self.next_choice += 1;
        value
    }
}
