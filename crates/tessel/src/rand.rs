//! Random sources for line generation.
//!
//! Purpose
//! - Decouple construction from process-wide random state: callers hand in a
//!   `UniformSource`, so a fixed seed (or a scripted list of draws) gives a
//!   reproducible tessellation.
//!
//! Model
//! - A source yields uniform floats in [0, 1). Every `rand::Rng` is one.
//! - `ReplayToken` mixes a seed into a `StdRng`, same scheme for every caller.
//! - `ScriptedSource` replays fixed draws (tests, hand-built scenarios).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability: next uniform float in [0, 1).
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replay token to make draws reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeded generator for this token.
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer so nearby seeds land far apart.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed.wrapping_add(0x9e3779b97f4a7c15)))
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Values are taken as given; keep them in [0, 1) to stay inside the
/// sampling rectangle. An empty script yields 0.5 (the rectangle centre,
/// slope 0).
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            pos: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.pos += 1;
            return 0.5;
        }
        let u = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        u
    }
}
