//! Random number source abstraction.
//!
//! In production, this wraps an OS-seeded RNG. In tests, a seeded or
//! scripted implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait RandomSource: Send + Sync {
    /// Generate a uniformly distributed `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production source backed by `StdRng`, seeded from the operating system.
///
/// Every process gets a fresh seed, so consecutive runs never repeat.
#[derive(Debug)]
pub struct SystemRandom(StdRng);

impl SystemRandom {
    /// Create a new source seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}
