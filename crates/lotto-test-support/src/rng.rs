//! Test RNGs — deterministic `RandomSource` implementations for tests.

use lotto_core::rng::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A no-op source that always returns `min`. Suitable for tests that do not
/// depend on specific random values.
#[derive(Debug)]
pub struct MockRandom;

impl RandomSource for MockRandom {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// A source that returns values from a predetermined sequence, ignoring the
/// requested bounds. Panics if the sequence is exhausted. Used in tests that
/// need specific, repeatable picks.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRandom {
    /// Create a new `SequenceRandom` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceRandom {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

/// A real uniform source with a fixed seed, for statistical tests that must
/// not flake.
#[derive(Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Create a new source from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}
