//! Shared test doubles for the Lotto Picker.

mod clock;
mod rng;

pub use clock::FixedClock;
pub use rng::{MockRandom, SeededRandom, SequenceRandom};
