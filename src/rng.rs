//! Injectable randomness.
//!
//! Shuffles and random picks go through [`RandomSource`] so game logic can
//! be driven by a scripted sequence in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random indices.
///
/// Object-safe on purpose: the app shell holds a `Box<dyn RandomSource>`.
pub trait RandomSource: Send {
    /// Return a uniformly distributed index in `0..bound`.
    ///
    /// `bound` must be at least 1.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Production source: the standard generator seeded from the OS.
pub struct StdRngSource {
    rng: StdRng,
}

impl StdRngSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for StdRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRngSource {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.pick(i + 1);
        items.swap(i, j);
    }
}
