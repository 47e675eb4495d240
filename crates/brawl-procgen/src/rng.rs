//! Seeded random number provider.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic integer source: the same seed yields the same roll
/// sequence across runs and platforms.
pub trait RandomProvider {
    fn reset(&mut self, seed: u64);

    /// Uniform integer in `[min_inclusive, max_exclusive)`.
    ///
    /// # Panics
    /// Panics if the range is empty.
    fn next_int(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32;
}

/// ChaCha8-backed default provider.
pub struct ChaChaRandomProvider {
    rng: ChaCha8Rng,
}

impl ChaChaRandomProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomProvider for ChaChaRandomProvider {
    fn reset(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn next_int(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        self.rng.gen_range(min_inclusive..max_exclusive)
    }
}
