//! Deterministic random number generation.
//!
//! All randomness in the engine (the evaluation jitter and the fallback
//! random placement) flows through `GameRng`, seeded from `SearchConfig`.
//! Same seed, same game: searches are reproducible for testing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for search tie-breaking and placement fallback.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Evaluation tie-break noise: a uniform integer in `[-amplitude, amplitude]`.
    pub fn jitter(&mut self, amplitude: i32) -> i32 {
        self.gen_range(-amplitude..amplitude + 1)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
