//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search depth in plies (default: 3). Every branch is explored fully
    /// to this depth; there is no pruning.
    pub depth: u32,

    /// Seed for the evaluation jitter RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3, seed: 42 }
    }
}

impl SearchConfig {
    /// Create a config with a custom depth. Panics if `depth` is zero.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        assert!(depth > 0, "search depth must be positive");
        self.depth = depth;
        self
    }

    /// Create a config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
