//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Fixed-depth minimax configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of plies to look ahead (one ply = one placement plus
    /// rotation by one side). Must be at least 1.
    pub max_ply: u32,

    /// Seed for the tie-break RNG. `None` seeds from entropy, so tied
    /// choices differ between runs; a fixed seed makes move selection
    /// fully reproducible.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_ply: 2,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Set the lookahead depth.
    #[must_use]
    pub fn with_max_ply(mut self, max_ply: u32) -> Self {
        self.max_ply = max_ply;
        self
    }

    /// Set a fixed tie-break seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
