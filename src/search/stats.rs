//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one minimax run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior nodes whose children were enumerated.
    pub nodes_expanded: u32,

    /// Leaves scored by the heuristic (depth limit or terminal).
    pub leaves_evaluated: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// New empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Leaf evaluations per second.
    #[must_use]
    pub fn leaves_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.leaves_evaluated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
