//! Minimax search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Root candidates evaluated.
    pub candidates: u32,

    /// Positions visited, root candidates included.
    pub nodes_visited: u64,

    /// Terminal or depth-limited positions scored.
    pub leaves: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate visited positions per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
