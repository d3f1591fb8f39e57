//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during the most recent search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated, including cache hits.
    pub nodes_visited: u64,

    /// Positions answered from the transposition table.
    pub cache_hits: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Share of visited positions served from cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes_visited as f64
        }
    }

    /// Positions evaluated per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 1000;
        stats.cache_hits = 250;
        stats.time_us = 1_000_000;

        assert_eq!(stats.hit_rate(), 0.25);
        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 100;
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }
}
