//! Configuration for the election engine.

use serde::{Deserialize, Serialize};

use crate::search::SearchStrategy;

/// Configuration for SplitCycle winner determination.
///
/// Worker count is an explicit, overridable parameter rather than an
/// implicit process-wide default, so tests can pin partition counts
/// and get reproducible scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionConfig {
    /// Number of concurrent evaluator workers.
    pub workers: usize,

    /// Strong path traversal used by the defeat evaluator.
    pub strategy: SearchStrategy,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            strategy: SearchStrategy::default(),
        }
    }
}

impl ElectionConfig {
    /// Creates the default configuration: hardware parallelism and
    /// depth-first search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the worker count (clamped to at least 1).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Overrides the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ElectionConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.strategy, SearchStrategy::DepthFirst);
    }

    #[test]
    fn test_with_workers_clamps_to_one() {
        let config = ElectionConfig::new().with_workers(0);
        assert_eq!(config.workers, 1);
    }

    #[test]
    fn test_config_serialization() {
        let config = ElectionConfig::new()
            .with_workers(4)
            .with_strategy(SearchStrategy::BreadthFirst);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ElectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
