//! Parallel mapping configuration.

use serde::{Deserialize, Serialize};

/// Settings for bulk concurrent extraction over a file collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Maximum number of extractor invocations running at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl ParallelConfig {
    /// Create a configuration with the given bound. A bound of zero is raised to one.
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    /// The effective bound, never less than one.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    8
}
