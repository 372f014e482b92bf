//! Text cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// In-memory cache for fetched text fields (changelogs, display names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextCacheConfig {
    /// Whether fetched text is memoized at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum number of entries in the cache.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// TTL for cached entries in seconds.
    #[serde(default = "default_ttl")]
    pub time_to_live_seconds: u64,
}

impl TextCacheConfig {
    /// TTL as a [`Duration`].
    pub fn time_to_live(&self) -> Duration {
        Duration::from_secs(self.time_to_live_seconds)
    }
}

impl Default for TextCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            max_capacity: default_max_capacity(),
            time_to_live_seconds: default_ttl(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_capacity() -> u64 {
    10000
}

fn default_ttl() -> u64 {
    300
}
