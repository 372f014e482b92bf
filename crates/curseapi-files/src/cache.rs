//! In-memory memoization of fetched text using the moka crate.

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use curseapi_core::config::TextCacheConfig;
use curseapi_core::result::AppResult;
use curseapi_core::types::{FileId, ProjectId};
use curseapi_entity::{File, TextKind};

use crate::source::TextFetcher;

/// Cache key: the file's identity plus the requested field.
type TextKey = (ProjectId, FileId, TextKind);

/// A [`TextFetcher`] decorator that remembers successful fetches.
///
/// Failures are never cached, so a later call retries the inner fetcher.
#[derive(Debug, Clone)]
pub struct CachedTextFetcher {
    /// The fetcher that does the actual work.
    inner: Arc<dyn TextFetcher>,
    /// The underlying moka cache.
    cache: Cache<TextKey, String>,
}

impl CachedTextFetcher {
    /// Wrap `inner` with a cache sized by `config`.
    pub fn new(inner: Arc<dyn TextFetcher>, config: &TextCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.time_to_live())
            .build();

        Self { inner, cache }
    }

    /// Wrap `inner` when caching is enabled, otherwise return it unchanged.
    pub fn wrap(inner: Arc<dyn TextFetcher>, config: &TextCacheConfig) -> Arc<dyn TextFetcher> {
        if config.enabled {
            Arc::new(Self::new(inner, config))
        } else {
            inner
        }
    }

    /// Drop the cached `kind` text of `file`.
    pub async fn invalidate(&self, file: &File, kind: TextKind) {
        self.cache
            .invalidate(&(file.project_id, file.id, kind))
            .await;
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

#[async_trait]
impl TextFetcher for CachedTextFetcher {
    async fn fetch_text(&self, file: &File, kind: TextKind) -> AppResult<String> {
        let key = (file.project_id, file.id, kind);

        if let Some(text) = self.cache.get(&key).await {
            debug!(file_id = %file.id, %kind, "Text cache hit");
            return Ok(text);
        }

        let text = self.inner.fetch_text(file, kind).await?;
        self.cache.insert(key, text.clone()).await;
        debug!(file_id = %file.id, %kind, "Text cached");
        Ok(text)
    }
}
