//! Sources Service
//!
//! Access to the CDM sources registered with WebAPI.

use std::sync::Arc;

use crate::cache::{fetch_with_cache, CacheKey, CachePolicy, SharedCache};
use crate::error::Result;
use crate::http::HttpExecutor;
use crate::models::Source;

/// Source registrations rarely change at runtime.
const SOURCES_POLICY: CachePolicy = CachePolicy::ttl(1800);

/// Service for `/source/` endpoints.
#[derive(Debug, Clone)]
pub struct SourcesService {
    http: Arc<HttpExecutor>,
    cache: SharedCache,
}

impl SourcesService {
    pub(crate) fn new(http: Arc<HttpExecutor>, cache: SharedCache) -> Self {
        Self { http, cache }
    }

    /// Lists all registered CDM sources.
    pub async fn list(&self, force_refresh: bool) -> Result<Vec<Source>> {
        let key = CacheKey::for_method("SourcesService.list").build();
        let http = self.http.clone();

        fetch_with_cache(&self.cache, SOURCES_POLICY, key, force_refresh, || async move {
            let data = http.get("/source/sources").await?;
            Ok(serde_json::from_value(data)?)
        })
        .await
    }

    /// Finds a source by its key, if registered.
    pub async fn by_key(&self, source_key: &str) -> Result<Option<Source>> {
        let sources = self.list(false).await?;
        Ok(sources.into_iter().find(|s| s.source_key == source_key))
    }
}
