//! WebAPI Client
//!
//! Top-level entry point wiring the HTTP executor, the response cache and
//! the per-area services together.

use std::sync::Arc;

use crate::cache::{default_cache, lock_store, CacheContents, CacheStats, SharedCache};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpExecutor;
use crate::services::{
    CohortService, ConceptSetService, InfoService, JobsService, SourcesService, VocabularyService,
};

// == WebApi Client ==
/// Typed client for an OHDSI WebAPI instance.
///
/// By default every client in the process shares one response cache, so two
/// clients pointed at the same instance benefit from each other's calls; use
/// [`WebApiClient::with_cache`] to give a client a private store instead.
#[derive(Debug, Clone)]
pub struct WebApiClient {
    cache: SharedCache,
    /// `/info` endpoint
    pub info: InfoService,
    /// `/source/` endpoints
    pub sources: SourcesService,
    /// `/vocabulary/` endpoints
    pub vocabulary: VocabularyService,
    /// `/conceptset/` endpoints
    pub concept_sets: ConceptSetService,
    /// `/cohortdefinition/` endpoints
    pub cohorts: CohortService,
    /// `/job/` endpoints
    pub jobs: JobsService,
}

impl WebApiClient {
    // == Constructors ==
    /// Creates a client for the given base URL with default settings and the
    /// process-wide shared cache.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Creates a client from full configuration, using the shared cache.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::build(config, default_cache())
    }

    /// Creates a client with a private cache store.
    pub fn with_cache(config: ClientConfig, cache: SharedCache) -> Result<Self> {
        Self::build(config, cache)
    }

    fn build(config: ClientConfig, cache: SharedCache) -> Result<Self> {
        let http = Arc::new(HttpExecutor::new(&config)?);

        Ok(Self {
            info: InfoService::new(http.clone(), cache.clone()),
            sources: SourcesService::new(http.clone(), cache.clone()),
            vocabulary: VocabularyService::new(http.clone(), cache.clone()),
            concept_sets: ConceptSetService::new(http.clone(), cache.clone()),
            cohorts: CohortService::new(http.clone(), cache.clone()),
            jobs: JobsService::new(http),
            cache,
        })
    }

    // == Cache Management ==
    /// Empties this client's cache store.
    pub fn clear_cache(&self) {
        lock_store(&self.cache).clear();
    }

    /// Stats snapshot of this client's cache store.
    pub fn cache_stats(&self) -> CacheStats {
        lock_store(&self.cache).stats()
    }

    /// Itemized contents of this client's cache store.
    pub fn cache_contents(&self) -> CacheContents {
        let store = lock_store(&self.cache);
        CacheContents {
            entries: store.contents(),
            stats: store.stats(),
        }
    }
}
