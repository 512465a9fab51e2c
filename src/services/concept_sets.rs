//! Concept Set Service
//!
//! CRUD over `/conceptset/` plus item listing.

use std::sync::Arc;

use serde_json::json;

use crate::cache::{fetch_with_cache, CacheKey, CachePolicy, SharedCache};
use crate::error::Result;
use crate::http::HttpExecutor;
use crate::models::{ConceptSet, ConceptSetItem};

const GET_POLICY: CachePolicy = CachePolicy::ttl(600);

/// Service for `/conceptset/` endpoints.
#[derive(Debug, Clone)]
pub struct ConceptSetService {
    http: Arc<HttpExecutor>,
    cache: SharedCache,
}

impl ConceptSetService {
    pub(crate) fn new(http: Arc<HttpExecutor>, cache: SharedCache) -> Self {
        Self { http, cache }
    }

    /// Lists all concept sets. Uncached: the listing is the usual way to
    /// discover freshly created sets.
    pub async fn list(&self) -> Result<Vec<ConceptSet>> {
        let data = self.http.get("/conceptset/").await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Fetches one concept set by id.
    pub async fn get(&self, id: i64, force_refresh: bool) -> Result<ConceptSet> {
        let key = CacheKey::for_method("ConceptSetService.get").arg(id).build();
        let http = self.http.clone();

        fetch_with_cache(&self.cache, GET_POLICY, key, force_refresh, || async move {
            let data = http.get(&format!("/conceptset/{}", id)).await?;
            Ok(serde_json::from_value(data)?)
        })
        .await
    }

    /// Creates an empty concept set with the given name.
    pub async fn create(&self, name: &str) -> Result<ConceptSet> {
        let data = self.http.post("/conceptset/", &json!({ "name": name })).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Lists the items of a concept set.
    pub async fn items(&self, id: i64) -> Result<Vec<ConceptSetItem>> {
        let data = self.http.get(&format!("/conceptset/{}/items", id)).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Deletes a concept set.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.http.delete(&format!("/conceptset/{}", id)).await
    }
}
