//! Info Service
//!
//! Access to the WebAPI instance's version information.

use std::sync::Arc;

use crate::cache::{fetch_with_cache, CacheKey, CachePolicy, SharedCache};
use crate::error::Result;
use crate::http::HttpExecutor;
use crate::models::WebApiInfo;

/// Instance info changes only on redeploys; a short TTL still catches those.
const INFO_POLICY: CachePolicy = CachePolicy::ttl(300);

/// Service for `GET /info`.
#[derive(Debug, Clone)]
pub struct InfoService {
    http: Arc<HttpExecutor>,
    cache: SharedCache,
}

impl InfoService {
    pub(crate) fn new(http: Arc<HttpExecutor>, cache: SharedCache) -> Self {
        Self { http, cache }
    }

    /// Fetches version information for the WebAPI instance.
    pub async fn get(&self, force_refresh: bool) -> Result<WebApiInfo> {
        let key = CacheKey::for_method("InfoService.get").build();
        let http = self.http.clone();

        fetch_with_cache(&self.cache, INFO_POLICY, key, force_refresh, || async move {
            let data = http.get("/info").await?;
            Ok(serde_json::from_value(data)?)
        })
        .await
    }

    /// The instance's version string, if it reports one.
    pub async fn version(&self) -> Result<Option<String>> {
        Ok(self.get(false).await?.version)
    }
}
