//! Cache Policy Module
//!
//! The caching wrapper applied by service methods: explicit function
//! composition rather than dynamic interception. A method configures a
//! [`CachePolicy`] once and routes each call through [`fetch_with_cache`],
//! which consults the shared store before falling back to the real fetch.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{lock_store, SharedCache};
use crate::error::Result;

// == Cache Policy ==
/// Per-method caching configuration: required TTL, optional opt-out.
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    /// How long results of this method stay fresh
    pub ttl: Duration,
    /// Per-method override; a disabled policy never touches the store
    pub enabled: bool,
}

impl CachePolicy {
    /// Policy with the given TTL in seconds, enabled.
    pub const fn ttl(secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(secs),
            enabled: true,
        }
    }

    /// Turns this policy off; calls behave as if undecorated.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

// == Fetch With Cache ==
/// Serves a call from the cache, or runs `fetch` and stores its result.
///
/// - A disabled policy, a disabled store, or `force_refresh` routes straight
///   to `fetch` with no cache read and no cache write; an existing entry for
///   the key is left untouched either way.
/// - Otherwise a live entry for `key` is deserialized and returned; on a
///   miss, `fetch` runs and its successful result is stored under the policy
///   TTL. Fetch errors propagate unchanged and are never cached.
///
/// The store mutex is only held for the lookup and the insert, never across
/// an await point; concurrent callers missing on the same key may both run
/// `fetch`, with the later insert winning.
pub async fn fetch_with_cache<T, F, Fut>(
    cache: &SharedCache,
    policy: CachePolicy,
    key: String,
    force_refresh: bool,
    fetch: F,
) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let store_enabled = lock_store(cache).is_enabled();
    if !policy.enabled || !store_enabled || force_refresh {
        debug!(
            key = %key,
            force_refresh,
            policy_enabled = policy.enabled,
            store_enabled,
            "cache bypassed"
        );
        return fetch().await;
    }

    if let Some(value) = lock_store(cache).get(&key) {
        match serde_json::from_value::<T>(value) {
            Ok(result) => {
                debug!(key = %key, "served from cache");
                return Ok(result);
            }
            // A snapshot that no longer matches the method's return type is
            // treated as a plain miss and refetched.
            Err(err) => warn!(key = %key, %err, "stale cache snapshot shape, refetching"),
        }
    }

    let result = fetch().await?;

    match serde_json::to_value(&result) {
        Ok(value) => lock_store(cache).set(key, value, Some(policy.ttl)),
        Err(err) => warn!(key = %key, %err, "result not serializable, returning uncached"),
    }

    Ok(result)
}
