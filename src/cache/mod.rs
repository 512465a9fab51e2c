//! Cache Module
//!
//! In-process response caching for WebAPI calls: TTL expiry, LRU eviction,
//! deterministic call-signature keys and a per-method caching policy.
//!
//! A single process-wide default store backs every client unless a private
//! store is injected; the free functions at the bottom operate on that
//! default instance.

mod entry;
mod key;
mod lru;
mod policy;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::CacheConfig;

// Re-export public types
pub use entry::CacheEntry;
pub use key::{get_cache_key, CacheKey, KeyArg};
pub use lru::LruTracker;
pub use policy::{fetch_with_cache, CachePolicy};
pub use store::{CacheEntryInfo, CacheStats, CacheStore};

// == Shared Store ==
/// Handle to a store shared by concurrent callers.
///
/// The mutex keeps recency ordering and the capacity bound internally
/// consistent under parallel access; cache operations are in-memory and
/// effectively instantaneous, so the lock is never held across an await.
pub type SharedCache = Arc<Mutex<CacheStore>>;

/// Creates a fresh shared store with the given capacity and default TTL.
pub fn new_shared_cache(max_entries: usize, default_ttl: Duration) -> SharedCache {
    Arc::new(Mutex::new(CacheStore::new(max_entries, default_ttl)))
}

/// Locks a shared store, recovering from a poisoned mutex.
///
/// A panic in another thread mid-operation can at worst leave a recency
/// entry stale, which the store tolerates; cache operations themselves must
/// never fail, so the poison flag is discarded.
pub fn lock_store(cache: &SharedCache) -> MutexGuard<'_, CacheStore> {
    match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// == Process-Wide Default Store ==
/// The default store, configured from the environment on first use.
static GLOBAL_CACHE: Lazy<SharedCache> = Lazy::new(|| {
    let config = CacheConfig::from_env();
    Arc::new(Mutex::new(CacheStore::from_config(&config)))
});

/// Returns a handle to the process-wide default store.
pub fn default_cache() -> SharedCache {
    GLOBAL_CACHE.clone()
}

// == Cache Contents ==
/// Itemized diagnostic view of a store: entries plus a stats snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct CacheContents {
    /// One record per live entry
    pub entries: Vec<CacheEntryInfo>,
    /// Stats snapshot taken at the same time
    pub stats: CacheStats,
}

// == Free Functions ==
/// Stats snapshot of the process-wide default store.
pub fn cache_stats() -> CacheStats {
    lock_store(&GLOBAL_CACHE).stats()
}

/// Itemized contents of the process-wide default store.
pub fn cache_contents() -> CacheContents {
    let store = lock_store(&GLOBAL_CACHE);
    CacheContents {
        entries: store.contents(),
        stats: store.stats(),
    }
}

/// Empties the process-wide default store.
pub fn clear_cache() {
    lock_store(&GLOBAL_CACHE).clear();
}
