//! Cache Store Module
//!
//! Bounded response cache combining HashMap storage with LRU eviction and
//! lazy TTL expiry. One store instance is shared by every cached service
//! method of a client; see [`crate::cache::default_cache`] for the
//! process-wide default.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, LruTracker};
use crate::config::CacheConfig;

// == Cache Stats ==
/// Read-only snapshot of a store's state and hit/miss counters.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Current number of live entries
    pub size: usize,
    /// Maximum number of entries the store may hold
    pub max_size: usize,
    /// Whether the store-wide enable switch is on
    pub enabled: bool,
    /// Fallback TTL (seconds) applied when no per-entry TTL is given
    pub default_ttl_seconds: u64,
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups (absent or expired)
    pub misses: u64,
    /// Number of entries evicted under capacity pressure
    pub evictions: u64,
}

impl CacheStats {
    /// Cache hit rate: hits / (hits + misses), or 0.0 with no lookups yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Cache Entry Info ==
/// One itemized entry as reported by [`CacheStore::contents`].
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntryInfo {
    /// The cache key, e.g. `VocabularyService.get_concept(201826)`
    pub key: String,
    /// Coarse description of the stored value's shape
    pub data_type: String,
    /// Seconds since the entry was inserted
    pub created_ago: f64,
    /// Seconds until the entry goes stale (0.0 once stale)
    pub expires_in: f64,
}

// == Cache Store ==
/// Bounded mapping from call-signature key to cached response.
///
/// Expiry is lazy: a stale entry is dropped by the `get` that finds it, never
/// by a background sweeper. Capacity pressure evicts the least recently used
/// entry. Neither `get` nor `set` can fail; an absent or expired key is a
/// normal miss, not an error.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Recency tracker for eviction
    lru: LruTracker,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Fallback TTL for entries stored without an explicit one
    default_ttl: Duration,
    /// Store-wide enable switch
    enabled: bool,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a store with the given capacity and default TTL, enabled.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            max_entries,
            default_ttl,
            enabled: true,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Creates a store from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        let mut store = Self::new(config.max_entries, config.default_ttl);
        store.enabled = config.enabled;
        store
    }

    // == Get ==
    /// Looks up a key, returning a clone of the live value.
    ///
    /// An absent key is a miss. A present-but-expired entry is removed and
    /// also counts as a miss. A live entry is promoted to most recently used.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key).map(CacheEntry::is_expired) {
            None => {
                self.misses += 1;
                trace!(key, "cache miss");
                None
            }
            Some(true) => {
                trace!(key, "cache entry expired, dropping");
                self.entries.remove(key);
                self.lru.remove(key);
                self.misses += 1;
                None
            }
            Some(false) => {
                let value = self.entries.get(key).map(|entry| entry.value.clone());
                self.hits += 1;
                self.lru.touch(key);
                trace!(key, "cache hit");
                value
            }
        }
    }

    // == Set ==
    /// Inserts or replaces the entry for a key, stamping current time.
    ///
    /// `None` TTL falls back to the store's default. Replacing an existing
    /// key restamps it and treats it as freshly inserted (most recently
    /// used). Inserting a novel key at capacity first evicts LRU entries.
    pub fn set(&mut self, key: String, value: Value, ttl: Option<Duration>) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite {
            while self.entries.len() >= self.max_entries {
                match self.lru.pop_lru() {
                    Some(evicted) => {
                        debug!(key = %evicted, "evicting least recently used entry");
                        self.entries.remove(&evicted);
                        self.evictions += 1;
                    }
                    // Tracker and map can only disagree if a caller bypassed
                    // the store API; bail rather than loop forever.
                    None => break,
                }
            }
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key.clone(), CacheEntry::new(value, ttl));
        self.lru.touch(&key);
    }

    // == Clear ==
    /// Removes all entries. Capacity, counters and the enable switch stay.
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "clearing cache");
        self.entries.clear();
        self.lru.clear();
    }

    // == Stats ==
    /// Returns a read-only snapshot of the store.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            max_size: self.max_entries,
            enabled: self.enabled,
            default_ttl_seconds: self.default_ttl.as_secs(),
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    // == Contents ==
    /// Itemized view of every live entry, ages measured at call time.
    pub fn contents(&self) -> Vec<CacheEntryInfo> {
        let now = Instant::now();
        self.entries
            .iter()
            .map(|(key, entry)| CacheEntryInfo {
                key: key.clone(),
                data_type: entry.data_type(),
                created_ago: entry.created_ago(now),
                expires_in: entry.expires_in(now),
            })
            .collect()
    }

    // == Enable Switch ==
    /// Whether the store-wide switch is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips the store-wide switch. Existing entries are kept but ignored
    /// by the caching wrapper while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
