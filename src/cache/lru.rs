//! LRU Tracker Module
//!
//! Tracks access recency of cache keys for least-recently-used eviction.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Maintains the recency order of cache keys.
///
/// Keys live in a VecDeque: front = most recently used, back = least
/// recently used. Access order is total (every get/set touches exactly one
/// key), so eviction is deterministic; a key never touched again drifts to
/// the back in its insertion order.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Keys ordered by recency of access
    order: VecDeque<String>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// An already-tracked key is moved to the front; a new key is added there.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Stops tracking a key. No-op if the key is unknown.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used key, if any.
    pub fn pop_lru(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek LRU ==
    /// Returns the least recently used key without removing it.
    pub fn peek_lru(&self) -> Option<&String> {
        self.order.back()
    }

    // == Clear ==
    /// Forgets all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
