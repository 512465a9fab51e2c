//! Cache Entry Module
//!
//! Defines the structure for individual cached responses with TTL support.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Cache Entry ==
/// A single cached call result with its creation time and time-to-live.
///
/// Values are stored as JSON snapshots: every service result is a serde type,
/// so a snapshot can be handed back to callers of any concrete return type.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored result, as a JSON snapshot
    pub value: Value,
    /// Instant at which the entry was inserted
    pub created_at: Instant,
    /// Duration after which the entry is stale
    pub ttl: Duration,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry, stamping the current time.
    ///
    /// A zero TTL means "immediately stale" (useful for expiry tests), not
    /// "never expires"; effectively-infinite retention uses a very large TTL.
    pub fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at the given instant.
    ///
    /// Pure function of `created_at`, `ttl` and `now`: an entry is expired
    /// once the full TTL has elapsed (`now - created_at >= ttl`).
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }

    /// Checks whether the entry is stale right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    // == Introspection ==
    /// Seconds elapsed since insertion, measured at `now`.
    pub fn created_ago(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.created_at).as_secs_f64()
    }

    /// Seconds until expiry, measured at `now`; 0.0 once stale.
    pub fn expires_in(&self, now: Instant) -> f64 {
        let age = now.saturating_duration_since(self.created_at);
        self.ttl.saturating_sub(age).as_secs_f64()
    }

    /// Coarse human-readable description of the stored value's shape,
    /// e.g. `"array (12 items)"` or `"object (4 keys)"`.
    pub fn data_type(&self) -> String {
        match &self.value {
            Value::Array(items) => format!("array ({} items)", items.len()),
            Value::Object(map) => format!("object ({} keys)", map.len()),
            Value::String(_) => "string".to_string(),
            Value::Number(_) => "number".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Null => "null".to_string(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;

    #[test]
    fn test_entry_fresh_not_expired() {
        let entry = CacheEntry::new(json!("result"), Duration::from_secs(60));

        assert!(!entry.is_expired());
        assert_eq!(entry.value, json!("result"));
    }

    #[test]
    fn test_entry_zero_ttl_immediately_stale() {
        let entry = CacheEntry::new(json!(1), Duration::ZERO);

        // Any measurable elapsed time makes a zero-TTL entry stale.
        sleep(Duration::from_millis(5));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_is_expired_at_is_pure() {
        let entry = CacheEntry::new(json!(1), Duration::from_secs(10));
        let now = entry.created_at;

        assert!(!entry.is_expired_at(now + Duration::from_secs(9)));
        assert!(entry.is_expired_at(now + Duration::from_secs(10)));
        assert!(entry.is_expired_at(now + Duration::from_secs(11)));

        // Repeated evaluation at the same instant gives the same answer.
        assert!(entry.is_expired_at(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let entry = CacheEntry::new(json!(1), Duration::from_secs(10));

        // Expired exactly when the full TTL has elapsed, not a tick later.
        assert!(entry.is_expired_at(entry.created_at + entry.ttl));
    }

    #[test]
    fn test_created_ago_and_expires_in() {
        let entry = CacheEntry::new(json!(1), Duration::from_secs(100));
        let later = entry.created_at + Duration::from_secs(30);

        assert!((entry.created_ago(later) - 30.0).abs() < 0.001);
        assert!((entry.expires_in(later) - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_expires_in_saturates_at_zero() {
        let entry = CacheEntry::new(json!(1), Duration::from_secs(1));
        let long_after = entry.created_at + Duration::from_secs(60);

        assert_eq!(entry.expires_in(long_after), 0.0);
    }

    #[test]
    fn test_data_type_descriptions() {
        let cases = vec![
            (json!([1, 2, 3]), "array (3 items)"),
            (json!({"a": 1, "b": 2}), "object (2 keys)"),
            (json!("hello"), "string"),
            (json!(42), "number"),
            (json!(true), "bool"),
            (json!(null), "null"),
        ];

        for (value, expected) in cases {
            let entry = CacheEntry::new(value, Duration::from_secs(1));
            assert_eq!(entry.data_type(), expected);
        }
    }
}
