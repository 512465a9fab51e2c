//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the store's structural invariants and the key
//! builder's determinism under arbitrary inputs.

use proptest::prelude::*;
use serde_json::json;
use std::time::Duration;

use crate::cache::{CacheKey, CacheStore, KeyArg};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 8;
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Generates cache-key-shaped strings
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,24}".prop_map(|s| format!("Service.m(\"{}\")", s))
}

/// Generates a sequence of store operations
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: i64 },
    Get { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<i64>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, the store never exceeds its capacity
    // and the recency tracker never disagrees with the entry count.
    #[test]
    fn prop_capacity_bound_holds(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, Duration::from_secs(TEST_DEFAULT_TTL));

        for op in ops {
            match op {
                CacheOp::Set { key, value } => store.set(key, json!(value), None),
                CacheOp::Get { key } => { store.get(&key); }
                CacheOp::Clear => store.clear(),
            }
            prop_assert!(store.len() <= TEST_MAX_ENTRIES, "capacity exceeded");
            prop_assert_eq!(store.stats().size, store.len());
        }
    }

    // Storing a value and reading it back before expiry returns the exact
    // stored value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in any::<i64>()) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, Duration::from_secs(TEST_DEFAULT_TTL));

        store.set(key.clone(), json!(value), None);

        prop_assert_eq!(store.get(&key), Some(json!(value)));
    }

    // Overwriting a key leaves exactly one entry holding the newest value.
    #[test]
    fn prop_overwrite_semantics(key in key_strategy(), v1 in any::<i64>(), v2 in any::<i64>()) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, Duration::from_secs(TEST_DEFAULT_TTL));

        store.set(key.clone(), json!(v1), None);
        store.set(key.clone(), json!(v2), None);

        prop_assert_eq!(store.len(), 1);
        prop_assert_eq!(store.get(&key), Some(json!(v2)));
    }

    // Hit/miss counters reflect exactly the lookups that occurred.
    #[test]
    fn prop_counter_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, Duration::from_secs(TEST_DEFAULT_TTL));
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => store.set(key, json!(value), None),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Clear => store.clear(),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
    }

    // The most recently read key survives a single capacity eviction.
    #[test]
    fn prop_mru_survives_eviction(seed in any::<i64>()) {
        let mut store = CacheStore::new(3, Duration::from_secs(TEST_DEFAULT_TTL));

        store.set("a".to_string(), json!(seed), None);
        store.set("b".to_string(), json!(seed), None);
        store.set("c".to_string(), json!(seed), None);
        store.get("a");
        store.set("d".to_string(), json!(seed), None);

        prop_assert!(store.get("a").is_some(), "MRU key was evicted");
        prop_assert!(store.get("b").is_none(), "LRU key survived");
    }

    // Keys are deterministic: same inputs give the same key, kwargs order
    // never matters, positional order always does.
    #[test]
    fn prop_key_determinism(
        a in "[a-z0-9]{1,12}",
        b in "[a-z0-9]{1,12}",
        ka in any::<i64>(),
        kb in any::<i64>(),
    ) {
        let sorted = CacheKey::for_method("S.m")
            .arg(a.as_str())
            .kwarg("alpha", ka)
            .kwarg("beta", kb)
            .build();
        let reversed = CacheKey::for_method("S.m")
            .arg(a.as_str())
            .kwarg("beta", kb)
            .kwarg("alpha", ka)
            .build();
        prop_assert_eq!(&sorted, &reversed);

        if a != b {
            let ab = CacheKey::for_method("S.m").arg(a.as_str()).arg(b.as_str()).build();
            let ba = CacheKey::for_method("S.m").arg(b.as_str()).arg(a.as_str()).build();
            prop_assert_ne!(ab, ba);
        }
    }

    // Any JSON value renders into a key without panicking.
    #[test]
    fn prop_key_rendering_never_fails(n in any::<i64>(), s in "[ -~]{0,32}") {
        let key = CacheKey::for_method("S.m")
            .arg(KeyArg::json(&json!({"n": n, "s": s})))
            .build();
        prop_assert!(key.starts_with("S.m("));
        prop_assert!(key.ends_with(')'));
    }
}
