//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain HashMap model.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(3600);

// == Strategies ==
/// Generates cache keys shaped like the ones the exercise handler produces
fn cache_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}".prop_map(|s| format!("exercise_/exercises/name/{}", s))
}

/// Generates small JSON payloads
fn payload_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z ]{0,32}".prop_map(|s| json!(s)),
        prop::collection::vec("[a-z]{1,8}", 0..5).prop_map(|v| json!(v)),
        ("[a-z]{1,8}", any::<bool>()).prop_map(|(k, b)| {
            let mut object = serde_json::Map::new();
            object.insert(k, json!(b));
            Value::Object(object)
        }),
    ]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Value },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (cache_key_strategy(), payload_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        cache_key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Within the TTL window the store behaves exactly like a HashMap where
    // the last write for a key wins.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Value> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }

    // Hits and misses account for every lookup.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => store.set(key, value),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }
}

// TTL properties run on a paused tokio clock so no real time passes.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Once the TTL has elapsed, no previously written key is readable and the
    // cleanup pass empties the store.
    #[test]
    fn prop_nothing_survives_ttl(
        entries in prop::collection::vec((cache_key_strategy(), payload_strategy()), 1..30)
    ) {
        let (readable_before, readable_after, removed, expected) = tokio_test::block_on(async {
            tokio::time::pause();
            let mut store = CacheStore::new(TEST_TTL);
            for (key, value) in &entries {
                store.set(key.clone(), value.clone());
            }
            let expected = store.len();

            let readable_before = entries.iter().all(|(key, _)| store.get(key).is_some());
            tokio::time::advance(TEST_TTL).await;
            let removed = store.cleanup_expired();
            let readable_after = entries.iter().filter(|(key, _)| store.get(key).is_some()).count();

            (readable_before, readable_after, removed, expected)
        });

        prop_assert!(readable_before, "Every entry should be readable within the TTL");
        prop_assert_eq!(readable_after, 0, "No entry should be readable after the TTL");
        prop_assert_eq!(removed, expected, "Cleanup should purge every expired entry");
    }
}
