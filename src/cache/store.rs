//! Cache Store Module
//!
//! Key-value storage for upstream payloads where every entry shares one TTL.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL_SECS};

// == Cache Store ==
/// Response cache keyed by opaque strings.
///
/// There is no capacity bound and no explicit delete: entries leave the
/// store only when their TTL elapses, either lazily on `get` or through
/// `cleanup_expired`.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Lifetime applied to every inserted entry
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Set ==
    /// Stores a payload under `key`, overwriting any previous entry and
    /// resetting its expiry to now + TTL.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let entry = CacheEntry::new(value, self.ttl);
        self.entries.insert(key.into(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the payload for `key` if present and not expired.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        self.stats.record_miss();
        None
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());

        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_store_new() {
        let store = CacheStore::default();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new(HOUR);

        store.set("exercise_/exercises", json!([{"id": "0001"}]));
        let value = store.get("exercise_/exercises");

        assert_eq!(value, Some(json!([{"id": "0001"}])));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new(HOUR);
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(HOUR);

        store.set("key1", json!("value1"));
        store.set("key1", json!("value2"));

        assert_eq!(store.get("key1"), Some(json!("value2")));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(HOUR);
        store.set("key1", json!({"a": 1}));

        tokio::time::advance(HOUR - Duration::from_secs(1)).await;
        assert!(store.get("key1").is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(store.get("key1").is_none());
        assert!(store.is_empty(), "Expired entry should be purged on read");
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_overwrite_resets_expiry() {
        let mut store = CacheStore::new(HOUR);
        store.set("key1", json!(1));

        tokio::time::advance(Duration::from_secs(3000)).await;
        store.set("key1", json!(2));

        tokio::time::advance(Duration::from_secs(3000)).await;
        assert_eq!(store.get("key1"), Some(json!(2)));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(HOUR);

        store.set("key1", json!("value1"));
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_cleanup_expired() {
        let mut store = CacheStore::new(Duration::from_secs(10));

        store.set("key1", json!(1));
        tokio::time::advance(Duration::from_secs(5)).await;
        store.set("key2", json!(2));
        tokio::time::advance(Duration::from_secs(5)).await;

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("key2").is_some());
        assert_eq!(store.stats().expirations, 1);
    }
}
