//! Cache Entry Module
//!
//! Defines a single cached upstream payload together with its expiry instant.

use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

// == Cache Entry ==
/// A cached JSON payload and the instant after which it must not be served.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, opaque to the proxy
    pub value: Value,
    /// Instant from which the entry is considered absent
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` from now.
    pub fn new(value: Value, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired as soon as the current time reaches `expires_at`,
    /// so a TTL that has fully elapsed never yields a stale read.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
