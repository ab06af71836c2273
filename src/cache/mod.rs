//! Cache Module
//!
//! Provides the in-memory response cache with fixed TTL expiration.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default lifetime of a cached upstream response, in seconds
pub const DEFAULT_TTL_SECS: u64 = 3600;
