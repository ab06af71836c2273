//! Response DTOs for the proxy API
//!
//! Upstream payloads are passed through as `serde_json::Value`; only the
//! proxy's own bodies are modelled here.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Entries currently held, including ones awaiting cleanup
    pub cache_entries: usize,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Entries dropped after their TTL elapsed
    pub cache_expirations: u64,
    /// hits / (hits + misses), 0.0 before the first lookup
    pub cache_hit_rate: f64,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(stats: &CacheStats) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache_entries: stats.total_entries,
            cache_hits: stats.hits,
            cache_misses: stats.misses,
            cache_expirations: stats.expirations,
            cache_hit_rate: stats.hit_rate(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialize() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            expirations: 4,
            total_entries: 2,
        };
        let resp = HealthResponse::healthy(&stats);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["cache_entries"], 2);
        assert_eq!(json["cache_hits"], 3);
        assert_eq!(json["cache_misses"], 1);
        assert_eq!(json["cache_expirations"], 4);
        assert_eq!(json["cache_hit_rate"], 0.75);
        assert!(chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("API key not configured");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"API key not configured"}"#);
    }
}
