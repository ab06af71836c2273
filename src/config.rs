//! Configuration Module
//!
//! Handles loading server and upstream provider settings from environment variables.
//!
//! Provider credentials are kept as `Option`s: a missing key is reported to the
//! client on each request rather than stopping the process.

use std::env;

/// Base URL of the ExerciseDB provider on RapidAPI
pub const DEFAULT_EXERCISE_API_URL: &str = "https://exercisedb.p.rapidapi.com";

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of cached exercise responses in seconds
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Optional timeout for upstream calls in seconds; `None` keeps the client default
    pub upstream_timeout: Option<u64>,
    /// Exercise provider settings
    pub exercise: ExerciseApiConfig,
    /// News provider settings
    pub news: NewsApiConfig,
}

/// Credentials and location of the exercise provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ExerciseApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

/// Credentials and location of the news provider.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NewsApiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Cached response lifetime in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `UPSTREAM_TIMEOUT` - Upstream request timeout in seconds (default: none)
    /// - `RAPIDAPI_KEY` - Exercise provider key
    /// - `EXERCISE_API_URL` - Exercise provider base URL (default: RapidAPI host)
    /// - `NEWS_API_KEY` - News provider key
    /// - `NEWS_API_URL` - News provider base URL
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parsed_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parsed_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            upstream_timeout: parsed_var("UPSTREAM_TIMEOUT"),
            exercise: ExerciseApiConfig {
                api_key: non_empty_var("RAPIDAPI_KEY"),
                base_url: non_empty_var("EXERCISE_API_URL")
                    .unwrap_or(defaults.exercise.base_url),
            },
            news: NewsApiConfig {
                api_key: non_empty_var("NEWS_API_KEY"),
                base_url: non_empty_var("NEWS_API_URL"),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: crate::cache::DEFAULT_TTL_SECS,
            cleanup_interval: 60,
            upstream_timeout: None,
            exercise: ExerciseApiConfig::default(),
            news: NewsApiConfig::default(),
        }
    }
}

impl Default for ExerciseApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_EXERCISE_API_URL.to_string(),
        }
    }
}

// Keys must never reach the logs, so Debug only reports whether one is set.
impl std::fmt::Debug for ExerciseApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExerciseApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl std::fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    non_empty_var(name).and_then(|v| v.trim().parse().ok())
}
