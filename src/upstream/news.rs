//! News provider client
//!
//! Fetches the fixed health top-headlines query. Responses are never cached.

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::{fetch_json, UpstreamError};
use crate::config::NewsApiConfig;

const KEY_HEADER: &str = "X-Api-Key";

/// Query parameters sent with every top-headlines request
pub const TOP_HEADLINES_QUERY: [(&str, &str); 3] = [
    ("category", "health"),
    ("language", "en"),
    ("pageSize", "10"),
];

/// Client for the news provider. Only exists when both key and base URL are set.
#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    pub fn new(http: Client, api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Builds a client from configuration, or `None` when key or URL is missing.
    pub fn from_config(http: Client, config: &NewsApiConfig) -> Option<Self> {
        let api_key = config.api_key.as_deref()?;
        let base_url = config.base_url.as_deref()?;
        Some(Self::new(http, api_key, base_url))
    }

    /// Fetches the current health headlines.
    pub async fn top_headlines(&self) -> Result<Value, UpstreamError> {
        let url = self.top_headlines_url()?;
        debug!("Fetching top headlines from {}", url);

        let request = self
            .http
            .get(url)
            .query(&TOP_HEADLINES_QUERY)
            .header(KEY_HEADER, &self.api_key);

        fetch_json(request).await
    }

    fn top_headlines_url(&self) -> Result<Url, UpstreamError> {
        let url = format!("{}/top-headlines", self.base_url.trim_end_matches('/'));
        Ok(Url::parse(&url)?)
    }
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
