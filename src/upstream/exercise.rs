//! ExerciseDB client
//!
//! Fetches exercise data from the RapidAPI-hosted ExerciseDB, authenticating
//! with the `X-RapidAPI-Key` / `X-RapidAPI-Host` header pair.

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::{fetch_json, UpstreamError};
use crate::config::ExerciseApiConfig;
use crate::models::ExerciseEndpoint;

/// Host identifier RapidAPI expects alongside the key
pub const RAPIDAPI_HOST: &str = "exercisedb.p.rapidapi.com";

const KEY_HEADER: &str = "X-RapidAPI-Key";
const HOST_HEADER: &str = "X-RapidAPI-Host";

/// Client for the exercise provider. Only exists when a key is configured.
#[derive(Clone)]
pub struct ExerciseClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl ExerciseClient {
    pub fn new(http: Client, api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Builds a client from configuration, or `None` when no key is set.
    pub fn from_config(http: Client, config: &ExerciseApiConfig) -> Option<Self> {
        let api_key = config.api_key.as_deref()?;
        Some(Self::new(http, api_key, config.base_url.as_str()))
    }

    /// Fetches the payload behind `endpoint`.
    pub async fn fetch(&self, endpoint: &ExerciseEndpoint) -> Result<Value, UpstreamError> {
        let url = self.endpoint_url(endpoint)?;
        debug!("Fetching exercises from {}", url);

        let request = self
            .http
            .get(url)
            .header(KEY_HEADER, &self.api_key)
            .header(HOST_HEADER, RAPIDAPI_HOST);

        fetch_json(request).await
    }

    /// Joins the endpoint onto the base URL, percent-encoding each segment.
    fn endpoint_url(&self, endpoint: &ExerciseEndpoint) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::UnsupportedBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }
}

impl std::fmt::Debug for ExerciseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExerciseClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
