//! Upstream Module
//!
//! HTTP clients for the exercise and news providers. Both treat the provider
//! as an opaque JSON producer: successful bodies are passed through untouched.

mod exercise;
mod news;

pub use exercise::{ExerciseClient, RAPIDAPI_HOST};
pub use news::NewsClient;

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use thiserror::Error;

// == Upstream Error ==
/// Failure while talking to an upstream provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The provider answered with a non-2xx status
    #[error("Request failed with status code {}", .status.as_u16())]
    Status {
        status: StatusCode,
        /// `message` field of the provider's error body, if any
        message: Option<String>,
    },

    /// Transport failure or undecodable body
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL could not be parsed
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry a path
    #[error("Upstream URL cannot be used as a base: {0}")]
    UnsupportedBaseUrl(String),
}

impl UpstreamError {
    /// HTTP status received from the provider, if the call got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            UpstreamError::Request(err) => err.status(),
            _ => None,
        }
    }

    /// Human-readable message supplied by the provider itself.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            UpstreamError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Message shown to the client: the provider's own message when it sent
    /// one, otherwise this error's text. Every variant displays non-empty
    /// text, so no further fallback is needed.
    pub fn client_message(&self) -> String {
        match self.upstream_message() {
            Some(message) => message.to_string(),
            None => self.to_string(),
        }
    }
}

/// Builds the shared HTTP client used for every provider.
pub fn build_http_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Sends `request` and decodes the body as JSON, mapping non-2xx answers to
/// `UpstreamError::Status`.
async fn fetch_json(request: RequestBuilder) -> Result<Value, UpstreamError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(error_message);
        return Err(UpstreamError::Status { status, message });
    }

    Ok(response.json::<Value>().await?)
}

/// Extracts the `message` string from a provider error body.
fn error_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
