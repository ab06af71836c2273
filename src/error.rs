//! Error types for the proxy
//!
//! Provides unified error handling using thiserror. Every failure is turned
//! into an `{"error": ...}` JSON body that browsers are allowed to read.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::cors;
use crate::models::ErrorResponse;
use crate::upstream::UpstreamError;

// == Proxy Error Enum ==
/// Unified error type for the proxy handlers.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The exercise provider key is not set
    #[error("API key not configured")]
    MissingExerciseApiKey,

    /// The news provider key or base URL is not set
    #[error("Missing required environment variables")]
    MissingNewsConfig,

    /// The upstream call failed
    #[error("{}", .0.client_message())]
    Upstream(#[from] UpstreamError),
}

impl ProxyError {
    /// Status returned to the client: the upstream status when one was
    /// received, otherwise 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingExerciseApiKey | ProxyError::MissingNewsConfig => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ProxyError::Upstream(source) => source
                .status()
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, cors::error_headers(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy handlers.
pub type Result<T> = std::result::Result<T, ProxyError>;
