//! API Module
//!
//! HTTP handlers and routing for the proxy.
//!
//! # Endpoints
//! - `GET /api/exercises` - Cached passthrough to the exercise provider
//! - `OPTIONS /api/exercises` - CORS preflight
//! - `GET /api/news` - Passthrough to the news provider
//! - `OPTIONS /api/news` - CORS preflight
//! - `GET /health` - Health check endpoint

pub mod cors;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
