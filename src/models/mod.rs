//! Request and Response models for the proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! parsing query strings and serializing the proxy's own response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ExerciseEndpoint, ExerciseQuery, ExerciseType};
pub use responses::{ErrorResponse, HealthResponse};
