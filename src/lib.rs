//! Fitness Proxy - A credential-hiding proxy for exercise and news APIs
//!
//! Forwards browser requests to the ExerciseDB and news providers, injecting
//! API keys server-side and caching exercise responses in memory.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
