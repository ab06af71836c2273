//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, warn};

use super::cors;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{ExerciseQuery, HealthResponse};
use crate::upstream::{build_http_client, ExerciseClient, NewsClient};

/// Application state shared across all handlers.
///
/// The cache is created once at startup and shared by reference. A provider
/// client is `None` when its credentials are not configured.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<CacheStore>>,
    pub exercises: Option<Arc<ExerciseClient>>,
    pub news: Option<Arc<NewsClient>>,
}

impl AppState {
    /// Creates a new AppState with the given cache and no provider clients.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            exercises: None,
            news: None,
        }
    }

    pub fn with_exercise_client(mut self, client: ExerciseClient) -> Self {
        self.exercises = Some(Arc::new(client));
        self
    }

    pub fn with_news_client(mut self, client: NewsClient) -> Self {
        self.news = Some(Arc::new(client));
        self
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails only if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let timeout = config.upstream_timeout.map(std::time::Duration::from_secs);
        let http = build_http_client(timeout)?;
        let cache = CacheStore::new(std::time::Duration::from_secs(config.cache_ttl));

        let mut state = Self::new(cache);
        match ExerciseClient::from_config(http.clone(), &config.exercise) {
            Some(client) => state = state.with_exercise_client(client),
            None => warn!("RAPIDAPI_KEY is not set; /api/exercises will answer 500"),
        }
        match NewsClient::from_config(http, &config.news) {
            Some(client) => state = state.with_news_client(client),
            None => warn!("NEWS_API_KEY or NEWS_API_URL is not set; /api/news will answer 500"),
        }
        Ok(state)
    }
}

/// Handler for GET /api/exercises
///
/// Resolves `type`/`param` to an upstream endpoint and serves it from the
/// cache when possible. Concurrent misses on the same key each call upstream.
///
/// The query string is parsed by hand so that no query ever fails with a bare
/// extractor rejection; repeated keys keep their first value.
pub async fn exercises_handler(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response> {
    let client = state
        .exercises
        .as_deref()
        .ok_or(ProxyError::MissingExerciseApiKey)?;

    let query = ExerciseQuery::from_query_string(raw_query.as_deref().unwrap_or_default());
    let endpoint = query.endpoint();
    let cache_key = endpoint.cache_key();

    // Write lock: a lookup updates stats and may purge an expired entry
    let cached = state.cache.write().await.get(&cache_key);
    if let Some(data) = cached {
        debug!("Cache hit for {}", cache_key);
        return Ok(cors::ok_json(data));
    }
    debug!("Cache miss for {}", cache_key);

    let data = client.fetch(&endpoint).await.map_err(|err| {
        error!("Exercise API error for {}: {:?}", endpoint, err);
        ProxyError::from(err)
    })?;

    state.cache.write().await.set(cache_key, data.clone());

    Ok(cors::ok_json(data))
}

/// Handler for GET /api/news
///
/// Always reaches upstream; headlines are not cached.
pub async fn news_handler(State(state): State<AppState>) -> Result<Response> {
    let client = state.news.as_deref().ok_or(ProxyError::MissingNewsConfig)?;

    let data = client.top_headlines().await.map_err(|err| {
        error!("News API error: {:?}", err);
        ProxyError::from(err)
    })?;

    Ok(cors::ok_json(data))
}

/// Handler for OPTIONS on both proxied resources.
///
/// Answers independently of configuration.
pub async fn preflight_handler() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, cors::preflight_headers())
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.cache.read().await.stats();
    Json(HealthResponse::healthy(&stats))
}
