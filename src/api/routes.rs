//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{
    exercises_handler, health_handler, news_handler, preflight_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET|OPTIONS /api/exercises`
/// - `GET|OPTIONS /api/news`
/// - `GET /health`
///
/// CORS headers are set by the handlers themselves rather than a middleware
/// layer, since success, error and preflight responses each carry a
/// different subset.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/exercises",
            get(exercises_handler).options(preflight_handler),
        )
        .route("/api/news", get(news_handler).options(preflight_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache = CacheStore::default();
        let state = AppState::new(cache);
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_preflight_without_configuration() {
        for uri in ["/api/exercises", "/api/news"] {
            let response = create_test_app()
                .oneshot(
                    Request::builder()
                        .method("OPTIONS")
                        .uri(uri)
                        .header(header::ORIGIN, "http://localhost:5173")
                        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NO_CONTENT, "{}", uri);
            assert_eq!(response.headers()[header::ACCESS_CONTROL_MAX_AGE], "86400");
        }
    }

    #[tokio::test]
    async fn test_exercises_unconfigured() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/exercises?type=bodyPart&param=back")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/workouts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
