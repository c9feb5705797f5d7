//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, the API under /api/v1, body limit and request tracing.
///
/// The limit is enforced by the body extractors, so an oversized body surfaces as a
/// `JsonRejection` and is answered with a 413 `{"detail"}` whether or not `Content-Length` was sent.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;
    use tower::ServiceExt;

    fn offline_app(max_body_bytes: usize) -> Router {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://127.0.0.1:1/unreachable")
            .unwrap();
        app(AppState::new(pool), max_body_bytes)
    }

    fn register_body() -> String {
        serde_json::json!({
            "email": "big@example.com",
            "password": "x".repeat(100),
            "first_name": "Big",
            "last_name": "Body"
        })
        .to_string()
    }

    async fn assert_too_large(response: axum::response::Response) {
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "request body too large");
    }

    #[tokio::test]
    async fn oversized_body_with_length_is_413_json() {
        let body = register_body();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/register")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap();
        let response = offline_app(32).oneshot(request).await.unwrap();
        assert_too_large(response).await;
    }

    #[tokio::test]
    async fn oversized_body_without_length_is_413_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(register_body()))
            .unwrap();
        let response = offline_app(32).oneshot(request).await.unwrap();
        assert_too_large(response).await;
    }
}
