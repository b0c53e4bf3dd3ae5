//! HTTP gateway (Axum) for batch toxicity checks and comment retrieval.
//!
//! This module is primarily used by the `sift` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::{check_handler, comments_check_handler, comments_handler};
pub use state::HandlerState;

use sift::cache::{SIFT_STATUS_HEADER, SIFT_STATUS_HEALTHY, SIFT_STATUS_READY};
use sift::scoring::ToxicityScorer;

/// Builds the gateway router over `state`.
///
/// CORS is permissive: the browser extension posts from arbitrary page
/// origins.
pub fn create_router_with_state<S>(state: HandlerState<S>) -> Router
where
    S: ToxicityScorer + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/check", post(check_handler))
        .route("/v1/comments/{video_id}", get(comments_handler))
        .route("/v1/comments/{video_id}/check", post(comments_check_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub scorer: &'static str,
    pub comments: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SIFT_STATUS_HEADER,
        HeaderValue::from_static(SIFT_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<S>(State(state): State<HandlerState<S>>) -> Response
where
    S: ToxicityScorer + 'static,
{
    let comments_status = if state.fetcher.is_some() {
        SIFT_STATUS_READY
    } else {
        "disabled"
    };

    let components = ComponentStatus {
        http: SIFT_STATUS_READY,
        scorer: SIFT_STATUS_READY,
        comments: comments_status,
    };

    let mut headers = HeaderMap::new();
    headers.insert(SIFT_STATUS_HEADER, HeaderValue::from_static("ok"));

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
