//! # ams-api — Axum API Service for the AMS Stack
//!
//! A multi-tenant asset/maintenance-management backend. Every resource in
//! the registry gets the same five operations through one generic pipeline:
//!
//! | Method & path                | Operation                    |
//! |------------------------------|------------------------------|
//! | `POST /v1/{resource}`        | create                       |
//! | `GET /v1/{resource}`         | read (full collection)       |
//! | `GET /v1/{resource}/{id}`    | read one                     |
//! | `PUT /v1/{resource}/{id}`    | partial update (field merge) |
//! | `DELETE /v1/{resource}/{id}` | delete                       |
//!
//! Responses are always the `{message, code, data}` envelope, success or
//! failure. The persistence boundary is the `ams-store` Store capability;
//! entity schemas and validation live in `ams-core`.

pub mod config;
pub mod envelope;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Per-request deadline. Bounds every Store and transport call so a stuck
/// backend cannot hang a request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Request body size limit. Entities are small records; anything larger is
/// a client mistake.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Assemble the full application router.
///
/// Health probes are mounted beside the API routes and stay outside the
/// body-size and timeout layers — they must answer even when the rest of
/// the service is struggling.
pub fn app(state: AppState) -> Router {
    let api = routes::router()
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Liveness probe — 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the Store answers.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ready").into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "store health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "store unreachable").into_response()
        }
    }
}
