//! # Resource Routes
//!
//! One dynamic route family serves every registered resource:
//!
//! ```text
//! POST   /v1/{resource}        create
//! GET    /v1/{resource}        read (full collection)
//! GET    /v1/{resource}/{id}   read one
//! PUT    /v1/{resource}/{id}   partial update
//! DELETE /v1/{resource}/{id}   delete
//! ```
//!
//! The `{resource}` segment is resolved through the registry by URL slug;
//! an unknown segment is a 404 envelope. Handlers take the raw body bytes —
//! decoding belongs to the codec so its failures surface in the envelope,
//! not as framework rejections.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use crate::envelope::Envelope;
use crate::error::AppError;
use crate::pipeline;
use crate::state::AppState;

/// Build the resource router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/:resource", get(read).post(create))
        .route(
            "/v1/:resource/:id",
            get(read_one).put(update).delete(delete_one),
        )
}

async fn create(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    body: Bytes,
) -> Result<Envelope, AppError> {
    let descriptor = state.registry.resolve_route(&resource)?;
    pipeline::create(state.store.as_ref(), descriptor, &body).await
}

async fn read(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Result<Envelope, AppError> {
    let descriptor = state.registry.resolve_route(&resource)?;
    pipeline::read(state.store.as_ref(), descriptor).await
}

async fn read_one(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Envelope, AppError> {
    let descriptor = state.registry.resolve_route(&resource)?;
    pipeline::read_one(state.store.as_ref(), descriptor, &id).await
}

async fn update(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Envelope, AppError> {
    let descriptor = state.registry.resolve_route(&resource)?;
    pipeline::update(state.store.as_ref(), descriptor, &id, &body).await
}

async fn delete_one(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Envelope, AppError> {
    let descriptor = state.registry.resolve_route(&resource)?;
    pipeline::delete(state.store.as_ref(), descriptor, &id).await
}
