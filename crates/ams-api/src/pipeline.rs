//! # Generic CRUD Pipeline
//!
//! The five operations every registered resource shares. Each takes the
//! Store capability and a resource descriptor, runs one pass with no
//! retries, and produces exactly one [`Envelope`] — the error type renders
//! as one too, so every code path responds.
//!
//! Operations are independent: nothing is shared between requests except
//! the Store itself. The Update flow's read-then-write is not transactional;
//! concurrent updates to the same id are last-writer-wins.

use axum::http::StatusCode;
use serde_json::Value;

use ams_core::require_identifier;
use ams_store::Store;

use crate::envelope::Envelope;
use crate::error::AppError;
use crate::registry::ResourceDescriptor;

/// Create a new entity from the request body.
///
/// Decode onto a fresh zero-valued instance, validate, insert. No prior
/// existence check — uniqueness is the store's concern.
pub async fn create(
    store: &dyn Store,
    descriptor: &ResourceDescriptor,
    body: &[u8],
) -> Result<Envelope, AppError> {
    let entity = descriptor.merge(&descriptor.new_instance(), body)?;
    descriptor.validate(&entity)?;

    let created = store.create(descriptor.name(), entity).await?;
    tracing::debug!(resource = descriptor.name(), "created");
    Ok(Envelope::with_data(
        StatusCode::OK,
        format!("New {} created", descriptor.name()),
        created,
    ))
}

/// Return the resource's full collection.
///
/// Unbounded by design: the legacy contract has no pagination or filtering
/// on list reads.
pub async fn read(
    store: &dyn Store,
    descriptor: &ResourceDescriptor,
) -> Result<Envelope, AppError> {
    let rows = store.find(descriptor.name()).await?;
    let mut collection = descriptor.new_collection();
    collection.extend(rows);
    Ok(Envelope::with_data(
        StatusCode::OK,
        format!("{} read", descriptor.name()),
        Value::Array(collection),
    ))
}

/// Return a single entity by identifier.
pub async fn read_one(
    store: &dyn Store,
    descriptor: &ResourceDescriptor,
    id: &str,
) -> Result<Envelope, AppError> {
    let id = require_identifier(id)?;
    let row = store.first(descriptor.name(), id).await?;
    Ok(Envelope::with_data(
        StatusCode::OK,
        format!("ID {} read from {}", id, descriptor.name()),
        row,
    ))
}

/// Apply a partial update to an existing entity.
///
/// The stored entity is fetched first; payload fields are merged over it
/// (absent fields keep their current values), the result is validated with
/// the store-assigned fields excluded, then written back.
pub async fn update(
    store: &dyn Store,
    descriptor: &ResourceDescriptor,
    id: &str,
    body: &[u8],
) -> Result<Envelope, AppError> {
    let id = require_identifier(id)?;
    let current = store.first(descriptor.name(), id).await?;

    let merged = descriptor.merge(&current, body)?;
    descriptor.validate_partial(&merged)?;

    let stored = store.update(descriptor.name(), id, merged).await?;
    tracing::debug!(resource = descriptor.name(), id, "updated");
    Ok(Envelope::with_data(
        StatusCode::OK,
        format!("ID {} updated from {}", id, descriptor.name()),
        stored,
    ))
}

/// Delete an entity by identifier.
///
/// No prior existence read; deleting an absent id is whatever the store
/// reports (both shipped stores treat it as a no-op).
pub async fn delete(
    store: &dyn Store,
    descriptor: &ResourceDescriptor,
    id: &str,
) -> Result<Envelope, AppError> {
    let id = require_identifier(id)?;
    store.delete(descriptor.name(), id).await?;
    tracing::debug!(resource = descriptor.name(), id, "deleted");
    Ok(Envelope::message_only(
        StatusCode::OK,
        format!("ID {} deleted from {}", id, descriptor.name()),
    ))
}
