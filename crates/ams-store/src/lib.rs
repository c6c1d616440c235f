//! # ams-store — Persistence Capability
//!
//! The [`Store`] trait is the service's only persistence boundary: five row
//! operations plus a health probe, all keyed by table name. Rows are JSON
//! objects; the store owns the `ID`, `CreatedAt`, and `UpdatedAt` fields and
//! stamps them on create/update. Callers never see soft-deleted rows — a
//! deleted record is simply not found.
//!
//! Two implementations ship:
//!
//! - [`MemoryStore`] — thread-safe in-memory tables. Used when no database
//!   is configured, and by every test.
//! - [`PgStore`] — PostgreSQL via sqlx, one table per resource with a JSONB
//!   payload column and store-owned identity/timestamp columns. Deletes are
//!   soft (`deleted_at`).
//!
//! Identifier tokens arrive as raw strings; each implementation decides what
//! a non-numeric token means (here: [`StoreError::InvalidId`]).

pub mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Row field holding the store-assigned primary identifier.
pub const ID_FIELD: &str = "ID";
/// Row field holding the creation timestamp.
pub const CREATED_AT_FIELD: &str = "CreatedAt";
/// Row field holding the last-update timestamp.
pub const UPDATED_AT_FIELD: &str = "UpdatedAt";

/// The persistence capability consumed by the generic pipeline.
///
/// Every call is atomic at the row level; no cross-call transactional
/// isolation is promised. Concurrent updates to the same id are
/// last-writer-wins.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a row, assigning `ID`/`CreatedAt`/`UpdatedAt`. Returns the
    /// stored row.
    async fn create(&self, table: &str, row: Value) -> Result<Value, StoreError>;

    /// Return every live row of the table, ordered by id.
    async fn find(&self, table: &str) -> Result<Vec<Value>, StoreError>;

    /// Return the row with the given identifier.
    async fn first(&self, table: &str, id: &str) -> Result<Value, StoreError>;

    /// Replace the row's payload, stamping `UpdatedAt`. The identifier and
    /// `CreatedAt` are immutable. Returns the stored row.
    async fn update(&self, table: &str, id: &str, row: Value) -> Result<Value, StoreError>;

    /// Delete the row. Deleting an absent id is a no-op.
    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Parse a raw identifier token into a numeric row id.
pub(crate) fn parse_id(raw: &str) -> Result<u64, StoreError> {
    raw.parse::<u64>()
        .map_err(|_| StoreError::InvalidId(raw.to_string()))
}
