//! Store error taxonomy.
//!
//! Deliberately free of backend types: the API layer matches on these
//! variants to pick status codes, and must not depend on sqlx.

use thiserror::Error;

/// Failure of a [`Store`](crate::Store) operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No live row with the given id.
    #[error("record not found in {table} for id {id}")]
    NotFound {
        /// The table that was queried.
        table: String,
        /// The identifier that matched nothing.
        id: String,
    },

    /// The identifier token is not a valid row id for this store.
    #[error("invalid record identifier {0:?}")]
    InvalidId(String),

    /// The table name is not a legal storage identifier.
    #[error("invalid table name {0:?}")]
    InvalidTable(String),

    /// The row payload is not a JSON object.
    #[error("malformed row: {0}")]
    MalformedRow(String),

    /// Any other backend failure, with the backend's message.
    #[error("database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Construct a not-found error for `table`/`id`.
    pub fn not_found(table: &str, id: impl ToString) -> Self {
        Self::NotFound {
            table: table.to_string(),
            id: id.to_string(),
        }
    }
}
