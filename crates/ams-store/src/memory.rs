//! In-memory store implementation.
//!
//! Thread-safe tables behind a `parking_lot::RwLock`. All operations are
//! synchronous under the hood (the lock is never held across an `.await`
//! point); the async surface exists only to satisfy the [`Store`] trait.
//! Cloning shares the underlying data.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;

use crate::error::StoreError;
use crate::{parse_id, Store, CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD};

#[derive(Debug, Default)]
struct Table {
    next_id: u64,
    rows: BTreeMap<u64, Value>,
}

/// Thread-safe, cloneable in-memory store. Tables are created lazily on
/// first write; rows are kept in id order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            tables: Arc::clone(&self.tables),
        }
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live rows in a table. Absent tables count zero.
    pub fn len(&self, table: &str) -> usize {
        self.tables
            .read()
            .get(table)
            .map_or(0, |t| t.rows.len())
    }

    /// Whether a table holds no rows.
    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }
}

fn now_value() -> Value {
    serde_json::to_value(Utc::now()).unwrap_or(Value::Null)
}

fn require_object(row: &Value) -> Result<(), StoreError> {
    if row.is_object() {
        Ok(())
    } else {
        Err(StoreError::MalformedRow(
            "row must be a JSON object".to_string(),
        ))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create(&self, table: &str, mut row: Value) -> Result<Value, StoreError> {
        require_object(&row)?;

        let mut tables = self.tables.write();
        let entry = tables.entry(table.to_string()).or_default();
        entry.next_id += 1;
        let id = entry.next_id;

        row[ID_FIELD] = Value::from(id);
        let now = now_value();
        row[CREATED_AT_FIELD] = now.clone();
        row[UPDATED_AT_FIELD] = now;

        entry.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn find(&self, table: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .tables
            .read()
            .get(table)
            .map(|t| t.rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn first(&self, table: &str, id: &str) -> Result<Value, StoreError> {
        let key = parse_id(id)?;
        self.tables
            .read()
            .get(table)
            .and_then(|t| t.rows.get(&key))
            .cloned()
            .ok_or_else(|| StoreError::not_found(table, id))
    }

    async fn update(&self, table: &str, id: &str, mut row: Value) -> Result<Value, StoreError> {
        require_object(&row)?;
        let key = parse_id(id)?;

        let mut tables = self.tables.write();
        let current = tables
            .get_mut(table)
            .and_then(|t| t.rows.get_mut(&key))
            .ok_or_else(|| StoreError::not_found(table, id))?;

        // Identity and creation time are immutable.
        row[ID_FIELD] = current[ID_FIELD].clone();
        row[CREATED_AT_FIELD] = current[CREATED_AT_FIELD].clone();
        row[UPDATED_AT_FIELD] = now_value();

        *current = row.clone();
        Ok(row)
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let key = parse_id(id)?;
        if let Some(t) = self.tables.write().get_mut(table) {
            t.rows.remove(&key);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
