//! PostgreSQL store implementation.
//!
//! Every resource table has the same shape:
//!
//! ```sql
//! id         BIGSERIAL PRIMARY KEY
//! created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! deleted_at TIMESTAMPTZ
//! data       JSONB NOT NULL
//! ```
//!
//! The identity and timestamp columns are authoritative; the JSONB payload
//! carries the entity's domain fields. Reads overlay the columns onto the
//! payload so callers always see `ID`/`CreatedAt`/`UpdatedAt` in the row.
//! Deletes are soft: `deleted_at` is stamped and every query filters on
//! `deleted_at IS NULL`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::error::StoreError;
use crate::{Store, CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD};

/// PostgreSQL-backed [`Store`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and run embedded migrations.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2)
            .acquire_timeout(std::time::Duration::from_secs(5))
            .connect(url)
            .await?;
        tracing::info!("Connected to PostgreSQL");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, shared pools).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Table names are interpolated into SQL (identifiers cannot be bound), so
/// they must be plain snake_case identifiers. In practice they come from
/// the fixed resource registry, never from a client.
fn check_table(table: &str) -> Result<(), StoreError> {
    let legal = !table.is_empty()
        && table
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if legal {
        Ok(())
    } else {
        Err(StoreError::InvalidTable(table.to_string()))
    }
}

fn parse_db_id(raw: &str) -> Result<i64, StoreError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| StoreError::InvalidId(raw.to_string()))
}

fn db_err(err: sqlx::Error) -> StoreError {
    StoreError::Database(err.to_string())
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

/// Overlay the authoritative identity/timestamp columns onto a payload.
fn overlay(
    mut data: Value,
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Value {
    data[ID_FIELD] = Value::from(id);
    data[CREATED_AT_FIELD] = serde_json::to_value(created_at).unwrap_or(Value::Null);
    data[UPDATED_AT_FIELD] = serde_json::to_value(updated_at).unwrap_or(Value::Null);
    data
}

#[async_trait]
impl Store for PgStore {
    async fn create(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        check_table(table)?;
        require_object(&row)?;

        let sql =
            format!("INSERT INTO {table} (data) VALUES ($1) RETURNING id, created_at, updated_at");
        let inserted = sqlx::query(&sql)
            .bind(&row)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(overlay(
            row,
            inserted.try_get("id").map_err(db_err)?,
            inserted.try_get("created_at").map_err(db_err)?,
            inserted.try_get("updated_at").map_err(db_err)?,
        ))
    }

    async fn find(&self, table: &str) -> Result<Vec<Value>, StoreError> {
        check_table(table)?;

        let sql = format!(
            "SELECT id, created_at, updated_at, data FROM {table} \
             WHERE deleted_at IS NULL ORDER BY id"
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(overlay(
                row.try_get("data").map_err(db_err)?,
                row.try_get("id").map_err(db_err)?,
                row.try_get("created_at").map_err(db_err)?,
                row.try_get("updated_at").map_err(db_err)?,
            ));
        }
        Ok(out)
    }

    async fn first(&self, table: &str, id: &str) -> Result<Value, StoreError> {
        check_table(table)?;
        let key = parse_db_id(id)?;

        let sql = format!(
            "SELECT id, created_at, updated_at, data FROM {table} \
             WHERE id = $1 AND deleted_at IS NULL"
        );
        let row = sqlx::query(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| StoreError::not_found(table, id))?;

        Ok(overlay(
            row.try_get("data").map_err(db_err)?,
            row.try_get("id").map_err(db_err)?,
            row.try_get("created_at").map_err(db_err)?,
            row.try_get("updated_at").map_err(db_err)?,
        ))
    }

    async fn update(&self, table: &str, id: &str, row: Value) -> Result<Value, StoreError> {
        check_table(table)?;
        require_object(&row)?;
        let key = parse_db_id(id)?;

        let sql = format!(
            "UPDATE {table} SET data = $2, updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, created_at, updated_at"
        );
        let updated = sqlx::query(&sql)
            .bind(key)
            .bind(&row)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or_else(|| StoreError::not_found(table, id))?;

        Ok(overlay(
            row,
            updated.try_get("id").map_err(db_err)?,
            updated.try_get("created_at").map_err(db_err)?,
            updated.try_get("updated_at").map_err(db_err)?,
        ))
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        check_table(table)?;
        let key = parse_db_id(id)?;

        // Soft delete; affecting zero rows is a legal no-op.
        let sql = format!(
            "UPDATE {table} SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL"
        );
        sqlx::query(&sql)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_restricted_to_identifiers() {
        assert!(check_table("maintenance_history").is_ok());
        assert!(check_table("companies").is_ok());
        assert!(check_table("").is_err());
        assert!(check_table("companies; DROP TABLE users").is_err());
        assert!(check_table("Companies").is_err());
    }

    #[test]
    fn db_ids_must_be_positive_integers() {
        assert_eq!(parse_db_id("7").unwrap(), 7);
        assert!(parse_db_id("abc123").is_err());
        assert!(parse_db_id("-4").is_err());
        assert!(parse_db_id("0").is_err());
    }

    #[test]
    fn overlay_sets_store_owned_fields() {
        let now = Utc::now();
        let row = overlay(serde_json::json!({"Name": "Acme"}), 9, now, now);
        assert_eq!(row[ID_FIELD], 9);
        assert_eq!(row["Name"], "Acme");
        assert!(row[CREATED_AT_FIELD].is_string());
    }
}
