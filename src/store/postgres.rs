//! `PostgreSQL` backend: one table of JSONB records keyed by collection.
//!
//! The `records` table is created by the embedded migrations in
//! `src/db/migrations`. Rows come back in insertion order.

use sqlx::PgPool;

use super::{CrudStore, StoreError, ensure_record_id};

pub struct PgCrudStore {
    pool: PgPool,
}

impl PgCrudStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CrudStore for PgCrudStore {
    async fn get_all(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        let rows = sqlx::query_as::<_, (serde_json::Value,)>(
            "SELECT data
             FROM records
             WHERE collection = $1
             ORDER BY created_at, id",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(data,)| data).collect())
    }

    async fn create(&self, collection: &str, record: serde_json::Value) -> Result<serde_json::Value, StoreError> {
        let (id, record) = ensure_record_id(record)?;
        let (data,) = sqlx::query_as::<_, (serde_json::Value,)>(
            "INSERT INTO records (collection, id, data) VALUES ($1, $2, $3) RETURNING data",
        )
        .bind(collection)
        .bind(&id)
        .bind(&record)
        .fetch_one(&self.pool)
        .await?;

        Ok(data)
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
