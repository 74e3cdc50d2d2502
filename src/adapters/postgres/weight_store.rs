//! PostgreSQL implementation of WeightStore.
//!
//! Rows live in `ahp_weights(id, session_id, criterion_id, weight,
//! created_at)`. The table is append-only; no update or delete path exists.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{SavedWeightRow, StoredWeight, WeightEntry, WeightStore};

/// Weight store backed by the `ahp_weights` table.
#[derive(Clone)]
pub struct PostgresWeightStore {
    pool: PgPool,
}

impl PostgresWeightStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeightStore for PostgresWeightStore {
    /// Writes every row inside one transaction. An error on any insert
    /// aborts the transaction, which rolls back all buffered rows; no
    /// session_id can be observed with fewer than the full row count.
    async fn save_session(
        &self,
        session_id: &str,
        entries: &[WeightEntry],
    ) -> Result<Vec<SavedWeightRow>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let row = sqlx::query(
                r#"
                INSERT INTO ahp_weights (session_id, criterion_id, weight)
                VALUES ($1, $2, $3)
                RETURNING id, session_id, criterion_id, weight, created_at
                "#,
            )
            .bind(session_id)
            .bind(entry.criterion_id)
            .bind(entry.weight)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(session_id = %session_id, error = %e, "weight insert failed");
                db_error(e)
            })?;

            saved.push(SavedWeightRow {
                id: row.try_get("id").map_err(db_error)?,
                session_id: row.try_get("session_id").map_err(db_error)?,
                criterion_id: row.try_get("criterion_id").map_err(db_error)?,
                weight: row.try_get("weight").map_err(db_error)?,
                created_at: row.try_get("created_at").map_err(db_error)?,
            });
        }

        tx.commit().await.map_err(db_error)?;
        Ok(saved)
    }

    async fn latest_session_id(&self) -> Result<Option<String>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT session_id
            FROM ahp_weights
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(|row| row.try_get("session_id").map_err(db_error))
            .transpose()
    }

    async fn session_weights(&self, session_id: &str) -> Result<Vec<StoredWeight>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT criterion_id, weight, created_at
            FROM ahp_weights
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter()
            .map(|row| {
                Ok(StoredWeight {
                    criterion_id: row.try_get("criterion_id").map_err(db_error)?,
                    weight: row.try_get("weight").map_err(db_error)?,
                    created_at: row.try_get("created_at").map_err(db_error)?,
                })
            })
            .collect()
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Weight store operation failed: {}", e),
    )
}
