//! PostgreSQL implementation of CriterionCatalog.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::ahp::Criterion;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CriterionCatalog;

/// Catalog backed by the `ahp_criteria` table.
#[derive(Clone)]
pub struct PostgresCriterionCatalog {
    pool: PgPool,
}

impl PostgresCriterionCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CriterionCatalog for PostgresCriterionCatalog {
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, code, name, description
            FROM ahp_criteria
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "criteria catalog fetch failed");
            DomainError::new(
                ErrorCode::CatalogUnavailable,
                format!("Failed to fetch criteria: {}", e),
            )
        })?;

        rows.into_iter()
            .map(|row| {
                Ok(Criterion {
                    id: row.try_get("id").map_err(row_error)?,
                    code: row.try_get("code").map_err(row_error)?,
                    name: row.try_get("name").map_err(row_error)?,
                    description: row.try_get("description").map_err(row_error)?,
                })
            })
            .collect()
    }
}

fn row_error(e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::CatalogUnavailable,
        format!("Malformed criteria row: {}", e),
    )
}
