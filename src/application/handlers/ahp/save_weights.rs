//! SaveWeightsHandler - persists an accepted weight vector as an immutable
//! session.

use std::sync::Arc;

use crate::domain::ahp::SessionIdMinter;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{CriterionCatalog, SavedWeightRow, WeightEntry, WeightStore};

/// Command to persist a weight vector.
#[derive(Debug, Clone)]
pub struct SaveWeightsCommand {
    /// Weights aligned to the current criteria ordering.
    pub weights: Vec<f64>,
    /// Caller-supplied session identifier; minted when absent or blank.
    pub session_id: Option<String>,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveWeightsResult {
    pub session_id: String,
    pub saved: usize,
    pub rows: Vec<SavedWeightRow>,
}

/// Handler for weight-session persistence.
pub struct SaveWeightsHandler {
    catalog: Arc<dyn CriterionCatalog>,
    store: Arc<dyn WeightStore>,
    minter: Arc<dyn SessionIdMinter>,
}

impl SaveWeightsHandler {
    pub fn new(
        catalog: Arc<dyn CriterionCatalog>,
        store: Arc<dyn WeightStore>,
        minter: Arc<dyn SessionIdMinter>,
    ) -> Self {
        Self {
            catalog,
            store,
            minter,
        }
    }

    /// Validates preconditions, resolves the session identifier, and writes
    /// one row per criterion in canonical order inside one transaction.
    ///
    /// # Errors
    ///
    /// - `CatalogUnavailable` when the criteria snapshot cannot be fetched
    /// - `SizeMismatch` when the vector length differs from the catalog
    /// - `ValidationFailed` on a non-finite or negative weight
    /// - `DatabaseError` when the store aborts (all rows rolled back)
    pub async fn handle(&self, cmd: SaveWeightsCommand) -> Result<SaveWeightsResult, DomainError> {
        let criteria = self.catalog.list_criteria().await?;
        let n = criteria.len();

        // All preconditions fail before any row is written.
        if cmd.weights.len() != n {
            return Err(DomainError::new(
                ErrorCode::SizeMismatch,
                format!("Weights must be an array of length {n} to match the criteria catalog"),
            )
            .with_detail("expected", n.to_string())
            .with_detail("actual", cmd.weights.len().to_string()));
        }
        for (index, &weight) in cmd.weights.iter().enumerate() {
            // Zero is legal: it marks a criterion judged worthless.
            if !weight.is_finite() || weight < 0.0 {
                return Err(DomainError::validation(
                    "weights",
                    format!("Weight at index {index} must be a finite number >= 0"),
                )
                .with_detail("index", index.to_string()));
            }
        }

        let session_id = cmd
            .session_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| self.minter.mint());

        let entries: Vec<WeightEntry> = criteria
            .iter()
            .zip(&cmd.weights)
            .map(|(criterion, &weight)| WeightEntry {
                criterion_id: criterion.id,
                weight,
            })
            .collect();

        let rows = self.store.save_session(&session_id, &entries).await?;
        tracing::info!(session_id = %session_id, rows = rows.len(), "saved weight session");

        Ok(SaveWeightsResult {
            session_id,
            saved: rows.len(),
            rows,
        })
    }
}
