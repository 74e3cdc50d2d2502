//! Criterion catalog port (read side).
//!
//! The catalog is the single source of truth for which criteria exist and in
//! what order. Every engine operation fetches one snapshot up front and uses
//! it for the whole operation; the snapshot's ordering fixes row/column
//! correspondence in matrices and weight vectors.

use crate::domain::ahp::Criterion;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Read port for the ordered criteria list.
///
/// Implementations must return criteria ordered by id ascending and must not
/// substitute defaults: a fetch failure is fatal for the calling operation.
#[async_trait]
pub trait CriterionCatalog: Send + Sync {
    /// Fetch the current criteria, ordered by id ascending.
    ///
    /// # Errors
    ///
    /// - `CatalogUnavailable` when the criteria list cannot be fetched
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError>;
}
