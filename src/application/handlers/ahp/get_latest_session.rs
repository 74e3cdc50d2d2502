//! GetLatestSessionHandler - reads back the most recently saved weight
//! session, re-aligned to the live criteria ordering.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::ahp::round6;
use crate::domain::foundation::DomainError;
use crate::ports::{CriterionCatalog, WeightStore};

/// One criterion with its stored weight (0 when the session predates the
/// criterion).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionWeightItem {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub weight: f64,
}

/// The latest session, or an empty view when nothing was ever saved.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestSessionView {
    pub session_id: Option<String>,
    pub items: Vec<SessionWeightItem>,
}

/// Handler for latest-session retrieval.
///
/// Performs two sequential reads (find the id, then fetch its rows) with no
/// spanning transaction; the view is best-effort, not linearizable.
pub struct GetLatestSessionHandler {
    catalog: Arc<dyn CriterionCatalog>,
    store: Arc<dyn WeightStore>,
}

impl GetLatestSessionHandler {
    pub fn new(catalog: Arc<dyn CriterionCatalog>, store: Arc<dyn WeightStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self) -> Result<LatestSessionView, DomainError> {
        let criteria = self.catalog.list_criteria().await?;

        let Some(session_id) = self.store.latest_session_id().await? else {
            return Ok(LatestSessionView {
                session_id: None,
                items: Vec::new(),
            });
        };

        let stored = self.store.session_weights(&session_id).await?;
        let by_criterion: HashMap<i32, f64> = stored
            .into_iter()
            .map(|row| (row.criterion_id, row.weight))
            .collect();

        // Always length n: criteria added since the save get weight 0.
        let items = criteria
            .iter()
            .map(|criterion| SessionWeightItem {
                id: criterion.id,
                code: criterion.code.clone(),
                name: criterion.name.clone(),
                weight: round6(by_criterion.get(&criterion.id).copied().unwrap_or(0.0)),
            })
            .collect();

        Ok(LatestSessionView {
            session_id: Some(session_id),
            items,
        })
    }
}
