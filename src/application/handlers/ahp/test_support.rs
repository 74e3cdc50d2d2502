//! In-memory port implementations shared by the handler tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ahp::{Criterion, SessionIdMinter};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{CriterionCatalog, SavedWeightRow, StoredWeight, WeightEntry, WeightStore};

/// Catalog serving a fixed criteria list.
pub struct StaticCatalog(Vec<Criterion>);

impl StaticCatalog {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self(criteria)
    }

    pub fn with_codes(codes: &[&str]) -> Self {
        Self(
            codes
                .iter()
                .enumerate()
                .map(|(i, code)| Criterion::new(i as i32 + 1, *code, *code, None))
                .collect(),
        )
    }
}

#[async_trait]
impl CriterionCatalog for StaticCatalog {
    async fn list_criteria(&self) -> Result<Vec<Criterion>, DomainError> {
        Ok(self.0.clone())
    }
}

/// Minter returning a pinned identifier.
pub struct FixedMinter(String);

impl FixedMinter {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl SessionIdMinter for FixedMinter {
    fn mint(&self) -> String {
        self.0.clone()
    }
}

/// Append-only in-memory weight store with the same atomicity contract as
/// the PostgreSQL adapter.
pub struct InMemoryWeightStore {
    rows: Mutex<Vec<SavedWeightRow>>,
    next_id: AtomicI64,
    fail_save: bool,
}

impl InMemoryWeightStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_save: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_save: true,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn session_rows(&self, session_id: &str) -> Vec<SavedWeightRow> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.session_id == session_id)
            .cloned()
            .collect()
    }
}

impl Default for InMemoryWeightStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeightStore for InMemoryWeightStore {
    async fn save_session(
        &self,
        session_id: &str,
        entries: &[WeightEntry],
    ) -> Result<Vec<SavedWeightRow>, DomainError> {
        if self.fail_save {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated transaction abort",
            ));
        }
        let created_at = Utc::now();
        let mut rows = self.rows.lock().unwrap();
        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let row = SavedWeightRow {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                session_id: session_id.to_string(),
                criterion_id: entry.criterion_id,
                weight: entry.weight,
                created_at,
            };
            rows.push(row.clone());
            saved.push(row);
        }
        Ok(saved)
    }

    async fn latest_session_id(&self) -> Result<Option<String>, DomainError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .max_by_key(|row| (row.created_at, row.id))
            .map(|row| row.session_id.clone()))
    }

    async fn session_weights(&self, session_id: &str) -> Result<Vec<StoredWeight>, DomainError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| row.session_id == session_id)
            .map(|row| StoredWeight {
                criterion_id: row.criterion_id,
                weight: row.weight,
                created_at: row.created_at,
            })
            .collect())
    }
}
