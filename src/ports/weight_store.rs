//! Weight session store port (write + read side).
//!
//! Sessions are append-only: once the rows for a session_id are written they
//! are never updated or deleted. A save is atomic over all of its rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// One `(criterion, weight)` pair queued for persistence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightEntry {
    pub criterion_id: i32,
    pub weight: f64,
}

/// A persisted weight row, as returned by the store after a save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedWeightRow {
    pub id: i64,
    pub session_id: String,
    pub criterion_id: i32,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

/// A stored weight read back for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredWeight {
    pub criterion_id: i32,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

/// Port for persisting and reading back weight sessions.
///
/// Implementations must guarantee:
/// - `save_session` writes all entries in one transaction, in the order
///   given; on any mid-write failure every buffered row is rolled back and
///   no session_id exists with fewer than the full row count
/// - no lock is held across saves for different session identifiers
/// - saves under an identical caller-supplied session_id append (no dedupe,
///   no replace, no reject)
#[async_trait]
pub trait WeightStore: Send + Sync {
    /// Persist one row per entry under `session_id`, atomically.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on transaction or write failure (after rollback)
    async fn save_session(
        &self,
        session_id: &str,
        entries: &[WeightEntry],
    ) -> Result<Vec<SavedWeightRow>, DomainError>;

    /// Identify the most recently written session.
    ///
    /// Ordered by created_at descending, tie-broken by highest row id.
    /// Returns `None` when no session has ever been saved. Best-effort: a
    /// concurrent writer can create a newer session between this call and a
    /// subsequent `session_weights` read.
    async fn latest_session_id(&self) -> Result<Option<String>, DomainError>;

    /// Fetch all stored weight rows for a session.
    async fn session_weights(&self, session_id: &str) -> Result<Vec<StoredWeight>, DomainError>;
}
