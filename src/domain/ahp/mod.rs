//! AHP decision engine.
//!
//! Validates pairwise comparison matrices, derives normalized priority
//! weights, evaluates consistency, and mints session identifiers for
//! persisted weight sets. Everything here except identifier minting is pure
//! computation over a per-request criteria snapshot: no I/O, no shared
//! state, safe to run concurrently without coordination.

mod consistency;
mod criterion;
mod matrix;
mod session_id;
mod solver;

pub use consistency::{evaluate, random_index, ConsistencyReport, CR_THRESHOLD};
pub use criterion::{Criterion, WeightedCriterion};
pub use matrix::{
    validate, ComparisonMatrix, MatrixError, ValidateOptions, DIAGONAL_TOLERANCE,
    RECIPROCITY_TOLERANCE,
};
pub use session_id::{format_session_id, SessionIdMinter, SystemSessionIdMinter};
pub use solver::{round6, solve, Solution};
