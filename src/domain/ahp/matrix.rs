//! Pairwise comparison matrix validation.
//!
//! A comparison matrix encodes relative importance between criteria: entry
//! `(i, j)` says how much more important criterion `i` is than criterion `j`
//! on the reciprocal Saaty scale. The matrix is transient, supplied per
//! request, and never persisted as-is; only a validated instance can reach
//! the solver.

use once_cell::sync::Lazy;
use thiserror::Error;

/// Absolute tolerance for the unit diagonal.
pub const DIAGONAL_TOLERANCE: f64 = 1e-9;

/// Absolute tolerance for the reciprocity product `a_ij * a_ji`.
///
/// Intentionally 1000x looser than the diagonal tolerance: entries are
/// user-selected from a discrete scale and then inverted in floating point,
/// so the bound must absorb inversion rounding while still rejecting
/// inconsistent manual entry.
pub const RECIPROCITY_TOLERANCE: f64 = 1e-3;

const SCALE_TOLERANCE: f64 = 1e-9;

/// The Saaty scale: integers 1..9 and their reciprocals.
static SAATY_SCALE: Lazy<Vec<f64>> = Lazy::new(|| {
    let mut scale: Vec<f64> = (1..=9).map(f64::from).collect();
    scale.extend((2..=9).map(|k| 1.0 / f64::from(k)));
    scale
});

/// Options controlling matrix validation.
#[derive(Debug, Clone, Copy)]
pub struct ValidateOptions {
    /// Restrict entries to the discrete Saaty scale (exact membership,
    /// not a range check).
    pub enforce_saaty: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self { enforce_saaty: true }
    }
}

/// A violated matrix invariant, naming the offending entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Comparison matrix must not be empty")]
    Empty,

    #[error("Comparison matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Entry ({row}, {col}) must be a finite number greater than 0")]
    NonPositiveEntry { row: usize, col: usize },

    #[error("Entry ({row}, {col}) is not on the Saaty scale 1..9 or its reciprocals")]
    OffScaleEntry { row: usize, col: usize },

    #[error("Diagonal entry ({index}, {index}) must equal 1")]
    BrokenDiagonal { index: usize },

    #[error("Entries ({row}, {col}) and ({col}, {row}) must be reciprocal: a_ji = 1 / a_ij")]
    BrokenReciprocity { row: usize, col: usize },
}

/// A comparison matrix whose invariants have been checked.
///
/// Construction is the only validation path; the solver accepts nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Validates `rows` and wraps them on success.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, in check order: shape,
    /// positivity, scale membership (when enforced), diagonal, reciprocity.
    pub fn from_rows(rows: Vec<Vec<f64>>, options: ValidateOptions) -> Result<Self, MatrixError> {
        validate(&rows, options)?;
        Ok(Self { rows })
    }

    pub fn n(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }
}

/// Checks the comparison-matrix invariants, short-circuiting on the first
/// failure. Pure: no side effects, same verdict on repeated calls.
pub fn validate(rows: &[Vec<f64>], options: ValidateOptions) -> Result<(), MatrixError> {
    if rows.is_empty() {
        return Err(MatrixError::Empty);
    }
    let n = rows.len();

    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(MatrixError::NotSquare {
                row: i,
                len: row.len(),
                expected: n,
            });
        }
    }

    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(MatrixError::NonPositiveEntry { row: i, col: j });
            }
        }
    }

    if options.enforce_saaty {
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !on_saaty_scale(value) {
                    return Err(MatrixError::OffScaleEntry { row: i, col: j });
                }
            }
        }
    }

    for (i, row) in rows.iter().enumerate() {
        if (row[i] - 1.0).abs() > DIAGONAL_TOLERANCE {
            return Err(MatrixError::BrokenDiagonal { index: i });
        }
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let product = rows[i][j] * rows[j][i];
            if (product - 1.0).abs() > RECIPROCITY_TOLERANCE {
                return Err(MatrixError::BrokenReciprocity { row: i, col: j });
            }
        }
    }

    Ok(())
}

fn on_saaty_scale(value: f64) -> bool {
    SAATY_SCALE
        .iter()
        .any(|allowed| (value - allowed).abs() <= SCALE_TOLERANCE)
}
