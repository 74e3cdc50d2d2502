//! Priority weight derivation.
//!
//! Uses the classical approximate eigenvector method: normalize each column,
//! average each row, then estimate the dominant eigenvalue from the ratio
//! `(A w)_i / w_i`. Deterministic and O(n^2); no iterative power-method
//! refinement.

use super::matrix::ComparisonMatrix;

/// Weights and dominant-eigenvalue estimate for one comparison matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Normalized priority weights, index-aligned with the criteria
    /// ordering, summing to 1 up to floating rounding.
    pub weights: Vec<f64>,
    /// Approximate largest eigenvalue of the matrix.
    pub lambda_max: f64,
}

/// Derives normalized priority weights and the dominant-eigenvalue estimate.
///
/// Pure function of the validated matrix. Internal computation runs at full
/// floating precision; callers round for display with [`round6`].
pub fn solve(matrix: &ComparisonMatrix) -> Solution {
    let normalized = normalize_by_columns(matrix);
    let weights = weights_by_row_average(&normalized);
    let lambda_max = lambda_max(matrix, &weights);
    Solution { weights, lambda_max }
}

/// Divides every entry by its column sum.
///
/// A zero column sum yields zeros for that column. Unreachable after
/// validation (all entries are positive) but must not trap.
fn normalize_by_columns(matrix: &ComparisonMatrix) -> Vec<Vec<f64>> {
    let n = matrix.n();
    let mut column_sums = vec![0.0; n];
    for row in matrix.rows() {
        for (j, &value) in row.iter().enumerate() {
            column_sums[j] += value;
        }
    }

    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, &value)| {
                    if column_sums[j] == 0.0 {
                        0.0
                    } else {
                        value / column_sums[j]
                    }
                })
                .collect()
        })
        .collect()
}

/// Row mean of the normalized matrix, renormalized to sum to 1.
///
/// A zero raw sum returns the zero vector unchanged rather than dividing.
fn weights_by_row_average(normalized: &[Vec<f64>]) -> Vec<f64> {
    let n = normalized.len();
    let mut weights: Vec<f64> = normalized
        .iter()
        .map(|row| row.iter().sum::<f64>() / n as f64)
        .collect();

    let sum: f64 = weights.iter().sum();
    if sum != 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
    }
    weights
}

/// Mean of `(A w)_i / w_i` over indices with `w_i > 0`.
///
/// Indices with a zero weight are excluded from the average entirely; if no
/// index has a positive weight the estimate is 0.
fn lambda_max(matrix: &ComparisonMatrix, weights: &[f64]) -> f64 {
    let product = mat_vec(matrix, weights);
    let mut sum = 0.0;
    let mut count = 0u32;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            sum += product[i] / w;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

fn mat_vec(matrix: &ComparisonMatrix, weights: &[f64]) -> Vec<f64> {
    matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .zip(weights)
                .map(|(&a, &w)| a * w)
                .sum::<f64>()
        })
        .collect()
}

/// Rounds to 6 decimal digits for display and storage comparability.
pub fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
