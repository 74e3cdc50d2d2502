//! Consistency Index / Consistency Ratio evaluation.
//!
//! CR normalizes the Consistency Index by Saaty's Random Index, the expected
//! CI of a randomly generated reciprocal matrix of the same size. Matrices
//! with CR below 10% are conventionally treated as consistent enough to use.

use serde::Serialize;

/// Conventional acceptance threshold for the Consistency Ratio.
pub const CR_THRESHOLD: f64 = 0.10;

/// Saaty's Random Index for n = 1..=10.
const RI_TABLE: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Consistency metrics for one solved comparison matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    pub n: usize,
    pub lambda_max: f64,
    pub ci: f64,
    pub cr: f64,
    /// `None` when n is outside the tabulated 1..=10 range; consistency is
    /// then not enforced (CR reported as 0).
    pub ri: Option<f64>,
    /// Whether CR clears the 10% threshold.
    pub accepted: bool,
}

/// Looks up the Random Index for a matrix of size `n`.
pub fn random_index(n: usize) -> Option<f64> {
    if (1..=RI_TABLE.len()).contains(&n) {
        Some(RI_TABLE[n - 1])
    } else {
        None
    }
}

/// Computes CI and CR from the dominant-eigenvalue estimate.
///
/// A 1x1 or 2x2 reciprocal matrix is perfectly consistent by construction,
/// so CI is exactly 0 for n <= 2. When RI is undefined or 0, CR is 0 and
/// the matrix passes the threshold trivially.
pub fn evaluate(n: usize, lambda_max: f64) -> ConsistencyReport {
    let ci = if n <= 2 {
        0.0
    } else {
        (lambda_max - n as f64) / (n as f64 - 1.0)
    };

    let ri = random_index(n);
    let cr = match ri {
        Some(ri) if ri != 0.0 => ci / ri,
        _ => 0.0,
    };

    ConsistencyReport {
        n,
        lambda_max,
        ci,
        cr,
        ri,
        accepted: cr < CR_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_matrices_are_perfectly_consistent() {
        assert_eq!(evaluate(1, 1.0).ci, 0.0);
        assert_eq!(evaluate(2, 2.0).ci, 0.0);
        // Even a noisy lambda estimate cannot make n <= 2 inconsistent.
        let report = evaluate(2, 2.3);
        assert_eq!(report.ci, 0.0);
        assert_eq!(report.cr, 0.0);
        assert!(report.accepted);
    }

    #[test]
    fn identity_like_matrix_scores_zero_everywhere() {
        let report = evaluate(4, 4.0);
        assert_eq!(report.ci, 0.0);
        assert_eq!(report.cr, 0.0);
        assert_eq!(report.ri, Some(0.90));
        assert!(report.accepted);
    }

    #[test]
    fn cr_normalizes_ci_by_the_tabulated_ri() {
        let report = evaluate(4, 4.27);
        let expected_ci = (4.27 - 4.0) / 3.0;
        assert!((report.ci - expected_ci).abs() < 1e-12);
        assert!((report.cr - expected_ci / 0.90).abs() < 1e-12);
        assert!(!report.accepted);
    }

    #[test]
    fn threshold_is_strict() {
        // CR exactly at 10% is rejected; just below passes.
        let at = evaluate(3, 3.0 + 2.0 * 0.58 * CR_THRESHOLD);
        assert!((at.cr - CR_THRESHOLD).abs() < 1e-12);
        assert!(!at.accepted);

        let below = evaluate(3, 3.0 + 2.0 * 0.58 * (CR_THRESHOLD - 1e-6));
        assert!(below.accepted);
    }

    #[test]
    fn ri_is_undefined_outside_the_table() {
        assert_eq!(random_index(0), None);
        assert_eq!(random_index(11), None);
        assert_eq!(random_index(10), Some(1.49));

        // Outside the table CR is not enforced.
        let report = evaluate(11, 13.0);
        assert_eq!(report.ri, None);
        assert_eq!(report.cr, 0.0);
        assert!(report.accepted);
        assert!(report.ci > 0.0);
    }
}
