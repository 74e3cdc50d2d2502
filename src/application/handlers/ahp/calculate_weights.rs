//! CalculateWeightsHandler - validates a comparison matrix and derives
//! priority weights with consistency diagnostics.
//!
//! One calculation walks the full cycle: matrix supplied, validated against
//! the current criteria snapshot, weights and lambda derived, CR evaluated,
//! then accepted or rejected. Rejection is a business-rule verdict carrying
//! the complete numeric report, distinct from an input error; nothing is
//! retried or auto-corrected.

use std::sync::Arc;

use crate::domain::ahp::{
    evaluate, round6, solve, ComparisonMatrix, ValidateOptions, WeightedCriterion,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CriterionCatalog;

/// Command to calculate weights from a pairwise comparison matrix.
#[derive(Debug, Clone)]
pub struct CalculateWeightsCommand {
    pub matrix: Vec<Vec<f64>>,
    /// Restrict entries to the discrete Saaty scale.
    pub enforce_saaty: bool,
    /// Treat CR >= 10% as a rejection instead of a plain diagnostic.
    pub require_cr: bool,
}

/// Full numeric result of one calculation, rounded for external reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    pub n: usize,
    pub lambda_max: f64,
    pub ci: f64,
    pub cr: f64,
    pub ri: Option<f64>,
    /// Normalized weights aligned to the criteria ordering.
    pub weights: Vec<f64>,
    /// Criteria annotated with their weights, in catalog order.
    pub items: Vec<WeightedCriterion>,
    /// Whether CR clears the 10% threshold (reported regardless of
    /// `require_cr`).
    pub ok: bool,
}

/// Verdict of a calculation whose inputs were valid.
///
/// `Rejected` is only produced when the command required the CR threshold
/// and the matrix missed it; the outcome still carries every diagnostic so
/// the caller can show the user which metric failed and by how much.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationVerdict {
    Accepted(CalculationOutcome),
    Rejected(CalculationOutcome),
}

impl CalculationVerdict {
    pub fn outcome(&self) -> &CalculationOutcome {
        match self {
            CalculationVerdict::Accepted(outcome) => outcome,
            CalculationVerdict::Rejected(outcome) => outcome,
        }
    }
}

/// Handler for weight calculation.
pub struct CalculateWeightsHandler {
    catalog: Arc<dyn CriterionCatalog>,
}

impl CalculateWeightsHandler {
    pub fn new(catalog: Arc<dyn CriterionCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        cmd: CalculateWeightsCommand,
    ) -> Result<CalculationVerdict, DomainError> {
        // 1. Snapshot the catalog; its ordering is canonical for this call.
        let criteria = self.catalog.list_criteria().await?;
        let n = criteria.len();

        // 2. Dimensions must match the catalog before invariants are checked.
        if cmd.matrix.len() != n {
            return Err(DomainError::new(
                ErrorCode::SizeMismatch,
                format!("Matrix must be {n}x{n} to match the criteria catalog"),
            )
            .with_detail("expected", n.to_string())
            .with_detail("actual", cmd.matrix.len().to_string()));
        }

        // 3. Validate and derive.
        let matrix = ComparisonMatrix::from_rows(
            cmd.matrix,
            ValidateOptions {
                enforce_saaty: cmd.enforce_saaty,
            },
        )?;
        let solution = solve(&matrix);
        let report = evaluate(n, solution.lambda_max);

        let items = criteria
            .iter()
            .zip(&solution.weights)
            .map(|(criterion, &weight)| WeightedCriterion::from_criterion(criterion, round6(weight)))
            .collect();

        let outcome = CalculationOutcome {
            n,
            lambda_max: round6(report.lambda_max),
            ci: round6(report.ci),
            cr: round6(report.cr),
            ri: report.ri,
            weights: solution.weights.iter().copied().map(round6).collect(),
            items,
            ok: report.accepted,
        };

        // 4. The CR gate is caller policy, not an engine invariant.
        if cmd.require_cr && !report.accepted {
            return Ok(CalculationVerdict::Rejected(outcome));
        }
        Ok(CalculationVerdict::Accepted(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::Criterion;
    use async_trait::async_trait;

    struct StaticCatalog(Vec<Criterion>);

    impl StaticCatalog {
        fn with_codes(codes: &[&str]) -> Self {
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

    fn handler(codes: &[&str]) -> CalculateWeightsHandler {
        CalculateWeightsHandler::new(Arc::new(StaticCatalog::with_codes(codes)))
    }

    fn cmd(matrix: Vec<Vec<f64>>) -> CalculateWeightsCommand {
        CalculateWeightsCommand {
            matrix,
            enforce_saaty: true,
            require_cr: false,
        }
    }

    #[tokio::test]
    async fn identity_like_matrix_gives_uniform_weights() {
        let verdict = handler(&["A", "B", "C", "D"])
            .handle(cmd(vec![vec![1.0; 4]; 4]))
            .await
            .unwrap();

        let outcome = verdict.outcome();
        assert_eq!(outcome.n, 4);
        assert_eq!(outcome.lambda_max, 4.0);
        assert_eq!(outcome.ci, 0.0);
        assert_eq!(outcome.cr, 0.0);
        assert_eq!(outcome.ri, Some(0.90));
        assert!(outcome.ok);
        assert_eq!(outcome.weights, vec![0.25; 4]);
        assert_eq!(outcome.items.len(), 4);
        assert_eq!(outcome.items[2].code, "C");
        assert_eq!(outcome.items[2].weight, 0.25);
    }

    #[tokio::test]
    async fn four_criteria_scenario_favors_the_dominant_one() {
        let mut rows = vec![vec![1.0; 4]; 4];
        rows[0][1] = 5.0;
        rows[1][0] = 1.0 / 5.0;

        let verdict = handler(&["A", "B", "C", "D"]).handle(cmd(rows)).await.unwrap();
        let outcome = verdict.outcome();

        assert!(outcome.weights[0] > outcome.weights[1]);
        assert!((outcome.weights[2] - outcome.weights[3]).abs() < 1e-6);
        assert!(outcome.lambda_max > 4.0);
        assert_eq!(outcome.ri, Some(0.90));
    }

    #[tokio::test]
    async fn size_mismatch_is_reported_before_validation() {
        let err = handler(&["A", "B", "C"])
            .handle(cmd(vec![vec![1.0; 2]; 2]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SizeMismatch);
        assert_eq!(err.details.get("expected"), Some(&"3".to_string()));
        assert_eq!(err.details.get("actual"), Some(&"2".to_string()));
    }

    #[tokio::test]
    async fn invalid_matrix_surfaces_the_violated_invariant() {
        let err = handler(&["A", "B"])
            .handle(cmd(vec![vec![1.0, 3.0], vec![3.0, 1.0]]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("invariant"), Some(&"reciprocity".to_string()));
    }

    #[tokio::test]
    async fn off_scale_entry_depends_on_saaty_mode() {
        let rows = vec![vec![1.0, 2.5], vec![1.0 / 2.5, 1.0]];

        let err = handler(&["A", "B"]).handle(cmd(rows.clone())).await.unwrap_err();
        assert_eq!(err.details.get("invariant"), Some(&"saaty_scale".to_string()));

        let verdict = handler(&["A", "B"])
            .handle(CalculateWeightsCommand {
                matrix: rows,
                enforce_saaty: false,
                require_cr: false,
            })
            .await
            .unwrap();
        assert!(verdict.outcome().ok);
    }

    #[tokio::test]
    async fn require_cr_turns_inconsistency_into_rejection() {
        // Intransitive judgments: A > B > C but C > A.
        let rows = vec![
            vec![1.0, 3.0, 1.0 / 3.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![3.0, 1.0 / 3.0, 1.0],
        ];

        let relaxed = handler(&["A", "B", "C"]).handle(cmd(rows.clone())).await.unwrap();
        let outcome = match relaxed {
            CalculationVerdict::Accepted(outcome) => outcome,
            CalculationVerdict::Rejected(_) => panic!("rejection requires require_cr"),
        };
        assert!(!outcome.ok);
        assert!(outcome.cr > 0.10);

        let strict = handler(&["A", "B", "C"])
            .handle(CalculateWeightsCommand {
                matrix: rows,
                enforce_saaty: true,
                require_cr: true,
            })
            .await
            .unwrap();
        match strict {
            CalculationVerdict::Rejected(rejected) => {
                // Full diagnostics survive rejection.
                assert_eq!(rejected.n, 3);
                assert!(rejected.cr > 0.10);
                assert_eq!(rejected.weights.len(), 3);
            }
            CalculationVerdict::Accepted(_) => panic!("expected rejection"),
        }
    }
}
