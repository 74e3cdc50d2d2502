//! Decision criteria against which comparison matrices are built.

use serde::{Deserialize, Serialize};

/// A named decision criterion from the catalog.
///
/// Criteria are created and owned by the catalog (the `ahp_criteria` table);
/// the engine never mutates them. The ordering returned by the catalog fixes
/// row/column correspondence in all matrices and weight vectors for the
/// lifetime of a single operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl Criterion {
    pub fn new(
        id: i32,
        code: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            description,
        }
    }
}

/// A criterion paired with its derived priority weight.
///
/// Index-aligned with the criteria snapshot the weight was derived against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedCriterion {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub weight: f64,
}

impl WeightedCriterion {
    pub fn from_criterion(criterion: &Criterion, weight: f64) -> Self {
        Self {
            id: criterion.id,
            code: criterion.code.clone(),
            name: criterion.name.clone(),
            description: criterion.description.clone(),
            weight,
        }
    }
}
