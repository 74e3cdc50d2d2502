//! HTTP DTOs for the AHP endpoints.
//!
//! Field names follow the wire format the map frontend already speaks
//! (`enforceSaaty`, `requireCR`, `lambda_max`, `CI`, `CR`, `RI`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::handlers::ahp::{
    CalculationOutcome, LatestSessionView, SaveWeightsResult, SessionWeightItem,
};
use crate::domain::ahp::{Criterion, WeightedCriterion};
use crate::domain::foundation::DomainError;
use crate::ports::SavedWeightRow;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to calculate weights from a comparison matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcRequest {
    pub matrix: Vec<Vec<f64>>,
    #[serde(rename = "enforceSaaty", default = "default_true")]
    pub enforce_saaty: bool,
    #[serde(rename = "requireCR", default)]
    pub require_cr: bool,
}

fn default_true() -> bool {
    true
}

/// Request to persist a weight vector.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    pub weights: Vec<f64>,
    #[serde(default)]
    pub session_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Module health probe payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub module: &'static str,
}

/// The ordered criteria list.
#[derive(Debug, Clone, Serialize)]
pub struct CriteriaResponse {
    pub criteria: Vec<CriterionDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Criterion> for CriterionDto {
    fn from(c: Criterion) -> Self {
        Self {
            id: c.id,
            code: c.code,
            name: c.name,
            description: c.description,
        }
    }
}

/// Full calculation result with consistency diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct CalcResponse {
    pub n: usize,
    pub lambda_max: f64,
    #[serde(rename = "CI")]
    pub ci: f64,
    #[serde(rename = "CR")]
    pub cr: f64,
    #[serde(rename = "RI")]
    pub ri: Option<f64>,
    pub weights: Vec<f64>,
    pub items: Vec<WeightedItemDto>,
    pub ok: bool,
}

impl From<CalculationOutcome> for CalcResponse {
    fn from(outcome: CalculationOutcome) -> Self {
        Self {
            n: outcome.n,
            lambda_max: outcome.lambda_max,
            ci: outcome.ci,
            cr: outcome.cr,
            ri: outcome.ri,
            weights: outcome.weights,
            items: outcome.items.into_iter().map(Into::into).collect(),
            ok: outcome.ok,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightedItemDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub weight: f64,
}

impl From<WeightedCriterion> for WeightedItemDto {
    fn from(item: WeightedCriterion) -> Self {
        Self {
            id: item.id,
            code: item.code,
            name: item.name,
            description: item.description,
            weight: item.weight,
        }
    }
}

/// Consistency rejection: an error message plus the full diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedCalcResponse {
    pub error: String,
    pub code: String,
    #[serde(flatten)]
    pub result: CalcResponse,
}

/// Result of a save operation.
#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    pub ok: bool,
    pub session_id: String,
    pub saved: usize,
    pub rows: Vec<SavedRowDto>,
}

impl From<SaveWeightsResult> for SaveResponse {
    fn from(result: SaveWeightsResult) -> Self {
        Self {
            ok: true,
            session_id: result.session_id,
            saved: result.saved,
            rows: result.rows.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedRowDto {
    pub id: i64,
    pub session_id: String,
    pub criterion_id: i32,
    pub weight: f64,
    pub created_at: String,
}

impl From<SavedWeightRow> for SavedRowDto {
    fn from(row: SavedWeightRow) -> Self {
        Self {
            id: row.id,
            session_id: row.session_id,
            criterion_id: row.criterion_id,
            weight: row.weight,
            created_at: row.created_at.to_rfc3339(),
        }
    }
}

/// The latest saved session, aligned to the live criteria order.
#[derive(Debug, Clone, Serialize)]
pub struct LatestSessionResponse {
    pub ok: bool,
    pub session_id: Option<String>,
    pub items: Vec<SessionItemDto>,
}

impl From<LatestSessionView> for LatestSessionResponse {
    fn from(view: LatestSessionView) -> Self {
        Self {
            ok: true,
            session_id: view.session_id,
            items: view.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionItemDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub weight: f64,
}

impl From<SessionWeightItem> for SessionItemDto {
    fn from(item: SessionWeightItem) -> Self {
        Self {
            id: item.id,
            code: item.code,
            name: item.name,
            weight: item.weight,
        }
    }
}

/// Structured failure body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            error: err.message.clone(),
            code: err.code.to_string(),
            details: err.details.clone(),
        }
    }
}
