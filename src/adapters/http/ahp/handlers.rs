//! HTTP handlers for the AHP endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::ahp::{
    CalculateWeightsCommand, CalculateWeightsHandler, CalculationVerdict, GetCriteriaHandler,
    GetLatestSessionHandler, SaveWeightsCommand, SaveWeightsHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{
    CalcRequest, CalcResponse, CriteriaResponse, ErrorResponse, HealthResponse,
    LatestSessionResponse, RejectedCalcResponse, SaveRequest, SaveResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AhpHandlers {
    get_criteria: Arc<GetCriteriaHandler>,
    calculate: Arc<CalculateWeightsHandler>,
    save_weights: Arc<SaveWeightsHandler>,
    get_latest: Arc<GetLatestSessionHandler>,
}

impl AhpHandlers {
    pub fn new(
        get_criteria: Arc<GetCriteriaHandler>,
        calculate: Arc<CalculateWeightsHandler>,
        save_weights: Arc<SaveWeightsHandler>,
        get_latest: Arc<GetLatestSessionHandler>,
    ) -> Self {
        Self {
            get_criteria,
            calculate,
            save_weights,
            get_latest,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/ahp/health - module liveness probe
pub async fn health() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            module: "ahp",
        }),
    )
        .into_response()
}

/// GET /api/ahp/criteria - ordered criteria list
pub async fn get_criteria(State(handlers): State<AhpHandlers>) -> Response {
    match handlers.get_criteria.handle().await {
        Ok(criteria) => (
            StatusCode::OK,
            Json(CriteriaResponse {
                criteria: criteria.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => handle_ahp_error(e),
    }
}

/// POST /api/ahp/calc - validate a matrix and derive weights
pub async fn calc(
    State(handlers): State<AhpHandlers>,
    Json(req): Json<CalcRequest>,
) -> Response {
    let cmd = CalculateWeightsCommand {
        matrix: req.matrix,
        enforce_saaty: req.enforce_saaty,
        require_cr: req.require_cr,
    };

    match handlers.calculate.handle(cmd).await {
        Ok(CalculationVerdict::Accepted(outcome)) => {
            (StatusCode::OK, Json(CalcResponse::from(outcome))).into_response()
        }
        Ok(CalculationVerdict::Rejected(outcome)) => {
            // Business-rule rejection, distinct from an input error: the
            // caller still gets every diagnostic.
            let response = RejectedCalcResponse {
                error: format!(
                    "CR = {:.2}% exceeds the 10% consistency threshold",
                    outcome.cr * 100.0
                ),
                code: ErrorCode::ConsistencyRejected.to_string(),
                result: outcome.into(),
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// POST /api/ahp/save - persist a weight vector as a session
pub async fn save(State(handlers): State<AhpHandlers>, Json(req): Json<SaveRequest>) -> Response {
    let cmd = SaveWeightsCommand {
        weights: req.weights,
        session_id: req.session_id,
    };

    match handlers.save_weights.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(SaveResponse::from(result))).into_response(),
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/ahp/latest - most recently saved session
pub async fn latest(State(handlers): State<AhpHandlers>) -> Response {
    match handlers.get_latest.handle().await {
        Ok(view) => (StatusCode::OK, Json(LatestSessionResponse::from(view))).into_response(),
        Err(e) => handle_ahp_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn handle_ahp_error(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed | ErrorCode::SizeMismatch => StatusCode::BAD_REQUEST,
        ErrorCode::ConsistencyRejected => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(code = %err.code, message = %err.message, "ahp request failed");
    }

    (status, Json(ErrorResponse::from(&err))).into_response()
}
