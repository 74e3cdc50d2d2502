//! HTTP routes for the AHP endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{calc, get_criteria, health, latest, save, AhpHandlers};

/// Creates the AHP router, mounted under `/api/ahp`.
pub fn ahp_routes(handlers: AhpHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/criteria", get(get_criteria))
        .route("/calc", post(calc))
        .route("/save", post(save))
        .route("/latest", get(latest))
        .with_state(handlers)
}
