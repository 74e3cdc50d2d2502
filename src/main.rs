//! Geodecide backend entry point.
//!
//! Loads configuration, connects to PostgreSQL, wires the AHP engine's
//! handlers to their adapters, and serves the HTTP API.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use geodecide::adapters::http::{ahp_routes, AhpHandlers};
use geodecide::adapters::postgres::{PostgresCriterionCatalog, PostgresWeightStore};
use geodecide::application::handlers::ahp::{
    CalculateWeightsHandler, GetCriteriaHandler, GetLatestSessionHandler, SaveWeightsHandler,
};
use geodecide::config::{AppConfig, ServerConfig};
use geodecide::domain::ahp::SystemSessionIdMinter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    // Fail fast when the database is unreachable.
    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::info!("database connection established");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    let catalog = Arc::new(PostgresCriterionCatalog::new(pool.clone()));
    let store = Arc::new(PostgresWeightStore::new(pool));
    let minter = Arc::new(SystemSessionIdMinter);

    let handlers = AhpHandlers::new(
        Arc::new(GetCriteriaHandler::new(catalog.clone())),
        Arc::new(CalculateWeightsHandler::new(catalog.clone())),
        Arc::new(SaveWeightsHandler::new(
            catalog.clone(),
            store.clone(),
            minter,
        )),
        Arc::new(GetLatestSessionHandler::new(catalog, store)),
    );

    let app = Router::new()
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({ "ok": true })) }),
        )
        .nest("/api/ahp", ahp_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.server))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                ))),
        );

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "geodecide listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
