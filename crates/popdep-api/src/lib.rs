//! # popdep-api: Population by Department over HTTP
//!
//! Serves the INSEE department population estimates loaded by
//! `popdep-core` as JSON.
//!
//! ## API Surface
//!
//! | Route                          | Module                   | Purpose                 |
//! |--------------------------------|--------------------------|-------------------------|
//! | `GET /api/population`          | [`routes::population`]   | Listed departments      |
//! | `GET /api/population/{dept_id}`| [`routes::population`]   | One department by code  |
//! | `GET /api/france`              | [`routes::population`]   | National totals         |
//! | `GET /openapi.json`            | [`openapi`]              | OpenAPI document        |
//! | `GET /health/*`                | this module              | Liveness / readiness    |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let cors = middleware::cors::layer(state.config.cors_origin.clone());

    let api = Router::new()
        .merge(routes::population::router())
        .merge(openapi::router());

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::tracing_layer::layer())
                .layer(cors),
        )
        .with_state(state)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 once the table holds at least one listed department.
async fn readiness(State(state): State<AppState>) -> Result<&'static str, AppError> {
    if state.table.listed_count() == 0 {
        return Err(AppError::ServiceUnavailable(
            "population table has no department rows".to_string(),
        ));
    }
    Ok("ready")
}
