//! # popdep-api: Binary Entry Point
//!
//! Loads the population CSV, then starts the Axum HTTP server.
//! A table that fails to load stops the process before it binds.

use anyhow::Context;
use popdep_api::config::AppConfig;
use popdep_api::middleware::tracing_layer;
use popdep_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;

    tracing_layer::init(config.log_format);

    tracing::info!(path = %config.data_path.display(), "loading population table");

    let state = AppState::load(config).context("population table load failed")?;

    tracing::info!(
        rows = state.table.len(),
        departments = state.table.listed_count(),
        "population table loaded"
    );

    let addr = state.config.socket_addr();
    let app = popdep_api::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    tracing::info!("popdep API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
