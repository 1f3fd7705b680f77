//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The population table is loaded before the listener binds and never
//! changes afterwards, so handlers share it through an `Arc` without any
//! lock.

use std::sync::Arc;

use popdep_core::{PopulationError, PopulationTable};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Department table, read-only for the life of the process.
    pub table: Arc<PopulationTable>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wrap an already loaded table.
    pub fn new(table: PopulationTable, config: AppConfig) -> Self {
        Self {
            table: Arc::new(table),
            config: Arc::new(config),
        }
    }

    /// Load the table from `config.data_path`.
    ///
    /// A missing or malformed file is an error; there is no degraded mode.
    pub fn load(config: AppConfig) -> Result<Self, PopulationError> {
        let table = PopulationTable::from_path(&config.data_path)?;
        Ok(Self::new(table, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    fn config_for(path: PathBuf) -> AppConfig {
        AppConfig {
            data_path: path,
            ..AppConfig::default()
        }
    }

    #[test]
    fn load_reads_configured_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../popdep-core/tests/fixtures/estim-pop-dep-sample.csv");
        let state = AppState::load(config_for(path)).unwrap();
        assert_eq!(state.table.listed_count(), 6);
    }

    #[test]
    fn load_failure_reports_context_and_path_once() {
        let err = AppState::load(config_for(PathBuf::from("/no/such/estim.csv")))
            .context("population table load failed")
            .unwrap_err();
        let message = format!("{err:#}");

        assert!(message.starts_with("population table load failed: "));
        assert_eq!(message.matches("/no/such/estim.csv").count(), 1);
    }
}
