//! # popdep-cli: Population Table Command-Line Interface
//!
//! Offline access to the same queries the HTTP API serves, reading the CSV
//! directly. Useful for checking a new INSEE release before deploying it.
//!
//! ## Subcommands
//!
//! - `list`: listed departments, as the API's `/api/population`
//! - `get`: one department by code, as `/api/population/{dept_id}`
//! - `france`: national totals, as `/api/france`
//! - `check`: load the file and report what was found
//!
//! ## Crate Policy
//!
//! - Argument parsing lives next to each handler; `main.rs` only dispatches.
//! - Handlers write to a caller-supplied writer so tests can capture output.

pub mod check;
pub mod output;
pub mod query;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use popdep_core::PopulationTable;

/// Default location of the population CSV.
pub const DEFAULT_DATA_PATH: &str = "data/estim-pop-dep-2023.csv";

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Population CSV to read.
    #[arg(long, env = "POPDEP_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

impl DataArgs {
    /// Load the table named by `--data`.
    pub fn load(&self) -> anyhow::Result<PopulationTable> {
        tracing::debug!(path = %self.data.display(), "loading population table");
        PopulationTable::from_path(&self.data)
            .with_context(|| format!("failed to load {}", self.data.display()))
    }
}
