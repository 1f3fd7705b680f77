//! # Check Subcommand
//!
//! Loads the CSV exactly as the server would at startup and reports the
//! repaired header and row counts.

use std::io::Write;

use clap::Args;
use popdep_core::PopulationTable;
use serde::Serialize;

use crate::output::write_json;
use crate::DataArgs;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

/// What `check` found in the file.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub path: String,
    /// Data rows, including subtotals and footnotes.
    pub rows: usize,
    /// Rows that `/api/population` would return.
    pub departments: usize,
    /// Repaired `(group, label)` headers.
    pub columns: Vec<String>,
}

impl CheckReport {
    pub fn new(path: impl Into<String>, table: &PopulationTable) -> Self {
        Self {
            path: path.into(),
            rows: table.len(),
            departments: table.listed_count(),
            columns: table.columns().iter().map(ToString::to_string).collect(),
        }
    }
}

pub fn run<W: Write>(args: &CheckArgs, out: &mut W) -> anyhow::Result<()> {
    let table = args.data.load()?;
    let report = CheckReport::new(args.data.data.display().to_string(), &table);
    if report.departments == 0 {
        tracing::warn!(path = %report.path, "no department rows found");
    }
    write_json(out, &report, args.data.compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../popdep-core/tests/fixtures/estim-pop-dep-sample.csv")
    }

    #[test]
    fn reports_counts_and_columns() {
        let args = CheckArgs {
            data: DataArgs {
                data: fixture_path(),
                compact: true,
            },
        };
        let mut buf = Vec::new();
        run(&args, &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["rows"], 8);
        assert_eq!(json["departments"], 6);
        assert_eq!(json["columns"][1], "(Départements, Nom)");
        assert_eq!(json["columns"].as_array().unwrap().len(), 20);
    }

    #[test]
    fn missing_file_fails_with_path_in_message() {
        let args = CheckArgs {
            data: DataArgs {
                data: PathBuf::from("/no/such/file.csv"),
                compact: true,
            },
        };
        let mut buf = Vec::new();
        let err = run(&args, &mut buf).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/file.csv"));
    }
}
