//! # Error Types
//!
//! Everything that can go wrong while loading the population table.
//! Loading is all-or-nothing: any of these aborts startup.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while reading or validating the population CSV.
#[derive(Error, Debug)]
pub enum PopulationError {
    /// The CSV file could not be opened.
    #[error("cannot read population file {path}: {source}")]
    Io {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input (bad UTF-8, IO mid-read, ...).
    #[error("malformed population CSV: {0}")]
    Csv(#[from] csv::Error),

    /// One of the two header rows is absent.
    #[error("population CSV is missing header row {row}")]
    MissingHeader {
        /// 1-based header row number.
        row: usize,
    },

    /// A column required to build department records is absent.
    #[error("population CSV has no column ({group}, {label})")]
    MissingColumn {
        /// Group label, e.g. `Hommes`.
        group: String,
        /// Sub-label, e.g. `75+`.
        label: String,
    },
}

impl PopulationError {
    pub(crate) fn missing_column(group: &str, label: &str) -> Self {
        Self::MissingColumn {
            group: group.to_string(),
            label: label.to_string(),
        }
    }
}
