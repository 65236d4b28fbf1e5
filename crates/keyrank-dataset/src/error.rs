//! Error types for dataset loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a keyword table.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to open a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid delimited text.
    #[error("failed to parse {path}: {source}")]
    Csv {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("file has no header row: {path}")]
    Empty {
        /// Path to the empty file.
        path: PathBuf,
    },

    /// Required columns are absent from the header row.
    #[error(
        "missing required columns: {} (available: {})",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        /// Required column names that were not found.
        missing: Vec<String>,
        /// Header names present in the file.
        available: Vec<String>,
    },
}
