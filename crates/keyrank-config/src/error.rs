//! Error types for keyrank configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// An override assigns a value that is not a relevance tier.
    #[error("invalid tier {value} for '{candidate}' under override '{target}' (expected 0, 3, 4 or 5)")]
    InvalidTier {
        /// Override target.
        target: String,
        /// Candidate keyword.
        candidate: String,
        /// The rejected value.
        value: i64,
    },

    /// The data delimiter is not a single ASCII character.
    #[error("invalid delimiter {delimiter:?}: must be a single ASCII character")]
    InvalidDelimiter {
        /// The rejected delimiter.
        delimiter: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Failed to canonicalize a path.
    #[error("failed to resolve path {path}: {source}")]
    PathResolution {
        /// The path that could not be resolved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
