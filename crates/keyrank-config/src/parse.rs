//! Configuration file parsing.
//!
//! Parses individual `.keyrank.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, OverrideMap, ReportFormat, merge::convert_overrides};

/// Raw override tables: target -> candidate -> tier, exactly as written.
pub type RawOverrides = HashMap<String, HashMap<String, i64>>;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Dataset section.
    pub data: Option<RawData>,
    /// Report section.
    pub report: Option<RawReport>,
    /// Curated overrides.
    pub overrides: Option<RawOverrides>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Whether the built-in curated overrides seed the table.
    pub builtin_overrides: Option<bool>,
    /// Unit marker for the bucket ordering key.
    pub bucket_unit: Option<String>,
}

/// Raw dataset settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawData {
    /// Default dataset path, relative to the config file.
    pub path: Option<String>,
    /// Accepted bucket header names.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub bucket_column: Option<Vec<String>>,
    /// Accepted candidate header names.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub candidate_column: Option<Vec<String>>,
    /// Accepted category header names.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub category_column: Option<Vec<String>>,
    /// Field delimiter.
    pub delimiter: Option<String>,
}

/// Raw report settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReport {
    /// Maximum buckets to display (0 = all).
    pub max_buckets: Option<usize>,
    /// Output format.
    pub format: Option<ReportFormat>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = read(path)?;
    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Parses a standalone overrides file.
///
/// The file holds one table per target, each mapping candidate keywords to tiers:
///
/// ```toml
/// ["차박텐트"]
/// "캠핑" = 4
/// ```
pub fn parse_overrides_file(path: &Path) -> Result<OverrideMap, ConfigError> {
    let contents = read(path)?;
    parse_overrides_str(&contents, path)
}

/// Parses standalone overrides from a TOML string.
pub fn parse_overrides_str(contents: &str, path: &Path) -> Result<OverrideMap, ConfigError> {
    let raw: RawOverrides = toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    convert_overrides(&raw)
}

/// Reads a file, attaching its path to any error.
fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
