//! Configuration system for keyrank.
//!
//! keyrank uses TOML configuration files named `.keyrank.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.keyrank.toml` files found, then loading `~/.keyrank.toml` as the global config with
//! lowest precedence.
//!
//! Override tiers are kept as plain integers here (validated to 0, 3, 4 or 5); callers turn
//! them into a ranking table.

#![warn(missing_docs)]

mod builtin;
mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

pub use builtin::BUILTIN_OVERRIDES;
pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawData, RawOverrides, RawReport, RawSettings, parse_config_file,
    parse_config_str, parse_overrides_file, parse_overrides_str,
};
pub use resolve::{expand_tilde, resolve_data_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Curated tiers: normalized target -> candidate -> tier.
pub type OverrideMap = BTreeMap<String, BTreeMap<String, u8>>;

/// Top-level merged configuration for keyrank.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.keyrank.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Dataset location and layout.
    pub data: DataSettings,
    /// Report rendering settings.
    pub report: ReportSettings,
    /// Overrides defined in config files (built-in seeds not included).
    pub overrides: OverrideMap,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.keyrank.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Returns the built-in seeds (when enabled) layered under the configured overrides.
    ///
    /// A target present in both takes the configured mapping entirely.
    pub fn effective_overrides(&self) -> OverrideMap {
        let mut result = OverrideMap::new();
        if self.settings.builtin_overrides {
            for (target, mapping) in BUILTIN_OVERRIDES {
                result.insert(
                    (*target).to_string(),
                    mapping
                        .iter()
                        .map(|(candidate, tier)| ((*candidate).to_string(), *tier))
                        .collect(),
                );
            }
        }
        result.extend(self.overrides.clone());
        result
    }

    /// Serializes the effective settings and overrides to TOML format.
    ///
    /// Output follows the `.keyrank.toml` layout; maps are sorted for deterministic output.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableConfig {
            settings: &self.settings,
            data: &self.data,
            report: &self.report,
            overrides: self.effective_overrides(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// General settings for keyrank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Whether the built-in curated overrides seed the table.
    pub builtin_overrides: bool,
    /// Unit marker for the bucket ordering key.
    pub bucket_unit: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            builtin_overrides: true,
            bucket_unit: String::from("월"),
        }
    }
}

/// Where the keyword table lives and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSettings {
    /// Resolved dataset path, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Accepted bucket header names.
    pub bucket_column: Vec<String>,
    /// Accepted candidate header names.
    pub candidate_column: Vec<String>,
    /// Accepted category header names.
    pub category_column: Vec<String>,
    /// Field delimiter (ASCII).
    pub delimiter: char,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: None,
            bucket_column: vec![String::from("소분류")],
            candidate_column: vec![String::from("연관키워드")],
            category_column: vec![String::from("카테고리")],
            delimiter: ',',
        }
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSettings {
    /// Maximum buckets to display (0 = all).
    pub max_buckets: usize,
    /// Output format.
    pub format: ReportFormat,
}

/// How search results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One table row per bucket.
    #[default]
    Table,
    /// One line per tier, grouped by bucket.
    List,
    /// Machine-readable JSON.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::List => "list",
            Self::Json => "json",
        })
    }
}

/// Internal struct for TOML serialization of the effective configuration.
#[derive(Serialize)]
struct SerializableConfig<'a> {
    /// General settings.
    settings: &'a Settings,
    /// Dataset settings.
    data: &'a DataSettings,
    /// Report settings.
    report: &'a ReportSettings,
    /// Effective overrides, sorted.
    overrides: OverrideMap,
}
