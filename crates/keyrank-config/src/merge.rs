//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    Config, ConfigError, DataSettings, OverrideMap, ReportSettings, Settings,
    parse::{RawConfig, RawData, RawOverrides, RawReport, RawSettings},
    resolve::resolve_data_path,
};

/// Integer values an override may assign.
const VALID_TIERS: [i64; 4] = [0, 3, 4, 5];

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - `data.path`: first definition wins, resolved against its own file's directory
/// - Overrides: merged by normalized target, first definition wins completely
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs);
    let data = merge_data(configs)?;
    let report = merge_report(configs);
    let overrides = merge_overrides(configs)?;
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        settings,
        data,
        report,
        overrides,
        config_root,
    })
}

/// Merges general settings, taking first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Settings {
    let mut result = Settings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref settings) = parsed.config.settings {
            apply_raw_settings(&mut result, settings);
        }
    }

    result
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(v) = raw.builtin_overrides {
        result.builtin_overrides = v;
    }
    if let Some(ref v) = raw.bucket_unit {
        result.bucket_unit = v.clone();
    }
}

/// Merges dataset settings.
fn merge_data(configs: &[ParsedConfig]) -> Result<DataSettings, ConfigError> {
    let mut result = DataSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref data) = parsed.config.data {
            apply_raw_data(&mut result, data)?;
        }
    }

    // Only the winning path is resolved, relative to the file that defined it.
    result.path = configs
        .iter()
        .find_map(|parsed| {
            let path = parsed.config.data.as_ref()?.path.as_deref()?;
            Some(resolve_data_path(path, parsed.dir()))
        })
        .transpose()?;

    Ok(result)
}

/// Applies raw dataset settings to result, except the path.
fn apply_raw_data(result: &mut DataSettings, raw: &RawData) -> Result<(), ConfigError> {
    if let Some(ref v) = raw.bucket_column {
        result.bucket_column = v.clone();
    }
    if let Some(ref v) = raw.candidate_column {
        result.candidate_column = v.clone();
    }
    if let Some(ref v) = raw.category_column {
        result.category_column = v.clone();
    }
    if let Some(ref v) = raw.delimiter {
        result.delimiter = parse_delimiter(v)?;
    }
    Ok(())
}

/// Validates a delimiter string: exactly one ASCII character.
fn parse_delimiter(delimiter: &str) -> Result<char, ConfigError> {
    let mut chars = delimiter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(ConfigError::InvalidDelimiter {
            delimiter: delimiter.to_string(),
        }),
    }
}

/// Merges report settings.
fn merge_report(configs: &[ParsedConfig]) -> ReportSettings {
    let mut result = ReportSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref report) = parsed.config.report {
            apply_raw_report(&mut result, report);
        }
    }

    result
}

/// Applies raw report settings to result.
fn apply_raw_report(result: &mut ReportSettings, raw: &RawReport) {
    if let Some(v) = raw.max_buckets {
        result.max_buckets = v;
    }
    if let Some(v) = raw.format {
        result.format = v;
    }
}

/// Merges overrides from all configs.
///
/// Targets are merged by normalized name - first definition wins completely, so a nearer
/// file can replace (or, with an empty table, clear) a mapping from a farther one.
fn merge_overrides(configs: &[ParsedConfig]) -> Result<OverrideMap, ConfigError> {
    let mut result = OverrideMap::new();

    // Iterate in precedence order (highest first) - first definition wins
    for parsed in configs {
        let Some(ref raw) = parsed.config.overrides else {
            continue;
        };
        for (target, mapping) in convert_overrides(raw)? {
            result.entry(target).or_insert(mapping);
        }
    }

    Ok(result)
}

/// Normalizes override targets and validates every tier value.
pub(crate) fn convert_overrides(raw: &RawOverrides) -> Result<OverrideMap, ConfigError> {
    // Sorted so that targets colliding after normalization merge deterministically.
    let sorted: BTreeMap<_, _> = raw.iter().collect();
    let mut result = OverrideMap::new();

    for (target, mapping) in sorted {
        let entry = result.entry(normalize_target(target)).or_default();
        for (candidate, &value) in mapping {
            entry.insert(candidate.clone(), checked_tier(target, candidate, value)?);
        }
    }

    Ok(result)
}

/// Trims and lowercases an override target.
pub(crate) fn normalize_target(target: &str) -> String {
    target.trim().to_lowercase()
}

/// Converts a raw tier value, rejecting anything outside 0, 3, 4, 5.
fn checked_tier(target: &str, candidate: &str, value: i64) -> Result<u8, ConfigError> {
    u8::try_from(value)
        .ok()
        .filter(|_| VALID_TIERS.contains(&value))
        .ok_or_else(|| ConfigError::InvalidTier {
            target: target.to_string(),
            candidate: candidate.to_string(),
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReportFormat, parse::parse_config_str, test_support::TestDir};

    fn parsed(path: PathBuf, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path,
            config: parse_config_str(toml, Path::new("test")).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty_configs() {
        let result = merge_configs(&[]).unwrap();
        assert!(result.settings.builtin_overrides);
        assert!(result.overrides.is_empty());
        assert!(result.config_root.is_none());
    }

    #[test]
    fn test_merge_scalar_override() {
        let test_dir = TestDir::new();
        let high = parsed(
            test_dir.path().join("project/.keyrank.toml"),
            "[report]\nmax_buckets = 4\n",
        );
        let low = parsed(
            test_dir.path().join(".keyrank.toml"),
            "[report]\nmax_buckets = 12\nformat = \"list\"\n\n[settings]\nbucket_unit = \"주\"\n",
        );

        let result = merge_configs(&[high, low]).unwrap();
        assert_eq!(result.report.max_buckets, 4);
        assert_eq!(result.report.format, ReportFormat::List);
        assert_eq!(result.settings.bucket_unit, "주");
        assert_eq!(result.config_root, Some(test_dir.path().join("project")));
    }

    #[test]
    fn test_merge_data_path_relative_to_defining_file() {
        let test_dir = TestDir::new();
        let data = test_dir.create_file("shared/keywords.csv", "소분류,연관키워드\n");
        let high = parsed(
            test_dir.path().join("project/.keyrank.toml"),
            "[data]\ndelimiter = \";\"\n",
        );
        let low = parsed(
            test_dir.path().join("shared/.keyrank.toml"),
            "[data]\npath = \"keywords.csv\"\n",
        );

        let result = merge_configs(&[high, low]).unwrap();
        assert_eq!(result.data.path, Some(data.canonicalize().unwrap()));
        assert_eq!(result.data.delimiter, ';');
        assert_eq!(result.data.candidate_column, vec!["연관키워드"]);
    }

    #[test]
    fn test_merge_rejects_bad_delimiter() {
        let test_dir = TestDir::new();
        let config = parsed(
            test_dir.path().join(".keyrank.toml"),
            "[data]\ndelimiter = \"::\"\n",
        );
        assert!(matches!(
            merge_configs(&[config]),
            Err(ConfigError::InvalidDelimiter { .. })
        ));
    }

    #[test]
    fn test_merge_overrides_first_wins_completely() {
        let test_dir = TestDir::new();
        let high = parsed(
            test_dir.path().join("project/.keyrank.toml"),
            "[overrides.\"차박텐트\"]\n\"캠핑\" = 4\n",
        );
        let low = parsed(
            test_dir.path().join(".keyrank.toml"),
            "[overrides.\"차박텐트\"]\n\"차박텐트\" = 5\n\"텐트\" = 3\n\n[overrides.\"데오드란트\"]\n\"바디미스트\" = 4\n",
        );

        let result = merge_configs(&[high, low]).unwrap();
        let camping = &result.overrides["차박텐트"];
        assert_eq!(camping.len(), 1);
        assert_eq!(camping["캠핑"], 4);
        assert_eq!(result.overrides["데오드란트"]["바디미스트"], 4);
    }

    #[test]
    fn test_merge_normalizes_targets() {
        let test_dir = TestDir::new();
        let high = parsed(
            test_dir.path().join("a/.keyrank.toml"),
            "[overrides.\" Deodorant \"]\n\"Body Mist\" = 3\n",
        );
        let low = parsed(
            test_dir.path().join(".keyrank.toml"),
            "[overrides.deodorant]\n\"Spray\" = 5\n",
        );

        let result = merge_configs(&[high, low]).unwrap();
        assert_eq!(result.overrides.len(), 1);
        let mapping = &result.overrides["deodorant"];
        assert_eq!(mapping.get("Body Mist"), Some(&3));
        assert!(mapping.get("Spray").is_none());
    }

    #[test]
    fn test_merge_rejects_invalid_tier() {
        let test_dir = TestDir::new();
        let config = parsed(
            test_dir.path().join(".keyrank.toml"),
            "[overrides.\"차박텐트\"]\n\"캠핑\" = 7\n",
        );
        let err = merge_configs(&[config]).unwrap_err();
        match err {
            ConfigError::InvalidTier {
                target,
                candidate,
                value,
            } => {
                assert_eq!(target, "차박텐트");
                assert_eq!(candidate, "캠핑");
                assert_eq!(value, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("\t").unwrap(), '\t');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("、").is_err());
    }
}
