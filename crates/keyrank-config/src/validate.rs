//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The configured dataset does not exist or is not a file.
    DataPathMissing {
        /// Path that was configured.
        path: String,
    },
    /// An override table has a blank target, which no search can reach.
    EmptyOverrideTarget,
    /// An override table has a blank candidate.
    EmptyOverrideCandidate {
        /// Target whose mapping holds the blank candidate.
        target: String,
    },
    /// No dataset is configured; searches need `--data`.
    NoDataConfigured,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataPathMissing { path } => {
                write!(f, "data path does not exist: {path}")
            }
            Self::EmptyOverrideTarget => {
                write!(f, "override table with a blank target is never used")
            }
            Self::EmptyOverrideCandidate { target } => {
                write!(f, "override '{target}' has a blank candidate")
            }
            Self::NoDataConfigured => {
                write!(f, "no data path configured; pass --data to search")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match config.data.path {
        None => warnings.push(ConfigWarning::NoDataConfigured),
        Some(ref path) if !path.is_file() => warnings.push(ConfigWarning::DataPathMissing {
            path: path.display().to_string(),
        }),
        Some(_) => {}
    }

    for (target, mapping) in &config.overrides {
        if target.is_empty() {
            warnings.push(ConfigWarning::EmptyOverrideTarget);
        }
        if mapping.keys().any(|candidate| candidate.trim().is_empty()) {
            warnings.push(ConfigWarning::EmptyOverrideCandidate {
                target: target.clone(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, path::PathBuf};

    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_validate_empty_config() {
        let warnings = Config::default().validate();
        assert_eq!(warnings, vec![ConfigWarning::NoDataConfigured]);
    }

    #[test]
    fn test_validate_data_path_missing() {
        let mut config = Config::default();
        config.data.path = Some(PathBuf::from("/nonexistent/keywords-12345.csv"));

        let warnings = config.validate();
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ConfigWarning::DataPathMissing { .. }))
        );
    }

    #[test]
    fn test_validate_data_path_is_directory() {
        let test_dir = TestDir::new();
        let mut config = Config::default();
        config.data.path = Some(test_dir.create_dir("data"));
        assert!(matches!(
            config.validate()[..],
            [ConfigWarning::DataPathMissing { .. }]
        ));
    }

    #[test]
    fn test_validate_valid_data_path() {
        let test_dir = TestDir::new();
        let mut config = Config::default();
        config.data.path = Some(test_dir.create_file("k.csv", "소분류,연관키워드\n"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_blank_override_entries() {
        let test_dir = TestDir::new();
        let mut config = Config::default();
        config.data.path = Some(test_dir.create_file("k.csv", ""));
        config
            .overrides
            .insert(String::new(), BTreeMap::from([("캠핑".to_string(), 4)]));
        config.overrides.insert(
            "차박텐트".to_string(),
            BTreeMap::from([(" ".to_string(), 3)]),
        );

        let warnings = config.validate();
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::EmptyOverrideTarget,
                ConfigWarning::EmptyOverrideCandidate {
                    target: "차박텐트".into()
                },
            ]
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::EmptyOverrideCandidate {
            target: "차박텐트".into(),
        };
        assert_eq!(warning.to_string(), "override '차박텐트' has a blank candidate");
    }
}
