//! Integration tests for keyrank-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use keyrank_config::{Config, ConfigError, ConfigWarning, ReportFormat, parse_overrides_file};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Temporary root, removed on drop.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_root_config_only() {
    let env = TestEnv::new();
    let data = env.create_file("keywords.csv", "소분류,연관키워드\n1월,차박텐트\n");
    env.create_file(
        ".keyrank.toml",
        r#"
root = true

[data]
path = "keywords.csv"

[report]
format = "list"
"#,
    );

    let config = Config::load(env.path()).unwrap();
    assert_eq!(config.data.path, Some(data.canonicalize().unwrap()));
    assert_eq!(config.report.format, ReportFormat::List);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
    assert!(config.validate().is_empty());
}

#[test]
fn test_nested_configs_merge_by_precedence() {
    let env = TestEnv::new();
    env.create_file(
        ".keyrank.toml",
        r#"
root = true

[report]
max_buckets = 6
format = "json"

[overrides."차박텐트"]
"캠핑" = 4
"#,
    );
    env.create_file(
        "campaign/.keyrank.toml",
        r#"
[report]
max_buckets = 2

[overrides."차박텐트"]
"캠핑" = 0
"#,
    );
    let cwd = env.create_dir("campaign/march");

    let config = Config::load(&cwd).unwrap();
    assert_eq!(config.report.max_buckets, 2);
    assert_eq!(config.report.format, ReportFormat::Json);
    assert_eq!(config.overrides["차박텐트"]["캠핑"], 0);
    assert_eq!(
        config.validate(),
        vec![ConfigWarning::NoDataConfigured]
    );
}

#[test]
fn test_invalid_tier_is_an_error() {
    let env = TestEnv::new();
    env.create_file(
        ".keyrank.toml",
        "root = true\n\n[overrides.\"차박텐트\"]\n\"캠핑\" = 1\n",
    );

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTier { value: 1, .. }));
    assert!(err.to_string().contains("캠핑"));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let env = TestEnv::new();
    let path = env.create_file(".keyrank.toml", "root = true\n[report\n");

    let err = Config::load_from_files(&[path]).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
}

#[test]
fn test_missing_data_path_warns() {
    let env = TestEnv::new();
    env.create_file(
        ".keyrank.toml",
        "root = true\n\n[data]\npath = \"exports/keywords.csv\"\n",
    );

    let config = Config::load(env.path()).unwrap();
    assert_eq!(
        config.data.path,
        Some(env.path().join("exports/keywords.csv"))
    );
    assert!(matches!(
        config.validate()[..],
        [ConfigWarning::DataPathMissing { .. }]
    ));
}

#[test]
fn test_standalone_overrides_file() {
    let env = TestEnv::new();
    let path = env.create_file(
        "curated.toml",
        "[\"데오드란트\"]\n\"바디미스트\" = 3\n\"데오드란트\" = 5\n",
    );

    let overrides = parse_overrides_file(&path).unwrap();
    assert_eq!(overrides["데오드란트"].len(), 2);

    let missing = parse_overrides_file(&env.path().join("absent.toml")).unwrap_err();
    assert!(matches!(missing, ConfigError::ReadFile { .. }));
}

#[test]
fn test_builtin_overrides_can_be_disabled() {
    let env = TestEnv::new();
    env.create_file(
        ".keyrank.toml",
        "root = true\n\n[settings]\nbuiltin_overrides = false\n",
    );

    let config = Config::load(env.path()).unwrap();
    assert!(config.effective_overrides().is_empty());
    assert!(!config.settings_to_toml().contains("차박텐트"));
}
