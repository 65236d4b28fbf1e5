//! Path resolution for dataset paths.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a dataset path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/data.csv`) - expanded to home directory
/// - Relative paths (`./data.csv`, `../shared/data.csv`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// Existing paths are canonicalized. A path that does not exist yet is returned joined but
/// unresolved; validation reports it.
pub fn resolve_data_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    if !absolute.exists() {
        return Ok(absolute);
    }

    absolute
        .canonicalize()
        .map_err(|source| ConfigError::PathResolution {
            path: absolute.clone(),
            source,
        })
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
pub fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_resolve_relative_path() {
        let test_dir = TestDir::new();
        let data = test_dir.create_file("data/keywords.csv", "소분류,연관키워드\n");

        let resolved = resolve_data_path("./data/keywords.csv", test_dir.path()).unwrap();
        assert_eq!(resolved, data.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let test_dir = TestDir::new();
        let shared = test_dir.create_file("shared/keywords.csv", "");
        let project = test_dir.create_dir("project");

        let resolved = resolve_data_path("../shared/keywords.csv", &project).unwrap();
        assert_eq!(resolved, shared.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_absolute_path() {
        let test_dir = TestDir::new();
        let data = test_dir.create_file("keywords.csv", "");
        let absolute = data.canonicalize().unwrap();

        let resolved = resolve_data_path(absolute.to_str().unwrap(), Path::new("/other")).unwrap();
        assert_eq!(resolved, absolute);
    }

    #[test]
    fn test_resolve_missing_path_is_kept() {
        let test_dir = TestDir::new();
        let resolved = resolve_data_path("later.csv", test_dir.path()).unwrap();
        assert_eq!(resolved, test_dir.path().join("later.csv"));
    }

    #[test]
    fn test_expand_tilde() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(expand_tilde("~").unwrap(), home);
        assert_eq!(expand_tilde("~/data/k.csv").unwrap(), home.join("data/k.csv"));
    }

    #[test]
    fn test_expand_no_tilde() {
        assert_eq!(expand_tilde("./k.csv").unwrap(), PathBuf::from("./k.csv"));
        assert_eq!(expand_tilde("foo/~/bar").unwrap(), PathBuf::from("foo/~/bar"));
    }
}
