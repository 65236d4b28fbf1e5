//! Test helpers shared across keyrank-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// Temporary directory utility for tests.
pub struct TestDir {
    /// Temporary root, removed on drop.
    root: TempDir,
}

impl TestDir {
    /// Creates a new temporary directory tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the path to the root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory relative to the root.
    pub fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes `content` to a file relative to the root, creating parent directories.
    pub fn create_file(&self, rel_path: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes a `.keyrank.toml` with `content` in `rel_dir` ("" for the root).
    pub fn create_config_with_content(&self, rel_dir: &str, content: &str) -> PathBuf {
        self.create_file(Path::new(rel_dir).join(CONFIG_FILENAME), content)
    }

    /// Writes a comment-only `.keyrank.toml` in `rel_dir`.
    pub fn create_config(&self, rel_dir: &str) -> PathBuf {
        self.create_config_with_content(rel_dir, "# test config\n")
    }

    /// Writes a comment-only `.keyrank.toml` at the root.
    pub fn create_config_at_root(&self) -> PathBuf {
        self.create_config("")
    }

    /// Writes a `root = true` config in `rel_dir`.
    pub fn create_root_config(&self, rel_dir: &str) -> PathBuf {
        self.create_config_with_content(rel_dir, "root = true\n")
    }
}
