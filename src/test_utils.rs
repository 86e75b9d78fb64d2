//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a text file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file with raw bytes, creating parent directories as needed.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate `count` files spread over nested directories, plus a few
    /// entries that the default rules exclude.
    pub fn populate(&self, count: usize) {
        for i in 0..count {
            let path = format!("src/module_{}/file_{}.rs", i % 10, i);
            self.add_file(&path, &format!("//! File {}\nfn f{}() {{}}\n", i, i));
        }
        self.add_file("node_modules/dep/index.js", "module.exports = {};");
        self.add_file(".git/HEAD", "ref: refs/heads/main");
        self.add_file("app.log", "log line");
        self.add_file(".env", "SECRET=1");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
