//! Temporary component trees.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A component tree in a temporary directory, removed on drop.
pub struct ComponentTree {
    temp: TempDir,
}

impl ComponentTree {
    /// Create an empty tree.
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("Failed to create temporary directory")?;
        Ok(Self {
            temp,
        })
    }

    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of `relative`.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// Write a file, creating its directories.
    ///
    /// # Panics
    ///
    /// Panics when the file cannot be written.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    /// Create a directory.
    ///
    /// # Panics
    ///
    /// Panics when the directory cannot be created.
    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.join(relative)).unwrap();
    }

    /// Read a file.
    ///
    /// # Panics
    ///
    /// Panics when the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.join(relative))
            .unwrap_or_else(|error| panic!("Failed to read {relative}: {error}"))
    }

    /// Whether a file or directory exists.
    pub fn exists(&self, relative: &str) -> bool {
        self.join(relative).exists()
    }

    /// Delete a file.
    ///
    /// # Panics
    ///
    /// Panics when the file cannot be removed.
    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.join(relative)).unwrap();
    }

    /// Rewrite a file with a modification time one second later than its
    /// current one, so the change is visible even on coarse-grained file
    /// systems.
    ///
    /// # Panics
    ///
    /// Panics when the file cannot be written.
    pub fn touch_write(&self, relative: &str, content: &str) {
        let path = self.join(relative);
        let before = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        self.write(relative, content);

        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(before + Duration::from_secs(1)).unwrap();
    }

    /// Every file below the tree root with its content, sorted by path.
    ///
    /// # Panics
    ///
    /// Panics when the tree cannot be walked.
    pub fn contents(&self) -> Vec<(String, String)> {
        let mut files: Vec<(String, String)> = walkdir::WalkDir::new(self.path())
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative = entry
                    .path()
                    .strip_prefix(self.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/");
                (relative, fs::read_to_string(entry.path()).unwrap())
            })
            .collect();
        files.sort();
        files
    }
}
