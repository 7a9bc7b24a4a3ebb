//! Path normalization and project discovery.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILE_NAME;

/// Normalizes a path by resolving `.` and `..` components.
///
/// This is purely lexical: the file system is not consulted and symbolic
/// links are not resolved.
///
/// # Examples
///
/// ```rust,no_run
/// use blockdeps_cli::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/project/./src/../src/blocks");
/// assert_eq!(normalize_path(path), PathBuf::from("/project/src/blocks"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                components.pop();
            }
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Finds the closest directory at or above `start` that contains
/// `blockdeps.toml`.
///
/// # Errors
///
/// Returns an error when no configuration file exists in the hierarchy.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    let mut current = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Ok(current);
        }

        if !current.pop() {
            return Err(anyhow::anyhow!(
                "No {CONFIG_FILE_NAME} found in current directory or any parent directory"
            ));
        }
    }
}
