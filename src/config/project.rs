//! The `blockdeps.toml` project file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::parse_config;
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_MAX_ITERATIONS};
use crate::core::BlockdepsError;
use crate::utils::fs::{find_project_root, normalize_path};

/// Project settings read from `blockdeps.toml`.
///
/// ```toml
/// roots = ["src/blocks", "src/pages"]
/// create_missing_files = true
/// max_iterations = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Component roots, relative to the directory of the config file
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Create placeholder files for kinds a component's dependencies need
    #[serde(default = "default_create_missing_files")]
    pub create_missing_files: bool,

    /// Upper bound on the passes of one run
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

const fn default_create_missing_files() -> bool {
    true
}

const fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            create_missing_files: default_create_missing_files(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl ProjectConfig {
    /// Load the config file at `path` and make its roots absolute.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or when a value is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = parse_config(path)?;
        config.validate()?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.roots = config.roots.iter().map(|root| normalize_path(&base.join(root))).collect();

        debug!(config = %path.display(), roots = config.roots.len(), "Loaded project config");
        Ok(config)
    }

    /// Find `blockdeps.toml` at or above `start` and load it.
    ///
    /// Returns `Ok(None)` when there is no config file in the hierarchy.
    pub fn discover(start: &Path) -> Result<Option<(PathBuf, Self)>> {
        let Ok(project_root) = find_project_root(start) else {
            return Ok(None);
        };
        let path = project_root.join(CONFIG_FILE_NAME);
        let config = Self::load(&path)?;
        Ok(Some((path, config)))
    }

    /// Check the values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(BlockdepsError::ConfigError {
                message: "max_iterations must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
