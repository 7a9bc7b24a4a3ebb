//! Settings shared by the CLI commands.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ProjectConfig;
use crate::core::BlockdepsError;
use crate::generator::Generator;
use crate::utils::fs::normalize_path;

/// Effective generator settings after merging the config file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Absolute component roots
    pub roots: Vec<PathBuf>,
    /// Whether placeholder files may be created
    pub create_missing_files: bool,
    /// Upper bound on passes per run
    pub max_iterations: usize,
}

impl GeneratorSettings {
    /// Resolve settings relative to `working_dir`.
    ///
    /// The config file is `config_path` when given, otherwise the closest
    /// `blockdeps.toml` at or above `working_dir`. Roots given as `cli_roots`
    /// replace the configured ones and are relative to `working_dir`.
    ///
    /// # Errors
    ///
    /// - the config file cannot be loaded
    /// - [`BlockdepsError::NoRoots`] when neither source names a root
    /// - [`BlockdepsError::ConfigError`] for a zero iteration bound
    pub fn resolve(
        working_dir: &Path,
        config_path: Option<&Path>,
        cli_roots: &[PathBuf],
        create_missing_files: Option<bool>,
        max_iterations: Option<usize>,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                let path = working_dir.join(path);
                ProjectConfig::load(&path)
                    .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            }
            None => match ProjectConfig::discover(working_dir)? {
                Some((path, config)) => {
                    debug!(config = %path.display(), "Using project configuration");
                    config
                }
                None => ProjectConfig::default(),
            },
        };

        let roots = if cli_roots.is_empty() {
            config.roots
        } else {
            cli_roots.iter().map(|root| normalize_path(&working_dir.join(root))).collect()
        };

        if roots.is_empty() {
            return Err(BlockdepsError::NoRoots.into());
        }

        let max_iterations = max_iterations.unwrap_or(config.max_iterations);
        if max_iterations == 0 {
            return Err(BlockdepsError::ConfigError {
                message: "--max-iterations must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            roots,
            create_missing_files: create_missing_files.unwrap_or(config.create_missing_files),
            max_iterations,
        })
    }

    /// Build a generator with these settings.
    pub fn generator(&self) -> Generator {
        Generator::new(self.roots.clone(), self.create_missing_files)
            .with_max_iterations(self.max_iterations)
    }
}

/// The process's working directory.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to determine the current directory")
}
