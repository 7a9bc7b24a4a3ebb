//! Command-line interface for blockdeps.
//!
//! # Commands
//!
//! - `generate` - Run the generator until the tree reaches a fixed point
//! - `tree` - Show every component with its dependencies, without writing
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Only report errors
//! - `--config <path>` - Use this `blockdeps.toml` instead of searching for one
//!
//! # Examples
//!
//! ```bash
//! # Use the roots listed in blockdeps.toml
//! blockdeps generate
//!
//! # Explicit roots, no placeholder files
//! blockdeps generate --root src/blocks --root src/pages --no-create
//!
//! # Inspect what the generator sees
//! blockdeps --verbose tree
//! ```

mod common;
mod generate;
mod tree;

pub use common::GeneratorSettings;
pub use generate::GenerateCommand;
pub use tree::TreeCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so that tests can drive a command with an
/// explicit configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive. `None` defers to `RUST_LOG`, falling back to
    /// warnings only.
    pub log_level: Option<String>,

    /// Suppress the summary printed after a command.
    pub quiet: bool,

    /// Explicit path to `blockdeps.toml`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// Calling this more than once is harmless; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Keeps the generated imports of a component-folder project in sync.
#[derive(Parser)]
#[command(
    name = "blockdeps",
    about = "Generate and maintain import statements between component folders",
    version,
    author,
    long_about = "blockdeps scans component folders, works out which components each one uses, \
                  and keeps the import/include statements in their files up to date."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to blockdeps.toml.
    ///
    /// By default the file is searched for in the current directory and its
    /// parents.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize missing files and inject or retract import statements
    Generate(GenerateCommand),

    /// Print every component with its folder and content dependencies
    Tree(TreeCommand),
}

impl Cli {
    /// Execute the parsed command line.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Build a [`CliConfig`] from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Execute the command with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Generate(cmd) => cmd.execute(&config),
            Commands::Tree(cmd) => cmd.execute(&config),
        }
    }
}
