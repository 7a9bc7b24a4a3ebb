//! The `generate` command.
//!
//! Runs the generator once to a fixed point and prints what changed:
//!
//! ```text
//! Generated imports in 2 passes
//!   created  src/pages/index/index.scss
//!   updated  src/pages/index/index.scss
//!   updated  src/blocks/card/card.js
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::CliConfig;
use super::common::{GeneratorSettings, current_dir};
use crate::generator::RunReport;

/// Synthesize missing files and inject or retract import statements.
#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// Component root directory; may be repeated. Replaces the roots of
    /// blockdeps.toml.
    #[arg(short, long = "root", value_name = "DIR")]
    roots: Vec<PathBuf>,

    /// Create empty files for kinds a component's dependencies need
    #[arg(long, conflicts_with = "no_create")]
    create: bool,

    /// Never create files
    #[arg(long)]
    no_create: bool,

    /// Upper bound on generator passes
    #[arg(long, value_name = "N")]
    max_iterations: Option<usize>,
}

impl GenerateCommand {
    /// Run the command.
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let working_dir = current_dir()?;
        self.execute_in(&working_dir, config)
    }

    /// Run the command as if started in `working_dir`.
    pub fn execute_in(self, working_dir: &Path, config: &CliConfig) -> Result<()> {
        let create = match (self.create, self.no_create) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        let settings = GeneratorSettings::resolve(
            working_dir,
            config.config_path.as_deref(),
            &self.roots,
            create,
            self.max_iterations,
        )?;

        let report = settings.generator().run()?;

        if !config.quiet {
            print_report(&report, working_dir);
        }
        Ok(())
    }
}

fn print_report(report: &RunReport, working_dir: &Path) {
    let passes = report.pass_count();
    let plural = if passes == 1 { "" } else { "es" };

    if report.is_noop() {
        println!("{} ({passes} pass{plural})", "Imports are up to date".green());
        return;
    }

    println!("{} in {passes} pass{plural}", "Generated imports".green().bold());
    let lines = report
        .created()
        .map(|path| (format!("{:<8}", "created").cyan(), path))
        .chain(report.written().map(|path| (format!("{:<8}", "updated").yellow(), path)))
        .chain(report.deleted().map(|path| (format!("{:<8}", "deleted").red(), path)));

    for (action, path) in lines {
        let shown = path.strip_prefix(working_dir).unwrap_or(path);
        println!("  {action} {}", shown.display());
    }
}
