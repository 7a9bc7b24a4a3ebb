//! blockdeps CLI entry point
//!
//! Parses the command line, runs the command and turns failures into a
//! colored error report with a suggestion.
//!
//! - `generate` - Bring the generated imports of a component tree up to date
//! - `tree` - Show the components and dependencies the generator sees

use anyhow::Result;
use blockdeps_cli::cli;
use blockdeps_cli::core::error::user_friendly_error;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
