//! Configuration management for blockdeps
//!
//! A project describes its component tree in `blockdeps.toml`, found by
//! searching from the working directory upwards:
//!
//! ```toml
//! # Directories holding one folder per component
//! roots = ["src/blocks", "src/pages"]
//!
//! # Create empty files for kinds a component's dependencies need
//! create_missing_files = true
//!
//! # Upper bound on the passes of one run
//! max_iterations = 64
//! ```
//!
//! Command-line flags override every value. Without a config file the roots
//! must be given on the command line.
//!
//! # Modules
//!
//! - `parser` - Generic TOML parsing with file path context
//! - `project` - The [`ProjectConfig`] type and its discovery

mod parser;
mod project;

pub use parser::parse_config;
pub use project::ProjectConfig;
