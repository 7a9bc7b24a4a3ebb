//! Generic TOML configuration parsing.
//!
//! Error messages carry the file path; the underlying I/O or TOML error is
//! kept as the cause so that [`crate::core::user_friendly_error`] can
//! recognize it.
//!
//! ```rust,no_run
//! use blockdeps_cli::config::parse_config;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Deserialize)]
//! struct Roots {
//!     roots: Vec<String>,
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! let config: Roots = parse_config(Path::new("blockdeps.toml"))?;
//! println!("{} roots", config.roots.len());
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML configuration file into the specified type.
///
/// # Errors
///
/// Fails when the file cannot be read, is not valid TOML, or does not match
/// the shape of `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
