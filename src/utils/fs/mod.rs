//! File system utilities
//!
//! # Key Features
//!
//! - **Atomic operations**: component files are rewritten via temp-and-rename
//! - **Safe creation**: synthesized placeholders never truncate existing files
//! - **Project discovery**: locating `blockdeps.toml` from a working directory
//!
//! # Examples
//!
//! ```rust,no_run
//! use blockdeps_cli::utils::fs::{ensure_dir, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("src/blocks/card"))?;
//! safe_write(Path::new("src/blocks/card/card.scss"), ".card {}\n")?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;
pub mod paths;

pub use atomic::{atomic_write, create_empty, safe_write};
pub use dirs::ensure_dir;
pub use paths::{find_project_root, normalize_path};
