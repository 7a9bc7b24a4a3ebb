//! Utilities shared by the pipeline and the CLI
//!
//! - [`fs`] - Atomic writes, directory creation and project discovery

pub mod fs;

pub use fs::{atomic_write, ensure_dir, normalize_path, safe_write};
