//! Atomic file writes using a temp-and-rename strategy.
//!
//! Component files are rewritten in place by the import injector. Writing to a
//! sibling temp file first means an interrupted run leaves either the old or
//! the new content behind, never a truncated file.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::file_error::{FileOperation, FileResultExt};
use crate::utils::fs::dirs::ensure_dir;

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
///
/// # Examples
///
/// ```rust,no_run
/// use blockdeps_cli::utils::fs::safe_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// safe_write(Path::new("src/blocks/card/card.scss"), "@import '__title/card__title.scss';\n")?;
/// # Ok(())
/// # }
/// ```
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Content goes to `<file name>.tmp` next to the target
/// 2. The temp file is synced to disk
/// 3. The temp file is renamed over the target
///
/// The temp name keeps the original extension in front of `.tmp`, so the
/// scanner never mistakes it for a component file.
///
/// # Errors
///
/// Fails when the parent directory cannot be created or any step of the
/// write fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = temp_path_for(path);

    {
        let mut file = fs::File::create(&temp_path).with_context(|| {
            format!(
                "Failed to create temp file: {}\n\nCheck file permissions and that directory exists",
                temp_path.display()
            )
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path).with_file_context(
        FileOperation::Rename,
        path,
        "writing generated statements",
        "injector",
    )?;

    Ok(())
}

/// Creates a new empty file, failing if something already exists at `path`.
///
/// Used for synthesized placeholders: an existing file must never be
/// truncated.
pub fn create_empty(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_file_context(FileOperation::Create, path, "creating missing component file", "synthesizer")?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
