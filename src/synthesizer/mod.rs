//! Placeholder files for kinds an entity lacks.
//!
//! When a component depends on components exposing a file kind it has no
//! file of, it gets an empty `<name><kind>` file to host the generated
//! statements. The placeholder is marked `generated` so that the components
//! depending on it pick it up in the next pass.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::debug;

use crate::core::FileOps;
use crate::model::{Entity, EntityTable, FileInfo, FileKind};
use crate::utils::fs::create_empty;

/// Kinds among `changed_kinds` that some dependency has a file of while
/// `entity` has none.
pub fn missing_kinds(
    entity: &Entity,
    dep_items: &[String],
    changed_kinds: &BTreeSet<FileKind>,
    entities: &EntityTable,
) -> Vec<FileKind> {
    changed_kinds
        .iter()
        .filter(|kind| entity.file(kind).is_none())
        .filter(|kind| {
            dep_items
                .iter()
                .filter_map(|dep| entities.get(dep))
                .any(|dep| dep.file(kind).is_some())
        })
        .cloned()
        .collect()
}

/// Where the placeholder of `kind` goes: next to the entity's first file, or
/// in its directory when it has no files.
pub fn placeholder_path(entity: &Entity, kind: &FileKind) -> PathBuf {
    let dir = entity
        .files
        .values()
        .next()
        .and_then(|file| file.path.parent())
        .map_or_else(|| entity.dir.clone(), std::path::Path::to_path_buf);
    dir.join(format!("{}{kind}", entity.name))
}

/// Create the placeholder of `kind` for `entity` and attach it.
///
/// # Errors
///
/// Fails when the file cannot be created, including when a file already
/// exists at the placeholder path.
pub fn create_placeholder(entity: &mut Entity, kind: &FileKind) -> Result<PathBuf> {
    let path = placeholder_path(entity, kind);
    create_empty(&path)
        .with_context(|| format!("Failed to create {kind} file for component {}", entity.name))?;

    let modified = FileOps::metadata_with_context(&path, "reading created file", "synthesizer")?
        .modified()
        .unwrap_or_else(|_| SystemTime::now());

    debug!(component = %entity.name, file = %path.display(), "Created missing file");
    entity.files.insert(kind.clone(), FileInfo::generated(&path, modified));
    Ok(path)
}
