//! Tree scanner: builds the entity table from the component directories.
//!
//! Every directory below a scan root is a component. Directories whose name
//! starts with [`SUBCOMPONENT_MARKER`] are sub-components; their qualified name
//! is built by prepending ancestor directory names until the name no longer
//! starts with the marker:
//!
//! ```text
//! blocks/                    (scan root, not a component)
//! └── card/                  card
//!     ├── card.pug
//!     ├── card.scss
//!     ├── dependencies.js    manifest marker, not a generated-import target
//!     └── __title/           card__title   (folder dependency of card)
//!         ├── card__title.scss
//!         └── _size/         card__title_size
//! ```
//!
//! Files are attached to the component of the directory that contains them,
//! keyed by kind. Only kinds recognized by the [`RuleTable`] are kept. Roots
//! are walked in file-name order so that repeated scans of an unchanged tree
//! produce equal tables.

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::constants::{MANIFEST_FILE_STEM, SUBCOMPONENT_MARKER};
use crate::core::{BlockdepsError, FileOps};
use crate::model::{Entity, EntityTable, FileInfo, FileKind};
use crate::rules::RuleTable;

/// Scan every root and union the results into one table.
///
/// # Errors
///
/// Returns [`BlockdepsError::ScanFailed`] when a root or a nested directory
/// cannot be read, and a file system error when a file's metadata cannot be
/// read.
pub fn scan_roots(roots: &[PathBuf], rules: &dyn RuleTable) -> Result<EntityTable> {
    let mut table = EntityTable::new();
    for root in roots {
        scan_root(root, rules, &mut table)?;
    }
    debug!(entities = table.len(), roots = roots.len(), "Scanned component tree");
    Ok(table)
}

/// Scan one root into `table`.
pub fn scan_root(root: &Path, rules: &dyn RuleTable, table: &mut EntityTable) -> Result<()> {
    let mut directories: HashMap<PathBuf, String> = HashMap::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|error| BlockdepsError::ScanFailed {
            path: error.path().unwrap_or(root).display().to_string(),
            reason: error.to_string(),
        })?;
        let path = entry.path();
        let owner = path.parent().and_then(|parent| directories.get(parent)).cloned();

        if entry.file_type().is_dir() {
            let name = qualified_name(path);
            if table.contains(&name) {
                warn!(component = %name, dir = %path.display(), "Component name defined twice, keeping the last one");
            }

            let mut entity = Entity::new(&name, path);
            if let Some(parent) = &owner {
                if let Some(parent_entity) = table.get_mut(parent) {
                    parent_entity.folder_dependencies.push(name.clone());
                }
                entity.parent = Some(parent.clone());
            }

            table.insert(entity);
            directories.insert(path.to_path_buf(), name);
        } else if entry.file_type().is_file() {
            let Some(owner) = owner else {
                continue;
            };
            let Some(kind) = FileKind::of_path(path).filter(|kind| rules.recognizes(kind)) else {
                continue;
            };
            attach_file(table, &owner, kind, path)?;
        }
    }

    Ok(())
}

fn attach_file(table: &mut EntityTable, owner: &str, kind: FileKind, path: &Path) -> Result<()> {
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();
    let Some(entity) = table.get_mut(owner) else {
        return Ok(());
    };

    if stem == MANIFEST_FILE_STEM {
        entity.manifests.insert(kind, path.to_path_buf());
        return Ok(());
    }

    if let Some(existing) = entity.files.get(&kind) {
        let existing_is_own = existing.path.file_stem().and_then(|s| s.to_str()) == Some(owner);
        if existing_is_own || stem != owner {
            debug!(component = owner, file = %path.display(), "Ignoring second file of kind {kind}");
            return Ok(());
        }
    }

    let modified = FileOps::metadata_with_context(path, "reading modification time", "scanner")?
        .modified()
        .map_err(|error| BlockdepsError::FileSystemError {
            operation: "reading modification time".to_string(),
            path: path.display().to_string(),
            reason: error.to_string(),
        })?;

    entity.files.insert(kind, FileInfo::scanned(path, modified));
    Ok(())
}

/// Qualified component name of a directory.
///
/// Walks up the ancestors while the accumulated name starts with the
/// sub-component marker.
pub fn qualified_name(dir: &Path) -> String {
    let mut name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut current = dir.parent();

    while name.starts_with(SUBCOMPONENT_MARKER) {
        let Some(parent) = current else {
            break;
        };
        let Some(parent_name) = parent.file_name() else {
            break;
        };
        name = format!("{}{name}", parent_name.to_string_lossy());
        current = parent.parent();
    }

    name
}
