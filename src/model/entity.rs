//! Entities, their files and file kinds.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A recognized file extension, stored with its leading dot (`.scss`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileKind(String);

impl FileKind {
    /// Create a kind from an extension, with or without the leading dot.
    pub fn new(extension: impl AsRef<str>) -> Self {
        let extension = extension.as_ref();
        if extension.starts_with('.') {
            Self(extension.to_string())
        } else {
            Self(format!(".{extension}"))
        }
    }

    /// Kind of a path, taken from its extension.
    ///
    /// Returns `None` for paths without an extension.
    pub fn of_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).map(Self::new)
    }

    /// The extension including the leading dot.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One physical file belonging to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Location of the file
    pub path: PathBuf,
    /// Modification time observed during the scan
    pub modified: SystemTime,
    /// Set on placeholders created by the synthesizer during the current run.
    ///
    /// Dependents treat a generated file as a changed kind the first time they
    /// see it, which is what pulls the new file into their imports.
    pub generated: bool,
}

impl FileInfo {
    /// A file found on disk.
    pub fn scanned(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified,
            generated: false,
        }
    }

    /// A placeholder created by the synthesizer.
    pub fn generated(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            path: path.into(),
            modified,
            generated: true,
        }
    }
}

/// One component of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Qualified name, unique across all scan roots
    pub name: String,
    /// Directory of the component
    pub dir: PathBuf,
    /// At most one file per kind
    pub files: BTreeMap<FileKind, FileInfo>,
    /// Manually authored `dependencies.<kind>` files, recorded as markers only
    pub manifests: BTreeMap<FileKind, PathBuf>,
    /// Sub-components nested directly inside this component, in scan order
    pub folder_dependencies: Vec<String>,
    /// Enclosing component, if this is a sub-component
    pub parent: Option<String>,
}

impl Entity {
    /// Create an entity without files.
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            files: BTreeMap::new(),
            manifests: BTreeMap::new(),
            folder_dependencies: Vec::new(),
            parent: None,
        }
    }

    /// The set of kinds this entity has files for.
    pub fn kinds(&self) -> BTreeSet<FileKind> {
        self.files.keys().cloned().collect()
    }

    /// The file of the given kind, if any.
    pub fn file(&self, kind: &FileKind) -> Option<&FileInfo> {
        self.files.get(kind)
    }
}
