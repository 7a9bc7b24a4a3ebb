//! File-kind rules consumed by the generator.
//!
//! The generator knows nothing about the syntax of the files it edits. For
//! each recognized [`FileKind`] a [`RuleTable`] answers three questions:
//!
//! - is this kind recognized at all (unrecognized files are skipped by the
//!   scanner),
//! - what statement imports file `dependency` into file `target`,
//! - which [`InjectionStrategy`] places that statement inside the target.
//!
//! [`BuiltinRules`] covers the stack of a typical component-folder front end:
//! ES modules, Sass/CSS and Pug templates.

mod builtin;

pub use builtin::{BuiltinRules, ImportSyntax};

use std::path::{Component, Path, PathBuf};

use crate::injector::InjectionStrategy;
use crate::model::FileKind;

/// Rendering rules for every recognized file kind.
pub trait RuleTable {
    /// Every recognized kind, in a stable order.
    fn kinds(&self) -> Vec<FileKind>;

    /// Whether files of this kind take part in generation.
    fn recognizes(&self, kind: &FileKind) -> bool {
        self.kinds().contains(kind)
    }

    /// The statement that makes `target` pull in `dependency`.
    ///
    /// `is_extends` is set for the dependency the target's component extends,
    /// so that kinds with an inheritance construct can emit it instead of a
    /// plain include. The returned statement ends with a newline.
    fn render_import(
        &self,
        kind: &FileKind,
        dependency: &Path,
        target: &Path,
        is_extends: bool,
    ) -> String;

    /// How statements are placed in and removed from files of this kind.
    fn strategy(&self, kind: &FileKind) -> &dyn InjectionStrategy;
}

/// Path of `to` relative to the directory `from_dir`, with `/` separators.
///
/// Both paths are expected to be absolute or both relative to the same base.
pub fn relative_path(from_dir: &Path, to: &Path) -> String {
    let from: Vec<Component<'_>> = from_dir.components().collect();
    let target: Vec<Component<'_>> = to.components().collect();

    let common = from.iter().zip(target.iter()).take_while(|(a, b)| a == b).count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }

    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
