//! Global constants used throughout the blockdeps codebase.
//!
//! Naming conventions of the component tree and numeric defaults live here so
//! that the scanner, the generator and the CLI agree on them.

/// Leading character that marks a sub-component directory.
///
/// A directory `card/__title` is the sub-component `card__title`: while the
/// accumulated name starts with this marker, the parent directory's name is
/// prepended.
pub const SUBCOMPONENT_MARKER: char = '_';

/// File stem of manually authored dependency manifests (`dependencies.js`).
///
/// Such files are recorded as path markers on their entity and never receive
/// generated statements.
pub const MANIFEST_FILE_STEM: &str = "dependencies";

/// Project configuration file searched from the working directory upwards.
pub const CONFIG_FILE_NAME: &str = "blockdeps.toml";

/// Default guard on the number of passes of one generator run.
///
/// A pass repeats only when a file was created or deleted, so real trees
/// settle in a handful of passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Extension of template files parsed for content dependencies.
pub const TEMPLATE_KIND: &str = ".pug";
