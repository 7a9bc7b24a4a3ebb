//! Template parsing for content dependencies.
//!
//! A component's template reveals which other components it uses: the layout
//! it extends and the components it references. The generator only needs the
//! names; how they are found is up to the [`TemplateParser`] implementation.
//!
//! [`PugParser`] is the built-in implementation for Pug templates.

mod pug;

pub use pug::PugParser;

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;

use crate::model::FileKind;

/// Component names found in one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateReferences {
    /// Component whose template this one extends
    pub extends: Option<String>,
    /// Components referenced by the template
    pub references: BTreeSet<String>,
}

/// Extracts component references from template files.
pub trait TemplateParser {
    /// Kind of the files this parser reads.
    fn kind(&self) -> FileKind;

    /// Parse the template at `path`.
    ///
    /// Names listed in `exclude` (the component itself and its ancestors) are
    /// never returned, so a component cannot depend on itself.
    fn parse(&self, path: &Path, exclude: &[String]) -> Result<TemplateReferences>;
}
