//! Pug template parser.
//!
//! # Extraction Rules
//!
//! - `extends ../../layouts/base/base.pug` names the extended component by the
//!   file stem of the path (`base`).
//! - Mixin calls `+card(...)` reference the mixin's component (`card`).
//! - Class shorthands in tag position (`.card.card_big`, `a.link`) and the
//!   names in `class="..."` attributes reference those components.
//! - `include`, `block`, `mixin` definition lines and comments (`//` with their
//!   indented bodies) are skipped.
//!
//! Names that do not belong to any component are returned as well; the
//! generator filters references against the scanned entity table.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::trace;

use super::{TemplateParser, TemplateReferences};
use crate::constants::TEMPLATE_KIND;
use crate::core::FileOps;
use crate::model::FileKind;

static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class\s*=\s*["']([^"']*)["']"#).expect("valid class attribute regex")
});

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][\w-]*").expect("valid identifier regex"));

/// [`TemplateParser`] for `.pug` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PugParser;

impl PugParser {
    /// Create a parser.
    pub fn new() -> Self {
        Self
    }

    /// Extract references from template source.
    pub fn parse_source(&self, source: &str, exclude: &[String]) -> TemplateReferences {
        let mut extends = None;
        let mut references = BTreeSet::new();
        let mut comment_indent: Option<usize> = None;

        for line in source.lines() {
            let content = line.trim_start();
            if content.is_empty() {
                continue;
            }
            let indent = line.len() - content.len();

            if let Some(level) = comment_indent {
                if indent > level {
                    continue;
                }
                comment_indent = None;
            }

            if content.starts_with("//") {
                comment_indent = Some(indent);
                continue;
            }

            if let Some(target) = content.strip_prefix("extends ") {
                if extends.is_none() {
                    extends = stem_of(target.trim());
                }
                continue;
            }

            if ["include ", "block ", "mixin ", "append ", "prepend ", "|", "-", "="]
                .iter()
                .any(|prefix| content.starts_with(prefix))
            {
                continue;
            }

            for segment in content.split(": ") {
                collect_tag_names(segment.trim_start(), &mut references);
            }

            for capture in CLASS_ATTRIBUTE.captures_iter(content) {
                if let Some(classes) = capture.get(1) {
                    references.extend(classes.as_str().split_whitespace().map(str::to_string));
                }
            }
        }

        let extends = extends.filter(|name| !exclude.contains(name));
        references.retain(|name| !exclude.contains(name));

        TemplateReferences {
            extends,
            references,
        }
    }
}

impl TemplateParser for PugParser {
    fn kind(&self) -> FileKind {
        FileKind::new(TEMPLATE_KIND)
    }

    fn parse(&self, path: &Path, exclude: &[String]) -> Result<TemplateReferences> {
        let source = FileOps::read_with_context(path, "reading template", "template::pug")
            .with_context(|| format!("Failed to parse template {}", path.display()))?;
        let parsed = self.parse_source(&source, exclude);

        trace!(
            template = %path.display(),
            extends = ?parsed.extends,
            references = parsed.references.len(),
            "Parsed template"
        );

        Ok(parsed)
    }
}

/// Component name of an `extends` target: the file stem of its path.
fn stem_of(target: &str) -> Option<String> {
    let target = target.trim_matches(|c| c == '"' || c == '\'');
    Path::new(target)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

/// Collect mixin and class names from the tag at the start of `segment`.
fn collect_tag_names(segment: &str, names: &mut BTreeSet<String>) {
    let tag_end = segment
        .find(|c: char| c.is_whitespace() || matches!(c, '(' | '=' | '!' | '&' | '['))
        .unwrap_or(segment.len());
    let tag = &segment[..tag_end];

    if let Some(mixin) = tag.strip_prefix('+') {
        if let Some(name) = IDENTIFIER.find(mixin) {
            names.insert(name.as_str().to_string());
        }
        return;
    }

    let tag = tag.split('#').next().unwrap_or_default();
    for class in tag.split('.').skip(1) {
        if let Some(name) = IDENTIFIER.find(class) {
            names.insert(name.as_str().to_string());
        }
    }
}
