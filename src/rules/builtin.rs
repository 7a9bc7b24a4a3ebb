//! Built-in rules for JavaScript, Sass/CSS and Pug.

use std::path::Path;

use super::{RuleTable, relative_path};
use crate::injector::{InjectionStrategy, Prepend, TemplateBlock};
use crate::model::FileKind;

/// Statement family emitted for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSyntax {
    /// `import './path.js';`
    EsModule,
    /// `@import 'path.scss';`
    CssImport,
    /// `include path.pug` / `extends path.pug`
    PugInclude,
}

/// Default [`RuleTable`] for `.js`, `.scss`, `.css` and `.pug` files.
#[derive(Debug, Clone)]
pub struct BuiltinRules {
    rules: Vec<(FileKind, ImportSyntax)>,
}

impl Default for BuiltinRules {
    fn default() -> Self {
        Self {
            rules: vec![
                (FileKind::new(".pug"), ImportSyntax::PugInclude),
                (FileKind::new(".scss"), ImportSyntax::CssImport),
                (FileKind::new(".css"), ImportSyntax::CssImport),
                (FileKind::new(".js"), ImportSyntax::EsModule),
            ],
        }
    }
}

impl BuiltinRules {
    /// Rules for the default kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules restricted to the given kinds.
    ///
    /// Kinds without a built-in syntax are ignored.
    pub fn only(kinds: &[FileKind]) -> Self {
        let mut rules = Self::default();
        rules.rules.retain(|(kind, _)| kinds.contains(kind));
        rules
    }

    fn syntax(&self, kind: &FileKind) -> Option<ImportSyntax> {
        self.rules.iter().find(|(known, _)| known == kind).map(|(_, syntax)| *syntax)
    }
}

impl RuleTable for BuiltinRules {
    fn kinds(&self) -> Vec<FileKind> {
        self.rules.iter().map(|(kind, _)| kind.clone()).collect()
    }

    fn render_import(
        &self,
        kind: &FileKind,
        dependency: &Path,
        target: &Path,
        is_extends: bool,
    ) -> String {
        let from_dir = target.parent().unwrap_or_else(|| Path::new(""));
        let path = relative_path(from_dir, dependency);

        match self.syntax(kind) {
            Some(ImportSyntax::EsModule) => {
                if path.starts_with("..") {
                    format!("import '{path}';\n")
                } else {
                    format!("import './{path}';\n")
                }
            }
            Some(ImportSyntax::PugInclude) if is_extends => format!("extends {path}\n"),
            Some(ImportSyntax::PugInclude) => format!("include {path}\n"),
            Some(ImportSyntax::CssImport) | None => format!("@import '{path}';\n"),
        }
    }

    fn strategy(&self, kind: &FileKind) -> &dyn InjectionStrategy {
        match self.syntax(kind) {
            Some(ImportSyntax::PugInclude) => &TemplateBlock,
            _ => &Prepend,
        }
    }
}
