//! Idempotent injection and retraction of generated statements.
//!
//! The injector edits component files as plain text. A statement counts as
//! present when its trimmed form occurs anywhere in the file, so inserting a
//! present statement and removing an absent one are both no-ops. Where a
//! statement goes is decided by the file kind's [`InjectionStrategy`].
//!
//! A file that holds nothing but whitespace after a retraction is deleted;
//! the caller treats that as a structural change and runs another pass.

mod strategy;

pub use strategy::{InjectionStrategy, Prepend, TemplateBlock, remove_statement_line};

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::FileOps;
use crate::utils::fs::safe_write;

/// Statements to reconcile in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementPlan {
    /// Statements the file must contain, in order
    pub needed: Vec<String>,
    /// Statement that must precede every other needed statement (the
    /// extends relation), also listed first in `needed`
    pub leading: Option<String>,
    /// Previously generated statements that must go
    pub stale: Vec<String>,
}

impl StatementPlan {
    /// Whether the plan asks for nothing.
    pub fn is_empty(&self) -> bool {
        self.needed.is_empty() && self.stale.is_empty()
    }
}

/// Result of applying a plan to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// The edited text
    pub content: String,
    /// Number of statements inserted
    pub inserted: usize,
    /// Number of statements removed
    pub removed: usize,
}

impl TextEdit {
    /// Whether the text was modified.
    pub fn changed(&self) -> bool {
        self.inserted > 0 || self.removed > 0
    }
}

/// What happened to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionOutcome {
    /// Every needed statement was present and no stale one was
    Unchanged,
    /// The file was rewritten
    Written {
        /// Statements inserted
        inserted: usize,
        /// Statements removed
        removed: usize,
    },
    /// The file became empty after retraction and was deleted
    Deleted,
}

/// Applies [`StatementPlan`]s using one kind's strategy.
pub struct Injector<'a> {
    strategy: &'a dyn InjectionStrategy,
}

/// Whether `content` already contains `statement`.
pub fn contains_statement(content: &str, statement: &str) -> bool {
    let needle = statement.trim();
    !needle.is_empty() && content.contains(needle)
}

impl<'a> Injector<'a> {
    /// Create an injector for one file kind.
    pub fn new(strategy: &'a dyn InjectionStrategy) -> Self {
        Self {
            strategy,
        }
    }

    /// Apply `plan` to the text of a file.
    ///
    /// Stale statements are removed first. Missing needed statements are
    /// inserted back to front, so a strategy that always inserts at the same
    /// spot leaves them in plan order. The leading statement is moved in
    /// front of the others if an insertion landed above it.
    pub fn apply_to_content(&self, content: &str, plan: &StatementPlan) -> TextEdit {
        let mut text = content.to_string();
        let mut inserted = 0;
        let mut removed = 0;

        for statement in &plan.stale {
            if let Some(updated) = self.strategy.remove(&text, statement) {
                text = updated;
                removed += 1;
            }
        }

        for statement in plan.needed.iter().rev() {
            if self.strategy.contains(&text, statement) {
                continue;
            }
            match self.strategy.insert(&text, statement) {
                Some(updated) => {
                    text = updated;
                    inserted += 1;
                }
                None => warn!(statement = statement.trim(), "No place to insert statement, skipping"),
            }
        }

        if inserted > 0 {
            if let Some(leading) = &plan.leading {
                if let Some(updated) = self.move_to_front(&text, leading, &plan.needed) {
                    text = updated;
                }
            }
        }

        TextEdit {
            content: text,
            inserted,
            removed,
        }
    }

    /// Apply `plan` to the file at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, written or deleted.
    pub fn apply(&self, path: &Path, plan: &StatementPlan) -> Result<InjectionOutcome> {
        if plan.is_empty() {
            return Ok(InjectionOutcome::Unchanged);
        }

        let content = FileOps::read_with_context(path, "injecting imports", "injector")?;
        let edit = self.apply_to_content(&content, plan);

        if !edit.changed() {
            return Ok(InjectionOutcome::Unchanged);
        }

        if edit.removed > 0 && edit.content.trim().is_empty() {
            FileOps::remove_with_context(path, "deleting file emptied by retraction", "injector")?;
            debug!(file = %path.display(), "Deleted file left empty after retraction");
            return Ok(InjectionOutcome::Deleted);
        }

        safe_write(path, &edit.content)?;
        debug!(
            file = %path.display(),
            inserted = edit.inserted,
            removed = edit.removed,
            "Updated generated statements"
        );

        Ok(InjectionOutcome::Written {
            inserted: edit.inserted,
            removed: edit.removed,
        })
    }

    fn move_to_front(&self, text: &str, leading: &str, needed: &[String]) -> Option<String> {
        let leading_at = text.find(leading.trim())?;
        let first_other = needed
            .iter()
            .filter(|statement| statement.trim() != leading.trim())
            .filter_map(|statement| text.find(statement.trim()))
            .min()?;

        if leading_at < first_other {
            return None;
        }

        let without = self.strategy.remove(text, leading)?;
        self.strategy.insert(&without, leading)
    }
}
