//! Text-level injection strategies.
//!
//! A strategy knows where a statement goes inside a file of one kind and how
//! to take it out again. The [`Injector`](super::Injector) asks the strategy
//! whether a statement is already present before inserting it. The default
//! answer is a trimmed substring match, which is what makes insertion and
//! retraction idempotent.

use super::contains_statement;
use regex::Regex;
use std::sync::LazyLock;

static EXTENDS_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^extends[ \t]+\S").expect("valid extends regex"));

static FIRST_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^block[ \t]+[^\n]*").expect("valid block regex"));

/// Insertion and removal of generated statements for one file kind.
pub trait InjectionStrategy: Send + Sync {
    /// Whether `content` already holds `statement`.
    fn contains(&self, content: &str, statement: &str) -> bool {
        contains_statement(content, statement)
    }

    /// Return `content` with `statement` inserted, or `None` when the file
    /// has no place where the statement may go.
    fn insert(&self, content: &str, statement: &str) -> Option<String>;

    /// Return `content` without `statement`, or `None` when it is absent.
    fn remove(&self, content: &str, statement: &str) -> Option<String> {
        remove_statement_line(content, statement)
    }
}

/// Puts statements at the very top of the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prepend;

impl InjectionStrategy for Prepend {
    fn insert(&self, content: &str, statement: &str) -> Option<String> {
        Some(format!("{statement}{content}"))
    }
}

/// Template-aware insertion.
///
/// A template that extends another one may not contain top-level includes, so
/// statements go right after its first `block` line, indented like the
/// block's body. Templates without `extends` are prepended to.
///
/// A template has at most one `extends`. Once it has one, however it is
/// spelled, an `extends` statement counts as present and is never inserted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateBlock;

fn is_extends(statement: &str) -> bool {
    EXTENDS_DIRECTIVE.is_match(statement.trim_start())
}

impl InjectionStrategy for TemplateBlock {
    fn contains(&self, content: &str, statement: &str) -> bool {
        (is_extends(statement) && EXTENDS_DIRECTIVE.is_match(content))
            || contains_statement(content, statement)
    }

    fn insert(&self, content: &str, statement: &str) -> Option<String> {
        if !EXTENDS_DIRECTIVE.is_match(content) {
            return Prepend.insert(content, statement);
        }
        if is_extends(statement) {
            return None;
        }

        let block = FIRST_BLOCK.find(content)?;
        let (head, tail) = content.split_at(block.end());
        let body = tail.trim_start();
        let whitespace = &tail[..tail.len() - body.len()];

        let (whitespace, indent) = match whitespace.rfind('\n') {
            Some(newline) => (whitespace, &whitespace[newline + 1..]),
            None => ("\n  ", "  "),
        };

        Some(format!("{head}{whitespace}{}\n{indent}{body}", statement.trim_end()))
    }
}

/// Remove the line holding `statement`.
///
/// Only the statement itself is removed when it shares its line with other
/// text.
pub fn remove_statement_line(content: &str, statement: &str) -> Option<String> {
    let needle = statement.trim();
    if needle.is_empty() {
        return None;
    }
    let position = content.find(needle)?;

    let line_start = content[..position].rfind('\n').map_or(0, |newline| newline + 1);
    let start = if content[line_start..position].trim().is_empty() {
        line_start
    } else {
        position
    };

    let after = position + needle.len();
    let line_end = content[after..].find('\n').map(|newline| after + newline);
    let end = match line_end {
        Some(newline) if content[after..newline].trim().is_empty() => newline + 1,
        None if content[after..].trim().is_empty() => content.len(),
        _ => after,
    };

    let mut result = String::with_capacity(content.len() - (end - start));
    result.push_str(&content[..start]);
    result.push_str(&content[end..]);
    Some(result)
}
