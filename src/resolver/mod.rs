//! Dependency resolution for single entities.
//!
//! An entity depends on two kinds of other entities:
//!
//! - **folder dependencies**: the sub-components nested directly inside its
//!   directory, taken from the scan as is;
//! - **content dependencies**: the component its template extends, followed
//!   by the components the template references.
//!
//! Template parsing is the expensive part, so the resolver avoids it twice
//! over. An entity equal to its previous self reuses the whole previous
//! record (the generator checks that through
//! [`Snapshot::reusable_record`](crate::snapshot::Snapshot::reusable_record)).
//! An entity whose template file is unchanged reuses the previous content
//! dependencies even when its other files changed.
//!
//! [`classifier`] then compares the resolved record against the previous one.

pub mod classifier;

pub use classifier::{ChangeSet, classify};

use anyhow::Result;
use tracing::debug;

use crate::core::BlockdepsError;
use crate::model::{DependencyRecord, Entity, EntityTable};
use crate::snapshot::Snapshot;
use crate::template::TemplateParser;

/// How the content dependencies of an entity were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// The entity has no template
    NoTemplate,
    /// The template is unchanged; previous content was copied
    Reused,
    /// The template was parsed
    Parsed,
}

/// Resolves [`DependencyRecord`]s with a [`TemplateParser`].
pub struct DependencyResolver<'a> {
    parser: &'a dyn TemplateParser,
}

impl<'a> DependencyResolver<'a> {
    /// Create a resolver that reads templates with `parser`.
    pub fn new(parser: &'a dyn TemplateParser) -> Self {
        Self {
            parser,
        }
    }

    /// Compute the dependency record of `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`BlockdepsError::TemplateParseFailed`] when the template
    /// parser fails.
    pub fn resolve(
        &self,
        entity: &Entity,
        entities: &EntityTable,
        previous: Option<&Snapshot>,
    ) -> Result<(DependencyRecord, ContentSource)> {
        let folder = entity.folder_dependencies.clone();
        let template_kind = self.parser.kind();

        let Some(template) = entity.file(&template_kind) else {
            return Ok((
                DependencyRecord {
                    folder,
                    content: None,
                    extends: None,
                },
                ContentSource::NoTemplate,
            ));
        };

        let unchanged_template = previous.and_then(|snapshot| {
            let previous_entity = snapshot.entity(&entity.name)?;
            let previous_record = snapshot.record(&entity.name)?;
            (previous_entity.file(&template_kind) == Some(template)).then_some(previous_record)
        });

        if let Some(previous_record) = unchanged_template {
            debug!(component = %entity.name, "Template unchanged, reusing content dependencies");
            return Ok((
                DependencyRecord {
                    folder,
                    content: previous_record.content.clone(),
                    extends: previous_record.extends.clone(),
                },
                ContentSource::Reused,
            ));
        }

        let exclude = entities.ancestor_chain(&entity.name);
        let parsed = self.parser.parse(&template.path, &exclude).map_err(|error| {
            BlockdepsError::TemplateParseFailed {
                path: template.path.display().to_string(),
                reason: format!("{error:#}"),
            }
        })?;

        let mut content: Vec<String> = parsed.extends.iter().cloned().collect();
        for name in parsed.references {
            if !content.contains(&name) {
                content.push(name);
            }
        }

        debug!(
            component = %entity.name,
            extends = ?parsed.extends,
            references = content.len(),
            "Parsed template"
        );

        Ok((
            DependencyRecord {
                folder,
                content: Some(content),
                extends: parsed.extends,
            },
            ContentSource::Parsed,
        ))
    }
}
