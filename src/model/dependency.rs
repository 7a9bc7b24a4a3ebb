//! Per-entity dependency records.

use std::collections::HashMap;

use super::EntityTable;

/// Dependencies derived for one entity during one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Snapshot of the entity's folder dependencies
    pub folder: Vec<String>,
    /// Content dependencies from the entity's template, extended entity first.
    ///
    /// `None` when the entity has no template.
    pub content: Option<Vec<String>>,
    /// Entity the template extends
    pub extends: Option<String>,
}

impl DependencyRecord {
    /// Content dependencies that exist in `entities`, in order.
    pub fn live_content(&self, entities: &EntityTable) -> Vec<String> {
        self.content
            .iter()
            .flatten()
            .filter(|name| entities.contains(name))
            .cloned()
            .collect()
    }

    /// Folder dependencies followed by live content dependencies, without
    /// duplicates.
    pub fn dependency_items(&self, entities: &EntityTable) -> Vec<String> {
        let mut items = Vec::new();
        for name in self.folder.iter().cloned().chain(self.live_content(entities)) {
            if !items.contains(&name) {
                items.push(name);
            }
        }
        items
    }
}

/// Dependency records keyed by entity name.
pub type DependencyTable = HashMap<String, DependencyRecord>;
