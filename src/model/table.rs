//! Scan-ordered entity table.

use std::collections::HashMap;

use super::Entity;

/// Entities keyed by name, iterated in the order they were inserted.
///
/// Two tables are equal when they hold equal entities in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityTable {
    order: Vec<String>,
    entries: HashMap<String, Entity>,
}

impl EntityTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, keeping the position of an existing entry with the
    /// same name.
    pub fn insert(&mut self, entity: Entity) {
        if !self.entries.contains_key(&entity.name) {
            self.order.push(entity.name.clone());
        }
        self.entries.insert(entity.name.clone(), entity);
    }

    /// Look up an entity by name.
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entries.get(name)
    }

    /// Look up an entity by name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entries.get_mut(name)
    }

    /// Whether an entity with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entity names in scan order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Entities in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The entity's name followed by the names of its ancestors.
    ///
    /// A broken parent link ends the chain; the scanner never produces one,
    /// but a hand-built table may.
    pub fn ancestor_chain(&self, name: &str) -> Vec<String> {
        let mut chain = vec![name.to_string()];
        let mut current = self.get(name).and_then(|entity| entity.parent.clone());

        while let Some(parent) = current {
            if chain.contains(&parent) {
                break;
            }
            current = self.get(&parent).and_then(|entity| entity.parent.clone());
            chain.push(parent);
        }

        chain
    }
}
