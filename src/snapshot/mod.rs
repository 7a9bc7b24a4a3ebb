//! Run snapshots and reuse decisions.
//!
//! A [`Snapshot`] is the `{entities, dependencies}` pair a pass ends with. The
//! generator keeps exactly one, the previous pass's, as the diff baseline for
//! the next pass and replaces it wholesale afterwards. Snapshots are never
//! mutated once taken and never persisted.

use crate::model::{DependencyRecord, DependencyTable, Entity, EntityTable};

/// Entities and dependency records at the end of one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Entity table as the pass left it, synthesized files included
    pub entities: EntityTable,
    /// Dependency record of every entity in `entities`
    pub dependencies: DependencyTable,
}

impl Snapshot {
    /// Bundle the tables of a finished pass.
    pub fn new(entities: EntityTable, dependencies: DependencyTable) -> Self {
        Self {
            entities,
            dependencies,
        }
    }

    /// Whether a fresh scan found exactly the tree this snapshot describes.
    ///
    /// When it did, the whole pass can be skipped.
    pub fn matches(&self, entities: &EntityTable) -> bool {
        self.entities == *entities
    }

    /// The previous record of `entity` when it may be reused verbatim.
    ///
    /// Reuse requires the previous entity to be equal in every attribute:
    /// files with their modification times and generated flags, manifests,
    /// folder dependencies, parent and directory.
    pub fn reusable_record(&self, entity: &Entity) -> Option<&DependencyRecord> {
        let previous = self.entities.get(&entity.name)?;
        if previous != entity {
            return None;
        }
        self.dependencies.get(&entity.name)
    }

    /// Previous entity with this name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Previous dependency record of this entity.
    pub fn record(&self, name: &str) -> Option<&DependencyRecord> {
        self.dependencies.get(name)
    }
}
