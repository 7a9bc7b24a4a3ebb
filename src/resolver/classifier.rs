//! Change classification between two passes.
//!
//! Injection work is bounded by file kind: only the kinds in
//! [`ChangeSet::changed_kinds`] are touched for an entity. A kind counts as
//! changed when a dependency edge carrying that kind appeared or disappeared,
//! when the entity itself or one of its dependencies gained or lost a file of
//! that kind, or when a dependency's file of that kind was synthesized in the
//! previous pass.

use std::collections::BTreeSet;

use crate::model::{DependencyRecord, EntityTable, FileKind};
use crate::snapshot::Snapshot;

/// Dependency changes of one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Current folder and live content dependencies, in order
    pub dep_items: Vec<String>,
    /// Dependencies of the previous pass, filtered the same way
    pub previous_items: Vec<String>,
    /// Previous dependencies that are gone
    pub removed: Vec<String>,
    /// Dependencies that are new
    pub added: Vec<String>,
    /// Dependencies present in both passes
    pub unchanged: Vec<String>,
    /// Kinds that need injection work
    pub changed_kinds: BTreeSet<FileKind>,
}

/// Classify the dependency changes of entity `name`.
///
/// Without a previous record for the entity (first pass, or an entity that
/// appeared since) every recognized kind is changed.
pub fn classify(
    name: &str,
    record: &DependencyRecord,
    entities: &EntityTable,
    previous: Option<&Snapshot>,
    recognized: &[FileKind],
) -> ChangeSet {
    let dep_items = record.dependency_items(entities);

    let baseline = previous.and_then(|snapshot| {
        snapshot.entity(name)?;
        Some((snapshot, snapshot.record(name)?))
    });

    let Some((snapshot, previous_record)) = baseline else {
        return ChangeSet {
            dep_items,
            changed_kinds: recognized.iter().cloned().collect(),
            ..ChangeSet::default()
        };
    };

    let previous_items = previous_record.dependency_items(&snapshot.entities);

    let removed: Vec<String> =
        previous_items.iter().filter(|dep| !dep_items.contains(dep)).cloned().collect();
    let added: Vec<String> =
        dep_items.iter().filter(|dep| !previous_items.contains(dep)).cloned().collect();
    let unchanged: Vec<String> =
        dep_items.iter().filter(|dep| previous_items.contains(dep)).cloned().collect();

    let mut changed_kinds = BTreeSet::new();

    if let (Some(before), Some(now)) = (snapshot.entity(name), entities.get(name)) {
        changed_kinds.extend(before.kinds().symmetric_difference(&now.kinds()).cloned());
    }

    for dep in &unchanged {
        let before = snapshot.entity(dep);
        let now = entities.get(dep);

        if let Some(before) = before {
            changed_kinds.extend(
                before.files.iter().filter(|(_, file)| file.generated).map(|(kind, _)| kind.clone()),
            );
        }

        let kinds_before = before.map(|entity| entity.kinds()).unwrap_or_default();
        let kinds_now = now.map(|entity| entity.kinds()).unwrap_or_default();
        changed_kinds.extend(kinds_before.symmetric_difference(&kinds_now).cloned());
    }

    for dep in &removed {
        if let Some(before) = snapshot.entity(dep) {
            changed_kinds.extend(before.kinds());
        }
    }

    for dep in &added {
        if let Some(now) = entities.get(dep) {
            changed_kinds.extend(now.kinds());
        }
    }

    ChangeSet {
        dep_items,
        previous_items,
        removed,
        added,
        unchanged,
        changed_kinds,
    }
}
