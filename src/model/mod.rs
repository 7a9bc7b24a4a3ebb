//! Domain model of the component tree.
//!
//! One directory of the tree is one [`Entity`]; each recognized file inside
//! it is a [`FileInfo`] keyed by its [`FileKind`]. Entities are collected in an
//! [`EntityTable`] that remembers scan order, since the generator processes
//! entities in that order.
//!
//! Dependency information is kept apart from the scanned entities in a
//! [`DependencyTable`] of [`DependencyRecord`]s: entities describe what is on
//! disk, records describe what was derived from it.

mod dependency;
mod entity;
mod table;

pub use dependency::{DependencyRecord, DependencyTable};
pub use entity::{Entity, FileInfo, FileKind};
pub use table::EntityTable;
