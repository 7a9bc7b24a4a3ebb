//! Core types and error handling for blockdeps
//!
//! This module holds the pieces every other module leans on:
//!
//! - [`error`] - [`BlockdepsError`], [`ErrorContext`] and [`user_friendly_error`]
//! - [`file_error`] - context-carrying wrappers for file system operations
//!
//! The domain types of the generator (entities, file kinds, dependency
//! records) live in [`crate::model`].

pub mod error;
pub mod file_error;

pub use error::{BlockdepsError, ErrorContext, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileOps, FileResultExt};
