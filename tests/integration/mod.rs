//! Integration test suite for blockdeps
//!
//! End-to-end tests that drive the generator and the `blockdeps` binary
//! against temporary component trees.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: `generate` and `tree` commands, configuration and errors
//! - **fixed_point**: chains that need several passes
//! - **idempotence**: repeated runs leave the tree alone
//! - **retraction**: removed dependencies take their statements with them
//! - **reuse**: unchanged components are not parsed again
//! - **scenarios**: basic folder and content dependency behavior
//! - **templates**: `extends` handling and statement ordering

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod fixed_point;
mod idempotence;
mod retraction;
mod reuse;
mod scenarios;
mod templates;
