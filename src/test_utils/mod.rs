//! Test utilities for blockdeps
//!
//! - [`init_test_logging`] - one-time tracing setup for tests
//! - [`ComponentTree`] - a temporary component tree with file helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use blockdeps_cli::test_utils::ComponentTree;
//!
//! let tree = ComponentTree::new().unwrap();
//! tree.write("blocks/card/card.scss", ".card {}\n");
//! assert!(tree.exists("blocks/card/card.scss"));
//! ```

mod tree;

pub use tree::ComponentTree;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. `level` takes precedence over
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=blockdeps_cli=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
