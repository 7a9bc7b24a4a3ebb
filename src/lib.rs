//! blockdeps - generated imports for component-folder projects
//!
//! Front-end projects organized as one directory per component (the BEM file
//! structure) need every component file to import the same-kind files of
//! the components it uses. blockdeps maintains those import statements:
//!
//! ```text
//! src/blocks/card/
//! ├── card.pug            +button     ─┐ content dependency
//! ├── card.scss           @import '__title/card__title.scss';   <- folder dependency
//! │                       @import '../button/button.scss';      <- content dependency
//! └── __title/
//!     └── card__title.scss
//! ```
//!
//! # Pipeline
//!
//! One pass of the [`generator::Generator`] runs these stages in order:
//!
//! 1. [`scanner`] - walk the roots and build the [`model::EntityTable`]
//! 2. [`snapshot`] - reuse dependency records of entities that did not change
//! 3. [`resolver`] - derive folder and content dependencies, parsing templates
//!    with a [`template::TemplateParser`] only when needed
//! 4. [`resolver::classifier`] - find the file kinds whose imports changed
//! 5. [`synthesizer`] - create empty files for kinds an entity lacks
//! 6. [`injector`] - insert needed and retract stale statements
//!
//! Passes repeat until no file is created or deleted, bounded by an
//! iteration guard.
//!
//! # Collaborators
//!
//! - [`rules::RuleTable`] renders import statements and picks the injection
//!   strategy per file kind; [`rules::BuiltinRules`] covers `.js`, `.scss`,
//!   `.css` and `.pug`
//! - [`template::TemplateParser`] extracts component references from
//!   templates; [`template::PugParser`] reads Pug
//!
//! # Supporting Modules
//!
//! - [`cli`] - the `blockdeps` command line
//! - [`config`] - `blockdeps.toml` loading
//! - [`core`] - error types and user-facing error reporting
//! - [`utils`] - atomic writes and project discovery

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

pub mod generator;
pub mod injector;
pub mod model;
pub mod resolver;
pub mod rules;
pub mod scanner;
pub mod snapshot;
pub mod synthesizer;
pub mod template;

pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
