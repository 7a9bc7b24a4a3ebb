//! Common test utilities for blockdeps integration tests

// Allow dead code because these utilities are used across different test files
// and not all utilities are used in every test file
#![allow(dead_code)]

use assert_cmd::Command;
use blockdeps_cli::generator::{Generator, RunReport};
pub use blockdeps_cli::test_utils::{ComponentTree, init_test_logging};

/// The `blockdeps` binary with colors disabled.
pub fn blockdeps(tree: &ComponentTree) -> Command {
    let mut cmd = Command::cargo_bin("blockdeps").unwrap();
    cmd.current_dir(tree.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// A generator over the given roots of `tree`.
pub fn generator(tree: &ComponentTree, roots: &[&str], create_missing_files: bool) -> Generator {
    init_test_logging(None);
    let roots = roots.iter().map(|root| tree.join(root)).collect();
    Generator::new(roots, create_missing_files)
}

/// Run a fresh generator with file creation enabled.
pub fn generate(tree: &ComponentTree, roots: &[&str]) -> RunReport {
    generator(tree, roots, true).run().unwrap()
}

/// A tree with a page using a card that has a title element.
///
/// ```text
/// blocks/
/// ├── card/
/// │   ├── card.pug
/// │   ├── card.scss
/// │   └── __title/card__title.scss
/// └── page/
///     ├── page.pug   (+card)
///     └── page.scss
/// ```
pub fn card_page_tree() -> ComponentTree {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/card/card.pug", "mixin card\n  .card\n    .card__title\n");
    tree.write("blocks/card/card.scss", ".card {}\n");
    tree.write("blocks/card/__title/card__title.scss", ".card__title {}\n");
    tree.write("blocks/page/page.pug", ".page\n  +card\n");
    tree.write("blocks/page/page.scss", ".page {}\n");
    tree
}
