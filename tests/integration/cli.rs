//! The `blockdeps` binary.

use predicates::prelude::*;

use crate::common::{ComponentTree, blockdeps, card_page_tree};

#[test]
fn test_generate_with_root_flag() {
    let tree = card_page_tree();

    blockdeps(&tree)
        .args(["generate", "--root", "blocks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated imports in 1 pass"))
        .stdout(predicate::str::contains("updated"));

    assert_eq!(tree.read("blocks/page/page.scss"), "@import '../card/card.scss';\n.page {}\n");

    blockdeps(&tree)
        .args(["generate", "--root", "blocks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imports are up to date"));
}

#[test]
fn test_generate_uses_config_file() {
    let tree = card_page_tree();
    tree.write("blockdeps.toml", "roots = [\"blocks\"]\n");
    tree.mkdir("blocks/page/deep");

    blockdeps(&tree).current_dir(tree.join("blocks/page/deep")).arg("generate").assert().success();

    assert_eq!(tree.read("blocks/card/card.scss"), "@import '__title/card__title.scss';\n.card {}\n");
}

#[test]
fn test_generate_no_create() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/card/card.scss", ".card {}\n");
    tree.write("blocks/page/page.pug", "+card\n");

    blockdeps(&tree).args(["generate", "-r", "blocks", "--no-create"]).assert().success();
    assert!(!tree.exists("blocks/page/page.scss"));

    blockdeps(&tree)
        .args(["generate", "-r", "blocks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));
    assert_eq!(tree.read("blocks/page/page.scss"), "@import '../card/card.scss';\n");
}

#[test]
fn test_quiet_generate_prints_nothing() {
    let tree = card_page_tree();

    blockdeps(&tree)
        .args(["--quiet", "generate", "--root", "blocks"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_roots_error() {
    let tree = ComponentTree::new().unwrap();

    blockdeps(&tree)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No component roots to scan"))
        .stderr(predicate::str::contains("--root"));
}

#[test]
fn test_unreadable_root_fails() {
    let tree = ComponentTree::new().unwrap();

    blockdeps(&tree)
        .args(["generate", "--root", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_config_file() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blockdeps.toml", "roots = \"blocks\"\n");

    blockdeps(&tree).arg("generate").assert().failure().stderr(predicate::str::contains("blockdeps.toml"));
}

#[test]
fn test_tree_lists_dependencies_without_writing() {
    let tree = card_page_tree();
    let before = tree.contents();

    blockdeps(&tree)
        .args(["tree", "--root", "blocks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("card__title (folder)"))
        .stdout(predicate::str::contains("page"));

    assert_eq!(tree.contents(), before);
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let tree = ComponentTree::new().unwrap();

    blockdeps(&tree).args(["-v", "-q", "generate"]).assert().failure();
}
