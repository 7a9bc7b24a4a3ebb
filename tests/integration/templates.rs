//! Templates that extend a layout.

use crate::common::{ComponentTree, generate};

fn layout_tree(page_style: &str) -> ComponentTree {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/base/base.pug", "doctype html\nhtml\n  body\n    block content\n");
    tree.write("blocks/base/base.scss", "body {}\n");
    tree.write("blocks/card/card.pug", "mixin card\n  .card\n");
    tree.write("blocks/card/card.scss", ".card {}\n");
    tree.write("blocks/page/page.pug", "extends ../base/base.pug\n\nblock content\n  +card\n");
    tree.write("blocks/page/page.scss", page_style);
    tree
}

#[test]
fn test_includes_go_into_first_block() {
    let tree = layout_tree(".page {}\n");

    generate(&tree, &["blocks"]);

    assert_eq!(
        tree.read("blocks/page/page.pug"),
        "extends ../base/base.pug\n\nblock content\n  include ../card/card.pug\n  +card\n"
    );
}

#[test]
fn test_extended_component_is_imported_first() {
    let tree = layout_tree(".page {}\n");

    generate(&tree, &["blocks"]);

    assert_eq!(
        tree.read("blocks/page/page.scss"),
        "@import '../base/base.scss';\n@import '../card/card.scss';\n.page {}\n"
    );
}

#[test]
fn test_extended_import_moves_to_front() {
    let tree = layout_tree(".page {}\n@import '../base/base.scss';\n");

    generate(&tree, &["blocks"]);

    assert_eq!(
        tree.read("blocks/page/page.scss"),
        "@import '../base/base.scss';\n@import '../card/card.scss';\n.page {}\n"
    );
}

#[test]
fn test_layout_is_not_a_dependency_of_itself() {
    let tree = layout_tree(".page {}\n");

    generate(&tree, &["blocks"]);

    assert_eq!(tree.read("blocks/base/base.pug"), "doctype html\nhtml\n  body\n    block content\n");
    assert_eq!(tree.read("blocks/base/base.scss"), "body {}\n");
    assert_eq!(tree.read("blocks/card/card.scss"), ".card {}\n");
}

#[test]
fn test_extends_without_extension_is_not_duplicated() {
    let tree = layout_tree(".page {}\n");
    tree.write("blocks/page/page.pug", "extends ../base/base\n\nblock content\n  +card\n");

    generate(&tree, &["blocks"]);
    generate(&tree, &["blocks"]);

    assert_eq!(
        tree.read("blocks/page/page.pug"),
        "extends ../base/base\n\nblock content\n  include ../card/card.pug\n  +card\n"
    );
    assert_eq!(
        tree.read("blocks/page/page.scss"),
        "@import '../base/base.scss';\n@import '../card/card.scss';\n.page {}\n"
    );
}
