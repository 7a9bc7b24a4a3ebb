//! Repeated runs over an unchanged tree.

use crate::common::{card_page_tree, generate, generator};

#[test]
fn test_generated_statements() {
    let tree = card_page_tree();

    let report = generate(&tree, &["blocks"]);

    assert_eq!(report.pass_count(), 1);
    assert!(report.created().next().is_none());
    assert_eq!(tree.read("blocks/card/card.scss"), "@import '__title/card__title.scss';\n.card {}\n");
    assert_eq!(tree.read("blocks/page/page.scss"), "@import '../card/card.scss';\n.page {}\n");
    assert_eq!(tree.read("blocks/page/page.pug"), "include ../card/card.pug\n.page\n  +card\n");
}

#[test]
fn test_fresh_generator_leaves_generated_tree_alone() {
    let tree = card_page_tree();
    generate(&tree, &["blocks"]);
    let before = tree.contents();

    let again = generate(&tree, &["blocks"]);

    assert!(again.is_noop());
    assert_eq!(tree.contents(), before);
}

#[test]
fn test_same_generator_settles() {
    let tree = card_page_tree();
    let mut generator = generator(&tree, &["blocks"], true);

    let first = generator.run().unwrap();
    assert!(!first.is_noop());
    let before = tree.contents();

    let second = generator.run().unwrap();
    assert!(second.is_noop());
    assert!(!second.passes[0].skipped);

    let third = generator.run().unwrap();
    assert!(third.is_noop());
    assert!(third.passes[0].skipped);
    assert_eq!(tree.contents(), before);
}

#[test]
fn test_hand_written_statement_is_not_duplicated() {
    let tree = card_page_tree();
    tree.write("blocks/page/page.scss", ".page {}\n\n@import '../card/card.scss';\n");

    generate(&tree, &["blocks"]);

    assert_eq!(tree.read("blocks/page/page.scss"), ".page {}\n\n@import '../card/card.scss';\n");
}
