//! Statements of removed dependencies are taken out again.

use crate::common::{ComponentTree, card_page_tree, generator};

#[test]
fn test_removed_reference_restores_file() {
    let tree = card_page_tree();
    let mut generator = generator(&tree, &["blocks"], true);
    generator.run().unwrap();
    assert_eq!(tree.read("blocks/page/page.scss"), "@import '../card/card.scss';\n.page {}\n");

    tree.touch_write("blocks/page/page.pug", ".page\n");
    let report = generator.run().unwrap();

    assert_eq!(report.pass_count(), 1);
    assert_eq!(tree.read("blocks/page/page.scss"), ".page {}\n");
    assert!(report.written().any(|path| path == &tree.join("blocks/page/page.scss")));
}

#[test]
fn test_emptied_synthesized_file_is_deleted() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/card/card.scss", ".card {}\n");
    tree.write("blocks/page/page.pug", "+card\n");
    let original = tree.contents();

    let mut generator = generator(&tree, &["blocks"], true);
    generator.run().unwrap();
    assert_eq!(tree.read("blocks/page/page.scss"), "@import '../card/card.scss';\n");

    tree.touch_write("blocks/page/page.pug", "div\n");
    let report = generator.run().unwrap();

    assert_eq!(report.deleted().cloned().collect::<Vec<_>>(), vec![tree.join("blocks/page/page.scss")]);
    assert_eq!(report.pass_count(), 2);
    assert!(!tree.exists("blocks/page/page.scss"));

    let mut restored = original;
    restored.iter_mut().for_each(|(path, content)| {
        if path == "blocks/page/page.pug" {
            *content = "div\n".to_string();
        }
    });
    assert_eq!(tree.contents(), restored);
}

#[test]
fn test_removed_sub_component_is_retracted() {
    let tree = card_page_tree();
    let mut generator = generator(&tree, &["blocks"], true);
    generator.run().unwrap();
    assert_eq!(tree.read("blocks/card/card.scss"), "@import '__title/card__title.scss';\n.card {}\n");

    std::fs::remove_dir_all(tree.join("blocks/card/__title")).unwrap();
    generator.run().unwrap();

    assert_eq!(tree.read("blocks/card/card.scss"), ".card {}\n");
}

#[test]
fn test_added_then_removed_edge_is_symmetric() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/button/button.js", "button();\n");
    tree.write("blocks/button/button.scss", ".button {}\n");
    tree.write("blocks/menu/menu.pug", ".menu\n");
    tree.write("blocks/menu/menu.js", "menu();\n");
    tree.write("blocks/menu/menu.scss", ".menu {}\n");

    let mut generator = generator(&tree, &["blocks"], true);
    assert!(generator.run().unwrap().is_noop());
    let before = tree.contents();

    tree.touch_write("blocks/menu/menu.pug", ".menu\n  +button\n");
    generator.run().unwrap();
    assert_eq!(tree.read("blocks/menu/menu.js"), "import '../button/button.js';\nmenu();\n");
    assert_eq!(tree.read("blocks/menu/menu.scss"), "@import '../button/button.scss';\n.menu {}\n");

    tree.touch_write("blocks/menu/menu.pug", ".menu\n");
    generator.run().unwrap();
    assert_eq!(tree.contents(), before);
}
