//! Folder and content dependencies on small trees.

use blockdeps_cli::model::FileKind;

use crate::common::{ComponentTree, generate, generator};

#[test]
fn test_nested_component_is_folder_dependency() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/a/a.pug", ".a\n");
    tree.write("blocks/a/a.scss", ".a {}\n");
    tree.write("blocks/a/b/b.scss", ".b {}\n");

    let mut generator = generator(&tree, &["blocks"], true);
    let report = generator.run().unwrap();

    assert_eq!(report.pass_count(), 1);
    assert_eq!(tree.read("blocks/a/a.scss"), "@import 'b/b.scss';\n.a {}\n");
    assert_eq!(tree.read("blocks/a/a.pug"), ".a\n");
    assert_eq!(tree.read("blocks/a/b/b.scss"), ".b {}\n");

    let snapshot = generator.snapshot().unwrap();
    assert_eq!(snapshot.dependencies["a"].folder, vec!["b".to_string()]);
    assert_eq!(snapshot.dependencies["b"].content, None);

    let second = generator.run().unwrap();
    assert!(second.is_noop());
    assert_eq!(tree.read("blocks/a/a.scss"), "@import 'b/b.scss';\n.a {}\n");
}

#[test]
fn test_template_reference_synthesizes_style_file() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/c/c.pug", "+d\n");
    tree.write("blocks/d/d.scss", ".d {}\n");

    let mut generator = generator(&tree, &["blocks"], true);
    let report = generator.run().unwrap();

    assert_eq!(report.pass_count(), 2);
    assert_eq!(report.created().cloned().collect::<Vec<_>>(), vec![tree.join("blocks/c/c.scss")]);
    assert_eq!(tree.read("blocks/c/c.scss"), "@import '../d/d.scss';\n");
    assert_eq!(tree.read("blocks/c/c.pug"), "+d\n");

    // A rescan sees the file as an ordinary one
    let snapshot = generator.snapshot().unwrap();
    let style = snapshot.entity("c").unwrap().file(&FileKind::new(".scss")).unwrap();
    assert!(!style.generated);
}

#[test]
fn test_no_synthesis_when_creation_disabled() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/c/c.pug", "+d\n");
    tree.write("blocks/d/d.scss", ".d {}\n");

    let report = generator(&tree, &["blocks"], false).run().unwrap();

    assert!(report.is_noop());
    assert!(!tree.exists("blocks/c/c.scss"));
}

#[test]
fn test_roots_are_unioned() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/button/button.js", "button();\n");
    tree.write("pages/index/index.pug", "+button\n");
    tree.write("pages/index/index.js", "index();\n");

    let report = generate(&tree, &["blocks", "pages"]);

    assert_eq!(report.pass_count(), 1);
    assert_eq!(
        tree.read("pages/index/index.js"),
        "import '../../blocks/button/button.js';\nindex();\n"
    );
}

#[test]
fn test_unknown_references_are_ignored() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/page/page.pug", ".page\n  .wrapper\n    +missing\n");
    tree.write("blocks/page/page.scss", ".page {}\n");

    let report = generate(&tree, &["blocks"]);

    assert!(report.is_noop());
    assert_eq!(tree.read("blocks/page/page.scss"), ".page {}\n");
}

#[test]
fn test_file_added_to_entity_gets_existing_dependencies() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/card/card.js", "card();\n");
    tree.write("blocks/page/page.pug", "+card\n");

    let mut generator = generator(&tree, &["blocks"], false);
    generator.run().unwrap();
    assert!(!tree.exists("blocks/page/page.js"));

    tree.write("blocks/page/page.js", "page();\n");
    generator.run().unwrap();

    assert_eq!(tree.read("blocks/page/page.js"), "import '../card/card.js';\npage();\n");
    assert!(generator.run().unwrap().is_noop());
}
