//! Unchanged components keep their dependency records between runs.

use anyhow::Result;
use blockdeps_cli::model::FileKind;
use blockdeps_cli::template::{PugParser, TemplateParser, TemplateReferences};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::common::{ComponentTree, generator};

struct CountingParser {
    calls: Arc<AtomicUsize>,
}

impl TemplateParser for CountingParser {
    fn kind(&self) -> FileKind {
        PugParser::new().kind()
    }

    fn parse(&self, path: &Path, exclude: &[String]) -> Result<TemplateReferences> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        PugParser::new().parse(path, exclude)
    }
}

fn templates_tree() -> ComponentTree {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/a/a.pug", ".a\n");
    tree.write("blocks/b/b.pug", ".b\n");
    tree.write("blocks/c/c.pug", ".c\n");
    tree
}

#[test]
fn test_only_changed_template_is_parsed() {
    let tree = templates_tree();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut generator = generator(&tree, &["blocks"], true).with_parser(Box::new(CountingParser {
        calls: Arc::clone(&calls),
    }));

    let first = generator.run().unwrap();
    assert_eq!(first.parsed(), 3);
    assert!(first.is_noop());

    let second = generator.run().unwrap();
    assert!(second.passes[0].skipped);
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    tree.touch_write("blocks/b/b.pug", ".b\n  .b__item\n");
    let third = generator.run().unwrap();

    assert_eq!(third.parsed(), 1);
    assert_eq!(third.passes[0].reused, 2);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_style_change_reuses_template_content() {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/card/card.scss", ".card {}\n");
    tree.write("blocks/page/page.pug", "+card\n");
    tree.write("blocks/page/page.scss", ".page {}\n");

    let calls = Arc::new(AtomicUsize::new(0));
    let mut generator = generator(&tree, &["blocks"], true).with_parser(Box::new(CountingParser {
        calls: Arc::clone(&calls),
    }));
    generator.run().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    tree.touch_write("blocks/page/page.scss", "@import '../card/card.scss';\n.page { margin: 0; }\n");
    let report = generator.run().unwrap();

    assert!(report.is_noop());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(report.passes[0].reused, 1);
}
