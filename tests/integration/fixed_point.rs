//! Chains of synthesized files that take several passes to settle.

use blockdeps_cli::core::BlockdepsError;

use crate::common::{ComponentTree, generate, generator};

/// `aside` uses `menu`, `menu` uses `link`, and only `link` has a style.
fn chain_tree() -> ComponentTree {
    let tree = ComponentTree::new().unwrap();
    tree.write("blocks/aside/aside.pug", "+menu\n");
    tree.write("blocks/menu/menu.pug", "+link\n");
    tree.write("blocks/link/link.scss", ".link {}\n");
    tree
}

#[test]
fn test_synthesized_chain_reaches_fixed_point() {
    let tree = chain_tree();

    let report = generate(&tree, &["blocks"]);

    assert_eq!(report.pass_count(), 3);
    assert_eq!(report.passes[0].created, vec![tree.join("blocks/menu/menu.scss")]);
    assert_eq!(report.passes[1].created, vec![tree.join("blocks/aside/aside.scss")]);
    assert!(!report.passes[2].needs_repeat());

    assert_eq!(tree.read("blocks/menu/menu.scss"), "@import '../link/link.scss';\n");
    assert_eq!(tree.read("blocks/aside/aside.scss"), "@import '../menu/menu.scss';\n");
    assert_eq!(tree.read("blocks/aside/aside.pug"), "include ../menu/menu.pug\n+menu\n");
    assert_eq!(tree.read("blocks/menu/menu.pug"), "+link\n");

    assert!(generate(&tree, &["blocks"]).is_noop());
}

#[test]
fn test_iteration_bound() {
    let tree = chain_tree();

    let error = generator(&tree, &["blocks"], true).with_max_iterations(2).run().unwrap_err();

    assert!(matches!(
        error.downcast_ref::<BlockdepsError>(),
        Some(BlockdepsError::FixedPointNotReached {
            iterations: 2
        })
    ));
    // Completed passes keep their writes
    assert!(tree.exists("blocks/aside/aside.scss"));
}
