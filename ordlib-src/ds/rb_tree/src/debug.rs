use std::{cmp::Ordering::Less, fmt};

use total_order::Compare;

use crate::{
    node::{is_red, Color, NodePtr},
    RbTree,
};

/// Draws the tree, one node per line, left child first. An absent child
/// whose sibling is present is drawn as `·`.
///
/// ```text
/// 20 B
/// ├── 10 R
/// │   ├── 5 B
/// │   └── 15 B
/// └── 30 B
/// ```
pub fn render<T: fmt::Debug, C>(tree: &RbTree<T, C>) -> String {
    fn label<T: fmt::Debug>(node: NodePtr<T>) -> String {
        let color = match node.color() {
            Color::Red => "R",
            Color::Black => "B",
        };
        format!("{:?} {color}", unsafe { node.val() })
    }

    fn dfs<T: fmt::Debug>(node: NodePtr<T>, prefix: &str, out: &mut String) {
        let children = [node.left(), node.right()];
        if children.iter().all(Option::is_none) {
            return;
        }
        for (i, child) in children.into_iter().enumerate() {
            let (branch, indent) =
                if i == 0 { ("├── ", "│   ") } else { ("└── ", "    ") };
            match child {
                Some(child) => {
                    out.push_str(&format!("{prefix}{branch}{}\n", label(child)));
                    dfs(child, &format!("{prefix}{indent}"), out);
                }
                None => out.push_str(&format!("{prefix}{branch}·\n")),
            }
        }
    }

    let mut out = String::new();
    if let Some(root) = tree.root {
        out.push_str(&label(root));
        out.push('\n');
        dfs(root, "", &mut out);
    }
    out
}

/// Number of nodes on the longest path from the root.
pub fn height<T, C>(tree: &RbTree<T, C>) -> usize {
    fn dfs<T>(node: Option<NodePtr<T>>) -> usize {
        node.map_or(0, |node| 1 + dfs(node.left()).max(dfs(node.right())))
    }
    dfs(tree.root)
}

/// Panics unless the tree is a well-formed red-black tree, ignoring the
/// order of elements. Returns the number of black nodes on each path from
/// the root to an absent child.
pub fn assert_structure<T: fmt::Debug, C>(tree: &RbTree<T, C>) -> usize {
    // (black-height, node count)
    fn dfs<T: fmt::Debug>(node: NodePtr<T>) -> (usize, usize) {
        let mut bh = [0; 2];
        let mut count = 1;
        for (i, child) in [node.left(), node.right()].into_iter().enumerate() {
            let Some(child) = child else { continue };
            assert!(
                child.parent() == Some(node),
                "broken parent link at {:?}",
                unsafe { child.val() }
            );
            assert!(
                !(node.is_red() && child.is_red()),
                "red {:?} has red child {:?}",
                unsafe { node.val() },
                unsafe { child.val() }
            );
            let (child_bh, child_count) = dfs(child);
            bh[i] = child_bh;
            count += child_count;
        }
        assert_eq!(
            bh[0],
            bh[1],
            "black-height mismatch under {:?}",
            unsafe { node.val() }
        );
        (bh[0] + (node.color() == Color::Black) as usize, count)
    }

    let Some(root) = tree.root else {
        assert_eq!(tree.len, 0);
        return 0;
    };
    assert!(root.parent().is_none(), "root has a parent");
    assert!(!is_red(Some(root)), "red root");

    let (bh, count) = dfs(root);
    assert_eq!(count, tree.len, "cached length is stale");
    bh
}

/// [`assert_structure`], plus the elements being strictly increasing.
pub fn assert_invariants<T: fmt::Debug, C: Compare<T>>(
    tree: &RbTree<T, C>,
) -> usize {
    let bh = assert_structure(tree);
    let inorder: Vec<_> = tree.inorder().collect();
    for w in inorder.windows(2) {
        assert!(
            tree.cmp.compare(w[0], w[1]) == Less,
            "out of order: {:?} then {:?}\n{}",
            w[0],
            w[1],
            render(tree)
        );
    }
    bh
}
