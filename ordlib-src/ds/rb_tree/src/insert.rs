use std::cmp::Ordering::*;

use total_order::Compare;

use crate::{
    node::{is_red, set_color, Color, NodePtr, Side},
    RbTree,
};

impl<T, C: Compare<T>> RbTree<T, C> {
    /// Inserts `elt` unless an equal element is already present.
    ///
    /// Returns `true` if inserted. On `false`, the tree is left exactly as
    /// it was and `elt` is dropped.
    ///
    /// # Examples
    /// ```
    /// use rb_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert!(tree.add(10));
    /// assert!(!tree.add(10));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, elt: T) -> bool {
        let Some(mut cur) = self.root else {
            let node = NodePtr::new(elt, None);
            node.set_color(Color::Black);
            self.root = Some(node);
            self.len += 1;
            return true;
        };

        let side = loop {
            let side = match self.cmp.compare(&elt, unsafe { cur.val() }) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return false,
            };
            match cur.child(side) {
                Some(child) => cur = child,
                None => break side,
            }
        };

        let node = NodePtr::new(elt, Some(cur));
        cur.set_child(side, Some(node));
        self.len += 1;
        self.fix_after_add(node);
        true
    }

    fn fix_after_add(&mut self, node: NodePtr<T>) {
        // `p` is red, and possibly so is its parent.
        let mut p = node;
        while let Some(parent) = p.parent().filter(|par| par.is_red()) {
            // The root is black, so a red parent has a parent.
            let Some(grand) = parent.parent() else {
                unreachable!("red root");
            };
            let side = grand.side_of(parent);
            let uncle = grand.child(side.opposite());

            if is_red(uncle) {
                parent.set_color(Color::Black);
                set_color(uncle, Color::Black);
                grand.set_color(Color::Red);
                p = grand;
                continue;
            }

            // Straighten the zig-zag so that `p` is the outer grandchild.
            let mut parent = parent;
            if parent.child(side.opposite()) == Some(p) {
                self.rotate(parent, side);
                std::mem::swap(&mut p, &mut parent);
            }

            parent.set_color(Color::Black);
            grand.set_color(Color::Red);
            self.rotate(grand, side.opposite());
        }

        set_color(self.root, Color::Black);
    }
}
