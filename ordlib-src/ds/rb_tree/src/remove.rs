use total_order::Compare;

use crate::{
    node::{child_of, is_red, set_color, Color, NodePtr, Side},
    RbTree,
};

impl<T, C: Compare<T>> RbTree<T, C> {
    /// Removes the element equal to `elt`. Returns `false`, leaving the
    /// tree untouched, if there is none.
    ///
    /// # Examples
    /// ```
    /// use rb_tree::RbTree;
    ///
    /// let mut tree: RbTree<_> = [10, 20, 30].into_iter().collect();
    /// assert!(tree.remove(&20));
    /// assert!(!tree.remove(&20));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, elt: &T) -> bool { self.take(elt).is_some() }

    /// Removes the element equal to `elt` and returns the stored one.
    pub fn take(&mut self, elt: &T) -> Option<T> {
        let node = self.search(elt)?;
        Some(self.delete_node(node))
    }
}

impl<T, C> RbTree<T, C> {
    pub(crate) fn delete_node(&mut self, node: NodePtr<T>) -> T {
        self.len -= 1;

        // A node with two children trades values with its successor, which
        // has no left child, and the successor is deleted instead. The value
        // we return thus ends up in the node that is freed.
        let mut p = node;
        if let (Some(_), Some(right)) = (p.left(), p.right()) {
            let s = right.extreme(Side::Left);
            // `p` and `s` are distinct nodes of `self`.
            unsafe { std::mem::swap(p.val_mut(), s.val_mut()) };
            p = s;
        }

        if let Some(replacement) = p.left().or(p.right()) {
            let parent = p.parent();
            replacement.set_parent(parent);
            self.relink(parent, p, Some(replacement));
            let color = p.color();
            p.unlink();
            if color == Color::Black {
                self.fix_after_remove(replacement);
            }
        } else if p.parent().is_some() {
            // The fixup looks for the sibling through `p`, so `p` stays in
            // place until the tree is repaired.
            if p.color() == Color::Black {
                self.fix_after_remove(p);
            }
            if let Some(parent) = p.parent() {
                parent.set_child(parent.side_of(p), None);
            }
            p.unlink();
        } else {
            self.root = None;
        }

        unsafe { p.into_val() }
    }

    /// Restores the black-height along the path through `node`, which is
    /// one black short compared to its sibling's subtree.
    fn fix_after_remove(&mut self, node: NodePtr<T>) {
        let mut p = node;
        while Some(p) != self.root && !p.is_red() {
            let Some(parent) = p.parent() else {
                unreachable!("non-root node without parent");
            };
            let near = parent.side_of(p);
            let far = near.opposite();

            let mut sib = parent.child(far);
            if is_red(sib) {
                set_color(sib, Color::Black);
                parent.set_color(Color::Red);
                self.rotate(parent, near);
                sib = parent.child(far);
            }

            if !is_red(child_of(sib, near)) && !is_red(child_of(sib, far)) {
                set_color(sib, Color::Red);
                p = parent;
                continue;
            }

            if !is_red(child_of(sib, far)) {
                set_color(child_of(sib, near), Color::Black);
                set_color(sib, Color::Red);
                if let Some(sib) = sib {
                    self.rotate(sib, far);
                }
                sib = parent.child(far);
            }

            set_color(sib, parent.color());
            parent.set_color(Color::Black);
            set_color(child_of(sib, far), Color::Black);
            self.rotate(parent, near);
            match self.root {
                Some(root) => p = root,
                None => unreachable!("fixing up an empty tree"),
            }
        }
        p.set_color(Color::Black);
    }
}
