use crate::{
    node::{NodePtr, Side},
    RbTree,
};

impl<T, C> RbTree<T, C> {
    /// Makes `new` take the place of `old` as the child of `parent`, or as
    /// the root if `parent` is `None`. Parent links of `old` and `new` are
    /// left to the caller.
    pub(crate) fn relink(
        &mut self,
        parent: Option<NodePtr<T>>,
        old: NodePtr<T>,
        new: Option<NodePtr<T>>,
    ) {
        match parent {
            None => self.root = new,
            Some(parent) => parent.set_child(parent.side_of(old), new),
        }
    }

    /// Rotates around `p` towards `dir`.
    ///
    /// `rotate(p, Side::Left)` is the usual left rotation: the right child
    /// of `p` takes its place, and `p` becomes its left child.
    ///
    /// ```text
    ///       p                r
    ///      / \              / \
    ///     a   r     =>     p   c
    ///        / \          / \
    ///       b   c        a   b
    /// ```
    ///
    /// Colors are untouched.
    pub(crate) fn rotate(&mut self, p: NodePtr<T>, dir: Side) {
        let Some(r) = p.child(dir.opposite()) else {
            unreachable!("rotation needs a child to lift");
        };
        let inner = r.child(dir);
        p.set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            inner.set_parent(Some(p));
        }
        let parent = p.parent();
        r.set_parent(parent);
        self.relink(parent, p, Some(r));
        r.set_child(dir, Some(p));
        p.set_parent(Some(r));
    }
}
