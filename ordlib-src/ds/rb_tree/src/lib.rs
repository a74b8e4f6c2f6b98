//! Red-black tree.
//!
//! An ordered set whose order is given by a [`Compare`] value supplied at
//! construction. Insertion, lookup and removal take $`O(\log n)`$ time.
//!
//! # Invariants
//!
//! 1. Each node is red or black, and absent children count as black.
//! 2. The root is black.
//! 3. No red node has a red child.
//! 4. All paths from a node down to an absent child pass through the same
//!    number of black nodes.
//! 5. The in-order sequence is strictly increasing under the comparator.
//!
//! Invariants 3 and 4 bound the height by $`2\log_2(n+1)`$.
//!
//! # Examples
//! ```
//! use rb_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for x in [10, 20, 30, 15, 25, 5, 1] {
//!     assert!(tree.add(x));
//! }
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.find(&15).map(|node| *node.get()), Some(15));
//!
//! assert!(tree.remove(&20));
//! assert!(tree.find(&20).is_none());
//! assert_eq!(format!("{tree:?}"), "{1, 5, 10, 15, 25, 30}");
//! ```

use std::{cmp::Ordering::*, fmt, marker::PhantomData};

use total_order::{Compare, NaturalOrder};

mod handle;
mod insert;
mod node;
mod remove;
mod rotate;

#[cfg(test)]
mod debug;

pub use handle::{NodeMut, NodeRef};

use node::{NodePtr, Side};

pub struct RbTree<T, C = NaturalOrder<T>> {
    root: Option<NodePtr<T>>,
    len: usize,
    cmp: C,
    _marker: PhantomData<Box<T>>,
}

// The tree owns its nodes like a `Box` would.
unsafe impl<T: Send, C: Send> Send for RbTree<T, C> {}
unsafe impl<T: Sync, C: Sync> Sync for RbTree<T, C> {}

impl<T: Ord> RbTree<T> {
    pub fn new() -> Self { Self::with_comparator(NaturalOrder::new()) }
}

impl<T, C> RbTree<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self { root: None, len: 0, cmp, _marker: PhantomData }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn comparator(&self) -> &C { &self.cmp }

    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            unsafe { root.drop_subtree() };
        }
        self.len = 0;
    }

    /// Elements in order. Kept private; the tree offers no iteration.
    fn inorder(&self) -> impl Iterator<Item = &T> + '_ {
        let first = self.root.map(|root| root.extreme(Side::Left));
        std::iter::successors(first, |node| node.successor())
            .map(|node| unsafe { node.val() })
    }
}

impl<T, C: Compare<T>> RbTree<T, C> {
    fn search(&self, elt: &T) -> Option<NodePtr<T>> {
        let mut cur = self.root;
        while let Some(node) = cur {
            cur = match self.cmp.compare(elt, unsafe { node.val() }) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return Some(node),
            };
        }
        None
    }

    /// Returns a handle to the element equal to `elt`.
    pub fn find(&self, elt: &T) -> Option<NodeRef<'_, T>> {
        self.search(elt).map(NodeRef::new)
    }

    /// Returns an exclusive handle to the element equal to `elt`.
    pub fn find_mut(&mut self, elt: &T) -> Option<NodeMut<'_, T, C>> {
        let node = self.search(elt)?;
        Some(NodeMut::new(node, self))
    }

    pub fn get(&self, elt: &T) -> Option<&T> {
        self.search(elt).map(|node| unsafe { node.val() })
    }
    pub fn contains(&self, elt: &T) -> bool { self.search(elt).is_some() }
}

impl<T, C> Drop for RbTree<T, C> {
    fn drop(&mut self) { self.clear() }
}

impl<T, C: Default> Default for RbTree<T, C> {
    fn default() -> Self { Self::with_comparator(C::default()) }
}

impl<T, C: Compare<T>> Extend<T> for RbTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.add(elt);
        }
    }
}

impl<T: Ord> FromIterator<T> for RbTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RbTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}
