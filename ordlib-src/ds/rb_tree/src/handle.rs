use std::{cmp::Ordering::Less, fmt, marker::PhantomData};

use total_order::Compare;

use crate::{node::NodePtr, RbTree};

/// A shared handle to an element of an [`RbTree`], obtained by
/// [`RbTree::find`].
pub struct NodeRef<'a, T> {
    node: NodePtr<T>,
    _marker: PhantomData<&'a T>,
}

/// An exclusive handle to an element of an [`RbTree`], obtained by
/// [`RbTree::find_mut`].
///
/// The element cannot be mutated through `&mut T`, since that could move
/// it out of order. [`NodeMut::replace`] checks the order instead.
pub struct NodeMut<'a, T, C> {
    node: NodePtr<T>,
    tree: &'a mut RbTree<T, C>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(node: NodePtr<T>) -> Self {
        Self { node, _marker: PhantomData }
    }

    pub fn get(&self) -> &'a T { unsafe { self.node.val() } }
}

impl<T> Copy for NodeRef<'_, T> {}
impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.get()).finish()
    }
}

impl<'a, T, C> NodeMut<'a, T, C> {
    pub(crate) fn new(node: NodePtr<T>, tree: &'a mut RbTree<T, C>) -> Self {
        Self { node, tree }
    }

    pub fn get(&self) -> &T { unsafe { self.node.val() } }
    pub fn into_ref(self) -> NodeRef<'a, T> { NodeRef::new(self.node) }
}

impl<T, C: Compare<T>> NodeMut<'_, T, C> {
    /// Overwrites the element with `elt` and returns the old one, provided
    /// that `elt` still sorts strictly between the neighbors of the
    /// element. Otherwise hands `elt` back and leaves the tree untouched.
    ///
    /// # Examples
    /// ```
    /// use rb_tree::RbTree;
    ///
    /// let mut tree: RbTree<_> = [10, 20, 30].into_iter().collect();
    /// let mut node = tree.find_mut(&20).unwrap();
    /// assert_eq!(node.replace(25), Ok(20));
    /// assert_eq!(node.replace(30), Err(30));
    /// assert_eq!(format!("{tree:?}"), "{10, 25, 30}");
    /// ```
    pub fn replace(&mut self, elt: T) -> Result<T, T> {
        let cmp = &self.tree.cmp;
        let after_prev = self.node.predecessor().map_or(true, |prev| {
            cmp.compare(unsafe { prev.val() }, &elt) == Less
        });
        let before_next = self.node.successor().map_or(true, |next| {
            cmp.compare(&elt, unsafe { next.val() }) == Less
        });
        if after_prev && before_next {
            // `self` holds the only borrow of the tree.
            Ok(std::mem::replace(unsafe { self.node.val_mut() }, elt))
        } else {
            Err(elt)
        }
    }

    /// Removes the element from the tree and returns it.
    pub fn remove(self) -> T { self.tree.delete_node(self.node) }
}

impl<T: fmt::Debug, C> fmt::Debug for NodeMut<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeMut").field(self.get()).finish()
    }
}
