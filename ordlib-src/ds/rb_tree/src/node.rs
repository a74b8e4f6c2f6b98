use std::{fmt, ptr::NonNull};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

pub(crate) struct Node<T> {
    val: T,
    color: Color,
    // Non-owning; the parent owns this node, not the other way around.
    parent: Option<NodePtr<T>>,
    left: Option<NodePtr<T>>,
    right: Option<NodePtr<T>>,
}

/// A pointer to a node owned by some tree.
///
/// Every accessor below dereferences the pointer, so a `NodePtr` must not
/// be used after the node has been handed to [`NodePtr::into_val`]. The
/// tree guarantees this by never keeping pointers to unlinked nodes.
pub(crate) struct NodePtr<T> {
    node: NonNull<Node<T>>,
}

impl<T> Copy for NodePtr<T> {}
impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self { *self }
}
impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool { self.node == other.node }
}
impl<T> Eq for NodePtr<T> {}
impl<T> fmt::Debug for NodePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodePtr").field(&self.node).finish()
    }
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl<T> NodePtr<T> {
    /// Allocates a red node without children.
    pub fn new(val: T, parent: Option<Self>) -> Self {
        let node = Node {
            val,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        };
        Self { node: NonNull::from(Box::leak(Box::new(node))) }
    }

    /// Frees the node, giving back its value.
    ///
    /// # Safety
    /// The node must be unlinked from its tree, and no copy of this
    /// pointer may be used afterwards.
    pub unsafe fn into_val(self) -> T {
        let node = unsafe { Box::from_raw(self.node.as_ptr()) };
        debug_assert!(node.parent.is_none());
        debug_assert!(node.left.is_none() && node.right.is_none());
        node.val
    }

    /// # Safety
    /// The caller picks `'a`; it must not outlive the node, nor overlap a
    /// [`NodePtr::val_mut`] borrow of it. In practice `'a` is bounded by a
    /// borrow of the owning tree.
    pub unsafe fn val<'a>(self) -> &'a T {
        unsafe { &(*self.node.as_ptr()).val }
    }
    /// # Safety
    /// As [`NodePtr::val`], and no other reference to the value may be
    /// alive during `'a`.
    pub unsafe fn val_mut<'a>(self) -> &'a mut T {
        unsafe { &mut (*self.node.as_ptr()).val }
    }

    pub fn color(self) -> Color { unsafe { (*self.node.as_ptr()).color } }
    pub fn is_red(self) -> bool { self.color() == Color::Red }
    pub fn set_color(self, color: Color) {
        unsafe { (*self.node.as_ptr()).color = color }
    }

    pub fn parent(self) -> Option<Self> {
        unsafe { (*self.node.as_ptr()).parent }
    }
    pub fn set_parent(self, parent: Option<Self>) {
        unsafe { (*self.node.as_ptr()).parent = parent }
    }

    pub fn left(self) -> Option<Self> { unsafe { (*self.node.as_ptr()).left } }
    pub fn right(self) -> Option<Self> {
        unsafe { (*self.node.as_ptr()).right }
    }
    pub fn child(self, side: Side) -> Option<Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }
    pub fn set_child(self, side: Side, child: Option<Self>) {
        let ptr = self.node.as_ptr();
        match side {
            Side::Left => unsafe { (*ptr).left = child },
            Side::Right => unsafe { (*ptr).right = child },
        }
    }

    /// Which child of `self` the node `child` is.
    pub fn side_of(self, child: Self) -> Side {
        if self.left() == Some(child) {
            Side::Left
        } else {
            debug_assert!(self.right() == Some(child));
            Side::Right
        }
    }

    pub fn unlink(self) {
        let ptr = self.node.as_ptr();
        unsafe {
            (*ptr).parent = None;
            (*ptr).left = None;
            (*ptr).right = None;
        }
    }

    /// The last node reached by following `side` links from `self`.
    pub fn extreme(self, side: Side) -> Self {
        let mut cur = self;
        while let Some(next) = cur.child(side) {
            cur = next;
        }
        cur
    }

    /// The in-order neighbor of `self` towards `side`: the next node for
    /// `Side::Right`, the previous one for `Side::Left`.
    pub fn neighbor(self, side: Side) -> Option<Self> {
        if let Some(child) = self.child(side) {
            return Some(child.extreme(side.opposite()));
        }
        let mut cur = self;
        let mut par = self.parent();
        while let Some(p) = par {
            if p.child(side) != Some(cur) {
                break;
            }
            cur = p;
            par = p.parent();
        }
        par
    }

    pub fn successor(self) -> Option<Self> { self.neighbor(Side::Right) }
    pub fn predecessor(self) -> Option<Self> { self.neighbor(Side::Left) }

    /// Frees every node of the subtree rooted at `self`, dropping values.
    ///
    /// # Safety
    /// The subtree must be detached from anything that outlives this call.
    pub unsafe fn drop_subtree(self) {
        let (left, right) = (self.left(), self.right());
        self.unlink();
        unsafe {
            if let Some(left) = left {
                left.drop_subtree();
            }
            if let Some(right) = right {
                right.drop_subtree();
            }
            drop(self.into_val());
        }
    }
}

// An absent node is black.

pub(crate) fn is_red<T>(node: Option<NodePtr<T>>) -> bool {
    node.is_some_and(|node| node.is_red())
}

pub(crate) fn set_color<T>(node: Option<NodePtr<T>>, color: Color) {
    if let Some(node) = node {
        node.set_color(color);
    }
}

pub(crate) fn child_of<T>(
    node: Option<NodePtr<T>>,
    side: Side,
) -> Option<NodePtr<T>> {
    node.and_then(|node| node.child(side))
}
