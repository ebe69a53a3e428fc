use std::ptr::NonNull;

/// A child or parent link. Child links own the node they point to, parent links don't.
pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A handle to a node of a tree. Every node is owned through its parent's child link (or the
/// tree's root), while its own parent link is only a back-reference.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub parent: Link<T>,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> NodeRef<T> {
    /// Allocates a leaf holding `value` below `parent`. The parent's child link isn't updated.
    pub fn leaf(value: T, parent: Link<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(Node {
            value,
            parent,
            left: None,
            right: None,
        }))))
    }

    pub fn parent(&self) -> Link<T> {
        // SAFETY: A NodeRef always points to a live node of its tree.
        unsafe { (*self.0.as_ptr()).parent }
    }

    pub fn left(&self) -> Link<T> {
        // SAFETY: A NodeRef always points to a live node of its tree.
        unsafe { (*self.0.as_ptr()).left }
    }

    pub fn right(&self) -> Link<T> {
        // SAFETY: A NodeRef always points to a live node of its tree.
        unsafe { (*self.0.as_ptr()).right }
    }

    pub fn set_parent(&self, parent: Link<T>) {
        // SAFETY: A NodeRef always points to a live node of its tree, and links are only written
        // while the owning tree is borrowed mutably.
        unsafe { (*self.0.as_ptr()).parent = parent }
    }

    pub fn set_left(&self, left: Link<T>) {
        // SAFETY: As for set_parent.
        unsafe { (*self.0.as_ptr()).left = left }
    }

    pub fn set_right(&self, right: Link<T>) {
        // SAFETY: As for set_parent.
        unsafe { (*self.0.as_ptr()).right = right }
    }

    /// # Safety
    /// The returned reference must not outlive the node or overlap a mutable reference to the same
    /// value.
    pub unsafe fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live, the caller upholds aliasing.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The returned reference must be the only reference to the value for its lifetime.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: The node is live, the caller upholds aliasing.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    /// Frees the node and moves its value out.
    ///
    /// # Safety
    /// The node must already be unlinked from its tree and must not be used again.
    pub unsafe fn take_value(self) -> T {
        // SAFETY: The node was allocated by Box and is no longer reachable, so ownership can be
        // reclaimed.
        unsafe { Box::from_raw(self.0.as_ptr()).value }
    }

    /// Returns the leftmost node of the subtree rooted here, which holds its least value.
    pub fn leftmost(self) -> NodeRef<T> {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Returns the rightmost node of the subtree rooted here, which holds its greatest value.
    pub fn rightmost(self) -> NodeRef<T> {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Returns the in-order successor of this node. With a right subtree, that is the subtree's
    /// leftmost node. Otherwise, it is the first ancestor reached from a left child.
    pub fn successor(self) -> Link<T> {
        if let Some(right) = self.right() {
            return Some(right.leftmost());
        }

        let mut child = self;
        while let Some(parent) = child.parent() {
            if parent.left() == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    /// Returns the in-order predecessor of this node, mirroring [`successor`](NodeRef::successor).
    pub fn predecessor(self) -> Link<T> {
        if let Some(left) = self.left() {
            return Some(left.rightmost());
        }

        let mut child = self;
        while let Some(parent) = child.parent() {
            if parent.right() == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}
