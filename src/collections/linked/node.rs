use std::mem::MaybeUninit;
use std::ptr::NonNull;

// Nodes are allocated through Box, so that a node's value can be moved back out of the heap when
// the node is freed.

/// A non-owning handle to a node of a sequence's ring. Every node is owned by the sequence whose
/// ring it belongs to, a `NodeRef` is only a position within it.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

pub(crate) struct Node<T> {
    /// Uninitialized for the sentinel only.
    pub value: MaybeUninit<T>,
    pub prev: NodeRef<T>,
    pub next: NodeRef<T>,
}

impl<T> NodeRef<T> {
    /// Allocates a sentinel node, which carries no value and links to itself in both directions.
    pub fn sentinel() -> NodeRef<T> {
        let node = NodeRef(NonNull::from(Box::leak(Box::new(Node {
            value: MaybeUninit::uninit(),
            prev: NodeRef(NonNull::dangling()),
            next: NodeRef(NonNull::dangling()),
        }))));

        node.set_prev(node);
        node.set_next(node);
        node
    }

    /// Allocates a node holding `value` with the provided links. The neighbours aren't updated.
    pub fn from_value(value: T, prev: NodeRef<T>, next: NodeRef<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(Node {
            value: MaybeUninit::new(value),
            prev,
            next,
        }))))
    }

    pub fn prev(&self) -> NodeRef<T> {
        // SAFETY: A NodeRef always points to a live node of its ring.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(&self) -> NodeRef<T> {
        // SAFETY: A NodeRef always points to a live node of its ring.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(&self, prev: NodeRef<T>) {
        // SAFETY: A NodeRef always points to a live node of its ring, and links are only written
        // while the owning sequence is borrowed mutably.
        unsafe { (*self.0.as_ptr()).prev = prev }
    }

    pub fn set_next(&self, next: NodeRef<T>) {
        // SAFETY: As for set_prev.
        unsafe { (*self.0.as_ptr()).next = next }
    }

    /// # Safety
    /// The node must not be the sentinel, and the returned reference must not outlive the node or
    /// overlap a mutable reference to the same value.
    pub unsafe fn value<'a>(&self) -> &'a T {
        // SAFETY: Every node other than the sentinel holds an initialized value.
        unsafe { (*self.0.as_ptr()).value.assume_init_ref() }
    }

    /// # Safety
    /// The node must not be the sentinel, and the returned reference must be the only reference to
    /// the value for its lifetime.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: Every node other than the sentinel holds an initialized value.
        unsafe { (*self.0.as_ptr()).value.assume_init_mut() }
    }

    /// Frees the node and moves its value out.
    ///
    /// # Safety
    /// The node must not be the sentinel, must already be unlinked from its ring and must not be
    /// used again.
    pub unsafe fn take_value(self) -> T {
        // SAFETY: The node was allocated by Box and is no longer reachable, so ownership can be
        // reclaimed. Its value is initialized because it isn't the sentinel.
        unsafe { Box::from_raw(self.0.as_ptr()).value.assume_init() }
    }

    /// Frees a sentinel node.
    ///
    /// # Safety
    /// The node must be a sentinel that no longer links to any value-carrying nodes and must not
    /// be used again.
    pub unsafe fn free(self) {
        // SAFETY: The node was allocated by Box. Its MaybeUninit value isn't dropped.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) })
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
