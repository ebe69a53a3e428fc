use super::{Link, NodeRef, OrderedTreeSet};
use crate::util::error::NoCurrentElement;

impl<T> OrderedTreeSet<T> {
    /// Creates a [`CursorMut`] positioned before the least element.
    pub fn cursor(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            next: self.root.map(|root| root.leftmost()),
            last: None,
            set: self,
        }
    }
}

/// An ascending cursor over an [`OrderedTreeSet`], which can remove the element it last returned
/// and carry on from the element after it.
///
/// # Examples
/// ```
/// # use contract_collections::collections::tree::OrderedTreeSet;
/// let mut set = OrderedTreeSet::from([5, 3, 8, 1, 4, 7, 9]);
/// let mut cursor = set.cursor();
/// while let Some(value) = cursor.next() {
///     if value % 2 == 1 {
///         cursor.remove().unwrap();
///     }
/// }
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&4, &8]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) set: &'a mut OrderedTreeSet<T>,
    pub(crate) next: Link<T>,
    pub(crate) last: Option<NodeRef<T>>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns true if there is an element after the cursor.
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Moves the cursor forward over the next element in ascending order, returning it.
    pub fn next(&mut self) -> Option<&T> {
        let node = self.next?;
        self.next = node.successor();
        self.last = Some(node);
        // SAFETY: The node is part of the set, which the cursor borrows mutably. The reference
        // borrows the cursor, so the node can't be removed while it is alive.
        Some(unsafe { node.value() })
    }

    /// Removes the current element and returns it, or returns an [`Err`] if there is no current
    /// element. A following call to [`next`](CursorMut::next) returns the element that was after
    /// the removed one.
    pub fn remove(&mut self) -> Result<T, NoCurrentElement> {
        let node = self.last.take().ok_or(NoCurrentElement)?;

        if node.left().is_some() && node.right().is_some() {
            // The successor's value is about to move into node, and its own node is freed.
            self.next = Some(node);
        }

        // SAFETY: last is only ever a node of the set that hasn't been removed, and no reference
        // to its value outlives the call that returned it.
        Ok(unsafe { self.set.unlink(node) })
    }
}
