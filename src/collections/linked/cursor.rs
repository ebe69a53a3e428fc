use std::mem;

use super::{LinkedSequence, NodeRef};
use crate::util::error::{IndexOutOfBounds, NoCurrentElement};
use crate::util::result::ResultExtension;

impl<T> LinkedSequence<T> {
    /// Creates a [`CursorMut`] positioned before the first element.
    pub fn cursor(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            next: self.sentinel.next(),
            index: 0,
            last: None,
            seq: self,
        }
    }

    /// Creates a [`CursorMut`] positioned before the element at `index`, or returns an [`Err`] if
    /// `index > len`. Positioning the cursor walks from the closer end of the sequence.
    pub fn try_cursor_at(&mut self, index: usize) -> Result<CursorMut<'_, T>, IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        Ok(CursorMut {
            next: self.seek(index),
            index,
            last: None,
            seq: self,
        })
    }

    /// Creates a [`CursorMut`] positioned before the element at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn cursor_at(&mut self, index: usize) -> CursorMut<'_, T> {
        self.try_cursor_at(index).throw()
    }
}

/// A bidirectional cursor over a [`LinkedSequence`], which sits between two elements and can
/// modify the sequence around it in constant time.
///
/// The cursor tracks the node it would return from [`next`](CursorMut::next) (the sentinel when it
/// is at the back) along with that node's index. The element most recently returned by `next` or
/// [`previous`](CursorMut::previous) is the current element, which can be replaced or removed.
///
/// # Examples
/// ```
/// # use contract_collections::collections::linked::LinkedSequence;
/// let mut seq = LinkedSequence::from([1, 2, 3]);
/// let mut cursor = seq.cursor_at(3);
/// while let Some(value) = cursor.previous() {
///     *value *= 10;
/// }
/// cursor.add(0);
/// assert_eq!(seq, [0, 10, 20, 30]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) seq: &'a mut LinkedSequence<T>,
    pub(crate) next: NodeRef<T>,
    pub(crate) index: usize,
    pub(crate) last: Option<NodeRef<T>>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns true if there is an element after the cursor.
    pub const fn has_next(&self) -> bool {
        self.index < self.seq.len
    }

    /// Moves the cursor forward over the next element, returning it.
    pub fn next(&mut self) -> Option<&mut T> {
        if !self.has_next() {
            return None;
        }

        let node = self.next;
        self.next = node.next();
        self.index += 1;
        self.last = Some(node);
        // SAFETY: index was less than len, so node is an element. The sequence is borrowed
        // mutably by the cursor, which is in turn borrowed for the reference's lifetime.
        Some(unsafe { node.value_mut() })
    }

    /// Returns the index of the element that [`next`](CursorMut::next) would return, or `len` if
    /// the cursor is at the back of the sequence.
    pub const fn next_index(&self) -> usize {
        self.index
    }

    /// Returns true if there is an element before the cursor.
    pub const fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Moves the cursor backward over the previous element, returning it.
    pub fn previous(&mut self) -> Option<&mut T> {
        if !self.has_previous() {
            return None;
        }

        self.next = self.next.prev();
        self.index -= 1;
        self.last = Some(self.next);
        // SAFETY: index was greater than 0, so the node before the cursor is an element.
        Some(unsafe { self.next.value_mut() })
    }

    /// Returns the index of the element that [`previous`](CursorMut::previous) would return, or
    /// [`None`] if the cursor is at the front of the sequence.
    pub const fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Replaces the current element with `value`, returning the previous value, or returns an
    /// [`Err`] if there is no current element.
    pub fn set(&mut self, value: T) -> Result<T, NoCurrentElement> {
        let node = self.last.ok_or(NoCurrentElement)?;
        // SAFETY: last is only ever an element node that is still linked.
        Ok(mem::replace(unsafe { node.value_mut() }, value))
    }

    /// Inserts `value` immediately before the cursor, so that a following call to
    /// [`next`](CursorMut::next) is unaffected and [`previous`](CursorMut::previous) returns the
    /// new element.
    pub fn add(&mut self, value: T) {
        self.seq.link_before(self.next, value);
        self.index += 1;
        self.last = None;
    }

    /// Removes the current element and returns it, or returns an [`Err`] if there is no current
    /// element. A following call to [`next`](CursorMut::next) returns the element that was after
    /// the removed one.
    pub fn remove(&mut self) -> Result<T, NoCurrentElement> {
        let node = self.last.take().ok_or(NoCurrentElement)?;

        if node == self.next {
            // The cursor last moved backward, so it was positioned before the removed node.
            self.next = node.next();
        } else {
            // The cursor last moved forward, so the removed node was before it.
            self.index -= 1;
        }

        // SAFETY: last is only ever an element node that is still linked, and no reference to its
        // value outlives the call that returned it.
        Ok(unsafe { self.seq.unlink(node) })
    }
}
