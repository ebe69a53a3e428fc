use std::mem;

use super::DynamicArraySequence;
use crate::util::error::{IndexOutOfBounds, NoCurrentElement};
use crate::util::result::ResultExtension;

impl<T> DynamicArraySequence<T> {
    /// Creates a [`CursorMut`] positioned before the first element.
    pub fn cursor(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            seq: self,
            next: 0,
            last: None,
        }
    }

    /// Creates a [`CursorMut`] positioned before the element at `index`, or returns an [`Err`] if
    /// `index > len`. A cursor at `len` is positioned after the last element.
    pub fn try_cursor_at(&mut self, index: usize) -> Result<CursorMut<'_, T>, IndexOutOfBounds> {
        if index > self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() });
        }

        Ok(CursorMut {
            seq: self,
            next: index,
            last: None,
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

/// A bidirectional cursor over a [`DynamicArraySequence`], which sits between two elements (or
/// before the first / after the last) and can modify the sequence around it.
///
/// [`next`](CursorMut::next) and [`previous`](CursorMut::previous) move the cursor over one
/// element and return it. That element becomes the cursor's current element, which
/// [`set`](CursorMut::set) replaces and [`remove`](CursorMut::remove) removes. Adding or removing
/// an element through the cursor clears the current element.
///
/// # Examples
/// ```
/// # use contract_collections::collections::contiguous::DynamicArraySequence;
/// let mut seq = DynamicArraySequence::from([1, 2, 3, 4]);
/// let mut cursor = seq.cursor();
/// while let Some(value) = cursor.next() {
///     if *value % 2 == 0 {
///         cursor.remove().unwrap();
///     } else {
///         cursor.add(0);
///     }
/// }
/// assert_eq!(&*seq, &[1, 0, 3, 0]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) seq: &'a mut DynamicArraySequence<T>,
    pub(crate) next: usize,
    pub(crate) last: Option<usize>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns true if there is an element after the cursor.
    pub fn has_next(&self) -> bool {
        self.next < self.seq.len()
    }

    /// Moves the cursor forward over the next element, returning it.
    pub fn next(&mut self) -> Option<&mut T> {
        if !self.has_next() {
            return None;
        }

        let index = self.next;
        self.next += 1;
        self.last = Some(index);
        Some(&mut self.seq[index])
    }

    /// Returns the index of the element that [`next`](CursorMut::next) would return, or `len` if
    /// the cursor is at the back of the sequence.
    pub const fn next_index(&self) -> usize {
        self.next
    }

    /// Returns true if there is an element before the cursor.
    pub const fn has_previous(&self) -> bool {
        self.next > 0
    }

    /// Moves the cursor backward over the previous element, returning it.
    pub fn previous(&mut self) -> Option<&mut T> {
        if !self.has_previous() {
            return None;
        }

        self.next -= 1;
        self.last = Some(self.next);
        Some(&mut self.seq[self.next])
    }

    /// Returns the index of the element that [`previous`](CursorMut::previous) would return, or
    /// [`None`] if the cursor is at the front of the sequence.
    pub const fn previous_index(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    /// Replaces the current element with `value`, returning the previous value, or returns an
    /// [`Err`] if there is no current element.
    pub fn set(&mut self, value: T) -> Result<T, NoCurrentElement> {
        let index = self.last.ok_or(NoCurrentElement)?;
        Ok(mem::replace(&mut self.seq[index], value))
    }

    /// Inserts `value` immediately before the cursor, so that a following call to
    /// [`next`](CursorMut::next) is unaffected and [`previous`](CursorMut::previous) returns the
    /// new element.
    pub fn add(&mut self, value: T) {
        self.seq.insert(self.next, value);
        self.next += 1;
        self.last = None;
    }

    /// Removes the current element and returns it, or returns an [`Err`] if there is no current
    /// element. The cursor keeps its position relative to the remaining elements.
    pub fn remove(&mut self) -> Result<T, NoCurrentElement> {
        let index = self.last.take().ok_or(NoCurrentElement)?;
        let value = self.seq.remove(index);

        if index < self.next {
            self.next -= 1;
        }
        Ok(value)
    }
}
