use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Node, NodeRef};
#[cfg(feature = "contiguous")]
use crate::collections::contiguous::DynamicArraySequence;
use crate::collections::traits::{Collection, HashCode, Sequence, sequence_hash_code};
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

/// A sequence with links in both directions, arranged as a ring around a permanent sentinel node.
/// See also: [`CursorMut`](super::CursorMut) for bidirectional editing.
///
/// The sentinel carries no value and marks both ends of the sequence: its `next` is the first
/// element and its `prev` is the last. An empty sequence is a sentinel linked to itself. Index
/// based operations walk from whichever end of the ring is closer to the index.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedSequence.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `set` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
pub struct LinkedSequence<T> {
    pub(crate) sentinel: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedSequence<T> {
    /// Creates a new LinkedSequence with no elements. Only the sentinel is allocated.
    pub fn new() -> LinkedSequence<T> {
        LinkedSequence {
            sentinel: NodeRef::sentinel(),
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedSequence.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedSequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the sequence, if it exists.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: The node after the sentinel is an element when the sequence isn't empty.
        (!self.is_empty()).then(|| unsafe { self.sentinel.next().value() })
    }

    /// Returns a mutable reference to the first element in the sequence, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As for front, and self is borrowed mutably for the reference's lifetime.
        (!self.is_empty()).then(|| unsafe { self.sentinel.next().value_mut() })
    }

    /// Returns a reference to the last element in the sequence, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: The node before the sentinel is an element when the sequence isn't empty.
        (!self.is_empty()).then(|| unsafe { self.sentinel.prev().value() })
    }

    /// Returns a mutable reference to the last element in the sequence, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: As for back, and self is borrowed mutably for the reference's lifetime.
        (!self.is_empty()).then(|| unsafe { self.sentinel.prev().value_mut() })
    }

    /// Add the provided element to the front of the LinkedSequence.
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.sentinel.next(), value);
    }

    /// Add the provided element to the back of the LinkedSequence.
    pub fn push_back(&mut self, value: T) {
        self.link_before(self.sentinel, value);
    }

    /// Removes the first element from the sequence and returns it, if the sequence isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: The sequence isn't empty, so the first node is an element.
            Some(unsafe { self.unlink(self.sentinel.next()) })
        }
    }

    /// Removes the last element from the sequence and returns it, if the sequence isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: The sequence isn't empty, so the last node is an element.
            Some(unsafe { self.unlink(self.sentinel.prev()) })
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedSequence.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: checked_seek only returns element nodes.
        Ok(unsafe { node.value() })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedSequence.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: checked_seek only returns element nodes, and self is borrowed mutably.
        Ok(unsafe { node.value_mut() })
    }

    /// Replaces the element at `index` with `value`, returning the previous element, or returns an
    /// [`Err`] if `index >= len`.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedSequence.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Inserts `value` at `index`, so that it is preceded by `index` elements, or returns an
    /// [`Err`] if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        self.link_before(self.seek(index), value);
        Ok(())
    }

    /// Inserts `value` at `index`, so that it is preceded by `index` elements.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::linked::LinkedSequence;
    /// let mut seq = LinkedSequence::from([0, 1, 2]);
    /// seq.insert(3, 300);
    /// seq.insert(0, 100);
    /// seq.insert(2, 200);
    /// assert_eq!(seq, [100, 0, 200, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Removes and returns the element at `index`, or returns an [`Err`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: checked_seek only returns element nodes.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedSequence.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Keeps only the elements for which `keep` returns true, preserving their order. Returns true
    /// if any element was removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) -> bool {
        let initial_len = self.len;
        let mut node = self.sentinel.next();

        while node != self.sentinel {
            let next = node.next();
            // SAFETY: Every node other than the sentinel is an element.
            if !keep(unsafe { node.value() }) {
                // SAFETY: node is an element of this sequence and isn't referenced elsewhere.
                drop(unsafe { self.unlink(node) });
            }
            node = next;
        }

        self.len != initial_len
    }

    /// Removes all elements from the LinkedSequence. The sentinel is kept.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over all elements of the sequence, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.sentinel.next(),
            tail: self.sentinel.prev(),
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator over all elements of the sequence, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.sentinel.next(),
            tail: self.sentinel.prev(),
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Returns the node at `index`, or the sentinel if `index == len`. Walks forward from the
    /// front if `index < len / 2`, otherwise backward from the sentinel.
    pub(crate) fn seek(&self, index: usize) -> NodeRef<T> {
        debug_assert!(index <= self.len);

        if index < self.len / 2 {
            let mut node = self.sentinel.next();
            for _ in 0..index {
                node = node.next();
            }
            node
        } else {
            let mut node = self.sentinel;
            for _ in index..self.len {
                node = node.prev();
            }
            node
        }
    }

    /// Returns the element node at `index`, or an [`Err`] if `index >= len`.
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        Ok(self.seek(index))
    }

    /// Splices a new node holding `value` in between `node` and its predecessor.
    pub(crate) fn link_before(&mut self, node: NodeRef<T>, value: T) -> NodeRef<T> {
        let prev = node.prev();
        let new = NodeRef::from_value(value, prev, node);

        prev.set_next(new);
        node.set_prev(new);
        self.len += 1;
        new
    }

    /// Splices `node` out of the ring, frees it and returns its value.
    ///
    /// # Safety
    /// `node` must be an element node (not the sentinel) of this sequence, and no reference to its
    /// value may be alive.
    pub(crate) unsafe fn unlink(&mut self, node: NodeRef<T>) -> T {
        let prev = node.prev();
        let next = node.next();

        prev.set_next(next);
        next.set_prev(prev);
        self.len -= 1;

        // SAFETY: node is an element that has just been unlinked. The caller guarantees it isn't
        // used again.
        unsafe { node.take_value() }
    }
}

impl<T: PartialEq> LinkedSequence<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns the index of the last element equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.iter().rposition(|element| element == item)
    }

    /// Returns true if the sequence contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Removes the first element equal to `item`, returning true if one was found.
    pub fn remove_item(&mut self, item: &T) -> bool {
        let mut node = self.sentinel.next();

        while node != self.sentinel {
            // SAFETY: Every node other than the sentinel is an element.
            if unsafe { node.value() } == item {
                // SAFETY: node is an element of this sequence and the reference above has ended.
                drop(unsafe { self.unlink(node) });
                return true;
            }
            node = node.next();
        }

        false
    }

    /// Removes every element that is contained in `other`. Returns true if the sequence changed.
    pub fn remove_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        self.retain(|element| !other.contains(element))
    }

    /// Removes every element that isn't contained in `other`. Returns true if the sequence changed.
    pub fn retain_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        self.retain(|element| other.contains(element))
    }
}

impl<T: PartialEq> Collection<T> for LinkedSequence<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, item: &T) -> bool {
        LinkedSequence::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        LinkedSequence::iter(self)
    }
}

impl<T: PartialEq> Sequence<T> for LinkedSequence<T> {
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        LinkedSequence::try_get(self, index)
    }

    fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        LinkedSequence::try_set(self, index, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        LinkedSequence::try_insert(self, index, value)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        LinkedSequence::try_remove(self, index)
    }

    fn push(&mut self, value: T) {
        self.push_back(value)
    }

    fn last_index_of(&self, item: &T) -> Option<usize> {
        LinkedSequence::last_index_of(self, item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        LinkedSequence::remove_item(self, item)
    }

    fn remove_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        LinkedSequence::remove_all(self, other)
    }

    fn retain_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        LinkedSequence::retain_all(self, other)
    }

    fn clear(&mut self) {
        LinkedSequence::clear(self)
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: The ring has been emptied, so the sentinel only links to itself. It is never used
        // again.
        unsafe { self.sentinel.free() }
    }
}

impl<T> Index<usize> for LinkedSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

// SAFETY: LinkedSequence uniquely owns every node of its ring, so it is safe to send when T: Send.
unsafe impl<T: Send> Send for LinkedSequence<T> {}
// SAFETY: The safe API only hands out shared references through &self, so LinkedSequence<T> can
// be shared when T: Sync.
unsafe impl<T: Sync> Sync for LinkedSequence<T> {}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = LinkedSequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedSequence<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for LinkedSequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for LinkedSequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

#[cfg(feature = "contiguous")]
impl<T: PartialEq> PartialEq<DynamicArraySequence<T>> for LinkedSequence<T> {
    fn eq(&self, other: &DynamicArraySequence<T>) -> bool {
        *self == **other
    }
}

#[cfg(feature = "contiguous")]
impl<T: PartialEq> PartialEq<LinkedSequence<T>> for DynamicArraySequence<T> {
    fn eq(&self, other: &LinkedSequence<T>) -> bool {
        *other == **self
    }
}

impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: HashCode> HashCode for LinkedSequence<T> {
    fn hash_code(&self) -> i32 {
        sequence_hash_code(self.iter())
    }
}

impl<T: Debug> Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedSequence")
            .field("contents", &DebugList::new(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
