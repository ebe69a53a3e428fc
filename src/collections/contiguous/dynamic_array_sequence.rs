use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::array::Array;
use crate::collections::traits::{Collection, HashCode, Sequence, sequence_hash_code};
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

/// An index-addressable sequence, backed by a contiguous buffer that always holds exactly as many
/// elements as the sequence.
///
/// Unlike [`Vec`], there is no spare capacity: every structural change reallocates the buffer to
/// the new length. Insertion and removal shift all trailing elements by one slot.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the sequence.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(n)`*, `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `index_of` | `O(n)` |
/// | `remove_all` | `O(n * m)` |
///
/// \* Growing the allocation by one element is `O(1)` when the allocator can resize in place.
pub struct DynamicArraySequence<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
}

impl<T> DynamicArraySequence<T> {
    /// Creates a new, empty sequence. Nothing is allocated until the first element is added.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::contiguous::DynamicArraySequence;
    /// let seq: DynamicArraySequence<u8> = DynamicArraySequence::new();
    /// assert!(seq.is_empty());
    /// ```
    pub const fn new() -> DynamicArraySequence<T> {
        DynamicArraySequence {
            buf: Array::new(),
        }
    }

    /// Returns the number of elements in the sequence.
    pub const fn len(&self) -> usize {
        self.buf.size()
    }

    /// Returns true if the sequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Replaces the element at `index` with `value`, returning the previous element, or returns an
    /// [`Err`] if `index >= len`.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self[index], value))
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::contiguous::DynamicArraySequence;
    /// let mut seq = DynamicArraySequence::from(['a', 'b', 'c']);
    /// assert_eq!(seq.set(1, 'x'), 'b');
    /// assert_eq!(&*seq, &['a', 'x', 'c']);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Appends `value` to the end of the sequence.
    ///
    /// # Panics
    /// Panics if the memory layout of the sequence would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::contiguous::DynamicArraySequence;
    /// let mut seq = DynamicArraySequence::new();
    /// for i in 0..=5 {
    ///     seq.push(i);
    /// }
    /// assert_eq!(&*seq, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        let len = self.len();
        self.buf.realloc(len + 1);
        self.buf[len] = MaybeUninit::new(value);
    }

    /// Removes the last element of the sequence and returns it, or [`None`] if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        let len = self.len();
        if len == 0 {
            return None;
        }

        // SAFETY: The last slot is initialized and is excluded from the buffer immediately after
        // being read, so the value is moved out rather than duplicated.
        let value = unsafe { self.buf[len - 1].assume_init_read() };
        self.buf.realloc(len - 1);
        Some(value)
    }

    /// Inserts `value` at `index`, shifting all following elements back by one, or returns an
    /// [`Err`] if `index > len`.
    ///
    /// # Panics
    /// Panics if the memory layout of the sequence would have a size that exceeds [`isize::MAX`].
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        self.buf.realloc(len + 1);

        // SAFETY: The buffer now holds len + 1 slots, so shifting the len - index elements from
        // index by one slot stays in bounds. ptr::copy handles the overlap.
        unsafe {
            let base = self.buf.ptr.as_ptr().add(index);
            ptr::copy(base, base.add(1), len - index);
        }
        self.buf[index] = MaybeUninit::new(value);
        Ok(())
    }

    /// Inserts `value` at `index`, shifting all following elements back by one.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::contiguous::DynamicArraySequence;
    /// let mut seq = DynamicArraySequence::from([0, 1, 2]);
    /// seq.insert(1, 100);
    /// seq.insert(1, 200);
    /// seq.insert(5, 300);
    /// assert_eq!(&*seq, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Removes and returns the element at `index`, shifting all following elements forward by
    /// one, or returns an [`Err`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len();

        // SAFETY: index < len, so the slot is initialized. It is read out and then overwritten by
        // the trailing elements, which stay within the buffer.
        let value = unsafe {
            let base = self.buf.ptr.as_ptr().add(index);
            let value = base.read().assume_init();
            ptr::copy(base.add(1), base, len - index - 1);
            value
        };

        self.buf.realloc(len - 1);
        Ok(value)
    }

    /// Removes and returns the element at `index`, shifting all following elements forward by one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Keeps only the elements for which `keep` returns true, preserving their order. Returns true
    /// if any element was removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) -> bool {
        let len = self.len();
        let mut kept = 0;

        for i in 0..len {
            if keep(&self[i]) {
                self.swap(kept, i);
                kept += 1;
            }
        }

        while self.len() > kept {
            drop(self.pop());
        }

        kept != len
    }

    /// Removes all elements from the sequence and releases its buffer.
    pub fn clear(&mut self) {
        drop(mem::replace(self, DynamicArraySequence::new()));
    }

    /// Returns an iterator over all elements of the sequence, as references.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.deref().iter()
    }

    /// Returns an iterator over all elements of the sequence, as mutable references.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.deref_mut().iter_mut()
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len() {
            Err(IndexOutOfBounds { index, len: self.len() })
        } else {
            Ok(())
        }
    }
}

impl<T: PartialEq> DynamicArraySequence<T> {
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
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`, returning true if one was found.
    pub fn remove_item(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                drop(self.remove(index));
                true
            },
            None => false,
        }
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

impl<T: PartialEq> Collection<T> for DynamicArraySequence<T> {
    type Iter<'a> = slice::Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        DynamicArraySequence::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        DynamicArraySequence::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        DynamicArraySequence::iter(self)
    }
}

impl<T: PartialEq> Sequence<T> for DynamicArraySequence<T> {
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        DynamicArraySequence::try_get(self, index)
    }

    fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        DynamicArraySequence::try_set(self, index, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        DynamicArraySequence::try_insert(self, index, value)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        DynamicArraySequence::try_remove(self, index)
    }

    fn push(&mut self, value: T) {
        DynamicArraySequence::push(self, value)
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        DynamicArraySequence::index_of(self, item)
    }

    fn last_index_of(&self, item: &T) -> Option<usize> {
        DynamicArraySequence::last_index_of(self, item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        DynamicArraySequence::remove_item(self, item)
    }

    fn remove_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        DynamicArraySequence::remove_all(self, other)
    }

    fn retain_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        DynamicArraySequence::retain_all(self, other)
    }

    fn clear(&mut self) {
        DynamicArraySequence::clear(self)
    }
}

impl<T> Default for DynamicArraySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArraySequence<T> {
    fn drop(&mut self) {
        // SAFETY: All len values are initialized and are never used again. The buffer itself holds
        // MaybeUninit values, so dropping it afterwards only deallocates.
        unsafe { ptr::drop_in_place(self.deref_mut() as *mut [T]) }
    }
}

impl<T> Deref for DynamicArraySequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The buffer holds exactly len values, which are all initialized. The pointer is
        // nonnull and properly aligned. MaybeUninit<T> has the same layout as T.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr().cast(), self.len()) }
    }
}

impl<T> DerefMut for DynamicArraySequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker prevents any other access while the slice
        // is alive.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len()) }
    }
}

impl<T> AsRef<[T]> for DynamicArraySequence<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArraySequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArraySequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArraySequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: The sequence uniquely owns its buffer, so it is safe to send when T: Send.
unsafe impl<T: Send> Send for DynamicArraySequence<T> {}
// SAFETY: The sequence's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs and DynamicArraySequence<T> can be shared when T: Sync.
unsafe impl<T: Sync> Sync for DynamicArraySequence<T> {}

impl<T> Extend<T> for DynamicArraySequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = DynamicArraySequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArraySequence<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> Clone for DynamicArraySequence<T> {
    fn clone(&self) -> Self {
        let mut buf = Array::<T>::new_uninit(self.len());

        for (slot, value) in buf.iter_mut().zip(self.iter()) {
            *slot = MaybeUninit::new(value.clone());
        }

        DynamicArraySequence { buf }
    }
}

impl<T: PartialEq> PartialEq for DynamicArraySequence<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArraySequence<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArraySequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArraySequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: Hash> Hash for DynamicArraySequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Written element by element, so that equal sequences of any kind hash alike.
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: HashCode> HashCode for DynamicArraySequence<T> {
    fn hash_code(&self) -> i32 {
        sequence_hash_code(self.iter())
    }
}

impl<T: Debug> Debug for DynamicArraySequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArraySequence")
            .field("contents", &DebugList::new(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArraySequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
