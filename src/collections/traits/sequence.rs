use super::{Collection, HashCode, sequence_hash_code};
use crate::util::error::{IndexOutOfBounds, UnsupportedOperation};
use crate::util::result::ResultExtension;

/// An ordered, index-addressable collection that may contain duplicates.
///
/// Two sequences are equal if they have the same length and are element-wise equal in iteration
/// order, regardless of which implementation holds them (see [`Sequence::sequence_eq`]). Their
/// [`HashCode`] is the order-sensitive polynomial `h = 31 * h + hash(e)`, starting from `1`.
pub trait Sequence<T: PartialEq>: Collection<T> {
    /// Returns a reference to the element at `index`, or an [`Err`] if `index >= len`.
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Replaces the element at `index`, returning the previous element, or an [`Err`] if
    /// `index >= len`.
    fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds>;

    /// Inserts `value` at `index`, shifting all following elements back by one, or returns an
    /// [`Err`] if `index > len`.
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds>;

    /// Removes and returns the element at `index`, or returns an [`Err`] if `index >= len`.
    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Appends `value` to the end of the sequence.
    fn push(&mut self, value: T);

    /// Returns the index of the last element equal to `item`.
    fn last_index_of(&self, item: &T) -> Option<usize>;

    /// Removes the first element equal to `item`, returning true if one was found.
    fn remove_item(&mut self, item: &T) -> bool;

    /// Removes every element of `self` that is contained in `other`. Returns true if the sequence
    /// changed.
    fn remove_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool;

    /// Removes every element of `self` that isn't contained in `other`. Returns true if the
    /// sequence changed.
    fn retain_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool;

    /// Removes all elements from the sequence.
    fn clear(&mut self);

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Inserts `value` at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Returns the index of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Appends every element of `items`. Returns true if the sequence changed.
    fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> bool {
        let initial_len = self.len();
        for item in items {
            self.push(item);
        }
        self.len() != initial_len
    }

    /// Inserts every element of `items` at `index`, preserving their order, or returns an [`Err`]
    /// if `index > len`. Returns true if the sequence changed.
    fn try_insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        items: I,
    ) -> Result<bool, IndexOutOfBounds> {
        if index > self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() });
        }

        let mut next = index;
        for item in items {
            self.try_insert(next, item)?;
            next += 1;
        }
        Ok(next != index)
    }

    /// Inserts every element of `items` at `index`, preserving their order.
    ///
    /// # Panics
    /// Panics if `index > len`.
    fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> bool {
        self.try_insert_all(index, items).throw()
    }

    /// Views of part of a sequence aren't supported, this always returns an [`Err`].
    fn sub_list(&self, _from: usize, _to: usize) -> Result<Self, UnsupportedOperation>
    where
        Self: Sized,
    {
        Err(UnsupportedOperation { operation: "sub_list" })
    }

    /// Returns true if `other` has the same length as `self` and equal elements in the same order.
    fn sequence_eq<S: Sequence<T> + ?Sized>(&self, other: &S) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    /// Returns the order-sensitive hash code of the sequence.
    fn sequence_hash(&self) -> i32 where T: HashCode {
        sequence_hash_code(self.iter())
    }
}
