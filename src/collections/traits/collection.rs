use std::slice::Iter as SliceIter;

/// The membership and traversal contract shared by sequences, sets and the views of a map.
///
/// Bulk operations such as [`Sequence::remove_all`](super::Sequence::remove_all) accept any
/// `Collection`, including plain slices and arrays, and only ever call [`contains`] and [`iter`] on
/// it.
///
/// [`contains`]: Collection::contains
/// [`iter`]: Collection::iter
pub trait Collection<T> {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the collection contains an element equal to `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all elements in the collection, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if every element of `other` is contained in `self`.
    fn contains_all<C: Collection<T> + ?Sized>(&self, other: &C) -> bool {
        for item in other.iter() {
            if !self.contains(item) {
                return false;
            }
        }
        true
    }
}

impl<T: PartialEq> Collection<T> for [T] {
    type Iter<'a> = SliceIter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        <[T]>::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        <[T]>::iter(self)
    }
}

impl<T: PartialEq, const N: usize> Collection<T> for [T; N] {
    type Iter<'a> = SliceIter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        N
    }

    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.as_slice().iter()
    }
}
