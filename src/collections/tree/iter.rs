use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, OrderedTreeSet};

impl<T> OrderedTreeSet<T> {
    /// Returns an iterator over the elements of the set in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.root.map(|root| root.leftmost()),
            tail: self.root.map(|root| root.rightmost()),
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<T> IntoIterator for OrderedTreeSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            set: self,
        }
    }
}

/// A type for owned iteration over an [`OrderedTreeSet`], in ascending order.
pub struct IntoIter<T> {
    // Each step removes the least (or greatest) remaining element from the held set.
    pub(crate) set: OrderedTreeSet<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.set.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len, Some(self.set.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.set.pop_last()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.set.len
    }
}

impl<'a, T> IntoIterator for &'a OrderedTreeSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over an [`OrderedTreeSet`], in ascending order.
///
/// Each step follows the current node's in-order successor (or predecessor, from the back)
/// through child and parent links, so no stack of pending nodes is kept.
pub struct Iter<'a, T> {
    // head and tail are the next nodes to yield from each end, len counts the nodes left between
    // them.
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.head?;
        self.head = node.successor();
        self.len -= 1;
        // SAFETY: While len > 0, head is a node of the set, which is borrowed immutably for 'a.
        Some(unsafe { node.value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.tail?;
        self.tail = node.predecessor();
        self.len -= 1;
        // SAFETY: As for next, from the other end.
        Some(unsafe { node.value() })
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}
