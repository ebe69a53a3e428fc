use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedSequence, NodeRef};

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            seq: self,
        }
    }
}

/// A type for owned iteration over a [`LinkedSequence`].
pub struct IntoIter<T> {
    // The iterator holds the sequence and pops from either end.
    pub(crate) seq: LinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.seq.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.seq.len()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedSequence<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for mutable borrowed iteration over a [`LinkedSequence`].
pub struct IterMut<'a, T> {
    // head and tail are the next nodes to yield from each end, len counts the nodes left between
    // them. The nodes themselves are never modified.
    pub(crate) head: NodeRef<T>,
    pub(crate) tail: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: While len > 0, head is an element node which hasn't been yielded from either end
        // yet, so no other reference to its value exists.
        let value = unsafe { self.head.value_mut() };
        self.head = self.head.next();
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: As for next, from the other end.
        let value = unsafe { self.tail.value_mut() };
        self.tail = self.tail.prev();
        self.len -= 1;
        Some(value)
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over a [`LinkedSequence`].
pub struct Iter<'a, T> {
    pub(crate) head: NodeRef<T>,
    pub(crate) tail: NodeRef<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: While len > 0, head is an element node, and the sequence is borrowed immutably
        // for 'a.
        let value = unsafe { self.head.value() };
        self.head = self.head.next();
        self.len -= 1;
        Some(value)
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

        // SAFETY: As for next, from the other end.
        let value = unsafe { self.tail.value() };
        self.tail = self.tail.prev();
        self.len -= 1;
        Some(value)
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
