use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice::{Iter, IterMut};

use super::DynamicArraySequence;
use crate::collections::array::Array;

impl<T> IntoIterator for DynamicArraySequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();
        // Take the buffer, leaving an empty one behind for self to drop.
        IntoIter {
            buf: mem::take(&mut self.buf),
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArraySequence<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArraySequence<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`DynamicArraySequence`]. See
/// [`DynamicArraySequence::into_iter`].
pub struct IntoIter<T> {
    pub(crate) buf: Array<MaybeUninit<T>>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = &mut self.buf[self.front..self.back];
        // SAFETY: Only the values between front and back are still initialized, and they aren't
        // used again. The buffer is deallocated without dropping anything once this returns.
        unsafe { ptr::drop_in_place(remaining as *mut [MaybeUninit<T>] as *mut [T]) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            // SAFETY: The value at front is initialized and front is moved past it, so it is read
            // exactly once.
            let value = unsafe { self.buf[self.front].assume_init_read() };
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: The value at the newly decremented back is initialized and is now excluded
            // from the remaining range.
            Some(unsafe { self.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}
