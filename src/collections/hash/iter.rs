use std::iter::FusedIterator;
use std::slice;

use super::{ChainedHashTable, Entry};

impl<K, V> ChainedHashTable<K, V> {
    /// Returns an iterator over the table's stored [`Entry`] values.
    ///
    /// Iteration visits the buckets in index order, walking each chain from front to back. The
    /// order is stable while the table isn't modified, but is otherwise unspecified.
    pub fn iter_entries(&self) -> Entries<'_, K, V> {
        Entries {
            buckets: self.buckets.iter(),
            entry: None,
            len: self.len,
        }
    }

    /// Returns an iterator over the table's key-value pairs, in the same order as
    /// [`iter_entries`](ChainedHashTable::iter_entries).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.iter_entries())
    }

    /// Returns an iterator over the table's key-value pairs, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            len: self.len,
            buckets: self.buckets.iter_mut(),
            entry: None,
        }
    }

    /// Returns an iterator over the keys of the table.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over the values of the table.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over mutable references to the values of the table.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }
}

/// A type for borrowed iteration over the entries of a [`ChainedHashTable`].
pub struct Entries<'a, K, V> {
    // buckets holds the chains not yet started, entry is the next entry of the current chain.
    pub(crate) buckets: slice::Iter<'a, Option<Box<Entry<K, V>>>>,
    pub(crate) entry: Option<&'a Entry<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry {
                self.entry = entry.next.as_deref();
                self.len -= 1;
                return Some(entry);
            }
            self.entry = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> FusedIterator for Entries<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Entries<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K, V> Clone for Entries<'a, K, V> {
    fn clone(&self) -> Self {
        Entries {
            buckets: self.buckets.clone(),
            entry: self.entry,
            len: self.len,
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashTable<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over the key-value pairs of a [`ChainedHashTable`].
pub struct Iter<'a, K, V>(pub(crate) Entries<'a, K, V>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, K, V> IntoIterator for &'a mut ChainedHashTable<K, V> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for mutable borrowed iteration over the key-value pairs of a [`ChainedHashTable`].
/// Keys are only ever exposed immutably.
pub struct IterMut<'a, K, V> {
    pub(crate) buckets: slice::IterMut<'a, Option<Box<Entry<K, V>>>>,
    pub(crate) entry: Option<&'a mut Entry<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry.take() {
                let Entry { key, value, next, .. } = entry;
                self.entry = next.as_deref_mut();
                self.len -= 1;
                return Some((&*key, value));
            }
            self.entry = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K, V> IntoIterator for ChainedHashTable<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            table: self,
            index: 0,
        }
    }
}

/// A type for owned iteration over a [`ChainedHashTable`], yielding entries in the same order as
/// [`iter`](ChainedHashTable::iter). Any entries left when the iterator is dropped are dropped
/// with it.
pub struct IntoIter<K, V> {
    // The iterator holds the table, and unlinks the front of the chain at index each step.
    pub(crate) table: ChainedHashTable<K, V>,
    pub(crate) index: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let chain = self.table.buckets.get_mut(self.index)?;

            if let Some(entry) = chain.take() {
                let entry = *entry;
                *chain = entry.next;
                self.table.len -= 1;
                return Some((entry.key, entry.value));
            }
            self.index += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.table.len, Some(self.table.len))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.table.len
    }
}

/// An iterator over the keys of a [`ChainedHashTable`].
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// An iterator over the values of a [`ChainedHashTable`].
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// An iterator over mutable references to the values of a [`ChainedHashTable`].
pub struct ValuesMut<'a, K, V>(pub(crate) IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> FusedIterator for ValuesMut<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}
