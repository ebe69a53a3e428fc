use std::fmt::{self, Debug, Formatter};

use super::{ChainedHashTable, CursorMut, Entries, Entry, Keys, Values};
use crate::collections::traits::{Collection, HashCode};

impl<K, V> ChainedHashTable<K, V> {
    /// Returns a view of the table's keys as a [`Collection`]. The view borrows the table rather
    /// than copying it, and always agrees with the table's current contents.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::hash::ChainedHashTable;
    /// # use contract_collections::collections::traits::Collection;
    /// let table = ChainedHashTable::from([(1, 'a'), (2, 'b')]);
    /// let keys = table.key_set();
    /// assert!(keys.contains(&2));
    /// assert!(keys.contains_all(&[1, 2]));
    /// ```
    pub const fn key_set(&self) -> KeySet<'_, K, V> {
        KeySet { table: self }
    }

    /// Returns a view of the table's values as a [`Collection`], which may hold duplicates.
    pub const fn value_collection(&self) -> ValueCollection<'_, K, V> {
        ValueCollection { table: self }
    }

    /// Returns a view of the table's entries as a [`Collection`] of [`Entry`] values.
    pub const fn entry_set(&self) -> EntrySet<'_, K, V> {
        EntrySet { table: self }
    }

    /// Returns a view of the table's keys through which entries can be removed.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::hash::ChainedHashTable;
    /// let mut table = ChainedHashTable::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let mut keys = table.key_set_mut();
    /// assert!(keys.remove(&2));
    /// assert!(keys.retain_all(&[1, 2]));
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.get(&1), Some(&'a'));
    /// ```
    pub const fn key_set_mut(&mut self) -> KeySetMut<'_, K, V> {
        KeySetMut { table: self }
    }

    /// Returns a view of the table's values through which entries can be removed.
    pub const fn value_collection_mut(&mut self) -> ValueCollectionMut<'_, K, V> {
        ValueCollectionMut { table: self }
    }

    /// Returns a view of the table's entries through which entries can be removed.
    pub const fn entry_set_mut(&mut self) -> EntrySetMut<'_, K, V> {
        EntrySetMut { table: self }
    }
}

/// A live view of the keys of a [`ChainedHashTable`]. Membership tests only search the key's
/// bucket.
pub struct KeySet<'a, K, V> {
    pub(crate) table: &'a ChainedHashTable<K, V>,
}

impl<'a, K: HashCode + Eq, V> Collection<K> for KeySet<'a, K, V> {
    type Iter<'b> = Keys<'b, K, V> where Self: 'b, K: 'b;

    fn len(&self) -> usize {
        self.table.len()
    }

    fn contains(&self, item: &K) -> bool {
        self.table.contains_key(item)
    }

    fn iter<'b>(&'b self) -> Self::Iter<'b> {
        self.table.keys()
    }
}

/// A live view of the values of a [`ChainedHashTable`]. Membership tests search every bucket.
pub struct ValueCollection<'a, K, V> {
    pub(crate) table: &'a ChainedHashTable<K, V>,
}

impl<'a, K, V: PartialEq> Collection<V> for ValueCollection<'a, K, V> {
    type Iter<'b> = Values<'b, K, V> where Self: 'b, V: 'b;

    fn len(&self) -> usize {
        self.table.len()
    }

    fn contains(&self, item: &V) -> bool {
        self.table.contains_value(item)
    }

    fn iter<'b>(&'b self) -> Self::Iter<'b> {
        self.table.values()
    }
}

/// A live view of the entries of a [`ChainedHashTable`]. An entry is contained when the table
/// maps its key to an equal value.
pub struct EntrySet<'a, K, V> {
    pub(crate) table: &'a ChainedHashTable<K, V>,
}

impl<'a, K: HashCode + Eq, V: PartialEq> Collection<Entry<K, V>> for EntrySet<'a, K, V> {
    type Iter<'b> = Entries<'b, K, V> where Self: 'b, Entry<K, V>: 'b;

    fn len(&self) -> usize {
        self.table.len()
    }

    fn contains(&self, item: &Entry<K, V>) -> bool {
        self.table.get(&item.key) == Some(&item.value)
    }

    fn iter<'b>(&'b self) -> Self::Iter<'b> {
        self.table.iter_entries()
    }
}

/// A live view of the keys of a [`ChainedHashTable`] that removes an entry from the table when
/// its key is removed from the view.
pub struct KeySetMut<'a, K, V> {
    pub(crate) table: &'a mut ChainedHashTable<K, V>,
}

impl<'a, K: HashCode + Eq, V> KeySetMut<'a, K, V> {
    /// Removes the entry with the provided key, returning true if there was one.
    pub fn remove(&mut self, key: &K) -> bool {
        self.table.remove(key).is_some()
    }

    /// Removes every entry whose key is contained in `other`. Returns true if any was removed.
    pub fn remove_all<C: Collection<K> + ?Sized>(&mut self, other: &C) -> bool {
        self.table.retain(|key, _| !other.contains(key))
    }

    /// Removes every entry whose key isn't contained in `other`. Returns true if any was removed.
    pub fn retain_all<C: Collection<K> + ?Sized>(&mut self, other: &C) -> bool {
        self.table.retain(|key, _| other.contains(key))
    }
}

/// A live view of the values of a [`ChainedHashTable`] that removes an entry from the table when
/// its value is removed from the view.
pub struct ValueCollectionMut<'a, K, V> {
    pub(crate) table: &'a mut ChainedHashTable<K, V>,
}

impl<'a, K, V: PartialEq> ValueCollectionMut<'a, K, V> {
    /// Removes the first entry, in iteration order, whose value equals `value`. Returns true if
    /// there was one.
    pub fn remove(&mut self, value: &V) -> bool {
        let mut cursor = self.table.cursor();
        while let Some((_, current)) = cursor.next() {
            if current == value {
                return cursor.remove().is_ok();
            }
        }
        false
    }

    /// Removes every entry whose value is contained in `other`. Returns true if any was removed.
    pub fn remove_all<C: Collection<V> + ?Sized>(&mut self, other: &C) -> bool {
        self.table.retain(|_, value| !other.contains(value))
    }

    /// Removes every entry whose value isn't contained in `other`. Returns true if any was
    /// removed.
    pub fn retain_all<C: Collection<V> + ?Sized>(&mut self, other: &C) -> bool {
        self.table.retain(|_, value| other.contains(value))
    }
}

/// A live view of the entries of a [`ChainedHashTable`] through which entries can be removed.
pub struct EntrySetMut<'a, K, V> {
    pub(crate) table: &'a mut ChainedHashTable<K, V>,
}

impl<'a, K: HashCode + Eq, V: PartialEq> EntrySetMut<'a, K, V> {
    /// Removes the entry if the table maps its key to an equal value. Returns true if it did.
    pub fn remove(&mut self, entry: &Entry<K, V>) -> bool {
        if self.table.get(&entry.key) != Some(&entry.value) {
            return false;
        }
        self.table.remove(&entry.key).is_some()
    }

    /// Removes every entry that is contained in `other`. Returns true if any was removed.
    pub fn remove_all<C: Collection<Entry<K, V>> + ?Sized>(&mut self, other: &C) -> bool {
        self.table.retain(|key, value| !other.iter().any(|e| e.key == *key && e.value == *value))
    }

    /// Removes every entry that isn't contained in `other`. Returns true if any was removed.
    pub fn retain_all<C: Collection<Entry<K, V>> + ?Sized>(&mut self, other: &C) -> bool {
        self.table.retain(|key, value| other.iter().any(|e| e.key == *key && e.value == *value))
    }
}

macro_rules! impl_view_mut_traits {
    ($($view:ident),*) => {
        $(
            impl<'a, K, V> $view<'a, K, V> {
                /// Returns the number of entries in the table.
                pub const fn len(&self) -> usize {
                    self.table.len
                }

                /// Returns true if the table is empty.
                pub const fn is_empty(&self) -> bool {
                    self.table.len == 0
                }

                /// Removes every entry from the table.
                pub fn clear(&mut self) {
                    self.table.clear();
                }

                /// Returns a [`CursorMut`] over the table, whose removals go through to the table.
                pub fn cursor(&mut self) -> CursorMut<'_, K, V> {
                    self.table.cursor()
                }
            }
        )*
    };
}

impl_view_mut_traits!(KeySetMut, ValueCollectionMut, EntrySetMut);

macro_rules! impl_view_traits {
    ($($view:ident),*) => {
        $(
            impl<'a, K, V> Clone for $view<'a, K, V> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<'a, K, V> Copy for $view<'a, K, V> {}
        )*
    };
}

impl_view_traits!(KeySet, ValueCollection, EntrySet);

impl<'a, K: Debug, V> Debug for KeySet<'a, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.keys()).finish()
    }
}

impl<'a, K, V: Debug> Debug for ValueCollection<'a, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.table.values()).finish()
    }
}

impl<'a, K: Debug, V: Debug> Debug for EntrySet<'a, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.iter_entries()).finish()
    }
}
