use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use super::{Chain, Entry, drop_chain, seek};
use crate::collections::array::Array;
use crate::collections::traits::{HashCode, Map, map_hash_code};
use crate::util::error::{InvalidCapacity, UnsupportedOperation};
use crate::util::fmt::{DebugList, DebugRaw};
use crate::util::result::ResultExtension;

/// The number of buckets allocated by [`ChainedHashTable::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A map of keys to values, which places each entry in a bucket chosen by its key's
/// [`HashCode`] and resolves collisions by chaining entries within a bucket.
///
/// The number of buckets is fixed when the table is created and never changes, so the load on
/// each bucket grows with the number of entries. A key with hash code `h` always lands in bucket
/// `h mod cap`, using the non-negative remainder so that negative hash codes are valid too.
///
/// Inside a bucket, new entries are linked in at the front of the chain, and updating an existing
/// key replaces its value in place without moving the entry.
///
/// It is a logic error for keys in a ChainedHashTable to be manipulated in a way that changes
/// their hash code. Because of this, the API never hands out mutable access to keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
/// - `c`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(1)`*, `O(n)` |
/// | `get` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)`*, `O(n)` |
/// | `contains_key` | `O(1)`*, `O(n)` |
/// | `contains_value` | `O(n + c)` |
/// | `clear` | `O(n + c)` |
///
/// \* On average, when `n` is no larger than `c`. Every operation that searches for a key walks
/// the whole chain of the key's bucket in the worst case.
pub struct ChainedHashTable<K, V> {
    pub(crate) buckets: Array<Chain<K, V>>,
    pub(crate) len: usize,
}

impl<K, V> ChainedHashTable<K, V> {
    /// Creates a new, empty table with [`DEFAULT_CAPACITY`] buckets.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::hash::{ChainedHashTable, DEFAULT_CAPACITY};
    /// let table: ChainedHashTable<i32, &str> = ChainedHashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.cap(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> ChainedHashTable<K, V> {
        Self::with_cap(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty table with `cap` buckets.
    ///
    /// # Panics
    /// Panics if `cap` is zero, or if allocating the buckets would overflow.
    pub fn with_cap(cap: usize) -> ChainedHashTable<K, V> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new, empty table with `cap` buckets, or returns an [`Err`] if `cap` is zero.
    ///
    /// # Panics
    /// Panics if allocating the buckets would overflow.
    pub fn try_with_cap(cap: usize) -> Result<ChainedHashTable<K, V>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity { cap });
        }

        Ok(ChainedHashTable {
            buckets: Array::repeat_default(cap),
            len: 0,
        })
    }

    /// Always returns an [`Err`]. Building a table as a copy of another map isn't supported, the
    /// target table should be created empty and filled with [`Map::put_all`] or [`Extend`]
    /// instead.
    pub fn try_from_map<M: Map<K, V> + ?Sized>(
        _map: &M,
    ) -> Result<ChainedHashTable<K, V>, UnsupportedOperation> {
        Err(UnsupportedOperation { operation: "from_map" })
    }

    /// Returns the number of entries in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets in the table, which is fixed for its lifetime.
    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    /// Removes every entry from the table. The buckets remain allocated.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            drop_chain(chain);
        }
        self.len = 0;
    }

    /// Returns true if any entry of the table has a value equal to `value`. Every bucket is
    /// searched.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }
}

impl<K: HashCode + Eq, V> ChainedHashTable<K, V> {
    /// Returns the bucket which holds, or would hold, keys with the provided hash code.
    pub(crate) fn bucket_index(&self, hash: i32) -> usize {
        // Casting cap can't wrap, allocations never exceed isize::MAX.
        i64::from(hash).rem_euclid(self.cap() as i64) as usize
    }

    /// Associates `value` with `key`. If the key was already present, its value is replaced in
    /// place and the previous value is returned. Otherwise, a new entry is linked in at the front
    /// of the key's bucket.
    ///
    /// # Examples
    /// ```
    /// # use contract_collections::collections::hash::ChainedHashTable;
    /// let mut table = ChainedHashTable::new();
    /// assert_eq!(table.put("a", 1), None);
    /// assert_eq!(table.put("a", 2), Some(1));
    /// assert_eq!(table.get("a"), Some(&2));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = key.hash_code();
        let index = self.bucket_index(hash);

        if let Some(entry) = seek(&mut self.buckets[index], hash, &key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        let chain = &mut self.buckets[index];
        *chain = Some(Box::new(Entry {
            hash,
            key,
            value,
            next: chain.take(),
        }));
        self.len += 1;
        None
    }

    /// Returns a reference to the value associated with `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Returns the stored entry for `key`, if any.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        let hash = key.hash_code();
        let mut entry = self.buckets[self.bucket_index(hash)].as_deref();

        while let Some(e) = entry {
            if e.matches(hash, key) {
                return Some(e);
            }
            entry = e.next.as_deref();
        }
        None
    }

    /// Returns a mutable reference to the value associated with `key`, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        let hash = key.hash_code();
        let index = self.bucket_index(hash);
        seek(&mut self.buckets[index], hash, key)
            .as_mut()
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the table contains an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry for `key`, returning it as a key-value pair. Only the key's bucket is
    /// searched, and the entry is unlinked directly from its chain.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        let hash = key.hash_code();
        let index = self.bucket_index(hash);
        let link = seek(&mut self.buckets[index], hash, key);

        let entry = *link.take()?;
        *link = entry.next;
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }
}

impl<K: HashCode + Eq, V> Map<K, V> for ChainedHashTable<K, V> {
    type Iter<'a> = super::Iter<'a, K, V> where Self: 'a, K: 'a, V: 'a;

    fn len(&self) -> usize {
        ChainedHashTable::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        ChainedHashTable::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        ChainedHashTable::contains_key(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        ChainedHashTable::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        ChainedHashTable::remove(self, key)
    }

    fn clear(&mut self) {
        ChainedHashTable::clear(self)
    }

    fn entries<'a>(&'a self) -> Self::Iter<'a> {
        self.iter()
    }
}

impl<K, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for ChainedHashTable<K, V> {
    fn drop(&mut self) {
        // Unlink every chain iteratively before the bucket array drops the (now empty) links.
        self.clear();
    }
}

impl<K: HashCode + Eq, V> Extend<(K, V)> for ChainedHashTable<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: HashCode + Eq, V> FromIterator<(K, V)> for ChainedHashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ChainedHashTable::new();
        table.extend(iter);
        table
    }
}

impl<K: HashCode + Eq, V, const N: usize> From<[(K, V); N]> for ChainedHashTable<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: HashCode + Eq, V: PartialEq> PartialEq for ChainedHashTable<K, V> {
    /// Two tables are equal if they hold the same keys mapped to equal values. Their bucket
    /// counts and chain orders don't matter.
    fn eq(&self, other: &Self) -> bool {
        self.map_eq(other)
    }
}

impl<K: HashCode + Eq, V: Eq> Eq for ChainedHashTable<K, V> {}

impl<K: HashCode, V: HashCode> HashCode for ChainedHashTable<K, V> {
    fn hash_code(&self) -> i32 {
        map_hash_code(self.iter())
    }
}

impl<K: HashCode, V: HashCode> Hash for ChainedHashTable<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Iteration order depends on the bucket count, only the order-insensitive code is written.
        state.write_i32(self.hash_code());
    }
}

impl<K: Debug, V: Debug> Debug for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("buckets", &DebugList::new(
                self.buckets.iter()
                    .map(|chain| DebugRaw(format_chain(chain)))
            ))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

fn format_chain<K: Debug, V: Debug>(chain: &Chain<K, V>) -> String {
    let mut entry = chain.as_deref();
    let mut parts = Vec::new();
    while let Some(e) = entry {
        parts.push(format!("{e:?}"));
        entry = e.next.as_deref();
    }

    if parts.is_empty() {
        "-".into()
    } else {
        parts.join(" -> ")
    }
}

impl<K: Debug, V: Debug> Display for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
