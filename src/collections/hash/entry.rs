use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};

use crate::collections::traits::HashCode;
use crate::util::option::OptionExtension;

/// A singly linked list of entries whose keys share a bucket. The link is owning: each entry owns
/// the rest of the chain after it.
pub(crate) type Chain<K, V> = Option<Box<Entry<K, V>>>;

/// A key-value pair stored in a [`ChainedHashTable`](super::ChainedHashTable).
///
/// Two entries are equal when both their keys and their values are equal, and an entry's
/// [`HashCode`] is `hash(key) ^ hash(value)`, so entries compare and hash the same way wherever
/// they came from.
pub struct Entry<K, V> {
    pub(crate) hash: i32,
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) next: Chain<K, V>,
}

impl<K, V> Entry<K, V> {
    /// Returns a reference to the entry's key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the entry's value.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns true if the entry's key has the provided hash and is equal to `key`. The cached hash
    /// is compared first.
    pub(crate) fn matches<Q>(&self, hash: i32, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.hash == hash && self.key.borrow() == key
    }
}

/// Walks `link` until it reaches the link holding the entry that matches `key`, or the empty link
/// at the end of the chain.
pub(crate) fn seek<'a, K, V, Q>(
    mut link: &'a mut Chain<K, V>,
    hash: i32,
    key: &Q,
) -> &'a mut Chain<K, V>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    while link.as_ref().is_some_and(|entry| !entry.matches(hash, key)) {
        // UNREACHABLE: The loop condition has just checked that link holds an entry.
        link = &mut unsafe { link.as_mut().unreachable() }.next;
    }
    link
}

/// Drops an entire chain one entry at a time, rather than recursively through each entry's
/// owning link.
pub(crate) fn drop_chain<K, V>(chain: &mut Chain<K, V>) {
    let mut link = chain.take();
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<K: Eq, V: Eq> Eq for Entry<K, V> {}

impl<K: HashCode, V: HashCode> HashCode for Entry<K, V> {
    fn hash_code(&self) -> i32 {
        self.key.hash_code() ^ self.value.hash_code()
    }
}

impl<K: Debug, V: Debug> Debug for Entry<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}: {:?})", self.key, self.value)
    }
}
