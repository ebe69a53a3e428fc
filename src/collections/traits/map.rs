use super::{HashCode, map_hash_code};

/// A collection of key-value entries with unique keys.
///
/// Two maps are equal if they have the same size and every key of one maps to an equal value in
/// the other (see [`Map::map_eq`]). Their [`HashCode`] is the sum over all entries of
/// `hash(key) ^ hash(value)`.
pub trait Map<K, V> {
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)> where Self: 'a, K: 'a, V: 'a;

    /// Returns the number of entries in the map.
    fn len(&self) -> usize;

    /// Returns true if the map contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the value associated with `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns true if the map contains an entry for `key`.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if any entry of the map has a value equal to `value`.
    fn contains_value(&self, value: &V) -> bool where V: PartialEq {
        self.entries().any(|(_, v)| v == value)
    }

    /// Associates `value` with `key`, returning the value previously associated with it.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Puts every entry of `entries` into the map.
    fn put_all<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    /// Removes the entry for `key`, returning its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes every entry from the map.
    fn clear(&mut self);

    /// Returns an iterator over every entry of the map.
    fn entries<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if `other` has the same size as `self` and maps every key of `self` to an
    /// equal value.
    fn map_eq<M: Map<K, V> + ?Sized>(&self, other: &M) -> bool where V: PartialEq {
        self.len() == other.len()
            && self.entries().all(|(key, value)| other.get(key) == Some(value))
    }

    /// Returns the order-insensitive hash code of the map.
    fn map_hash(&self) -> i32 where K: HashCode, V: HashCode {
        map_hash_code(self.entries())
    }
}
