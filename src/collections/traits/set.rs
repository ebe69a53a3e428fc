use super::{Collection, HashCode, set_hash_code};

/// A collection without duplicate elements.
///
/// Two sets are equal if they have the same size and every element of one is contained in the
/// other (see [`Set::set_eq`]). Their [`HashCode`] is the sum of their elements' hash codes, which
/// doesn't depend on iteration order.
pub trait Set<T>: Collection<T> {
    /// Adds `value` to the set if it isn't already present. Returns true if the set changed.
    fn add(&mut self, value: T) -> bool;

    /// Removes the element equal to `item`, returning true if one was present.
    fn remove(&mut self, item: &T) -> bool;

    /// Removes every element from the set.
    fn clear(&mut self);

    /// Adds every element of `items` that isn't already present. Returns true if the set changed.
    fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> bool {
        let mut changed = false;
        for item in items {
            changed |= self.add(item);
        }
        changed
    }

    /// Removes every element contained in `other`. Returns true if the set changed.
    fn remove_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool {
        let mut changed = false;
        for item in other.iter() {
            changed |= self.remove(item);
        }
        changed
    }

    /// Removes every element which isn't contained in `other`. Returns true if the set changed.
    fn retain_all<C: Collection<T> + ?Sized>(&mut self, other: &C) -> bool;

    /// Returns true if `other` has the same size as `self` and contains all of its elements.
    fn set_eq<S: Set<T> + ?Sized>(&self, other: &S) -> bool {
        self.len() == other.len() && other.contains_all(self)
    }

    /// Returns the order-insensitive hash code of the set.
    fn set_hash(&self) -> i32 where T: HashCode {
        set_hash_code(self.iter())
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset<C: Collection<T> + ?Sized>(&self, other: &C) -> bool {
        other.contains_all(self)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset<C: Collection<T> + ?Sized>(&self, other: &C) -> bool {
        self.contains_all(other)
    }
}
