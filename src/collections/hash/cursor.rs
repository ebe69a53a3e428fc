use std::ptr::NonNull;

use super::{Chain, ChainedHashTable};
use crate::util::error::NoCurrentElement;
use crate::util::option::OptionExtension;

impl<K, V> ChainedHashTable<K, V> {
    /// Creates a [`CursorMut`] positioned before the first entry, in the order of
    /// [`iter`](ChainedHashTable::iter).
    pub fn cursor(&mut self) -> CursorMut<'_, K, V> {
        CursorMut {
            remaining: self.len,
            table: self,
            bucket: 0,
            link: None,
            last: None,
        }
    }

    /// Keeps only the entries for which `f` returns true, removing the rest. `f` may also update
    /// the value of each entry it keeps. Returns true if any entry was removed.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut f: F) -> bool {
        let len = self.len;
        let mut cursor = self.cursor();
        while let Some((key, value)) = cursor.next() {
            if !f(key, value) {
                // UNREACHABLE: next has just returned the entry being removed.
                unsafe { cursor.remove().ok().unreachable() };
            }
        }
        self.len != len
    }
}

/// A forward cursor over a [`ChainedHashTable`], which can update values and remove the entry it
/// last returned without disturbing the rest of the traversal.
///
/// The cursor holds the link to the next entry within the current bucket's chain, and the link
/// holding the current entry. Removal unlinks the current entry directly from its chain, rather
/// than searching for its key again.
///
/// # Examples
/// ```
/// # use contract_collections::collections::hash::ChainedHashTable;
/// let mut table: ChainedHashTable<i32, i32> = (0..10).map(|i| (i, i * i)).collect();
/// let mut cursor = table.cursor();
/// while let Some((key, _)) = cursor.next() {
///     if key % 2 == 1 {
///         cursor.remove().unwrap();
///     }
/// }
/// assert_eq!(table.len(), 5);
/// assert!(table.keys().all(|key| key % 2 == 0));
/// ```
pub struct CursorMut<'a, K, V> {
    pub(crate) table: &'a mut ChainedHashTable<K, V>,
    pub(crate) bucket: usize,
    // None before the head of the current bucket.
    pub(crate) link: Option<NonNull<Chain<K, V>>>,
    pub(crate) last: Option<NonNull<Chain<K, V>>>,
    pub(crate) remaining: usize,
}

impl<'a, K, V> CursorMut<'a, K, V> {
    /// Returns true if there is an entry after the cursor.
    pub const fn has_next(&self) -> bool {
        self.remaining > 0
    }

    /// Moves the cursor forward over the next entry, returning its key and a mutable reference to
    /// its value.
    pub fn next(&mut self) -> Option<(&K, &mut V)> {
        if !self.has_next() {
            return None;
        }

        // Some entry lies ahead while remaining > 0, so this never passes the last bucket.
        let mut link = loop {
            let link = match self.link {
                Some(link) => link,
                None => NonNull::from(&mut self.table.buckets[self.bucket]),
            };
            // SAFETY: link points at a bucket or at the next field of an entry in the table, which
            // the cursor borrows mutably.
            if unsafe { link.as_ref() }.is_some() {
                break link;
            }
            self.bucket += 1;
            self.link = None;
        };

        // SAFETY: As above. The returned references borrow the cursor, so the entry can't be
        // removed while they are alive.
        let entry = unsafe { link.as_mut() };
        // UNREACHABLE: The loop only breaks on a link that holds an entry.
        let entry = unsafe { entry.as_deref_mut().unreachable() };

        self.last = Some(link);
        self.link = Some(NonNull::from(&mut entry.next));
        self.remaining -= 1;

        Some((&entry.key, &mut entry.value))
    }

    /// Removes the current entry and returns it as a key-value pair, or returns an [`Err`] if
    /// there is no current entry.
    pub fn remove(&mut self) -> Result<(K, V), NoCurrentElement> {
        let mut link = self.last.take().ok_or(NoCurrentElement)?;

        // SAFETY: last is the link holding the entry most recently returned by next, which hasn't
        // been removed, and no reference into that entry outlives the call that returned it.
        let slot = unsafe { link.as_mut() };
        // UNREACHABLE: last always holds an entry that hasn't been removed yet.
        let entry = *unsafe { slot.take().unreachable() };
        *slot = entry.next;
        self.table.len -= 1;

        // The next entry has moved up into the removed entry's link.
        self.link = Some(link);

        Ok((entry.key, entry.value))
    }
}
