#![cfg(test)]

use std::cell::Cell;
use std::hash::{BuildHasher, RandomState};
use std::rc::Rc;

use super::*;
use crate::collections::traits::{Collection, HashCode, Set};
use crate::util::alloc::CountedDrop;
use crate::util::error::NoCurrentElement;

const WORDS: [&str; 7] = ["paolo", "love", "valeria", ":", "i", "mimmi", "bimbi"];

const SORTED: [&str; 7] = [":", "bimbi", "i", "love", "mimmi", "paolo", "valeria"];

/// Checks every parent link against its child links, and that an in-order walk is strictly
/// ascending with exactly len elements.
fn assert_tree<T: Ord>(set: &OrderedTreeSet<T>) {
    let mut count = 0;
    let mut pending: Vec<NodeRef<T>> = set.root.into_iter().collect();
    if let Some(root) = set.root {
        assert!(root.parent().is_none(), "The root shouldn't have a parent.");
    }

    while let Some(node) = pending.pop() {
        count += 1;
        for child in [node.left(), node.right()].into_iter().flatten() {
            assert!(child.parent() == Some(node), "A child should link back to its parent.");
            pending.push(child);
        }
    }
    assert_eq!(count, set.len(), "The tree should hold exactly len nodes.");

    let items: Vec<_> = set.iter().collect();
    assert!(items.windows(2).all(|w| w[0] < w[1]), "In-order traversal should be ascending.");
}

#[test]
fn test_words() {
    let mut set = OrderedTreeSet::new();
    for word in WORDS {
        assert!(set.add(word));
    }
    assert_eq!(set.len(), WORDS.len());
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), SORTED);
    assert_tree(&set);

    for word in WORDS {
        assert!(set.contains(word));
    }
    for word in WORDS {
        assert!(set.remove(word));
        assert_tree(&set);
    }
    assert!(set.is_empty());
    assert!(set.root.is_none());

    assert!(set.add_all(WORDS));
    assert!(set.contains_all(&WORDS));
    assert!(!set.retain_all(&WORDS), "Retaining every element shouldn't change the set.");
    assert_eq!(set.len(), WORDS.len());

    let mut cursor = set.cursor();
    let mut i = 0;
    while let Some(word) = cursor.next() {
        assert_eq!(*word, SORTED[i]);
        i += 1;
    }
    assert_eq!(i, SORTED.len());
}

#[test]
fn test_add_and_remove() {
    let mut set = OrderedTreeSet::from([50, 30, 70, 20, 40, 60, 80]);
    assert!(!set.add(40), "Duplicates should be rejected.");
    assert_eq!(set.len(), 7);

    assert!(set.remove(&20), "Removing a leaf.");
    assert_tree(&set);
    assert!(set.remove(&30), "Removing a node with one child.");
    assert_tree(&set);
    assert!(set.remove(&50), "Removing the root, which has two children.");
    assert_tree(&set);
    assert!(!set.remove(&50));

    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [40, 60, 70, 80]);
    assert_eq!(set.first(), Some(&40));
    assert_eq!(set.last(), Some(&80));
    assert_eq!(set.take(&70), Some(70));
    assert_eq!(set.get(&60), Some(&60));
    assert_eq!(set.get(&70), None);

    assert_eq!(set.pop_first(), Some(40));
    assert_eq!(set.pop_last(), Some(80));
    assert_eq!(set.pop_last(), Some(60));
    assert_eq!(set.pop_first(), None);
    assert!(set.root.is_none());
}

#[test]
fn test_borrowed_lookup() {
    let set: OrderedTreeSet<String> = WORDS.iter().map(|w| w.to_string()).collect();
    assert!(set.contains("mimmi"), "Elements should be looked up by their borrowed form.");
    assert_eq!(set.get("i").map(String::as_str), Some("i"));
    assert!(!set.contains("paolo!"));
}

#[test]
fn test_degenerate_shape() {
    let mut set: OrderedTreeSet<u32> = (0..1000_u32).collect();
    assert_eq!(set.root.map(|root| root.left().is_none()), Some(true));
    assert_eq!(set.iter().rev().next(), Some(&999));
    assert_tree(&set);

    for i in (0..1000_u32).step_by(2) {
        assert!(set.remove(&i));
    }
    assert_eq!(set.len(), 500);
    assert!(set.iter().all(|i| i % 2 == 1));
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_bulk_operations() {
    let mut set = OrderedTreeSet::from([1, 2, 3, 4, 5]);

    assert!(set.add_all([5, 6]), "A partly new batch should change the set.");
    assert!(!set.add_all([1, 2]));
    assert!(set.remove_all(&[2, 4, 10]));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 6]);

    assert!(set.retain_all(&[1, 5, 7, 8, 9, 10]), "Elements absent from the argument are removed.");
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 5]);
    assert!(set.is_subset(&[1, 5, 7]));
    assert!(set.is_superset(&[5]));
    assert!(!set.is_superset(&[5, 6]));

    assert!(set.retain(|i| *i > 1));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [5]);
    assert_tree(&set);
}

#[test]
fn test_cursor() {
    let mut set = OrderedTreeSet::from([4, 2, 6, 1, 3, 5, 7]);
    let mut cursor = set.cursor();

    assert_eq!(cursor.remove(), Err(NoCurrentElement));
    assert_eq!(cursor.next(), Some(&1));
    assert_eq!(cursor.next(), Some(&2));
    assert_eq!(cursor.remove(), Ok(2), "Removing a node with two children.");
    assert_eq!(cursor.remove(), Err(NoCurrentElement), "An element can only be removed once.");
    assert_eq!(cursor.next(), Some(&3), "The successor should follow the removed element.");
    assert_eq!(cursor.next(), Some(&4));
    assert_eq!(cursor.remove(), Ok(4), "Removing the root.");
    assert_eq!(cursor.next(), Some(&5));
    assert_eq!(cursor.next(), Some(&6));
    assert_eq!(cursor.next(), Some(&7));
    assert_eq!(cursor.remove(), Ok(7));
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);

    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 6]);
    assert_tree(&set);
}

#[test]
fn test_iterators() {
    let set = OrderedTreeSet::from([3, 1, 4, 5, 9, 2, 6]);

    let mut iter = set.iter();
    assert_eq!(iter.len(), 7);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&9));
    assert_eq!(iter.next_back(), Some(&6));
    assert_eq!(iter.clone().collect::<Vec<_>>(), [&2, &3, &4, &5]);
    assert_eq!(iter.len(), 4);

    let clone = set.clone();
    assert_eq!(clone, set, "Clones should be equal.");
    assert_eq!(format!("{clone:?}"), format!("{set:?}"), "Clones should keep the same shape.");

    let mut iter = set.into_iter();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(9));
    assert_eq!(iter.collect::<Vec<_>>(), [2, 3, 4, 5, 6]);
}

struct Keyed(u32, CountedDrop);

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[test]
fn test_drop() {
    let counter = Rc::new(Cell::new(0));
    let set: OrderedTreeSet<_> = [5, 2, 8, 1, 9, 3].into_iter()
        .map(|i| Keyed(i, CountedDrop::new(&counter)))
        .collect();
    drop(set);
    assert_eq!(counter.get(), 6, "6 elements should have been dropped.");

    let counter = Rc::new(Cell::new(0));
    let mut set: OrderedTreeSet<_> = (0..10).map(|i| Keyed(i, CountedDrop::new(&counter))).collect();
    assert!(!set.add(Keyed(3, CountedDrop::new(&counter))));
    assert_eq!(counter.get(), 1, "A rejected duplicate should be dropped.");
    assert!(set.retain(|_| false));
    assert_eq!(counter.get(), 11, "Every removed element should be dropped.");

    let counter = Rc::new(Cell::new(0));
    let set: OrderedTreeSet<_> = (0..10_000).map(|i| Keyed(i, CountedDrop::new(&counter))).collect();
    drop(set);
    assert_eq!(counter.get(), 10_000, "Deep trees should be dropped without recursion.");
}

#[test]
fn test_equality_and_hash() {
    let a = OrderedTreeSet::from([1, 2, 3]);
    let b = OrderedTreeSet::from([3, 1, 2]);
    assert_eq!(a, b, "Equality shouldn't depend on shape.");
    assert_eq!(a.hash_code(), 6);
    assert_eq!(a.set_hash(), b.hash_code());
    assert!(a.set_eq(&b));

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b));

    assert_ne!(a, OrderedTreeSet::from([1, 2]));
}

#[test]
fn test_formatting() {
    let set = OrderedTreeSet::from([2, 1, 3]);
    assert_eq!(format!("{set}"), "{1, 2, 3}");
    assert_eq!(
        format!("{set:?}"),
        "OrderedTreeSet { nodes: \n\
        ┌    ┌    -\n┌    1\n┌    └    -\n\
        2\n\
        └    ┌    -\n└    3\n└    └    -\n\
        , len: 3 }"
    );
}

#[test]
fn test_formatting_deep_tree() {
    use std::fmt::Write;

    /// Counts lines instead of storing them, as a degenerate tree draws a very wide picture.
    struct LineCounter {
        lines: usize,
        last: String,
    }

    impl Write for LineCounter {
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            for c in s.chars() {
                if c == '\n' {
                    self.lines += 1;
                    self.last.clear();
                } else {
                    self.last.push(c);
                }
            }
            Ok(())
        }
    }

    let set: OrderedTreeSet<u32> = (0..10_000_u32).collect();
    let mut counter = LineCounter { lines: 0, last: String::new() };
    write!(counter, "{set:?}").unwrap();

    // Each node draws its value and an empty left child, plus a final empty right child.
    assert_eq!(counter.lines, 2 * 10_000 + 2, "Every node of a deep tree should be drawn.");
    assert_eq!(counter.last, ", len: 10000 }");
}
