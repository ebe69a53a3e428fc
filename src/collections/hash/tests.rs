#![cfg(test)]

use std::cell::Cell;
use std::hash::{BuildHasher, RandomState};
use std::rc::Rc;

use super::*;
use crate::collections::traits::{Collection, HashCode, Map};
use crate::util::alloc::CountedDrop;
use crate::util::error::{InvalidCapacity, NoCurrentElement, UnsupportedOperation};
use crate::util::panic::assert_panics;

fn greeting() -> ChainedHashTable<i32, &'static str> {
    let mut table = ChainedHashTable::with_cap(3);
    table.put(0, "Hello");
    table.put(1, "Mr.");
    table.put(2, "Paolo");
    table.put(3, "Rovelli");
    table
}

#[test]
fn test_collisions() {
    let table = greeting();

    assert_eq!(table.len(), 4);
    assert_eq!(table.cap(), 3);
    assert_eq!(table.get(&0), Some(&"Hello"), "Colliding keys should both be retrievable.");
    assert_eq!(table.get(&3), Some(&"Rovelli"), "Colliding keys should both be retrievable.");
    assert_eq!(table.get(&1), Some(&"Mr."));
    assert_eq!(table.get(&2), Some(&"Paolo"));
    assert_eq!(table.get(&4), None);

    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        [(&3, &"Rovelli"), (&0, &"Hello"), (&1, &"Mr."), (&2, &"Paolo")],
        "Buckets should be walked in order, newest entry first within a bucket."
    );
}

#[test]
fn test_put_and_update() {
    let mut table = greeting();

    assert_eq!(table.put(3, "Carlo"), Some("Rovelli"), "Updating should return the old value.");
    assert_eq!(table.len(), 4, "Updating shouldn't change the size.");
    assert_eq!(
        table.keys().copied().collect::<Vec<_>>(),
        [3, 0, 1, 2],
        "Updating should keep the entry's position in its chain."
    );

    *table.get_mut(&0).unwrap() = "Goodbye";
    assert_eq!(table.get(&0), Some(&"Goodbye"));
    assert_eq!(table.get_mut(&7), None);

    table.put_all([(4, "a"), (5, "b")]);
    assert_eq!(table.len(), 6);
    assert!(table.contains_key(&5));
    assert!(table.contains_value(&"Carlo"));
    assert!(!table.contains_value(&"Rovelli"));
}

#[test]
fn test_borrowed_lookup() {
    let mut table: ChainedHashTable<String, usize> = ChainedHashTable::new();
    table.put(String::from("paolo"), 1);
    table.put(String::from("love"), 2);

    assert_eq!(table.get("paolo"), Some(&1), "Keys should be looked up by their borrowed form.");
    assert!(table.contains_key("love"));
    assert_eq!(table.remove("love"), Some(2));
    assert!(!table.contains_key("love"));
}

#[test]
fn test_negative_hash() {
    let mut table = ChainedHashTable::with_cap(3);
    table.put(-1, 'a');
    table.put(i32::MIN, 'b');
    table.put(2, 'c');

    assert_eq!(table.bucket_index(-1), 2, "Negative hashes should wrap to a valid bucket.");
    assert_eq!(table.get(&-1), Some(&'a'));
    assert_eq!(table.get(&i32::MIN), Some(&'b'));
    assert_eq!(table.get(&2), Some(&'c'));
    assert_eq!(table.remove(&-1), Some('a'));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_remove() {
    let mut table: ChainedHashTable<i32, i32> = ChainedHashTable::with_cap(1);
    for i in 0..5 {
        table.put(i, i * 10);
    }
    assert_eq!(table.keys().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);

    assert_eq!(table.remove(&2), Some(20), "Removal from the middle of a chain.");
    assert_eq!(table.remove_entry(&4), Some((4, 40)), "Removal from the front of a chain.");
    assert_eq!(table.remove(&0), Some(0), "Removal from the back of a chain.");
    assert_eq!(table.remove(&0), None);
    assert_eq!(table.keys().copied().collect::<Vec<_>>(), [3, 1]);
    assert_eq!(table.len(), 2);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.cap(), 1, "Clearing shouldn't change the capacity.");
    assert_eq!(table.iter().next(), None);
}

#[test]
fn test_capacity() {
    assert_eq!(
        ChainedHashTable::<u8, u8>::try_with_cap(0).err(),
        Some(InvalidCapacity { cap: 0 })
    );
    assert_eq!(ChainedHashTable::<u8, u8>::new().cap(), DEFAULT_CAPACITY);
    assert_panics!({
        ChainedHashTable::<u8, u8>::with_cap(0);
    }, throws InvalidCapacity { cap: 0 });

    let table = greeting();
    assert_eq!(
        ChainedHashTable::<i32, &str>::try_from_map(&table).err(),
        Some(UnsupportedOperation { operation: "from_map" })
    );
}

#[test]
fn test_views() {
    let table = greeting();

    let keys = table.key_set();
    assert_eq!(keys.len(), 4);
    assert!(keys.contains(&3));
    assert!(!keys.contains(&4));
    assert!(keys.contains_all(&[0, 1, 2, 3]));
    assert_eq!(keys.iter().count(), 4);

    let values = table.value_collection();
    assert!(values.contains(&"Paolo"));
    assert!(!values.contains(&"Carlo"));

    let entries = table.entry_set();
    let first = entries.iter().next().unwrap();
    assert_eq!((first.key(), first.value()), (&3, &"Rovelli"));
    assert!(entries.contains(first));
    assert_eq!(first.hash_code(), 3 ^ "Rovelli".hash_code());

    let other = greeting();
    assert!(
        entries.contains_all(&other.entry_set()),
        "Entries should compare by key and value, not by identity."
    );
}

#[test]
fn test_views_mut() {
    let mut table = greeting();
    let mut keys = table.key_set_mut();
    assert!(keys.remove(&3));
    assert!(!keys.remove(&3), "A key can only be removed once.");
    assert!(!keys.remove_all(&[7, 8]));
    assert!(keys.retain_all(&[0, 1]));
    assert_eq!(keys.len(), 2);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&0), Some(&"Hello"));
    assert_eq!(table.get(&2), None);
    assert_eq!(table.get(&3), None);

    let mut table = greeting();
    table.put(4, "Hello");
    let mut values = table.value_collection_mut();
    assert!(values.remove(&"Hello"));
    assert!(!values.remove(&"Carlo"));
    assert_eq!(values.len(), 4);
    assert!(values.remove_all(&["Mr.", "Rovelli"]));
    assert_eq!(table.len(), 2);
    assert!(table.contains_value(&"Hello"), "Only one entry with the value should be removed.");
    assert!(table.value_collection_mut().retain_all(&["Paolo"]));
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&2), Some(&"Paolo"));

    let mut table = greeting();
    let other = ChainedHashTable::from([(0, "Hello"), (1, "Ms."), (3, "Rovelli")]);
    let mut entries = table.entry_set_mut();
    let rovelli = other.iter_entries().find(|e| *e.key() == 3).unwrap();
    assert!(entries.remove(rovelli));
    assert!(!entries.remove(rovelli));
    assert!(entries.retain_all(&other.entry_set()), "Entries are kept by key and value.");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&0), Some(&"Hello"));

    let mut table = greeting();
    let mut entries = table.entry_set_mut();
    assert!(entries.remove_all(&other.entry_set()));
    let mut cursor = entries.cursor();
    while let Some((key, _)) = cursor.next() {
        if *key == 1 {
            cursor.remove().unwrap();
        }
    }
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&2), Some(&"Paolo"));

    table.key_set_mut().clear();
    assert!(table.is_empty());
}

#[test]
fn test_retain() {
    let mut table: ChainedHashTable<i32, i32> = (0..10).map(|i| (i, i)).collect();
    assert!(table.retain(|key, value| {
        *value *= 10;
        key % 2 == 0
    }));
    assert!(!table.retain(|_, _| true));
    assert_eq!(table.len(), 5);
    assert_eq!(table.get(&4), Some(&40));
    assert_eq!(table.get(&5), None);
}

#[test]
fn test_cursor() {
    let mut table = greeting();
    let mut cursor = table.cursor();

    assert_eq!(cursor.remove(), Err(NoCurrentElement));
    assert_eq!(cursor.next().map(|(k, _)| *k), Some(3));
    assert_eq!(cursor.remove(), Ok((3, "Rovelli")));
    assert_eq!(cursor.remove(), Err(NoCurrentElement), "An entry can only be removed once.");

    let (key, value) = cursor.next().unwrap();
    assert_eq!(*key, 0, "Removing the front of a chain shouldn't skip the next entry.");
    *value = "Hi";

    assert_eq!(cursor.next().map(|(k, _)| *k), Some(1));
    assert_eq!(cursor.next().map(|(k, _)| *k), Some(2));
    assert_eq!(cursor.remove(), Ok((2, "Paolo")));
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&0), Some(&"Hi"));
    assert_eq!(table.get(&3), None);

    let mut table: ChainedHashTable<_, _> = (0..20).map(|i| (i, i)).collect();
    let mut cursor = table.cursor();
    let mut visited = 0;
    while cursor.next().is_some() {
        visited += 1;
        cursor.remove().unwrap();
    }
    assert_eq!(visited, 20, "Every entry should be visited exactly once.");
    assert!(table.is_empty());
}

#[test]
fn test_cursor_long_chain() {
    let mut table: ChainedHashTable<i32, i32> = ChainedHashTable::with_cap(1);
    table.put_all((0..20_000).map(|i| (i, i)));

    let mut cursor = table.cursor();
    let mut expected = 20_000;
    while let Some((key, value)) = cursor.next() {
        expected -= 1;
        assert_eq!(*key, expected, "A single chain is walked from its most recent entry.");
        *value *= 2;
        if key % 3 == 0 {
            cursor.remove().unwrap();
        }
    }
    assert_eq!(expected, 0);

    assert_eq!(table.len(), 20_000 - 6_667);
    assert_eq!(table.get(&3), None);
    assert_eq!(table.get(&4), Some(&8));
    assert_eq!(table.get(&19_999), Some(&39_998));
}

#[test]
fn test_iterators() {
    let mut table: ChainedHashTable<i32, i32> = (0..10).map(|i| (i, i)).collect();
    for (key, value) in table.iter_mut() {
        *value += key;
    }
    for value in table.values_mut() {
        *value += 1;
    }
    assert!(table.iter().all(|(k, v)| *v == k * 2 + 1));
    assert_eq!(table.iter().len(), 10);
    assert_eq!(table.values().sum::<i32>(), 100);

    let mut pairs: Vec<_> = table.into_iter().collect();
    pairs.sort();
    assert_eq!(pairs, (0..10).map(|i| (i, i * 2 + 1)).collect::<Vec<_>>());
}

#[test]
fn test_drop() {
    let counter = Rc::new(Cell::new(0));
    let table: ChainedHashTable<_, _> = (0..10).map(|i| (i, CountedDrop::new(&counter))).collect();
    drop(table);
    assert_eq!(counter.get(), 10, "10 values should have been dropped.");

    let counter = Rc::new(Cell::new(0));
    let table: ChainedHashTable<_, _> = (0..10).map(|i| (i, CountedDrop::new(&counter))).collect();
    let mut iter = table.into_iter();
    drop(iter.next());
    assert_eq!(counter.get(), 1);
    drop(iter);
    assert_eq!(counter.get(), 10, "The remaining values should be dropped with the iterator.");

    let counter = Rc::new(Cell::new(0));
    let mut table: ChainedHashTable<i32, CountedDrop> = ChainedHashTable::with_cap(1);
    for i in 0..10_000 {
        table.put(i, CountedDrop::new(&counter));
    }
    drop(table);
    assert_eq!(counter.get(), 10_000, "Long chains should be dropped without recursion.");
}

#[test]
fn test_equality_and_hash() {
    let small = greeting();
    let mut large = ChainedHashTable::with_cap(64);
    large.extend([(3, "Rovelli"), (2, "Paolo"), (1, "Mr."), (0, "Hello")]);

    assert_eq!(small, large, "Equality shouldn't depend on capacity or insertion order.");
    assert_eq!(small.hash_code(), large.hash_code());
    assert_eq!(small.map_hash(), small.hash_code());
    assert_eq!(
        small.hash_code(),
        (0 ^ "Hello".hash_code())
            .wrapping_add(1 ^ "Mr.".hash_code())
            .wrapping_add(2 ^ "Paolo".hash_code())
            .wrapping_add(3 ^ "Rovelli".hash_code())
    );

    let state = RandomState::new();
    assert_eq!(state.hash_one(&small), state.hash_one(&large));

    large.put(4, "");
    assert_ne!(small, large);
    large.remove(&4);
    large.put(3, "Carlo");
    assert_ne!(small, large, "Equal keys with different values aren't equal.");
}

#[test]
fn test_formatting() {
    let table = greeting();
    assert_eq!(
        format!("{table:?}"),
        r#"ChainedHashTable { buckets: [(3: "Rovelli") -> (0: "Hello"), (1: "Mr."), (2: "Paolo")], len: 4, cap: 3 }"#
    );
    assert_eq!(format!("{table}"), r#"{3: "Rovelli", 0: "Hello", 1: "Mr.", 2: "Paolo"}"#);

    let empty: ChainedHashTable<u8, u8> = ChainedHashTable::with_cap(2);
    assert_eq!(format!("{empty:?}"), "ChainedHashTable { buckets: [-, -], len: 0, cap: 2 }");
}
