#![cfg(test)]

use std::cell::Cell;
use std::hash::{BuildHasher, RandomState};
use std::rc::Rc;

use super::*;
use crate::collections::traits::{Collection, HashCode, Sequence};
use crate::util::alloc::CountedDrop;
use crate::util::error::{IndexOutOfBounds, NoCurrentElement};
use crate::util::panic::assert_panics;

const WORDS: [&str; 7] = ["paolo", "love", "valeria", ":", "i", "mimmi", "bimbi"];

/// Walks the ring in both directions, checking that every link agrees with its neighbour and that
/// the ring closes on the sentinel after exactly len elements.
fn assert_ring<T>(seq: &LinkedSequence<T>) {
    let mut node = seq.sentinel;
    for _ in 0..=seq.len() {
        assert!(node.next().prev() == node, "Forward and backward links should agree.");
        node = node.next();
    }
    assert!(node == seq.sentinel, "The ring should close after len elements.");

    for _ in 0..=seq.len() {
        node = node.prev();
    }
    assert!(node == seq.sentinel, "The ring should close in reverse after len elements.");
}

#[test]
fn test_words() {
    let mut seq = LinkedSequence::new();
    for word in WORDS {
        seq.push(word);
    }
    assert!(!seq.is_empty());
    assert_eq!(seq.len(), WORDS.len());

    for (i, word) in WORDS.iter().enumerate() {
        assert_eq!(seq.get(i), word);
        assert!(seq.contains(word));
        assert_eq!(seq.index_of(word), Some(i));
        assert_eq!(seq.last_index_of(word), Some(i));
    }
    assert_eq!(seq, WORDS);

    for word in WORDS {
        assert!(seq.remove_item(&word));
        assert_ring(&seq);
    }
    assert!(seq.is_empty(), "Removing every element by value should drain the sequence.");
    assert!(seq.sentinel.next() == seq.sentinel, "The sentinel should link to itself.");

    seq.push_back("fresh");
    assert_eq!(seq.front(), Some(&"fresh"), "A drained sequence should behave as a new one.");
    assert_eq!(seq.back(), Some(&"fresh"));
    assert_eq!(seq.len(), 1);
    assert_ring(&seq);
    seq.clear();

    assert!(seq.add_all(WORDS));
    assert!(seq.contains_all(&WORDS));
    assert!(!seq.retain_all(&WORDS));
    assert_eq!(seq.len(), WORDS.len());
    assert!(seq.remove_all(&WORDS));
    assert_eq!(seq.len(), 0);
    assert!(seq.insert_all(0, WORDS));
    assert_eq!(seq.len(), WORDS.len());

    let mut cursor = seq.cursor();
    let mut i = 0;
    while let Some(word) = cursor.next() {
        assert_eq!(*word, WORDS[i]);
        i += 1;
    }

    let len = seq.len();
    let mut cursor = seq.cursor_at(len);
    let mut i = WORDS.len();
    while let Some(word) = cursor.previous() {
        i -= 1;
        assert_eq!(*word, WORDS[i]);
    }

    seq.clear();
    assert!(seq.is_empty());
    assert_ring(&seq);
}

#[test]
fn test_index_operations() {
    let mut seq: LinkedSequence<_> = (0..8).collect();

    for i in 0..8 {
        assert_eq!(seq[i], i, "Seeking from either end should reach the same element.");
    }

    seq.insert(0, 10);
    seq.insert(5, 20);
    seq.insert(10, 30);
    assert_eq!(seq, [10, 0, 1, 2, 3, 20, 4, 5, 6, 7, 30]);
    assert_ring(&seq);

    assert_eq!(seq.remove(10), 30);
    assert_eq!(seq.remove(5), 20);
    assert_eq!(seq.remove(0), 10);
    assert_eq!(seq, [0, 1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(seq.set(6, 60), 6);
    seq[7] += 1;
    assert_eq!(seq.back(), Some(&8));
    assert_eq!(seq.get(6), &60);

    seq.push_front(100);
    assert_eq!(seq.front(), Some(&100));
    if let Some(front) = seq.front_mut() {
        *front += 1;
    }
    if let Some(back) = seq.back_mut() {
        *back *= 2;
    }
    assert_eq!(seq.pop_front(), Some(101));
    assert_eq!(seq.pop_back(), Some(16), "back_mut should update the last element in place.");
    assert_eq!(LinkedSequence::<usize>::new().back_mut(), None);
    assert_eq!(seq.len(), 7);
    assert_ring(&seq);
}

#[test]
fn test_out_of_bounds() {
    let mut seq = LinkedSequence::from([1, 2, 3]);

    assert_eq!(seq.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(seq.try_set(3, 0), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(seq.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(seq.try_insert(4, 0), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert!(seq.try_cursor_at(4).is_err());
    assert_eq!(seq, [1, 2, 3], "Failed operations shouldn't modify the sequence.");

    assert_panics!({
        LinkedSequence::from([1, 2, 3]).get(3);
    });
    assert_panics!({
        LinkedSequence::<u8>::new().remove(0);
    }, throws IndexOutOfBounds { index: 0, len: 0 });
    assert_panics!({
        LinkedSequence::from([1]).insert(2, 0);
    });
}

#[test]
fn test_cursor_remove() {
    let mut seq = LinkedSequence::from(['a', 'b', 'c', 'd']);
    let mut cursor = seq.cursor();

    assert_eq!(cursor.remove(), Err(NoCurrentElement));
    assert_eq!(cursor.next().copied(), Some('a'));
    assert_eq!(cursor.next().copied(), Some('b'));
    assert_eq!(cursor.remove(), Ok('b'), "Removal after next removes the element crossed.");
    assert_eq!(cursor.next_index(), 1);
    assert_eq!(cursor.next().copied(), Some('c'), "Next should yield the element after it.");

    assert_eq!(cursor.previous().copied(), Some('c'));
    assert_eq!(cursor.remove(), Ok('c'), "Removal after previous removes the element crossed.");
    assert_eq!(cursor.next_index(), 1);
    assert_eq!(cursor.next().copied(), Some('d'), "Next should yield the element after it.");
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), None);

    assert_eq!(cursor.remove(), Ok('d'));
    assert_eq!(cursor.remove(), Err(NoCurrentElement), "An element can only be removed once.");
    assert_eq!(cursor.previous().copied(), Some('a'));
    assert_eq!(cursor.previous(), None);

    assert_eq!(seq, ['a']);
    assert_ring(&seq);
}

#[test]
fn test_cursor_add_and_set() {
    let mut seq = LinkedSequence::from([1, 2]);
    let mut cursor = seq.cursor_at(1);

    assert_eq!(cursor.previous_index(), Some(0));
    cursor.add(10);
    assert_eq!(cursor.set(0), Err(NoCurrentElement), "Insertion clears the current element.");
    assert_eq!(cursor.next_index(), 2);
    assert_eq!(cursor.previous().copied(), Some(10), "Previous should return the new element.");
    assert_eq!(cursor.set(11), Ok(10));
    assert_eq!(cursor.next().copied(), Some(11));
    assert_eq!(cursor.next().copied(), Some(2));
    cursor.add(3);
    assert_eq!(cursor.next_index(), 4);

    assert_eq!(seq, [1, 11, 2, 3]);
    assert_ring(&seq);
}

#[test]
fn test_iterators() {
    let mut seq: LinkedSequence<usize> = (0..5).collect();
    for i in seq.iter_mut() {
        *i *= 2;
    }
    assert_eq!(seq, [0, 2, 4, 6, 8]);
    assert_eq!(seq.iter().rev().copied().collect::<Vec<_>>(), [8, 6, 4, 2, 0]);
    assert_eq!(seq.clone(), seq, "Clones should be equal.");

    let mut iter = seq.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&8));
    assert_eq!(iter.len(), 3);

    let mut iter = seq.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_drop() {
    let counter = Rc::new(Cell::new(0));
    let seq: LinkedSequence<_> = (0..10).map(|_| CountedDrop::new(&counter)).collect();
    drop(seq);
    assert_eq!(counter.get(), 10, "10 elements should have been dropped.");

    let counter = Rc::new(Cell::new(0));
    let mut seq: LinkedSequence<_> = (0..10).map(|_| CountedDrop::new(&counter)).collect();
    assert!(seq.retain(|_| false));
    assert_eq!(counter.get(), 10, "Every removed element should be dropped.");
    assert!(seq.is_empty());
}

#[cfg(feature = "contiguous")]
#[test]
fn test_cross_type_equality() {
    use crate::collections::contiguous::DynamicArraySequence;

    let linked = LinkedSequence::from([1, 2, 3]);
    let array = DynamicArraySequence::from([1, 2, 3]);
    assert!(linked == array, "Sequences with equal elements should be equal across types.");
    assert!(array == linked);
    assert_eq!(linked.hash_code(), array.hash_code());

    let state = RandomState::new();
    assert_eq!(state.hash_one(&linked), state.hash_one(&array));

    assert!(LinkedSequence::from([1, 2]) != DynamicArraySequence::from([2, 1]));
    assert!(LinkedSequence::from([1, 2]) != DynamicArraySequence::from([1, 2, 3]));
}

#[test]
fn test_equality_and_hash() {
    let seq = LinkedSequence::from([1, 2]);
    assert_ne!(seq, LinkedSequence::from([2, 1]));
    assert_eq!(seq.hash_code(), (31 + 1) * 31 + 2);
    assert_eq!(seq.sequence_hash(), seq.hash_code());

    let state = RandomState::new();
    assert_eq!(state.hash_one(&seq), state.hash_one(LinkedSequence::from([1, 2])));
}

#[test]
fn test_formatting() {
    let seq = LinkedSequence::from(["a", "b"]);
    assert_eq!(format!("{seq}"), r#"["a", "b"]"#);
    assert_eq!(format!("{seq:?}"), r#"LinkedSequence { contents: ["a", "b"], len: 2 }"#);
}
