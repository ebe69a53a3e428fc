#![cfg(test)]

use std::cell::Cell;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::rc::Rc;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::CapacityOverflow;
use crate::util::panic::assert_panics;

fn filled(values: &[usize]) -> Array<MaybeUninit<usize>> {
    let mut arr = Array::<usize>::new_uninit(values.len());
    for (slot, value) in arr.iter_mut().zip(values) {
        *slot = MaybeUninit::new(*value);
    }
    arr
}

fn read(arr: &Array<MaybeUninit<usize>>) -> Vec<usize> {
    // SAFETY: Only called on Arrays whose elements have all been written.
    arr.iter().map(|slot| unsafe { slot.assume_init() }).collect()
}

#[test]
fn test_zst_support() {
    let arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(arr[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.iter().len(), 5, "Should iterate over the right number of ZST instances.");

    let mut uninit = Array::<ZeroSizedType>::new_uninit(5);
    let old_ptr = uninit.ptr;
    uninit.realloc(30);
    assert_eq!(
        uninit.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
    assert_eq!(uninit.size(), 30);
}

#[test]
fn test_realloc() {
    let mut arr = filled(&[0, 1, 2, 3, 4]);
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(8);
    for i in 5..8 {
        arr[i] = MaybeUninit::new(i);
    }
    assert_eq!(read(&arr), [0, 1, 2, 3, 4, 5, 6, 7], "When growing, all elements should remain.");

    arr.realloc(3);
    assert_eq!(read(&arr), [0, 1, 2], "When shrinking, the leading elements should remain.");

    arr.realloc(0);
    assert_eq!(arr.size(), 0);
    assert_eq!(arr.ptr, NonNull::dangling(), "Pointer should be dangling for 0 size.");

    arr.realloc(2);
    arr[0] = MaybeUninit::new(10);
    arr[1] = MaybeUninit::new(11);
    assert_eq!(read(&arr), [10, 11], "An emptied Array should be able to allocate again.");
}

#[test]
fn test_capacity_overflow() {
    let mut arr = filled(&[1, 2, 3]);
    assert_eq!(
        arr.try_realloc(isize::MAX as usize),
        Err(CapacityOverflow),
        "Layouts larger than isize::MAX bytes should be rejected."
    );
    assert_eq!(read(&arr), [1, 2, 3], "A rejected reallocation shouldn't touch the Array.");

    assert!(Array::<u64>::try_new_uninit(usize::MAX).is_err());
    assert_panics!({
        let _ = Array::<u64>::new_uninit(usize::MAX);
    });
}

#[test]
fn test_drop() {
    let counter = Rc::new(Cell::new(0));
    let mut arr = Array::<CountedDrop>::new_uninit(10);
    for slot in arr.iter_mut() {
        *slot = MaybeUninit::new(CountedDrop::new(&counter));
    }
    // SAFETY: Every slot has just been written.
    let arr = unsafe { arr.assume_init() };

    drop(arr);
    assert_eq!(counter.get(), 10, "10 elements should have been dropped.");

    let arr = Array::<Option<CountedDrop>>::repeat_default(4);
    assert!(arr.iter().all(Option::is_none));
}
