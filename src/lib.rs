//! A small library of generic containers written against the conventional Sequence, Set and Map
//! contracts.
//!
//! # Purpose
//! Four independent data structures, each with its own storage layout and cursor type:
//! - [`DynamicArraySequence`](collections::contiguous::DynamicArraySequence): an index-addressable
//!   sequence backed by a heap buffer that is always exactly as long as the sequence.
//! - [`LinkedSequence`](collections::linked::LinkedSequence): a doubly linked sequence arranged as
//!   a ring around a permanent sentinel node.
//! - [`ChainedHashTable`](collections::hash::ChainedHashTable): a hash table with a fixed number of
//!   buckets and singly linked collision chains.
//! - [`OrderedTreeSet`](collections::tree::OrderedTreeSet): an unbalanced binary search tree with
//!   parent links, iterated in order without an explicit stack.
//!
//! The structures share no code or state. What ties them together are the contracts in
//! [`collections::traits`], including the equality and [`HashCode`](collections::traits::HashCode)
//! composition rules that code written against those contracts relies on.
//!
//! # Error Handling
//! Every operation that can fail has a `try_` form which returns a [`Result`], and a plain form
//! which panics with the error's message. The errors are small structs that implement
//! [`Error`](std::error::Error), unioned by [`CollectionError`](collections::CollectionError). All
//! checks are made before any state changes, so a failed call never leaves a partial mutation
//! behind.
//!
//! # Concurrency
//! None of the structures synchronize internally. Cursors and iterators borrow the structure they
//! walk, so the borrow checker rules out mutation through any other path while one is alive.
//!
//! # Dependencies
//! The collections don't use [`Vec`] to build their storage, which is allocated directly.
//! `derive_more` removes some repetitive error boilerplate.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
