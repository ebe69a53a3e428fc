//! Various general-purpose collection types.
//!
//! # Purpose
//! Each type here satisfies one of the contracts in [`traits`]: [`Sequence`](traits::Sequence)
//! for the array and linked sequences, [`Set`](traits::Set) for the tree set and
//! [`Map`](traits::Map) for the hash table.
//!
//! # Method
//! The types own their storage directly, through raw allocations or individually boxed nodes,
//! rather than building on [`Vec`] or the standard collections.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
pub mod traits;

#[cfg(any(feature = "contiguous", feature = "hash"))]
pub(crate) mod array;

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, CollectionError, IndexOutOfBounds, InvalidCapacity, NoCurrentElement,
    UnsupportedOperation,
};
