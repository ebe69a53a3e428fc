//! A module containing [`DynamicArraySequence`] and associated types.
//!
//! The other included types are [`CursorMut`] for bidirectional editing and [`IntoIter`] for owned
//! iteration. [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`]
//! are used for borrowed iteration.

mod cursor;
mod dynamic_array_sequence;
mod iter;

pub use cursor::*;
pub use dynamic_array_sequence::*;
pub use iter::*;
