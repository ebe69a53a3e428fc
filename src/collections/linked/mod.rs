//! A module containing [`LinkedSequence`] and associated types.
//!
//! The other included types are [`CursorMut`] for bidirectional editing, and [`Iter`], [`IterMut`]
//! and [`IntoIter`] for iteration.

mod cursor;
mod iter;
mod linked_sequence;
mod node;
mod tests;

pub use cursor::*;
pub use iter::*;
pub use linked_sequence::*;
pub(crate) use node::*;
