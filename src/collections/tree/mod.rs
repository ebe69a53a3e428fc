//! A module containing [`OrderedTreeSet`] and associated types.
//!
//! The other included types are [`CursorMut`] for removal during traversal, and [`Iter`] and
//! [`IntoIter`] for iteration.

mod cursor;
mod iter;
mod node;
mod ordered_tree_set;
mod tests;

pub use cursor::*;
pub use iter::*;
pub(crate) use node::*;
pub use ordered_tree_set::*;
