//! A module containing [`ChainedHashTable`] and associated types.
//!
//! The other included types are the [`Entry`] stored for each key, the [`KeySet`],
//! [`ValueCollection`] and [`EntrySet`] views with their mutable counterparts, [`CursorMut`] for
//! removal during traversal, and several iterators.

mod chained_hash_table;
mod cursor;
mod entry;
mod iter;
mod tests;
mod view;

pub use chained_hash_table::*;
pub use cursor::*;
pub use entry::Entry;
pub(crate) use entry::{Chain, drop_chain, seek};
pub use iter::*;
pub use view::*;
