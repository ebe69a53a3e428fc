//! The exactly-sized raw buffer shared by the contiguous and hashed collections.

mod array;
mod tests;

pub(crate) use array::*;
