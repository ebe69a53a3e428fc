//! The capability contracts implemented by the collections of this crate, along with the
//! [`HashCode`] rules that equal collections agree on.

mod collection;
mod hash_code;
mod map;
mod sequence;
mod set;

pub use collection::*;
pub use hash_code::*;
pub use map::*;
pub use sequence::*;
pub use set::*;
