use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside the valid range for the attempted operation. For reads, updates and
/// removals, the range is `0..len`. For insertions and cursor positioning, it is `0..=len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The requested allocation would exceed [`isize::MAX`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A hash table was constructed with a bucket count of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCapacity {
    pub cap: usize,
}

impl Display for InvalidCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Illegal capacity: {}, a hash table needs at least one bucket!", self.cap)
    }
}

impl Error for InvalidCapacity {}

/// A cursor was asked to modify or remove its current element, but it has none. Either nothing
/// has been returned yet, or the last returned element has already been removed or invalidated by
/// an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoCurrentElement;

impl Display for NoCurrentElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor has no current element to modify!")
    }
}

impl Error for NoCurrentElement {}

/// A contract member that is deliberately left unimplemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedOperation {
    pub operation: &'static str,
}

impl Display for UnsupportedOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation `{}` is not supported!", self.operation)
    }
}

impl Error for UnsupportedOperation {}

/// Any of the errors produced by this crate's collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    InvalidCapacity(InvalidCapacity),
    NoCurrentElement(NoCurrentElement),
    UnsupportedOperation(UnsupportedOperation),
}
