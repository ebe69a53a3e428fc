use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

/// Formats the items produced by an iterator as a debug list, allowing a collection's contents to
/// be nested inside a [`debug_struct`](Formatter::debug_struct).
pub struct DebugList<I>(Cell<Option<I>>);

impl<I> DebugList<I> {
    pub const fn new(iter: I) -> DebugList<I> {
        DebugList(Cell::new(Some(iter)))
    }
}

impl<I> Debug for DebugList<I>
where
    I: Iterator,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.take() {
            Some(iter) => f.debug_list().entries(iter).finish(),
            None => write!(f, "[..]"),
        }
    }
}

/// Writes the contained string verbatim when debug formatted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
