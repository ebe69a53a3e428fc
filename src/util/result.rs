use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the result of a `try_*` method for its panicking counterpart, using the error's
    /// [`Display`](std::fmt::Display) text as the panic message.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
