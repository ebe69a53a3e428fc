/// Asserts that running the block panics. With `throws`, also asserts that the panic message is the
/// [`Display`](std::fmt::Display) text of the provided error, as produced by a plain method
/// wrapping its `try_*` form.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "The block should have panicked."
        );
    };
    ($run:block, throws $error:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("The block should have panicked with: {}", $error),
            Err(payload) => assert_eq!(
                payload.downcast_ref::<String>().map(String::as_str),
                Some($error.to_string().as_str()),
                "The panic should carry the error's message."
            ),
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
