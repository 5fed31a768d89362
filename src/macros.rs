/// Creates a contextual error from a format string, capturing the caller's
/// stack.
///
/// # Examples
///
/// ```
/// let err = failsite::errorf!("user {} not found", 42);
/// assert_eq!(err.to_string(), "user 42 not found");
/// assert!(!err.stack_trace().is_empty());
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}
