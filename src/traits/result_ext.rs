//! Extension trait for wrapping `Result` errors at the call site.
//!
//! These adapters are the ergonomic front door of the wrap engine: `Ok`
//! values pass through untouched, `Err` values are normalized into
//! [`AppError`] with the caller's call site as the innermost captured
//! frame.
//!
//! # Examples
//!
//! ```
//! use failsite::prelude::*;
//!
//! fn load_config() -> Result<String, AppError> {
//!     std::fs::read_to_string("definitely-missing.toml")
//!         .wrap_message("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.to_string(), "loading configuration");
//! ```

use smallvec::smallvec;

use crate::types::{Annotation, AnnotationVec, AppError, BoxError};
use crate::wrap::wrap_with_skip;

/// Adds contextual wrapping to any `Result` whose error converts to a
/// boxed error.
pub trait ResultExt<T> {
    /// Wraps the error without annotations.
    fn wrap_app(self) -> Result<T, AppError>;

    /// Wraps the error and sets its message.
    fn wrap_message(self, text: impl Into<String>) -> Result<T, AppError>;

    /// Wraps the error and sets its status code.
    fn wrap_status(self, code: u32) -> Result<T, AppError>;

    /// Wraps the error and marks it reportable.
    fn wrap_report(self) -> Result<T, AppError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_app(self) -> Result<T, AppError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_with_skip(err.into(), AnnotationVec::new(), 1)),
        }
    }

    fn wrap_message(self, text: impl Into<String>) -> Result<T, AppError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_with_skip(
                err.into(),
                smallvec![Annotation::Message(text.into())],
                1,
            )),
        }
    }

    fn wrap_status(self, code: u32) -> Result<T, AppError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_with_skip(
                err.into(),
                smallvec![Annotation::StatusCode(code)],
                1,
            )),
        }
    }

    fn wrap_report(self) -> Result<T, AppError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_with_skip(
                err.into(),
                smallvec![Annotation::Report],
                1,
            )),
        }
    }
}
