//! Entry points: constructors, the wrap engine and the unwrap accessor.
//!
//! `wrap` turns any error into an [`AppError`] exactly once: a foreign
//! error has its cause chain extracted and a stack captured, while an
//! error that is already contextual is only cloned and re-annotated,
//! O(1) regardless of how deep the original chain was.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::chain;
use crate::types::{Annotation, AnnotationVec, AppError, BoxError, StackTrace};

/// Root type backing errors created from bare text.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct MessageError(String);

/// Creates a contextual error from a message, capturing the caller's
/// stack.
///
/// # Examples
///
/// ```
/// let err = failsite::new("user not found");
/// assert_eq!(err.to_string(), "user not found");
/// assert!(!err.stack_trace().is_empty());
/// ```
pub fn new(text: impl Into<String>) -> AppError {
    AppError::from_origin(
        Arc::new(MessageError(text.into())),
        String::new(),
        StackTrace::capture(1),
    )
}

/// Wraps an error without annotations.
///
/// Idempotent: wrapping an [`AppError`] clones it, keeping the originally
/// captured stack rather than recapturing at this call site.
///
/// # Examples
///
/// ```
/// let io_err = std::io::Error::other("disk full");
/// let err = failsite::wrap(io_err);
/// assert_eq!(err.to_string(), "disk full");
/// assert!(err.message().is_empty());
/// ```
pub fn wrap<E>(err: E) -> AppError
where
    E: Into<BoxError>,
{
    wrap_with_skip(err.into(), AnnotationVec::new(), 1)
}

/// Wraps an error, applying annotations in call order.
///
/// On a per-field basis the last annotation wins; fields no annotation
/// touches keep the value carried over from an already-contextual input.
///
/// # Examples
///
/// ```
/// use failsite::{wrap_with, with_message, with_status_code};
///
/// let err = wrap_with(
///     std::io::Error::other("no row"),
///     [with_message("loading user 42"), with_status_code(404)],
/// );
/// assert_eq!(err.to_string(), "loading user 42");
/// assert_eq!(err.status_code(), Some(404));
/// ```
pub fn wrap_with<E, A>(err: E, annotations: A) -> AppError
where
    E: Into<BoxError>,
    A: IntoIterator<Item = Annotation>,
{
    wrap_with_skip(err.into(), annotations.into_iter().collect(), 1)
}

/// Extracts the contextual error from a generic error value.
///
/// Exact-type probe: `Some` if and only if the value is an [`AppError`].
/// Cause chains are never walked here: a foreign error whose source is
/// contextual still yields `None`.
///
/// # Examples
///
/// ```
/// let err = failsite::new("boom");
/// assert!(failsite::unwrap(&err).is_some());
///
/// let plain = std::io::Error::other("boom");
/// assert!(failsite::unwrap(&plain).is_none());
/// ```
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a AppError> {
    err.downcast_ref::<AppError>()
}

/// Shared wrap path. `skip` is the number of public entry frames between
/// this function and the caller whose site the trace should report.
#[inline(never)]
pub(crate) fn wrap_with_skip(err: BoxError, annotations: AnnotationVec, skip: usize) -> AppError {
    let foreign = match err.downcast::<AppError>() {
        Ok(existing) => {
            let mut copy = *existing;
            for annotation in annotations {
                copy.apply(annotation);
            }
            return copy;
        }
        Err(err) => err,
    };

    let extracted = chain::extract(&*foreign);
    let mut base = match extracted.contextual {
        Some(existing) => existing,
        None => {
            let trace = match extracted.trace {
                Some(trace) => trace,
                None => StackTrace::capture(skip + 1),
            };
            AppError::from_origin(Arc::from(foreign), extracted.message, trace)
        }
    };

    for annotation in annotations {
        base.apply(annotation);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        error = %base,
        status = base.status_code(),
        frames = base.stack_trace().len(),
        "wrapped foreign error"
    );

    base
}
