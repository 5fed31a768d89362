//! The contextual error entity.
//!
//! [`AppError`] binds an underlying error to a human message, an HTTP-style
//! status code, a report flag and the stack trace captured when the error
//! first entered the library. Instances are value-semantic: every re-wrap
//! through [`wrap`](crate::wrap) clones the entity before touching it, so
//! earlier holders always observe a stable snapshot. `Clone` is cheap: the
//! underlying error and the trace are shared behind `Arc`s.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::types::{Annotation, StackTrace};

/// An error annotated with application context.
///
/// Produced by [`new`](crate::new), [`errorf!`](crate::errorf),
/// [`wrap`](crate::wrap) and the [`ResultExt`](crate::traits::ResultExt)
/// adapters. Downstream consumers read it back with
/// [`unwrap`](crate::unwrap).
///
/// # Examples
///
/// ```
/// use failsite::{wrap_with, with_status_code};
///
/// let err = wrap_with(std::io::Error::other("boom"), [with_status_code(500)]);
/// assert_eq!(err.status_code(), Some(500));
/// assert_eq!(err.to_string(), "boom");
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    /// The error as first received; never an `AppError` itself.
    origin: Arc<dyn StdError + Send + Sync + 'static>,
    message: String,
    status_code: Option<u32>,
    report: bool,
    trace: StackTrace,
}

impl AppError {
    pub(crate) fn from_origin(
        origin: Arc<dyn StdError + Send + Sync + 'static>,
        message: String,
        trace: StackTrace,
    ) -> Self {
        Self {
            origin,
            message,
            status_code: None,
            report: false,
            trace,
        }
    }

    /// The root cause: the innermost error below the origin's source chain.
    pub fn root(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = &*self.origin;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    /// The annotated message; empty when no message was set.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The annotated status code, if any.
    #[inline]
    pub fn status_code(&self) -> Option<u32> {
        self.status_code
    }

    /// Whether this error was marked for reporting.
    #[inline]
    pub fn report(&self) -> bool {
        self.report
    }

    /// The stack captured when the root first entered the library.
    ///
    /// Set exactly once per distinct root; re-wrapping shares the same
    /// frames rather than recapturing at the re-wrap site.
    #[inline]
    pub fn stack_trace(&self) -> &StackTrace {
        &self.trace
    }

    pub(crate) fn apply(&mut self, annotation: Annotation) {
        match annotation {
            Annotation::Message(text) => self.message = text,
            Annotation::StatusCode(code) => self.status_code = Some(code),
            Annotation::Report => self.report = true,
        }
    }
}

impl fmt::Display for AppError {
    /// Renders the message, falling back to the root's text when no message
    /// was set. The alternate form (`{:#}`) appends the captured stack.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.root())?;
        } else {
            f.write_str(&self.message)?;
        }
        if f.alternate() && !self.trace.is_empty() {
            write!(f, "\n{}", self.trace)?;
        }
        Ok(())
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let origin: &(dyn StdError + 'static) = &*self.origin;
        Some(origin)
    }
}
