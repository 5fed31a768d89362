//! Core types: the contextual error entity, annotations and stack traces.
//!
//! # Examples
//!
//! ```
//! use failsite::{wrap_with, with_message, with_status_code, with_report};
//!
//! let err = wrap_with(
//!     std::io::Error::other("connection refused"),
//!     [with_message("loading profile"), with_status_code(502), with_report()],
//! );
//!
//! assert_eq!(err.to_string(), "loading profile");
//! assert_eq!(err.status_code(), Some(502));
//! assert!(err.report());
//! ```

use smallvec::SmallVec;

pub mod annotation;
pub mod app_error;
pub mod stack_trace;

pub use annotation::{with_message, with_report, with_status_code, Annotation};
pub use app_error::AppError;
pub use stack_trace::{Frame, StackTrace, MAX_FRAMES};

/// Boxed error the wrap engine accepts from callers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// SmallVec-backed list of pending annotations.
///
/// Inline storage covers the common case of a handful of annotations per
/// wrap call without touching the heap.
pub(crate) type AnnotationVec = SmallVec<[Annotation; 4]>;
