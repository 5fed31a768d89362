//! Annotate errors with application context (a message, an HTTP-style
//! status code and a "should be reported" flag) while transparently
//! capturing the call stack at the point an error first enters the
//! library.
//!
//! Wrapping is idempotent: the first [`wrap`] of a foreign error walks its
//! cause chain to the root, recovers any stack a [`Traceable`] error
//! recorded along the way (capturing a fresh one otherwise), and builds an
//! [`AppError`]. Every later wrap only clones that entity and applies the
//! new annotations, so the originally captured stack survives and earlier
//! holders keep an unchanged snapshot.
//!
//! # Examples
//!
//! ## Annotating an error
//!
//! ```
//! use failsite::{unwrap, wrap_with, with_message, with_status_code};
//!
//! let io_err = std::io::Error::other("connection refused");
//! let err = wrap_with(io_err, [with_message("fetching profile"), with_status_code(502)]);
//!
//! assert_eq!(err.to_string(), "fetching profile");
//! assert_eq!(err.status_code(), Some(502));
//! assert!(!err.stack_trace().is_empty());
//!
//! // Downstream, e.g. in an HTTP layer:
//! let found = unwrap(&err).expect("contextual");
//! assert_eq!(found.status_code(), Some(502));
//! ```
//!
//! ## Wrapping `Result` values
//!
//! ```
//! use failsite::prelude::*;
//!
//! fn load() -> Result<String, AppError> {
//!     std::fs::read_to_string("definitely-missing.toml")
//!         .wrap_message("loading configuration")
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.to_string(), "loading configuration");
//! assert!(!err.root().to_string().is_empty());
//! ```
//!
//! ## Re-wrapping keeps the original snapshot
//!
//! ```
//! use failsite::{wrap_with, with_message};
//!
//! let first = wrap_with(std::io::Error::other("boom"), [with_message("m1")]);
//! let second = wrap_with(first.clone(), [with_message("m2")]);
//!
//! assert_eq!(first.message(), "m1");
//! assert_eq!(second.message(), "m2");
//! assert_eq!(first.stack_trace(), second.stack_trace());
//! ```

/// Interop with foreign cause chains and captured stacks.
pub mod chain;
/// Error creation macros.
pub mod macros;
/// Convenience re-exports for quick starts.
pub mod prelude;
/// Extension traits.
pub mod traits;
/// Core types: the error entity, annotations and stack traces.
pub mod types;

mod wrap;

pub use chain::{register_traceable, Traceable};
pub use traits::ResultExt;
pub use types::{
    with_message, with_report, with_status_code, Annotation, AppError, BoxError, Frame, StackTrace,
    MAX_FRAMES,
};
pub use wrap::{new, unwrap, wrap, wrap_with};
