//! Traits that form the crate's extension seams.
//!
//! - [`ResultExt`]: call-site wrapping for `Result` values.
//! - [`Traceable`](crate::Traceable) lives in [`crate::chain`] next to the
//!   extraction machinery it feeds.

pub mod result_ext;

pub use result_ext::ResultExt;
