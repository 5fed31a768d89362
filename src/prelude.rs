//! Convenience re-exports for quick starts.
//!
//! ```
//! use failsite::prelude::*;
//!
//! let err: Result<(), AppError> =
//!     Err("boom").wrap_message("running job");
//! assert!(err.is_err());
//! ```

pub use crate::chain::{register_traceable, Traceable};
pub use crate::traits::ResultExt;
pub use crate::types::{
    with_message, with_report, with_status_code, Annotation, AppError, BoxError, Frame, StackTrace,
};
pub use crate::wrap::{new, unwrap, wrap, wrap_with};
pub use crate::errorf;
