//! Interop with errors produced outside this library.
//!
//! Two optional capabilities are recognized on foreign errors:
//!
//! - **cause chain**: [`std::error::Error::source`], walked down to the
//!   root cause;
//! - **captured stack**: the [`Traceable`] trait, for error types that
//!   recorded a [`StackTrace`] of their own when they were created.
//!
//! Rust trait objects cannot be probed for a second trait, so Traceable
//! types must be announced once via [`register_traceable`]; the extractor
//! then recognizes them anywhere on a cause chain by downcast. Registration
//! is typically done at startup, and registering the same type twice is
//! harmless.
//!
//! # Examples
//!
//! ```
//! use std::fmt;
//! use failsite::{register_traceable, wrap, StackTrace, Traceable};
//!
//! #[derive(Debug)]
//! struct TracedIo {
//!     inner: std::io::Error,
//!     trace: StackTrace,
//! }
//!
//! impl fmt::Display for TracedIo {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "io: {}", self.inner)
//!     }
//! }
//!
//! impl std::error::Error for TracedIo {
//!     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
//!         Some(&self.inner)
//!     }
//! }
//!
//! impl Traceable for TracedIo {
//!     fn stack_trace(&self) -> StackTrace {
//!         self.trace.clone()
//!     }
//! }
//!
//! register_traceable::<TracedIo>();
//!
//! let err = TracedIo {
//!     inner: std::io::Error::other("boom"),
//!     trace: StackTrace::capture(0),
//! };
//! let wrapped = wrap(err);
//!
//! // The stack recorded by TracedIo survives the wrap.
//! assert!(!wrapped.stack_trace().is_empty());
//! assert_eq!(wrapped.message(), "io: boom");
//! assert_eq!(wrapped.root().to_string(), "boom");
//! ```

use std::error::Error as StdError;
use std::sync::{PoisonError, RwLock};

use crate::types::{AppError, StackTrace};

/// Capability of an error type that captured its own call stack.
pub trait Traceable {
    /// The stack recorded when this error was created.
    fn stack_trace(&self) -> StackTrace;
}

type TraceProbe = fn(&(dyn StdError + 'static)) -> Option<StackTrace>;

static TRACE_PROBES: RwLock<Vec<TraceProbe>> = RwLock::new(Vec::new());

/// Makes the extractor recognize `E`'s captured stacks on cause chains.
pub fn register_traceable<E>()
where
    E: Traceable + StdError + Send + Sync + 'static,
{
    fn probe<E>(err: &(dyn StdError + 'static)) -> Option<StackTrace>
    where
        E: Traceable + StdError + Send + Sync + 'static,
    {
        err.downcast_ref::<E>().map(Traceable::stack_trace)
    }

    TRACE_PROBES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(probe::<E>);
}

fn probe_trace(err: &(dyn StdError + 'static)) -> Option<StackTrace> {
    let probes = TRACE_PROBES.read().unwrap_or_else(PoisonError::into_inner);
    probes.iter().find_map(|probe| probe(err))
}

pub(crate) struct Extracted {
    /// Context text added by intermediate layers, empty when the outer
    /// error renders identically to the root.
    pub message: String,
    /// Stack of the deepest Traceable node on the path to the root.
    pub trace: Option<StackTrace>,
    /// A contextual error found on the chain; when present it supersedes
    /// everything else.
    pub contextual: Option<AppError>,
}

/// Walks `err`'s cause chain to the root, recovering any captured stack
/// along the way.
///
/// Every Traceable node overwrites the trace found so far, so the deepest
/// Traceable node on the path wins. Later non-Traceable nodes never clear
/// a previously found trace. A contextual error found on the chain stops
/// the walk; a clone of it is returned so the caller can annotate it
/// without disturbing the original snapshot.
pub(crate) fn extract(err: &(dyn StdError + 'static)) -> Extracted {
    let mut current: &(dyn StdError + 'static) = err;
    let mut trace = None;

    loop {
        if let Some(existing) = current.downcast_ref::<AppError>() {
            return Extracted {
                message: String::new(),
                trace: None,
                contextual: Some(existing.clone()),
            };
        }

        if let Some(found) = probe_trace(current) {
            trace = Some(found);
        }

        match current.source() {
            Some(cause) => current = cause,
            None => break,
        }
    }

    let rendered = err.to_string();
    let message = if rendered != current.to_string() {
        rendered
    } else {
        String::new()
    };

    Extracted {
        message,
        trace,
        contextual: None,
    }
}
