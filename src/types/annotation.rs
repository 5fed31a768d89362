//! Composable annotations applied by the wrap engine.

/// A single mutation over a pending [`AppError`](crate::AppError).
///
/// Built via [`with_message`], [`with_status_code`] and [`with_report`],
/// and applied in call order by [`wrap_with`](crate::wrap_with); on a
/// per-field basis the last annotation wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Message(String),
    StatusCode(u32),
    Report,
}

/// Annotates with a human-readable message.
#[inline]
pub fn with_message(text: impl Into<String>) -> Annotation {
    Annotation::Message(text.into())
}

/// Annotates with an HTTP-style status code.
#[inline]
pub fn with_status_code(code: u32) -> Annotation {
    Annotation::StatusCode(code)
}

/// Marks the error as reportable.
#[inline]
pub fn with_report() -> Annotation {
    Annotation::Report
}
