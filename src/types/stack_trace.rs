//! Portable stack traces captured at the point an error enters the library.
//!
//! A [`StackTrace`] is an ordered run of [`Frame`]s, innermost call first,
//! capped at [`MAX_FRAMES`]. Frames hold the unqualified function name, the
//! source path relative to its source root, and a 1-based line number.
//! Capture walks the live call stack with the `backtrace` crate and resolves
//! each frame's symbol; frames without symbol information are dropped rather
//! than padded with placeholders.
//!
//! The frame list is shared behind an `Arc`, so cloning a trace (which
//! happens on every re-wrap of a contextual error) never copies or
//! recaptures frames.
//!
//! # Examples
//!
//! ```
//! use failsite::StackTrace;
//!
//! let trace = StackTrace::capture(0);
//! assert!(!trace.is_empty());
//! let innermost = &trace.frames()[0];
//! assert!(innermost.line > 0);
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use smallvec::SmallVec;

/// Upper bound on captured frames per trace.
pub const MAX_FRAMES: usize = 32;

/// One resolved stack frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Unqualified function name, receiver form kept intact.
    pub func: String,
    /// Source path relative to its source root.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {} ({}:{})", self.func, self.file, self.line)
    }
}

/// Ordered stack frames, innermost call first.
#[derive(Debug, Clone)]
pub struct StackTrace {
    frames: Arc<[Frame]>,
}

impl StackTrace {
    /// Captures the current call stack.
    ///
    /// With `skip = 0` the innermost reported frame is the direct caller of
    /// `capture`; each additional skip drops one more caller frame. The
    /// library's own capture machinery and the unwinder internals are never
    /// reported regardless of `skip`.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let mut frames: SmallVec<[Frame; MAX_FRAMES]> = SmallVec::new();
        let mut pending_skip = skip;
        let mut in_prelude = true;

        backtrace::trace(|raw_frame| {
            let mut symbol_name: Option<String> = None;
            let mut resolved: Option<Frame> = None;

            backtrace::resolve_frame(raw_frame, |symbol| {
                if symbol_name.is_some() {
                    return;
                }
                let name = match symbol.name() {
                    Some(name) => name.to_string(),
                    None => return,
                };
                if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
                    resolved = Some(Frame {
                        func: short_func_name(&name),
                        file: trim_source_path(file),
                        line,
                    });
                }
                symbol_name = Some(name);
            });

            // No symbol information: drop the frame entirely.
            let name = match symbol_name {
                Some(name) => name,
                None => return true,
            };

            if in_prelude {
                if is_capture_internal(&name) {
                    return true;
                }
                in_prelude = false;
            }

            if pending_skip > 0 {
                pending_skip -= 1;
                return true;
            }

            if let Some(frame) = resolved {
                frames.push(frame);
            }
            frames.len() < MAX_FRAMES
        });

        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Builds a trace from pre-resolved frames, e.g. inside a
    /// [`Traceable`](crate::Traceable) implementation.
    pub fn from_frames<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Frame>,
    {
        Self {
            frames: frames.into_iter().take(MAX_FRAMES).collect(),
        }
    }

    /// The frames, innermost call first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of captured frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when no frames were captured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates the frames, innermost call first.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl Default for StackTrace {
    fn default() -> Self {
        Self {
            frames: Vec::new().into(),
        }
    }
}

impl PartialEq for StackTrace {
    fn eq(&self, other: &Self) -> bool {
        self.frames() == other.frames()
    }
}

impl Eq for StackTrace {}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", frame)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StackTrace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.frames.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StackTrace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let frames = Vec::<Frame>::deserialize(deserializer)?;
        Ok(Self {
            frames: frames.into(),
        })
    }
}

/// Frames below the caller of `capture` that must never be reported:
/// the unwinder itself and the capture machinery.
fn is_capture_internal(symbol: &str) -> bool {
    symbol.starts_with("backtrace::") || symbol.contains("StackTrace::capture")
}

/// Strips the module path from a demangled symbol, keeping an
/// angle-bracketed receiver segment (`<T as Trait>::method`) intact and
/// keeping the parent of a trailing `{{closure}}` marker.
fn short_func_name(symbol: &str) -> String {
    let name = strip_symbol_hash(symbol);
    let parts = split_symbol_path(name);
    let mut start = parts.len() - 1;
    while start > 0 && parts[start] == "{{closure}}" {
        start -= 1;
    }
    if start > 0 && parts[start - 1].starts_with('<') {
        start -= 1;
    }
    parts[start..].join("::")
}

/// Removes the trailing `::h<16 hex>` disambiguator rustc appends to
/// mangled symbols, if present.
fn strip_symbol_hash(symbol: &str) -> &str {
    if let Some(pos) = symbol.rfind("::h") {
        let tail = &symbol[pos + 3..];
        if tail.len() == 16 && tail.bytes().all(|b| b.is_ascii_hexdigit()) {
            return &symbol[..pos];
        }
    }
    symbol
}

/// Splits a symbol path on `::`, ignoring separators inside angle brackets
/// so qualified receivers stay in one segment.
fn split_symbol_path(symbol: &str) -> Vec<&str> {
    let bytes = symbol.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && i + 1 < bytes.len() && bytes[i + 1] == b':' => {
                parts.push(&symbol[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&symbol[start..]);
    parts
}

/// Trims an absolute source path down to its source root, so traces carry
/// `src/lib.rs` rather than a machine-specific prefix.
fn trim_source_path(path: &Path) -> String {
    const SOURCE_ROOTS: [&str; 4] = ["src", "tests", "benches", "examples"];

    let parts: Vec<String> = path
        .components()
        .filter(|c| matches!(c, std::path::Component::Normal(_)))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let root = parts
        .iter()
        .rposition(|part| SOURCE_ROOTS.contains(&part.as_str()));

    match root {
        Some(i) => parts[i..].join("/"),
        None => parts.join("/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbol_hash() {
        assert_eq!(
            strip_symbol_hash("failsite::wrap::h0123456789abcdef"),
            "failsite::wrap"
        );
        // Not a hash: wrong length.
        assert_eq!(strip_symbol_hash("failsite::habc"), "failsite::habc");
        assert_eq!(strip_symbol_hash("plain"), "plain");
    }

    #[test]
    fn plain_path_keeps_last_segment() {
        assert_eq!(short_func_name("failsite::wrap::wrap_with"), "wrap_with");
        assert_eq!(short_func_name("main"), "main");
    }

    #[test]
    fn method_receiver_is_stripped() {
        assert_eq!(short_func_name("app::config::Config::load"), "load");
    }

    #[test]
    fn bracketed_receiver_is_kept() {
        assert_eq!(
            short_func_name("<app::Config as core::fmt::Display>::fmt"),
            "<app::Config as core::fmt::Display>::fmt"
        );
    }

    #[test]
    fn closure_keeps_parent() {
        assert_eq!(
            short_func_name("stack::deep_call::{{closure}}::h0123456789abcdef"),
            "deep_call::{{closure}}"
        );
    }

    #[test]
    fn source_path_trimmed_to_root() {
        assert_eq!(
            trim_source_path(Path::new("/home/user/project/src/types/stack_trace.rs")),
            "src/types/stack_trace.rs"
        );
        assert_eq!(
            trim_source_path(Path::new("/home/user/project/tests/wrap.rs")),
            "tests/wrap.rs"
        );
        // Path without a recognizable root is left as-is.
        assert_eq!(trim_source_path(Path::new("weird/file.rs")), "weird/file.rs");
    }

    #[test]
    fn from_frames_caps_length() {
        let frames = (0..MAX_FRAMES + 10).map(|i| Frame {
            func: format!("f{i}"),
            file: "src/lib.rs".into(),
            line: i as u32 + 1,
        });
        let trace = StackTrace::from_frames(frames);
        assert_eq!(trace.len(), MAX_FRAMES);
    }

    #[test]
    fn frame_display() {
        let frame = Frame {
            func: "load".into(),
            file: "src/config.rs".into(),
            line: 42,
        };
        assert_eq!(frame.to_string(), "at load (src/config.rs:42)");
    }
}
