use failsite::{StackTrace, MAX_FRAMES};

#[test]
fn innermost_frame_is_the_caller() {
    let trace = StackTrace::capture(0);
    let innermost = &trace.frames()[0];

    assert_eq!(innermost.func, "innermost_frame_is_the_caller");
    assert_eq!(innermost.file, "tests/stack.rs");
    assert!(innermost.line > 0);
}

#[test]
fn skip_drops_entry_frames() {
    // Entry-point helpers capture with skip = 1 so they report their own
    // caller; an off-by-one here is exactly the regression this pins.
    fn capture_for_caller() -> StackTrace {
        StackTrace::capture(1)
    }

    let trace = capture_for_caller();
    assert_eq!(trace.frames()[0].func, "skip_drops_entry_frames");
}

#[test]
fn capture_is_capped() {
    fn recurse(depth: usize) -> StackTrace {
        if depth == 0 {
            StackTrace::capture(0)
        } else {
            recurse(depth - 1)
        }
    }

    let trace = recurse(MAX_FRAMES + 8);
    assert_eq!(trace.len(), MAX_FRAMES);
    assert!(trace.frames().iter().all(|f| f.func.contains("recurse")));
}

#[test]
fn frames_are_ordered_innermost_first() {
    fn inner() -> StackTrace {
        StackTrace::capture(0)
    }

    fn outer() -> StackTrace {
        inner()
    }

    let trace = outer();
    let names: Vec<&str> = trace.frames().iter().map(|f| f.func.as_str()).collect();
    let inner_at = names.iter().position(|n| *n == "inner").expect("inner frame");
    let outer_at = names.iter().position(|n| *n == "outer").expect("outer frame");
    assert!(inner_at < outer_at);
}

#[test]
fn trace_equality_is_frame_wise() {
    let a = StackTrace::capture(0);
    let b = a.clone();
    assert_eq!(a, b);

    let c = StackTrace::capture(0);
    // Same function, different line: different trace.
    assert_ne!(a, c);
}

#[test]
fn empty_trace_is_valid() {
    let empty = StackTrace::default();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.to_string(), "");
}

#[test]
fn display_renders_one_line_per_frame() {
    fn capture_here() -> StackTrace {
        StackTrace::capture(0)
    }

    let trace = capture_here();
    let rendered = trace.to_string();
    let first_line = rendered.lines().next().expect("at least one frame");
    assert!(first_line.starts_with("at capture_here (tests/stack.rs:"));
}
