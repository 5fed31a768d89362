#![cfg(feature = "serde")]

use failsite::{Frame, StackTrace};

#[test]
fn frame_round_trips_through_json() {
    let frame = Frame {
        func: "load".into(),
        file: "src/config.rs".into(),
        line: 42,
    };

    let json = serde_json::to_string(&frame).expect("serialize");
    assert_eq!(json, r#"{"func":"load","file":"src/config.rs","line":42}"#);

    let back: Frame = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, frame);
}

#[test]
fn stack_trace_serializes_as_frame_sequence() {
    let trace = StackTrace::from_frames([
        Frame {
            func: "inner".into(),
            file: "src/a.rs".into(),
            line: 1,
        },
        Frame {
            func: "outer".into(),
            file: "src/b.rs".into(),
            line: 2,
        },
    ]);

    let json = serde_json::to_string(&trace).expect("serialize");
    let back: StackTrace = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, trace);
    assert_eq!(back.frames()[0].func, "inner");
}

#[test]
fn captured_trace_serializes() {
    let trace = StackTrace::capture(0);
    let json = serde_json::to_string(&trace).expect("serialize");
    assert!(json.contains("captured_trace_serializes"));
}
