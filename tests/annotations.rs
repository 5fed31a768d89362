use std::error::Error;
use std::fmt;

use failsite::{
    unwrap, with_message, with_report, with_status_code, wrap_with, Annotation,
};

#[derive(Debug)]
struct Bare(&'static str);

impl fmt::Display for Bare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for Bare {}

#[test]
fn constructors_build_expected_variants() {
    assert_eq!(with_message("m"), Annotation::Message("m".into()));
    assert_eq!(with_status_code(404), Annotation::StatusCode(404));
    assert_eq!(with_report(), Annotation::Report);
}

#[test]
fn annotations_apply_in_call_order() {
    let err = wrap_with(
        Bare("original"),
        [with_message("first"), with_message("second")],
    );
    assert_eq!(err.message(), "second");
}

#[test]
fn all_annotations_land() {
    let err = wrap_with(
        Bare("original"),
        [with_message("ctx"), with_status_code(500), with_report()],
    );
    assert_eq!(err.message(), "ctx");
    assert_eq!(err.status_code(), Some(500));
    assert!(err.report());
}

#[test]
fn rewrap_overrides_per_field_and_keeps_snapshots() {
    let e1 = wrap_with(
        Bare("original"),
        [with_message("m1"), with_status_code(400)],
    );
    let e2 = wrap_with(e1.clone(), [with_message("m2")]);

    let found = unwrap(&e2).expect("contextual");
    assert_eq!(found.message(), "m2");
    // Untouched field inherited from the copied-from entity.
    assert_eq!(found.status_code(), Some(400));

    // The earlier holder's snapshot is unaffected.
    let original = unwrap(&e1).expect("contextual");
    assert_eq!(original.message(), "m1");
    assert_eq!(original.status_code(), Some(400));
}

#[test]
fn report_flag_sticks_across_rewraps() {
    let e1 = wrap_with(Bare("original"), [with_report()]);
    let e2 = wrap_with(e1.clone(), [with_status_code(500)]);
    assert!(e2.report());
    assert_eq!(e2.status_code(), Some(500));
}
