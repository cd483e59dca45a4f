use crate::styles::{StyleError, Stylesheet};

#[test]
fn parse_fails_when_selector_repeats_id_segment() {
    let css = "text#title#again { color: red; }";
    let err = Stylesheet::parse(css).expect_err("expected duplicate id failure");
    assert!(matches!(
        err,
        StyleError::DuplicateSegment { segment: "id", .. }
    ));
    assert!(err.to_string().contains("already has id"));
}

#[test]
fn parse_fails_on_selector_without_segments() {
    let err = Stylesheet::parse("#. { color: red; }").expect_err("expected empty selector");
    assert!(matches!(err, StyleError::EmptySelector));
}

#[test]
fn repeated_class_segments_collapse() {
    let sheet = Stylesheet::parse(".accent.accent { color: blue; }").expect("parse css");
    assert_eq!(sheet.rule_count(), 1);
}
