use std::path::PathBuf;

use crate::styles::{StyleError, StyleSource};

#[test]
fn embedded_source_parses_in_place() {
    let sheet = StyleSource::Embedded("text { color: red; }")
        .load()
        .expect("embedded css");
    assert_eq!(sheet.rule_count(), 1);
}

#[test]
fn missing_file_reports_path() {
    let path = PathBuf::from("does/not/exist/app.css");
    let err = StyleSource::File(path.clone())
        .load()
        .expect_err("missing stylesheet");
    match err {
        StyleError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn file_source_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("marklee-styles-{}.css", std::process::id()));
    std::fs::write(&path, ":root { color: white; }").expect("write stylesheet");
    let sheet = StyleSource::File(path.clone()).load().expect("load stylesheet");
    std::fs::remove_file(&path).ok();
    assert_eq!(sheet.root().text("color"), Some("white"));
}
