use crate::error::MountError;
use crate::host::{DocumentError, Host, HostDocument, MountTarget};
use crate::runtime::{TextView, View};

const INDEX: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>marklee</title>
  </head>
  <body>
    <!-- <div id="app"></div> lives below -->
    <div id="app"></div>
    <script type="module" src='/src/main.ts'></script>
  </body>
</html>
"#;

fn view(content: &str) -> View {
    View::Text(TextView {
        content: content.to_string(),
        color: None,
        bold: false,
    })
}

#[test]
fn parse_collects_tags_and_ids() {
    let doc = HostDocument::parse(INDEX).expect("parse index");
    assert_eq!(doc.len(), 7);
    assert!(doc.contains("app"));
    assert_eq!(doc.tag("app"), Some("div"));
    assert!(!doc.is_bound("app"));
}

#[test]
fn parse_handles_unquoted_and_self_closing_ids() {
    let doc = HostDocument::parse("<section id=main/><p class='x' ID = 'note'>").expect("parse");
    assert_eq!(doc.tag("main"), Some("section"));
    assert_eq!(doc.tag("note"), Some("p"));
}

#[test]
fn parse_rejects_duplicate_ids() {
    let err = HostDocument::parse(r#"<div id="app"></div><span id="app"></span>"#)
        .expect_err("duplicate id");
    assert_eq!(err, DocumentError::DuplicateId("app".to_string()));
}

#[test]
fn parse_rejects_unterminated_tags() {
    let err = HostDocument::parse("<div></div><div id=\"app\"").expect_err("unterminated");
    assert_eq!(err, DocumentError::UnterminatedTag(11));
}

#[test]
fn quoted_attribute_values_may_contain_angle_brackets() {
    let doc = HostDocument::parse(r#"<input pattern="a>b" id="app"><p title='x > y' id=note>"#)
        .expect("parse");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.tag("app"), Some("input"));
    assert_eq!(doc.tag("note"), Some("p"));
}

#[test]
fn script_and_style_contents_are_not_markup() {
    let markup = r#"<style>#app > p { color: red }</style>
<script>el.innerHTML = '<div id="app"></div>';</SCRIPT>
<div id="app"></div>"#;
    let doc = HostDocument::parse(markup).expect("parse");
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.tag("app"), Some("div"));
}

#[test]
fn unclosed_script_swallows_the_rest_of_the_page() {
    let doc = HostDocument::parse(r#"<script>let x = 1 < 2;<div id="app"></div>"#)
        .expect("parse");
    assert_eq!(doc.len(), 1);
    assert!(!doc.contains("app"));
}

#[test]
fn attach_binds_once() {
    let mut doc = HostDocument::parse(INDEX).expect("parse index");
    let target = MountTarget::parse("#app").expect("target");

    doc.attach(&target, &view("first")).expect("first attach");
    let err = doc
        .attach(&target, &view("second"))
        .expect_err("second attach");

    assert!(matches!(err, MountError::MountTargetOccupied(_)));
    assert_eq!(doc.mounted("app"), Some(&view("first")));
}

#[test]
fn attach_to_unknown_id_reports_missing_target() {
    let mut doc = HostDocument::new();
    let target = MountTarget::parse("app").expect("target");
    let err = doc.attach(&target, &view("x")).expect_err("missing");
    assert_eq!(
        err.to_string(),
        "mount target `#app` does not exist in the host document"
    );
}
