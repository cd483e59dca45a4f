use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::MountError;
use crate::host::{HostDocument, MountTarget};
use crate::runtime::{
    App, BlockNode, Color, Element, FlexDirection, Lifecycle, TextNode, View, component,
};
use crate::styles::Stylesheet;

fn target(raw: &str) -> MountTarget {
    MountTarget::parse(raw).expect("valid target")
}

#[test]
fn constructing_does_not_render_or_attach() {
    let renders = Arc::new(AtomicUsize::new(0));
    let counter = renders.clone();
    let app = App::new(
        "demo",
        component("Root", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Element::text("hello")
        }),
    );

    assert_eq!(app.status(), Lifecycle::Constructed);
    assert!(!app.is_mounted());
    assert_eq!(renders.load(Ordering::SeqCst), 0);
}

#[test]
fn stylesheet_colors_unstyled_nodes_only() {
    let css = r"
        text { color: green; }
        text.warn { color: red; bold: true; }
        block { border-color: #00f; title: Styled; }
    ";
    let sheet = Stylesheet::parse(css).expect("parse css");
    let app = App::new(
        "demo",
        component("Root", |_| {
            BlockNode::new(Element::vstack(vec![
                Element::text("plain"),
                TextNode::new("warning").class("warn").into(),
                TextNode::new("explicit").color(Color::Yellow).into(),
            ]))
            .into()
        }),
    )
    .with_stylesheet(sheet);

    let View::Block(block) = app.render() else {
        panic!("expected block view");
    };
    assert_eq!(block.title.as_deref(), Some("Styled"));
    assert_eq!(block.border_color, Some(Color::Rgb(0, 0, 255)));
    let Some(View::Flex(flex)) = block.child.as_deref() else {
        panic!("expected flex child");
    };
    assert_eq!(flex.direction, FlexDirection::Column);
    let colors: Vec<_> = flex
        .children
        .iter()
        .map(|child| match child {
            View::Text(text) => (text.color, text.bold),
            other => panic!("unexpected view: {other:?}"),
        })
        .collect();
    assert_eq!(
        colors,
        vec![
            (Some(Color::Green), false),
            (Some(Color::Red), true),
            (Some(Color::Yellow), false),
        ]
    );
}

#[test]
fn nested_components_see_their_path() {
    let app = App::new(
        "demo",
        component("Root", |_| {
            Element::hstack(vec![
                Element::Empty,
                component("Leaf", |scope| Element::text(scope.component_id().to_string())).into(),
            ])
        }),
    );

    // Empty children are dropped, a lone survivor stays inside its flex.
    assert_eq!(app.render().text_content(), "0.1:Leaf");
}

#[test]
fn fragments_collapse_single_children() {
    let app = App::new(
        "demo",
        component("Root", |_| {
            Element::fragment(vec![Element::Empty, Element::text("only")])
        }),
    );
    assert!(matches!(app.render(), View::Text(ref text) if text.content == "only"));
}

#[test]
fn mount_binds_view_to_target() {
    let mut doc = HostDocument::new()
        .with_element("div", Some("app"))
        .expect("insert element");
    let app = App::new("demo", component("Root", |_| Element::text("mounted")));

    let mounted = app.mount(&mut doc, &target("#app")).expect("mount");

    assert!(mounted.is_mounted());
    assert_eq!(mounted.status(), Lifecycle::Mounted);
    assert_eq!(mounted.target().id(), "app");
    assert_eq!(doc.mounted("app"), Some(mounted.view()));
}

#[test]
fn mount_fails_when_target_is_missing() {
    let mut doc = HostDocument::new()
        .with_element("div", Some("root"))
        .expect("insert element");
    let app = App::new("demo", component("Root", |_| Element::text("lost")));

    let err = app.mount(&mut doc, &target("app")).expect_err("missing target");

    assert!(matches!(err, MountError::MountTargetMissing(ref t) if t.id() == "app"));
    assert!(!doc.is_bound("root"));
}
