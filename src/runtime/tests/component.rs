use crate::runtime::{ComponentId, Element, component};

#[test]
fn component_id_joins_path_key_and_name() {
    assert_eq!(ComponentId::new(&[0, 2, 1], "Row", None).to_string(), "0.2.1:Row");
    assert_eq!(
        ComponentId::new(&[0], "Row", Some("intro")).to_string(),
        "0#intro:Row"
    );
}

#[test]
fn component_converts_into_element() {
    let root = component("Root", |_| Element::Empty).key("main");
    assert_eq!(root.name(), "Root");
    assert!(matches!(Element::from(root), Element::Component(_)));
}
