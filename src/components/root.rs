use marklee::runtime::{BlockNode, Element, Scope, TextNode};

pub fn root(scope: &Scope<'_>) -> Element {
    let theme = scope.styles().root();
    let heading = theme.text("heading").unwrap_or("marklee").to_string();
    BlockNode::new(Element::vstack(vec![
        TextNode::new(heading).id("heading").into(),
        TextNode::new("Mounted on #app.").class("muted").into(),
        TextNode::new("Press q or Esc to exit.").class("hint").into(),
    ]))
    .id("shell")
    .into()
}
