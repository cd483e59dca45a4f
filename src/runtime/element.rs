use ratatui::style::Color;

use super::component::ComponentElement;

/// Declarative UI tree produced by components.
#[derive(Clone, Debug)]
pub enum Element {
    Empty,
    Text(TextNode),
    Flex(FlexNode),
    Block(BlockNode),
    Fragment(Vec<Element>),
    Component(ComponentElement),
}

/// Stylesheet hooks shared by every styled node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Attributes {
    pub(crate) fn class_refs(&self) -> Vec<&str> {
        self.classes.iter().map(String::as_str).collect()
    }
}

#[derive(Clone, Debug)]
pub struct TextNode {
    pub content: String,
    pub color: Option<Color>,
    pub attrs: Attributes,
}

impl TextNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: None,
            attrs: Attributes::default(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.attrs.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attrs.classes.push(class.into());
        self
    }
}

#[derive(Clone, Debug)]
pub struct FlexNode {
    pub direction: FlexDirection,
    pub children: Vec<Element>,
}

#[derive(Clone, Debug)]
pub struct BlockNode {
    pub title: Option<String>,
    pub child: Box<Element>,
    pub border_color: Option<Color>,
    pub attrs: Attributes,
}

impl BlockNode {
    pub fn new(child: Element) -> Self {
        Self {
            title: None,
            child: Box::new(child),
            border_color: None,
            attrs: Attributes::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.attrs.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attrs.classes.push(class.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(TextNode::new(content))
    }

    pub fn vstack(children: Vec<Element>) -> Self {
        Element::Flex(FlexNode {
            direction: FlexDirection::Column,
            children,
        })
    }

    pub fn hstack(children: Vec<Element>) -> Self {
        Element::Flex(FlexNode {
            direction: FlexDirection::Row,
            children,
        })
    }

    pub fn block(title: impl Into<String>, child: Element) -> Self {
        Element::Block(BlockNode::new(child).title(title))
    }

    pub fn fragment(children: Vec<Element>) -> Self {
        Element::Fragment(children)
    }
}

impl From<TextNode> for Element {
    fn from(value: TextNode) -> Self {
        Element::Text(value)
    }
}

impl From<BlockNode> for Element {
    fn from(value: BlockNode) -> Self {
        Element::Block(value)
    }
}
