use ratatui::style::Color;

use super::element::FlexDirection;

/// Styled, fully resolved tree handed to a host at attach time.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Empty,
    Text(TextView),
    Flex(FlexView),
    Block(BlockView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextView {
    pub content: String,
    pub color: Option<Color>,
    pub bold: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlexView {
    pub direction: FlexDirection,
    pub children: Vec<View>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockView {
    pub title: Option<String>,
    pub border_color: Option<Color>,
    pub child: Option<Box<View>>,
}

impl View {
    /// Concatenated text content, depth first. Handy for hosts without a screen.
    pub fn text_content(&self) -> String {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out.join("\n")
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            View::Empty => {}
            View::Text(text) => out.push(&text.content),
            View::Flex(flex) => flex.children.iter().for_each(|child| child.collect_text(out)),
            View::Block(block) => {
                if let Some(child) = &block.child {
                    child.collect_text(out);
                }
            }
        }
    }
}
