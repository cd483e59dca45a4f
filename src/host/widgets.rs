use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::runtime::{BlockView, FlexDirection, FlexView, TextView, View};

pub(crate) fn render_view(frame: &mut Frame<'_>, area: Rect, view: &View) {
    match view {
        View::Empty => {}
        View::Text(text) => render_text(frame, area, text),
        View::Flex(flex) => render_flex(frame, area, flex),
        View::Block(block) => render_block(frame, area, block),
    }
}

fn render_text(frame: &mut Frame<'_>, area: Rect, view: &TextView) {
    let mut style = Style::default().fg(view.color.unwrap_or(Color::White));
    if view.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    let widget = Paragraph::new(Line::from(view.content.as_str()))
        .style(style)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_flex(frame: &mut Frame<'_>, area: Rect, view: &FlexView) {
    if view.children.is_empty() {
        return;
    }
    let count = view.children.len() as u32;
    let chunks = Layout::default()
        .direction(Direction::from(view.direction))
        .constraints(vec![Constraint::Ratio(1, count); view.children.len()])
        .split(area);
    for (child, rect) in view.children.iter().zip(chunks.iter()) {
        render_view(frame, *rect, child);
    }
}

fn render_block(frame: &mut Frame<'_>, area: Rect, view: &BlockView) {
    let mut widget = Block::default().borders(Borders::ALL);
    if let Some(color) = view.border_color {
        widget = widget.border_style(Style::default().fg(color));
    }
    if let Some(title) = &view.title {
        widget = widget.title(title.as_str());
    }
    let inner = widget.inner(area);
    frame.render_widget(widget, area);
    if let Some(child) = &view.child {
        render_view(frame, inner, child);
    }
}

impl From<FlexDirection> for Direction {
    fn from(value: FlexDirection) -> Self {
        match value {
            FlexDirection::Row => Direction::Horizontal,
            FlexDirection::Column => Direction::Vertical,
        }
    }
}
