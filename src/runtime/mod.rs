mod app;
mod component;
mod element;
mod scope;
#[cfg(test)]
mod tests;
mod view;

pub use app::{App, Lifecycle, MountedApp};
pub use component::{ComponentElement, ComponentFn, ComponentId, component};
pub use element::{Attributes, BlockNode, Element, FlexDirection, FlexNode, TextNode};
pub use ratatui::style::Color;
pub use scope::Scope;
pub use view::{BlockView, FlexView, TextView, View};
