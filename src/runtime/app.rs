use std::any::Any;
use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::error::MountError;
use crate::host::{Host, MountTarget};
use crate::modules::ModuleRegistry;
use crate::styles::{StyleQuery, Stylesheet};

use super::component::{ComponentElement, ComponentId};
use super::element::{BlockNode, Element, FlexDirection, TextNode};
use super::scope::Scope;
use super::view::{BlockView, FlexView, TextView, View};

/// Where an application instance is in its startup.
///
/// Transitions only move forward: `Unstarted -> Constructed -> Mounted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Unstarted,
    Constructed,
    Mounted,
}

/// A constructed application that has not been attached yet.
///
/// Construction never touches a host. [`App::mount`] consumes the instance,
/// so an application can be attached at most once.
#[derive(Debug)]
pub struct App {
    name: String,
    root: ComponentElement,
    styles: Arc<Stylesheet>,
    modules: ModuleRegistry,
}

impl App {
    pub fn new(name: impl Into<String>, root: ComponentElement) -> Self {
        let name = name.into();
        trace!(app = %name, root = root.name(), "application constructed");
        Self {
            name,
            root,
            styles: Arc::new(Stylesheet::default()),
            modules: ModuleRegistry::default(),
        }
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.styles = Arc::new(stylesheet);
        self
    }

    pub fn with_modules(mut self, modules: ModuleRegistry) -> Self {
        self.modules = modules;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Lifecycle {
        Lifecycle::Constructed
    }

    pub fn is_mounted(&self) -> bool {
        false
    }

    pub fn styles(&self) -> &Stylesheet {
        &self.styles
    }

    /// Resolves the root component into a styled view without attaching it.
    pub fn render(&self) -> View {
        let mut path = vec![0usize];
        self.render_element(Element::from(self.root.clone()), &mut path)
    }

    /// Renders the root and binds it to `target` in `host`.
    ///
    /// On failure the instance is dropped; nothing is left mounted.
    pub fn mount<H>(self, host: &mut H, target: &MountTarget) -> Result<MountedApp, MountError>
    where
        H: Host + ?Sized,
    {
        let view = self.render();
        debug!(app = %self.name, target = %target, "attaching application");
        if let Err(err) = host.attach(target, &view) {
            warn!(app = %self.name, target = %target, error = %err, "attach failed");
            return Err(err);
        }
        info!(app = %self.name, target = %target, "application mounted");
        Ok(MountedApp {
            app: self,
            target: target.clone(),
            view,
        })
    }

    fn render_element(&self, element: Element, path: &mut Vec<usize>) -> View {
        match element {
            Element::Empty => View::Empty,
            Element::Text(node) => View::Text(self.resolve_text(node)),
            Element::Block(node) => View::Block(self.resolve_block(node, path)),
            Element::Flex(node) => {
                let children = self.render_children(node.children, path);
                if children.is_empty() {
                    View::Empty
                } else {
                    View::Flex(FlexView {
                        direction: node.direction,
                        children,
                    })
                }
            }
            Element::Fragment(children) => {
                let mut views = self.render_children(children, path);
                match views.len() {
                    0 => View::Empty,
                    1 => views.pop().unwrap_or(View::Empty),
                    _ => View::Flex(FlexView {
                        direction: FlexDirection::Column,
                        children: views,
                    }),
                }
            }
            Element::Component(component) => {
                let id = ComponentId::new(path, component.name, component.key.as_deref());
                trace!(component = %id, "rendering component");
                let scope = Scope::new(id, &self.styles);
                let child = (component.render)(&scope);
                self.render_element(child, path)
            }
        }
    }

    fn render_children(&self, children: Vec<Element>, path: &mut Vec<usize>) -> Vec<View> {
        let mut views = Vec::with_capacity(children.len());
        for (index, child) in children.into_iter().enumerate() {
            path.push(index);
            let view = self.render_element(child, path);
            path.pop();
            if view != View::Empty {
                views.push(view);
            }
        }
        views
    }

    fn resolve_text(&self, node: TextNode) -> TextView {
        let classes = node.attrs.class_refs();
        let style = self.styles.query(
            StyleQuery::element("text")
                .with_id(node.attrs.id.as_deref())
                .with_classes(&classes),
        );
        TextView {
            color: node.color.or_else(|| style.color("color")),
            bold: style.bool("bold").unwrap_or(false),
            content: node.content,
        }
    }

    fn resolve_block(&self, node: BlockNode, path: &mut Vec<usize>) -> BlockView {
        let classes = node.attrs.class_refs();
        let style = self.styles.query(
            StyleQuery::element("block")
                .with_id(node.attrs.id.as_deref())
                .with_classes(&classes),
        );
        let title = node
            .title
            .or_else(|| style.text("title").map(str::to_string));
        let border_color = node.border_color.or_else(|| style.color("border-color"));
        path.push(0);
        let child = self.render_element(*node.child, path);
        path.pop();
        BlockView {
            title,
            border_color,
            child: (child != View::Empty).then(|| Box::new(child)),
        }
    }
}

/// The application once it owns its mount target. Terminal state.
#[derive(Debug)]
pub struct MountedApp {
    app: App,
    target: MountTarget,
    view: View,
}

impl MountedApp {
    pub fn name(&self) -> &str {
        self.app.name()
    }

    pub fn target(&self) -> &MountTarget {
        &self.target
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn styles(&self) -> &Stylesheet {
        self.app.styles()
    }

    pub fn status(&self) -> Lifecycle {
        Lifecycle::Mounted
    }

    pub fn is_mounted(&self) -> bool {
        true
    }

    pub fn module<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.app.modules.get::<T>()
    }
}
