pub mod bootstrap;
pub mod error;
pub mod events;
pub mod host;
pub mod modules;
pub mod runtime;
pub mod styles;

pub use bootstrap::{Bootstrap, BootstrapConfig};
pub use error::{BootstrapError, MountError};
pub use host::{Host, HostDocument, MountTarget, TerminalHost};
pub use modules::ModuleRegistry;
pub use runtime::{
    App, BlockNode, Color, ComponentElement, Element, Lifecycle, MountedApp, Scope, TextNode,
    View, component,
};
pub use styles::{ComputedStyle, StyleQuery, StyleSource, Stylesheet};
