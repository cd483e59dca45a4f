use crate::styles::{ComputedStyle, StyleQuery, Stylesheet};

use super::component::ComponentId;

/// What a component sees while it renders.
pub struct Scope<'a> {
    component_id: ComponentId,
    styles: &'a Stylesheet,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(component_id: ComponentId, styles: &'a Stylesheet) -> Self {
        Self {
            component_id,
            styles,
        }
    }

    pub fn component_id(&self) -> &ComponentId {
        &self.component_id
    }

    pub fn styles(&self) -> &Stylesheet {
        self.styles
    }

    pub fn style(&self, query: StyleQuery<'_>) -> ComputedStyle {
        self.styles.query(query)
    }
}
