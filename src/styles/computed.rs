use std::collections::HashMap;

use ratatui::style::Color;

use super::parser::parse_color;

/// Declarations that survived the cascade for one query.
#[derive(Clone, Debug, Default)]
pub struct ComputedStyle {
    props: HashMap<String, String>,
}

impl ComputedStyle {
    pub(crate) fn from_props(props: HashMap<String, String>) -> Self {
        Self { props }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        self.get(name).and_then(parse_color)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)?.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    pub fn u16(&self, name: &str) -> Option<u16> {
        self.get(name)?.trim().parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}
