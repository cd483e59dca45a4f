use std::path::PathBuf;

use tracing::debug;

use super::{StyleError, Stylesheet};

/// Where the application stylesheet comes from.
///
/// Loading is an explicit step of the bootstrap sequence, so a source that
/// fails to read or parse stops startup before anything is constructed.
#[derive(Clone, Debug)]
pub enum StyleSource {
    /// Compiled into the binary, usually through `include_str!`.
    Embedded(&'static str),
    Inline(String),
    File(PathBuf),
}

impl StyleSource {
    pub fn load(&self) -> Result<Stylesheet, StyleError> {
        let sheet = match self {
            StyleSource::Embedded(css) => Stylesheet::parse(css)?,
            StyleSource::Inline(css) => Stylesheet::parse(css)?,
            StyleSource::File(path) => Stylesheet::from_file(path)?,
        };
        debug!(source = %self.describe(), rules = sheet.rule_count(), "stylesheet loaded");
        Ok(sheet)
    }

    pub fn describe(&self) -> String {
        match self {
            StyleSource::Embedded(_) => "embedded".to_string(),
            StyleSource::Inline(_) => "inline".to_string(),
            StyleSource::File(path) => path.display().to_string(),
        }
    }
}

impl Default for StyleSource {
    fn default() -> Self {
        StyleSource::Embedded("")
    }
}
