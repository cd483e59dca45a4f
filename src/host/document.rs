use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::error::MountError;
use crate::runtime::View;

use super::{Host, MountTarget};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("duplicate element id `{0}`")]
    DuplicateId(String),
    #[error("unterminated tag at byte {0}")]
    UnterminatedTag(usize),
}

/// In-memory host page: tagged elements, each id unique across the document.
#[derive(Clone, Debug, Default)]
pub struct HostDocument {
    nodes: Vec<HostNode>,
    ids: HashMap<String, usize>,
}

#[derive(Clone, Debug)]
struct HostNode {
    tag: String,
    mounted: Option<View>,
}

impl HostDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the opening tags of an HTML-like page, e.g. `<div id="app"></div>`.
    ///
    /// Only element names and `id` attributes are kept. Closing tags,
    /// declarations and comments are skipped, as is the content of
    /// `<script>` and `<style>`. A `>` inside a quoted value does not end a tag.
    pub fn parse(markup: &str) -> Result<Self, DocumentError> {
        let mut doc = Self::new();
        let mut offset = 0usize;
        let mut rest = markup;
        while let Some(start) = rest.find('<') {
            let tail = &rest[start..];
            let (mut consumed, body) = if let Some(comment) = tail.strip_prefix("<!--") {
                let end = comment
                    .find("-->")
                    .ok_or(DocumentError::UnterminatedTag(offset + start))?;
                (start + 4 + end + 3, None)
            } else {
                let end = tag_end(tail).ok_or(DocumentError::UnterminatedTag(offset + start))?;
                (start + end + 1, Some(&tail[1..end]))
            };
            let opening =
                body.filter(|body| !body.trim().is_empty() && !body.starts_with(['/', '!', '?']));
            if let Some(body) = opening {
                let (tag, id) = parse_tag(body);
                doc.insert(&tag, id)?;
                if RAW_TEXT_TAGS.contains(&tag.as_str()) && !body.trim_end().ends_with('/') {
                    consumed += raw_text_len(&rest[consumed..], &tag);
                }
            }
            offset += consumed;
            rest = &rest[consumed..];
        }
        Ok(doc)
    }

    pub fn insert(&mut self, tag: &str, id: Option<&str>) -> Result<(), DocumentError> {
        let index = self.nodes.len();
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            if self.ids.contains_key(id) {
                return Err(DocumentError::DuplicateId(id.to_string()));
            }
            self.ids.insert(id.to_string(), index);
        }
        self.nodes.push(HostNode {
            tag: tag.to_ascii_lowercase(),
            mounted: None,
        });
        Ok(())
    }

    pub fn with_element(mut self, tag: &str, id: Option<&str>) -> Result<Self, DocumentError> {
        self.insert(tag, id)?;
        Ok(self)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    pub fn tag(&self, id: &str) -> Option<&str> {
        self.node(id).map(|node| node.tag.as_str())
    }

    pub fn is_bound(&self, id: &str) -> bool {
        self.mounted(id).is_some()
    }

    pub fn mounted(&self, id: &str) -> Option<&View> {
        self.node(id).and_then(|node| node.mounted.as_ref())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: &str) -> Option<&HostNode> {
        self.ids.get(id).map(|&index| &self.nodes[index])
    }
}

impl Host for HostDocument {
    fn attach(&mut self, target: &MountTarget, view: &View) -> Result<(), MountError> {
        let index = *self
            .ids
            .get(target.id())
            .ok_or_else(|| MountError::MountTargetMissing(target.clone()))?;
        let node = &mut self.nodes[index];
        if node.mounted.is_some() {
            return Err(MountError::MountTargetOccupied(target.clone()));
        }
        node.mounted = Some(view.clone());
        debug!(target = %target, tag = %node.tag, "view bound to document element");
        Ok(())
    }
}

/// Elements whose content is text, never markup.
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// Byte index of the `>` closing the tag at the start of `tail`, skipping
/// quoted attribute values.
fn tag_end(tail: &str) -> Option<usize> {
    let mut pos = 1;
    while pos < tail.len() {
        let rest = &tail[pos..];
        let next = rest.find(['>', '='])?;
        if rest[next..].starts_with('>') {
            return Some(pos + next);
        }
        let value = rest[next + 1..].trim_start();
        pos = if value.starts_with(['"', '\'']) {
            let (_, remainder) = split_value(value);
            tail.len() - remainder.len()
        } else {
            tail.len() - value.len()
        };
    }
    None
}

/// Length of the raw text up to (not including) the `</tag` that closes it,
/// or all of `text` when the element is never closed.
fn raw_text_len(text: &str, tag: &str) -> usize {
    let closing = format!("</{tag}");
    text.to_ascii_lowercase()
        .find(&closing)
        .unwrap_or(text.len())
}

fn parse_tag(body: &str) -> (String, Option<&str>) {
    let body = body.trim().trim_end_matches('/').trim_end();
    let (name, mut rest) = match body.find(|ch: char| ch.is_ascii_whitespace()) {
        Some(split) => body.split_at(split),
        None => (body, ""),
    };
    let mut id = None;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let name_end = rest
            .find(|ch: char| ch == '=' || ch.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let attr = &rest[..name_end];
        rest = rest[name_end..].trim_start();
        let Some(after_eq) = rest.strip_prefix('=') else {
            continue;
        };
        let (value, remainder) = split_value(after_eq.trim_start());
        rest = remainder;
        if attr.eq_ignore_ascii_case("id") {
            id = Some(value);
        }
    }
    (name.to_ascii_lowercase(), id)
}

fn split_value(input: &str) -> (&str, &str) {
    match input.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let inner = &input[1..];
            match inner.find(quote) {
                Some(end) => (&inner[..end], &inner[end + 1..]),
                None => (inner, ""),
            }
        }
        _ => {
            let end = input
                .find(|ch: char| ch.is_ascii_whitespace())
                .unwrap_or(input.len());
            input.split_at(end)
        }
    }
}
