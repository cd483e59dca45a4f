use std::collections::HashMap;
use std::path::Path;

use super::StyleError;
use super::computed::ComputedStyle;
use super::parser::{merge_declarations, parse_declarations, strip_comments};
use super::query::StyleQuery;

/// A parsed stylesheet: `:root` declarations plus ordered selector rules.
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    root: HashMap<String, String>,
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn parse(input: &str) -> Result<Self, StyleError> {
        let mut sheet = Stylesheet::default();
        let cleaned = strip_comments(input);
        for block in cleaned.split('}') {
            let Some((selectors, body)) = block.split_once('{') else {
                continue;
            };
            let selectors = selectors.trim();
            if selectors.is_empty() {
                continue;
            }
            let declarations = parse_declarations(body);
            for raw in selectors.split(',').map(str::trim) {
                if raw.is_empty() {
                    continue;
                }
                if raw == ":root" {
                    merge_declarations(&mut sheet.root, &declarations);
                    continue;
                }
                let order = sheet.rules.len();
                sheet.rules.push(Rule {
                    selector: Selector::parse(raw)?,
                    declarations: declarations.clone(),
                    order,
                });
            }
        }
        Ok(sheet)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StyleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn root(&self) -> ComputedStyle {
        ComputedStyle::from_props(self.root.clone())
    }

    /// Cascades `:root` and every matching rule, lowest specificity first.
    pub fn query(&self, query: StyleQuery<'_>) -> ComputedStyle {
        let mut props = self.root.clone();
        let mut matched: Vec<&Rule> = self
            .rules
            .iter()
            .filter(|rule| rule.selector.matches(&query))
            .collect();
        matched.sort_by_key(|rule| (rule.selector.specificity(), rule.order));
        for rule in matched {
            merge_declarations(&mut props, &rule.declarations);
        }
        ComputedStyle::from_props(props)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.rules.is_empty()
    }
}

#[derive(Clone, Debug)]
struct Rule {
    selector: Selector,
    declarations: HashMap<String, String>,
    order: usize,
}

#[derive(Clone, Debug, Default)]
struct Selector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

#[derive(Clone, Copy)]
enum Segment {
    Element,
    Id,
    Class,
}

impl Selector {
    fn parse(raw: &str) -> Result<Self, StyleError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(StyleError::EmptySelector);
        }
        let mut selector = Selector::default();
        let mut buffer = String::new();
        let mut segment = Segment::Element;
        for ch in raw.chars() {
            let next = match ch {
                '#' => Segment::Id,
                '.' => Segment::Class,
                _ => {
                    buffer.push(ch);
                    continue;
                }
            };
            selector.push(raw, &mut buffer, segment)?;
            segment = next;
        }
        selector.push(raw, &mut buffer, segment)?;
        if selector.element.is_none() && selector.id.is_none() && selector.classes.is_empty() {
            return Err(StyleError::EmptySelector);
        }
        Ok(selector)
    }

    fn push(
        &mut self,
        raw: &str,
        buffer: &mut String,
        segment: Segment,
    ) -> Result<(), StyleError> {
        let value = buffer.trim().to_string();
        buffer.clear();
        if value.is_empty() {
            return Ok(());
        }
        match segment {
            Segment::Element => self.element = Some(value.to_ascii_lowercase()),
            Segment::Id => {
                if self.id.is_some() {
                    return Err(StyleError::DuplicateSegment {
                        selector: raw.to_string(),
                        segment: "id",
                    });
                }
                self.id = Some(value);
            }
            Segment::Class => {
                let class = value.to_ascii_lowercase();
                if !self.classes.contains(&class) {
                    self.classes.push(class);
                }
            }
        }
        Ok(())
    }

    fn matches(&self, query: &StyleQuery<'_>) -> bool {
        if let Some(element) = &self.element {
            if !element.eq_ignore_ascii_case(query.element) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if query.id != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| {
            query
                .classes
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(class))
        })
    }

    fn specificity(&self) -> (usize, usize, usize) {
        (
            usize::from(self.id.is_some()),
            self.classes.len(),
            usize::from(self.element.is_some()),
        )
    }
}
