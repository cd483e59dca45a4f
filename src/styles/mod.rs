use std::io;
use std::path::PathBuf;

use thiserror::Error;

mod computed;
mod parser;
mod query;
mod source;
mod stylesheet;
#[cfg(test)]
mod tests;

pub use computed::ComputedStyle;
pub use query::StyleQuery;
pub use source::StyleSource;
pub use stylesheet::Stylesheet;

/// Failures while resolving or parsing a stylesheet.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read stylesheet {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("empty selector")]
    EmptySelector,
    #[error("selector `{selector}` already has {segment}")]
    DuplicateSegment {
        selector: String,
        segment: &'static str,
    },
}
