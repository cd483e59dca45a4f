use std::fmt;
use std::str::FromStr;

use crate::error::{BootstrapError, MountError};
use crate::runtime::View;

mod document;
mod terminal;
mod widgets;
#[cfg(test)]
mod tests;

pub use document::{DocumentError, HostDocument};
pub use terminal::{DEFAULT_TERMINAL_MOUNT, TerminalHost};

/// The environment an application attaches to.
///
/// A host resolves a [`MountTarget`] at attach time and binds the view to it
/// exclusively. Attaching to an id the host does not carry must fail with
/// [`MountError::MountTargetMissing`]; attaching twice to the same id must
/// fail with [`MountError::MountTargetOccupied`].
pub trait Host {
    fn attach(&mut self, target: &MountTarget, view: &View) -> Result<(), MountError>;
}

/// Identifier of the element an application binds to, written `#app` or `app`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MountTarget(String);

impl MountTarget {
    pub fn parse(raw: &str) -> Result<Self, BootstrapError> {
        let trimmed = raw.trim();
        let id = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':'));
        if !valid {
            return Err(BootstrapError::InvalidMountTarget(raw.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl FromStr for MountTarget {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
