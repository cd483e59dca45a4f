use std::env;
use std::path::PathBuf;

pub const DEFAULT_APP_NAME: &str = "marklee";
pub const DEFAULT_MOUNT_TARGET: &str = "#app";
pub const STYLESHEET_ENV: &str = "MARKLEE_STYLESHEET";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub name: String,
    pub mount_target: String,
    /// Replaces the stylesheet the bootstrap was given when set.
    pub stylesheet_path: Option<PathBuf>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            mount_target: DEFAULT_MOUNT_TARGET.to_string(),
            stylesheet_path: None,
        }
    }
}

impl BootstrapConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let stylesheet_path = lookup(STYLESHEET_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            stylesheet_path,
            ..Self::default()
        }
    }
}
