//! The startup sequence: load styles, construct the application, attach it.
//!
//! Each step runs strictly after the previous one in a single synchronous
//! pass. [`Bootstrap::run`] consumes the bootstrap, so the sequence can only
//! be executed once per value and yields the one [`MountedApp`] that the
//! caller owns for the rest of the process.

use std::any::Any;

use tracing::{debug, error, info};

use crate::error::BootstrapError;
use crate::host::{Host, MountTarget};
use crate::modules::ModuleRegistry;
use crate::runtime::{App, ComponentElement, Lifecycle, MountedApp};
use crate::styles::StyleSource;

mod config;

pub use config::{BootstrapConfig, DEFAULT_APP_NAME, DEFAULT_MOUNT_TARGET, STYLESHEET_ENV};

#[derive(Debug)]
pub struct Bootstrap {
    config: BootstrapConfig,
    root: ComponentElement,
    stylesheet: StyleSource,
    modules: ModuleRegistry,
}

impl Bootstrap {
    pub fn new(root: ComponentElement) -> Self {
        Self {
            config: BootstrapConfig::default(),
            root,
            stylesheet: StyleSource::default(),
            modules: ModuleRegistry::new(),
        }
    }

    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_stylesheet(mut self, source: StyleSource) -> Self {
        self.stylesheet = source;
        self
    }

    /// Binds an auxiliary module into the application. It is never invoked here.
    pub fn provide_module<T>(mut self, module: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.modules.provide(module);
        self
    }

    pub fn status(&self) -> Lifecycle {
        Lifecycle::Unstarted
    }

    pub fn run<H>(self, host: &mut H) -> Result<MountedApp, BootstrapError>
    where
        H: Host + ?Sized,
    {
        let result = self.execute(host);
        if let Err(err) = &result {
            error!(error = %err, "bootstrap failed");
        }
        result
    }

    fn execute<H>(self, host: &mut H) -> Result<MountedApp, BootstrapError>
    where
        H: Host + ?Sized,
    {
        let Bootstrap {
            config,
            root,
            stylesheet,
            modules,
        } = self;
        let target = MountTarget::parse(&config.mount_target)?;
        info!(app = %config.name, target = %target, "bootstrap starting");

        let source = match config.stylesheet_path {
            Some(path) => StyleSource::File(path),
            None => stylesheet,
        };
        let stylesheet = source.load()?;
        debug!(source = %source.describe(), "stylesheet applied");

        debug!(modules = ?modules, "modules bound");
        let app = App::new(config.name, root)
            .with_stylesheet(stylesheet)
            .with_modules(modules);

        Ok(app.mount(host, &target)?)
    }
}
