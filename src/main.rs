mod components;
mod extensions;

use std::env;

use anyhow::Context;
use marklee::bootstrap::{Bootstrap, BootstrapConfig};
use marklee::component;
use marklee::host::TerminalHost;
use marklee::styles::StyleSource;
use tracing::info;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use components::root::root;
use extensions::Marklee;

const APP_STYLES: &str = include_str!("../styles/app.css");
const LOG_ENV: &str = "MARKLEE_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = BootstrapConfig::from_env();
    let mut host = TerminalHost::new(config.name.clone());
    let app = Bootstrap::new(component("App", root))
        .with_config(config)
        .with_stylesheet(StyleSource::Embedded(APP_STYLES))
        .provide_module(Marklee)
        .run(&mut host)
        .context("start application")?;
    info!(app = app.name(), target = %app.target(), "session started");
    host.run_until_exit().await?;
    info!(app = app.name(), "session ended");
    Ok(())
}

/// Logging stays off unless `MARKLEE_LOG` holds a filter; stdout belongs to the UI.
fn init_tracing() {
    let filter = match log_filter(env::var(LOG_ENV).ok()) {
        Ok(Some(filter)) => filter,
        Ok(None) => return,
        Err(err) => {
            eprintln!("marklee: ignoring {LOG_ENV}: {err}");
            return;
        }
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn log_filter(directive: Option<String>) -> Result<Option<EnvFilter>, ParseError> {
    match directive {
        Some(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive).map(Some),
        _ => Ok(None),
    }
}
