use std::io::{Stdout, stdout};

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::event::EventStream;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::signal;
use tracing::{debug, info, trace};

use crate::error::MountError;
use crate::events::{FrameworkEvent, is_exit_request, map_terminal_event};
use crate::runtime::View;

use super::widgets::render_view;
use super::{Host, MountTarget};

pub const DEFAULT_TERMINAL_MOUNT: &str = "app";

/// The terminal as a host with a single mount target covering the screen.
///
/// The terminal is only prepared when an application attaches, and restored
/// when the host is dropped.
pub struct TerminalHost {
    title: String,
    mount_id: String,
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    view: Option<View>,
}

impl TerminalHost {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mount_id: DEFAULT_TERMINAL_MOUNT.to_string(),
            terminal: None,
            view: None,
        }
    }

    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Keeps the mounted view on screen until `q`, `Esc` or Ctrl-C.
    pub async fn run_until_exit(&mut self) -> anyhow::Result<()> {
        if self.view.is_none() {
            return Ok(());
        }
        let mut events = EventStream::new();
        let shutdown = signal::ctrl_c();
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown signal received");
                    break;
                }
                event = events.next() => {
                    let Some(event) = event else { break };
                    let event = event.context("read terminal event")?;
                    let Some(event) = map_terminal_event(event) else {
                        continue;
                    };
                    trace!(event = ?event, "terminal event");
                    if is_exit_request(&event) {
                        info!("exit requested");
                        break;
                    }
                    if let FrameworkEvent::Resize(cols, rows) = event {
                        debug!(cols, rows, "terminal resized");
                        self.redraw()?;
                    }
                }
            }
        }
        Ok(())
    }

    fn prepare(&mut self) -> anyhow::Result<()> {
        if self.terminal.is_some() {
            return Ok(());
        }
        enable_raw_mode().context("enable raw mode")?;
        let rollback = Rollback::new(|| {
            let _ = disable_raw_mode();
            let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        });
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, Hide, SetTitle(self.title.as_str()))
            .context("prepare terminal")?;
        let terminal = Terminal::new(CrosstermBackend::new(out)).context("build terminal")?;
        rollback.disarm();
        self.terminal = Some(terminal);
        Ok(())
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let (Some(terminal), Some(view)) = (self.terminal.as_mut(), self.view.as_ref()) else {
            return Ok(());
        };
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_view(frame, area, view);
            })
            .context("draw frame")?;
        trace!("frame drawn");
        Ok(())
    }
}

impl Host for TerminalHost {
    fn attach(&mut self, target: &MountTarget, view: &View) -> Result<(), MountError> {
        if target.id() != self.mount_id {
            return Err(MountError::MountTargetMissing(target.clone()));
        }
        if self.view.is_some() {
            return Err(MountError::MountTargetOccupied(target.clone()));
        }
        let backend = |source| MountError::Backend {
            target: target.clone(),
            source,
        };
        self.prepare().map_err(backend)?;
        self.view = Some(view.clone());
        if let Err(err) = self.redraw() {
            self.view = None;
            return Err(backend(err));
        }
        Ok(())
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        if self.terminal.take().is_none() {
            return;
        }
        let _ = disable_raw_mode();
        let mut out = stdout();
        let _ = execute!(out, Show, LeaveAlternateScreen, SetTitle("Terminal"));
    }
}

/// Runs `undo` when dropped unless disarmed first.
pub(crate) struct Rollback<F: FnOnce()> {
    undo: Option<F>,
}

impl<F: FnOnce()> Rollback<F> {
    pub(crate) fn new(undo: F) -> Self {
        Self { undo: Some(undo) }
    }

    pub(crate) fn disarm(mut self) {
        self.undo = None;
    }
}

impl<F: FnOnce()> Drop for Rollback<F> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            undo();
        }
    }
}
