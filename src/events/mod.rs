use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};


/// Terminal input the mounted session reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameworkEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

pub fn map_terminal_event(event: CrosstermEvent) -> Option<FrameworkEvent> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
            Some(FrameworkEvent::Key(key))
        }
        CrosstermEvent::Resize(cols, rows) => Some(FrameworkEvent::Resize(cols, rows)),
        _ => None,
    }
}

pub fn is_ctrl_c(event: &FrameworkEvent) -> bool {
    match event {
        FrameworkEvent::Key(key) => {
            matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                && key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}

/// Ctrl-C, `q` or `Esc`.
pub fn is_exit_request(event: &FrameworkEvent) -> bool {
    if is_ctrl_c(event) {
        return true;
    }
    matches!(
        event,
        FrameworkEvent::Key(key)
            if key.modifiers.is_empty() && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
    )
}
