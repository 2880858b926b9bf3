//! Terminal event abstraction.
//!
//! Crossterm events are collapsed into the handful of inputs the selector
//! understands; everything else becomes [`InputEvent::Other`].

use crossterm::event::{Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{Action, AppConfig};

/// High-level inputs consumed by the selection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    Toggle,
    Confirm,
    Cancel,
    Other,
}

impl From<Action> for InputEvent {
    fn from(action: Action) -> Self {
        match action {
            Action::MoveUp => InputEvent::MoveUp,
            Action::MoveDown => InputEvent::MoveDown,
            Action::Toggle => InputEvent::Toggle,
            Action::Confirm => InputEvent::Confirm,
            Action::Cancel => InputEvent::Cancel,
        }
    }
}

/// Map a raw terminal event through the configured bindings.
pub fn map_event(config: &AppConfig, event: &CtEvent) -> InputEvent {
    match event {
        CtEvent::Key(key) => map_key(config, *key),
        _ => InputEvent::Other,
    }
}

/// Ctrl+c press.  Raw mode swallows SIGINT, so the terminal backend turns
/// this into an abort instead of a selector input.
pub fn is_interrupt(event: &CtEvent) -> bool {
    matches!(
        event,
        CtEvent::Key(key)
            if key.kind == KeyEventKind::Press
                && key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c')
    )
}

/// Map a key event.  Only presses count.
pub fn map_key(config: &AppConfig, key: KeyEvent) -> InputEvent {
    if key.kind != KeyEventKind::Press {
        return InputEvent::Other;
    }
    config
        .match_key(key)
        .map_or(InputEvent::Other, InputEvent::from)
}
