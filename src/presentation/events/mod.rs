//! Event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Checks if key quits the game from any screen.
#[must_use]
pub fn is_quit_event(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c' | 'q'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Extracts key presses, ignoring repeats and releases.
#[must_use]
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}
