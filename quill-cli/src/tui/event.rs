//! Terminal event handling using crossterm EventStream.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;

/// High-level actions mapped from global keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Interrupt,
}

/// Reads terminal events asynchronously using crossterm's EventStream.
pub struct EventHandler {
    stream: EventStream,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }

    /// Read the next terminal event. Returns None if the stream ends.
    pub async fn next(&mut self) -> Option<Event> {
        self.stream.next().await.and_then(|r| r.ok())
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a key event to a global action. Returns None if the event should be
/// passed to the focused widget instead.
pub fn map_global_key(event: &KeyEvent) -> Option<Action> {
    match (event.modifiers, event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Interrupt),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert_eq!(
            map_global_key(&ctrl(KeyCode::Char('c'))),
            Some(Action::Interrupt)
        );
    }

    #[test]
    fn test_ctrl_d_quits() {
        assert_eq!(map_global_key(&ctrl(KeyCode::Char('d'))), Some(Action::Quit));
    }

    #[test]
    fn test_regular_keys_pass_through() {
        assert_eq!(map_global_key(&key(KeyCode::Char('c'))), None);
        assert_eq!(map_global_key(&key(KeyCode::Esc)), None);
        assert_eq!(map_global_key(&key(KeyCode::Enter)), None);
    }
}
