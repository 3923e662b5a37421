//! Event handling.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was not handled here, let the caller try.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

impl EventResult {
    /// Returns true unless the event was left for the caller.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Checks if a key event should be acted upon. Release and repeat events
/// reported by some terminals are ignored.
#[must_use]
pub fn is_key_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Checks if a mouse event is a left click.
#[must_use]
pub fn is_left_click(mouse: &MouseEvent) -> bool {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 1,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_press_filter() {
        let press = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press);
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);

        assert!(is_key_press(&press));
        assert!(!is_key_press(&release));
    }

    #[test]
    fn test_left_click_filter() {
        assert!(is_left_click(&mouse(MouseEventKind::Down(MouseButton::Left))));
        assert!(!is_left_click(&mouse(MouseEventKind::Up(MouseButton::Left))));
        assert!(!is_left_click(&mouse(MouseEventKind::Down(MouseButton::Right))));
        assert!(!is_left_click(&mouse(MouseEventKind::ScrollDown)));
    }

    #[test]
    fn test_event_result_handled() {
        assert!(EventResult::Consumed.is_handled());
        assert!(EventResult::Exit.is_handled());
        assert!(!EventResult::Continue.is_handled());
    }
}
