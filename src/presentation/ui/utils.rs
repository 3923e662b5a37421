use chrono::{DateTime, Local, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::keybinding::Keybind;

/// Formats a history timestamp as local wall-clock time.
#[must_use]
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    let local: DateTime<Local> = timestamp.into();
    local.format("%H:%M:%S").to_string()
}

/// Short label for a key combination, e.g. `Alt+←` or `Ctrl+L`.
#[must_use]
pub fn key_label(key: &KeyEvent) -> String {
    let mut label = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        label.push_str("Ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        label.push_str("Alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        label.push_str("Shift+");
    }

    match key.code {
        KeyCode::Left => label.push('←'),
        KeyCode::Right => label.push('→'),
        KeyCode::Up => label.push('↑'),
        KeyCode::Down => label.push('↓'),
        KeyCode::Home => label.push_str("Home"),
        KeyCode::Enter => label.push_str("Enter"),
        KeyCode::Esc => label.push_str("Esc"),
        KeyCode::F(n) => label.push_str(&format!("F{n}")),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            label.extend(c.to_uppercase());
        }
        KeyCode::Char(c) => label.push(c),
        other => label.push_str(&other.to_string()),
    }
    label
}

/// One-line help built from keybindings, e.g. `Alt+← Back · F5 Refresh`.
#[must_use]
pub fn help_line<'a>(bindings: impl IntoIterator<Item = &'a Keybind>) -> String {
    bindings
        .into_iter()
        .map(|binding| format!("{} {}", key_label(&binding.key), binding.label))
        .collect::<Vec<_>>()
        .join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(KeyCode::Left, KeyModifiers::ALT, "Alt+←" ; "alt arrow")]
    #[test_case(KeyCode::F(5), KeyModifiers::NONE, "F5" ; "function key")]
    #[test_case(KeyCode::Home, KeyModifiers::ALT, "Alt+Home" ; "alt home")]
    #[test_case(KeyCode::Char('l'), KeyModifiers::CONTROL, "Ctrl+L" ; "ctrl letter")]
    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, "q" ; "plain letter")]
    fn test_key_label(code: KeyCode, modifiers: KeyModifiers, expected: &str) {
        assert_eq!(key_label(&KeyEvent::new(code, modifiers)), expected);
    }

    #[test]
    fn test_help_line() {
        let bindings = [
            Keybind::new(
                KeyEvent::new(KeyCode::Left, KeyModifiers::ALT),
                Action::GoBack,
                "Back",
            ),
            Keybind::new(
                KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE),
                Action::Refresh,
                "Refresh",
            ),
        ];

        assert_eq!(help_line(&bindings), "Alt+← Back · F5 Refresh");
    }

    #[test]
    fn test_format_time_has_clock_shape() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
        let formatted = format_time(timestamp);

        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.matches(':').count(), 2);
        assert!(formatted.ends_with(":45"));
    }
}
