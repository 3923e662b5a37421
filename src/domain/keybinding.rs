use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,

    // Navigation bar controls
    GoBack,
    GoForward,
    Refresh,
    GoHome,

    // Address input
    FocusInput,
    Submit,
    Cancel,
    NextSuggestion,
    PreviousSuggestion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Returns true if the event is this binding's key, ignoring event kind and state.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key.code == event.code && self.key.modifiers == event.modifiers
    }
}

/// Bindings active while the address input does not have focus.
#[must_use]
pub fn default_keybindings() -> Vec<Keybind> {
    vec![
        Keybind::new(
            KeyEvent::new(KeyCode::Left, KeyModifiers::ALT),
            Action::GoBack,
            "Back",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Right, KeyModifiers::ALT),
            Action::GoForward,
            "Forward",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE),
            Action::Refresh,
            "Refresh",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Home, KeyModifiers::ALT),
            Action::GoHome,
            "Home",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
            Action::FocusInput,
            "Address",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            Action::Quit,
            "Quit",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Quit",
        )
        .hidden(),
    ]
}

/// Bindings active while typing in the address input.
#[must_use]
pub fn input_keybindings() -> Vec<Keybind> {
    vec![
        Keybind::new(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            Action::Submit,
            "Go",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            Action::Cancel,
            "Close",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            Action::NextSuggestion,
            "Next",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            Action::PreviousSuggestion,
            "Prev",
        ),
        Keybind::new(
            KeyEvent::new(KeyCode::Left, KeyModifiers::ALT),
            Action::GoBack,
            "Back",
        )
        .hidden(),
        Keybind::new(
            KeyEvent::new(KeyCode::Right, KeyModifiers::ALT),
            Action::GoForward,
            "Forward",
        )
        .hidden(),
        Keybind::new(
            KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE),
            Action::Refresh,
            "Refresh",
        )
        .hidden(),
        Keybind::new(
            KeyEvent::new(KeyCode::Home, KeyModifiers::ALT),
            Action::GoHome,
            "Home",
        )
        .hidden(),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Quit",
        )
        .hidden(),
    ]
}

/// Finds the action bound to a key event.
#[must_use]
pub fn resolve(bindings: &[Keybind], event: &KeyEvent) -> Option<Action> {
    bindings
        .iter()
        .find(|binding| binding.matches(event))
        .map(|binding| binding.action)
}
