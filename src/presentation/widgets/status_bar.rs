//! Status line widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// A message for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// Single-line status bar with a message on the left and hints on the right.
#[derive(Debug, Clone, Default)]
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    hints: &'a str,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>) -> Self {
        Self { message, hints: "" }
    }

    /// Sets the right-aligned hint text.
    #[must_use]
    pub const fn hints(mut self, hints: &'a str) -> Self {
        self.hints = hints;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        let mut spans = Vec::new();
        let mut used = 0;

        if let Some(message) = self.message {
            let style = Style::default()
                .fg(message.level.color())
                .add_modifier(Modifier::BOLD);
            used = message.text.width();
            spans.push(Span::styled(message.text.as_str(), style));
        }

        let hints_width = self.hints.width();
        if !self.hints.is_empty() && used + 1 + hints_width <= width {
            spans.push(Span::raw(" ".repeat(width - used - hints_width)));
            spans.push(Span::styled(self.hints, Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_message_and_hints() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let message = StatusMessage::error("bad url");

        StatusBar::new(Some(&message))
            .hints("F5 ↻")
            .render(area, &mut buf);

        assert_eq!(row(&buf, 20), "bad url         F5 ↻");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn test_hints_dropped_when_too_narrow() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let message = StatusMessage::info("navigated");

        StatusBar::new(Some(&message))
            .hints("Alt+← back")
            .render(area, &mut buf);

        assert_eq!(row(&buf, 10), "navigated ");
    }
}
