//! Address input widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::presentation::theme::Theme;

/// Placeholder shown while the address input is empty.
pub const PLACEHOLDER: &str = "Enter URL or search...";

/// Outcome of feeding a key to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    /// The text changed.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// The key is not an editing key.
    Ignored,
}

/// Single-line address input. The cursor is a char index.
#[derive(Debug, Clone)]
pub struct UrlInput {
    value: String,
    cursor: usize,
    focused: bool,
}

impl UrlInput {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the text and puts the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Applies an editing key.
    pub fn handle_key(&mut self, key: &KeyEvent) -> InputChange {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(c) if plain => {
                self.input_char(c);
                InputChange::Edited
            }
            KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => {
                self.clear();
                InputChange::Edited
            }
            KeyCode::Backspace => self.edit_if(Self::backspace),
            KeyCode::Delete => self.edit_if(Self::delete),
            KeyCode::Left if plain => self.move_to(self.cursor.saturating_sub(1)),
            KeyCode::Right if plain => self.move_to(self.cursor + 1),
            KeyCode::Home if plain => self.move_to(0),
            KeyCode::End if plain => self.move_to(self.char_count()),
            _ => InputChange::Ignored,
        }
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor. Returns true if anything was removed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Deletes character at cursor. Returns true if anything was removed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    fn edit_if(&mut self, edit: fn(&mut Self) -> bool) -> InputChange {
        if edit(self) {
            InputChange::Edited
        } else {
            InputChange::Moved
        }
    }

    fn move_to(&mut self, cursor: usize) -> InputChange {
        self.cursor = cursor.min(self.char_count());
        InputChange::Moved
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    /// Text visible in a field `width` cells wide, scrolled so the cursor
    /// stays in view, and the cursor's column within it.
    fn visible_window(&self, width: usize) -> (String, usize) {
        let widths: Vec<usize> = self
            .value
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .collect();

        let mut start = 0;
        let mut cursor_col: usize = widths[..self.cursor].iter().sum();
        // Keep one cell free for the cursor block.
        while start < self.cursor && cursor_col + 1 > width {
            cursor_col -= widths[start];
            start += 1;
        }

        let mut used = 0;
        let text = self
            .value
            .chars()
            .skip(start)
            .zip(&widths[start..])
            .take_while(|(_, w)| {
                used += **w;
                used <= width
            })
            .map(|(c, _)| c)
            .collect();

        (text, cursor_col)
    }
}

impl Default for UrlInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders an input with the colors of a theme.
pub struct UrlInputView<'a> {
    input: &'a UrlInput,
    theme: &'a Theme,
}

impl<'a> UrlInputView<'a> {
    #[must_use]
    pub const fn new(input: &'a UrlInput, theme: &'a Theme) -> Self {
        Self { input, theme }
    }
}

impl Widget for UrlInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.input;
        let border_style = if input.focused {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line_area = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: 1,
            ..inner
        };

        if input.value.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(self.theme.dimmed_style)
                .render(line_area, buf);
        } else {
            let (text, _) = input.visible_window(usize::from(line_area.width));
            Paragraph::new(text)
                .style(self.theme.base_style)
                .render(line_area, buf);
        }

        if input.focused {
            let (_, cursor_col) = input.visible_window(usize::from(line_area.width));
            let cursor_x = line_area
                .x
                .saturating_add(u16::try_from(cursor_col).unwrap_or(u16::MAX));
            if cursor_x < line_area.right() {
                buf[(cursor_x, line_area.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}
