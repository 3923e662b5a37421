//! Back, forward, refresh and home buttons.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Width of a button, borders included.
pub const BUTTON_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButtonKind {
    Back,
    Forward,
    Refresh,
    Home,
}

impl NavButtonKind {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Back => "←",
            Self::Forward => "→",
            Self::Refresh => "↻",
            Self::Home => "⌂",
        }
    }
}

pub struct NavButton<'a> {
    kind: NavButtonKind,
    enabled: bool,
    theme: &'a Theme,
}

impl<'a> NavButton<'a> {
    #[must_use]
    pub const fn new(kind: NavButtonKind, theme: &'a Theme) -> Self {
        Self {
            kind,
            enabled: true,
            theme,
        }
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for NavButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.enabled {
            self.theme.base_style.add_modifier(Modifier::BOLD)
        } else {
            self.theme.dimmed_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let label_area = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: inner.height.min(1),
            ..inner
        };
        Paragraph::new(self.kind.symbol())
            .alignment(Alignment::Center)
            .style(label_style)
            .render(label_area, buf);
    }
}
