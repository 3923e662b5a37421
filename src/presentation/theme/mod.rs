//! Colors shared by the navigation bar widgets.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const DEFAULT_ACCENT: Color = Color::Rgb(0x72, 0x89, 0xda);
const BAR_BACKGROUND: Color = Color::Rgb(0x2f, 0x31, 0x36);
const BAR_BORDER: Color = Color::Rgb(0x20, 0x22, 0x25);

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub bar_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(DEFAULT_ACCENT)
    }
}

impl Theme {
    /// Builds a theme around an accent given by name or `#rrggbb`/`#rgb`.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = match accent {
            Color::Rgb(r, g, b) => Color::Rgb(darken(r), darken(g), darken(b)),
            _ => Color::DarkGray,
        };

        Self {
            accent,
            bar_style: Style::default().bg(BAR_BACKGROUND),
            border_style: Style::default().fg(BAR_BORDER),
            focused_border_style: Style::default().fg(accent),
            selection_style: Style::default()
                .bg(selection_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn darken(channel: u8) -> u8 {
    (f32::from(channel) * 0.35).round() as u8
}

fn parse_color(s: &str) -> Color {
    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.eq_ignore_ascii_case("orange") {
        Color::Indexed(208)
    } else {
        DEFAULT_ACCENT
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let short = |i: usize| channel(&s[i..=i]).map(|v| v * 0x11);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Red", Color::Red ; "named")]
    #[test_case("blue", Color::Blue ; "lowercase named")]
    #[test_case("#FF0000", Color::Rgb(255, 0, 0) ; "six digit hex")]
    #[test_case("#0f0", Color::Rgb(0, 255, 0) ; "three digit hex")]
    #[test_case("Orange", Color::Indexed(208) ; "orange")]
    #[test_case("#7289da", DEFAULT_ACCENT ; "default accent")]
    #[test_case("Invalid", DEFAULT_ACCENT ; "unknown falls back")]
    #[test_case("#12345", DEFAULT_ACCENT ; "bad hex length falls back")]
    fn test_parse_color(input: &str, expected: Color) {
        assert_eq!(parse_color(input), expected);
    }

    #[test]
    fn test_selection_derived_from_rgb_accent() {
        let theme = Theme::new("#ffffff");
        assert_eq!(theme.selection_style.bg, Some(Color::Rgb(89, 89, 89)));
        assert_eq!(theme.focused_border_style.fg, Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_selection_for_named_accent() {
        let theme = Theme::new("green");
        assert_eq!(theme.selection_style.bg, Some(Color::DarkGray));
    }
}
