use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::application::services::SuggestionState;
use crate::presentation::theme::Theme;

/// Dropdown listing the suggestions for the address input.
pub struct SuggestionsPopup<'a> {
    state: &'a SuggestionState,
    theme: &'a Theme,
}

impl<'a> SuggestionsPopup<'a> {
    #[must_use]
    pub const fn new(state: &'a SuggestionState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Height needed to show `state` in full, borders included.
    #[must_use]
    pub fn height_for(state: &SuggestionState) -> u16 {
        u16::try_from(state.results.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }

    /// Index of the suggestion drawn at terminal row `row` when the popup
    /// occupies `area`.
    #[must_use]
    pub fn row_to_index(area: Rect, state: &SuggestionState, row: u16) -> Option<usize> {
        let first = area.y.checked_add(1)?;
        let last = area.bottom().checked_sub(1)?;
        if row < first || row >= last {
            return None;
        }
        let index = usize::from(row - first);
        (index < state.results.len()).then_some(index)
    }
}

impl Widget for SuggestionsPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        if !state.is_visible() {
            return;
        }

        Widget::render(Clear, area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .style(self.theme.bar_style)
            .title(" Suggestions ")
            .title_style(Style::default().add_modifier(Modifier::BOLD));

        let items: Vec<ListItem> = state
            .results
            .iter()
            .map(|link| ListItem::new(Span::raw(link.as_str())))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.selection_style)
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(state.selected_index);

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(results: &[&str], selected: Option<usize>) -> SuggestionState {
        SuggestionState {
            active: true,
            query: "disc".to_string(),
            results: results.iter().map(ToString::to_string).collect(),
            selected_index: selected,
        }
    }

    #[test]
    fn test_row_to_index() {
        let state = state_with(&["a", "b"], None);
        let area = Rect::new(0, 3, 20, SuggestionsPopup::height_for(&state));

        assert_eq!(area.height, 4);
        assert_eq!(SuggestionsPopup::row_to_index(area, &state, 3), None);
        assert_eq!(SuggestionsPopup::row_to_index(area, &state, 4), Some(0));
        assert_eq!(SuggestionsPopup::row_to_index(area, &state, 5), Some(1));
        assert_eq!(SuggestionsPopup::row_to_index(area, &state, 6), None);
    }

    #[test]
    fn test_hidden_state_renders_nothing() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        let mut state = state_with(&["https://discord.com/@me"], None);
        state.active = false;

        SuggestionsPopup::new(&state, &theme).render(area, &mut buf);

        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_selected_row_gets_marker() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        let state = state_with(&["https://a", "https://b"], Some(1));

        SuggestionsPopup::new(&state, &theme).render(area, &mut buf);

        let row: String = (1..12).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert_eq!(row, "> https://b");
    }
}
