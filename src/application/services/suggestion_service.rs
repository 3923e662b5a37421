//! Address suggestions and the dropdown that shows them.

use std::time::{Duration, Instant};

use crate::domain::entities::HistoryEntry;
use crate::domain::navigation::WELL_KNOWN_DESTINATIONS;

/// Maximum number of history matches offered.
pub const MAX_HISTORY_SUGGESTIONS: usize = 5;

/// Delay between the input losing focus and the dropdown closing, so a click
/// on a suggestion still lands.
pub const DISMISS_DELAY: Duration = Duration::from_millis(200);

/// Builds the suggestion list for `query`.
///
/// History matches come first (at most [`MAX_HISTORY_SUGGESTIONS`], oldest
/// first), then well-known destinations; duplicates keep their first position.
/// An empty query yields no suggestions.
pub fn suggest<'a>(query: &str, history: impl IntoIterator<Item = &'a HistoryEntry>) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let lower_query = query.to_lowercase();
    let mut results: Vec<String> = Vec::new();

    for entry in history
        .into_iter()
        .filter(|entry| entry.matches(&lower_query))
        .take(MAX_HISTORY_SUGGESTIONS)
    {
        push_unique(&mut results, entry.link());
    }

    for link in WELL_KNOWN_DESTINATIONS {
        if link.to_lowercase().contains(&lower_query) {
            push_unique(&mut results, link);
        }
    }

    results
}

fn push_unique(results: &mut Vec<String>, link: &str) {
    if !results.iter().any(|existing| existing == link) {
        results.push(link.to_owned());
    }
}

/// What the dropdown shows.
#[derive(Debug, Clone, Default)]
pub struct SuggestionState {
    /// Open unless dismissed; an open dropdown with no results is not drawn.
    pub active: bool,
    /// Input text the results were computed for.
    pub query: String,
    /// Links in display order.
    pub results: Vec<String>,
    /// Highlighted row, if any.
    pub selected_index: Option<usize>,
}

impl SuggestionState {
    /// Link under the highlight.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.results.get(index))
            .map(String::as_str)
    }

    /// Whether the dropdown should be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.active && !self.results.is_empty()
    }
}

/// Dropdown state for the address input.
pub struct SuggestionService {
    state: SuggestionState,
    dismiss_at: Option<Instant>,
}

impl SuggestionService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SuggestionState::default(),
            dismiss_at: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.active = false;
        self.state.query.clear();
        self.state.results.clear();
        self.state.selected_index = None;
        self.dismiss_at = None;
    }

    /// Recomputes suggestions for the text currently in the input.
    pub fn update<'a>(&mut self, text: &str, history: impl IntoIterator<Item = &'a HistoryEntry>) {
        if text.is_empty() {
            self.reset();
            return;
        }

        self.state.query = text.to_string();
        self.state.results = suggest(text, history);
        self.state.active = true;
        self.state.selected_index = None;
    }

    /// Hides the dropdown but keeps the results for when focus returns.
    pub fn hide(&mut self) {
        self.state.active = false;
        self.state.selected_index = None;
        self.dismiss_at = None;
    }

    /// Shows the dropdown again if there is anything to show.
    pub fn show_if_any(&mut self) {
        self.dismiss_at = None;
        self.state.active = !self.state.results.is_empty();
    }

    pub fn select_next(&mut self) {
        if self.state.results.is_empty() {
            return;
        }
        self.state.active = true;
        self.state.selected_index = Some(match self.state.selected_index {
            Some(index) if index + 1 < self.state.results.len() => index + 1,
            _ => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.state.results.is_empty() {
            return;
        }
        let last = self.state.results.len() - 1;
        self.state.active = true;
        self.state.selected_index = Some(match self.state.selected_index {
            Some(0) | None => last,
            Some(index) => index - 1,
        });
    }

    pub fn select(&mut self, index: usize) {
        if index < self.state.results.len() {
            self.state.selected_index = Some(index);
        }
    }

    /// Takes the highlighted suggestion, closing the dropdown immediately and
    /// cancelling any pending dismissal.
    pub fn take_selected(&mut self) -> Option<String> {
        if !self.state.is_visible() {
            return None;
        }
        let chosen = self.state.selected().map(str::to_owned)?;
        self.reset();
        Some(chosen)
    }

    /// Schedules the dropdown to close after [`DISMISS_DELAY`].
    pub fn schedule_dismiss(&mut self, now: Instant) {
        if self.state.active {
            self.dismiss_at = Some(now + DISMISS_DELAY);
        }
    }

    #[must_use]
    pub const fn is_dismiss_pending(&self) -> bool {
        self.dismiss_at.is_some()
    }

    /// Applies a pending dismissal whose delay has elapsed. Returns true if the
    /// dropdown was closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.dismiss_at {
            Some(deadline) if now >= deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::HOME_LINK;

    fn entry(link: &str, title: &str) -> HistoryEntry {
        HistoryEntry::new(link, title)
    }

    fn sample_history() -> Vec<HistoryEntry> {
        vec![
            entry("https://discord.com/channels/1/10", "Rust - general"),
            entry("https://discord.com/channels/1/11", "Rust - help"),
            entry("https://discord.com/channels/2", "Tokio"),
        ]
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        assert!(suggest("", &sample_history()).is_empty());
    }

    #[test]
    fn test_well_known_destinations_match_case_insensitively() {
        let expected: Vec<String> = WELL_KNOWN_DESTINATIONS
            .iter()
            .map(|link| (*link).to_string())
            .collect();

        assert_eq!(suggest("disc", std::iter::empty()), expected);
        assert_eq!(suggest("DISC", std::iter::empty()), expected);
    }

    #[test]
    fn test_history_matches_come_first_and_deduplicate() {
        let history = vec![entry(HOME_LINK, "Direct Messages")];

        let results = suggest("@me", &history);

        assert_eq!(results, vec![HOME_LINK.to_string()]);
    }

    #[test]
    fn test_history_then_well_known_order() {
        let results = suggest("discord.com/channels", &sample_history());

        assert_eq!(
            results,
            vec![
                "https://discord.com/channels/1/10",
                "https://discord.com/channels/1/11",
                "https://discord.com/channels/2",
                "https://discord.com/channels",
            ]
        );
    }

    #[test]
    fn test_matches_on_title() {
        let results = suggest("tokio", &sample_history());

        assert_eq!(results, vec!["https://discord.com/channels/2"]);
    }

    #[test]
    fn test_history_matches_capped() {
        let history: Vec<HistoryEntry> = (0..10)
            .map(|n| entry(&format!("https://discord.com/channels/{n}"), "Server"))
            .collect();

        let results = suggest("server", &history);

        assert_eq!(results.len(), MAX_HISTORY_SUGGESTIONS);
        assert_eq!(results[0], "https://discord.com/channels/0");
        assert_eq!(results[4], "https://discord.com/channels/4");
    }

    #[test]
    fn test_update_and_reset() {
        let mut service = SuggestionService::new();
        service.update("rust", &sample_history());

        assert!(service.state().is_visible());
        assert_eq!(service.state().query, "rust");
        assert_eq!(service.state().results.len(), 2);

        service.update("", &sample_history());
        assert!(!service.state().active);
        assert!(service.state().results.is_empty());
    }

    #[test]
    fn test_no_match_is_not_visible() {
        let mut service = SuggestionService::new();
        service.update("zzz", &sample_history());

        assert!(service.state().active);
        assert!(!service.state().is_visible());
    }

    #[test]
    fn test_selection_wraps() {
        let mut service = SuggestionService::new();
        service.update("rust", &sample_history());

        service.select_next();
        assert_eq!(service.state().selected_index, Some(0));
        service.select_next();
        assert_eq!(service.state().selected_index, Some(1));
        service.select_next();
        assert_eq!(service.state().selected_index, Some(0));
        service.select_previous();
        assert_eq!(service.state().selected_index, Some(1));
    }

    #[test]
    fn test_take_selected_requires_selection() {
        let mut service = SuggestionService::new();
        service.update("rust", &sample_history());

        assert_eq!(service.take_selected(), None);

        service.select_next();
        assert_eq!(
            service.take_selected().as_deref(),
            Some("https://discord.com/channels/1/10")
        );
        assert!(!service.state().is_visible());
    }

    #[test]
    fn test_delayed_dismissal() {
        let mut service = SuggestionService::new();
        service.update("rust", &sample_history());
        let now = Instant::now();

        service.schedule_dismiss(now);
        assert!(service.is_dismiss_pending());

        assert!(!service.tick(now + DISMISS_DELAY / 2));
        assert!(service.state().is_visible());

        assert!(service.tick(now + DISMISS_DELAY));
        assert!(!service.state().is_visible());
        assert!(!service.is_dismiss_pending());
    }

    #[test]
    fn test_selection_preempts_dismissal() {
        let mut service = SuggestionService::new();
        service.update("rust", &sample_history());
        service.select(0);
        let now = Instant::now();

        service.schedule_dismiss(now);
        let chosen = service.take_selected();

        assert_eq!(chosen.as_deref(), Some("https://discord.com/channels/1/10"));
        assert!(!service.is_dismiss_pending());
        assert!(!service.tick(now + DISMISS_DELAY * 2));
    }

    #[test]
    fn test_focus_regain_cancels_dismissal() {
        let mut service = SuggestionService::new();
        service.update("rust", &sample_history());
        let now = Instant::now();

        service.schedule_dismiss(now);
        service.show_if_any();

        assert!(!service.tick(now + DISMISS_DELAY));
        assert!(service.state().is_visible());
    }
}
