//! Navigation bar: history buttons, address input and suggestions.
//!
//! [`NavBarState`] owns everything the bar keeps between frames and is the
//! entry point for host notifications and user input. [`NavBar`] draws it.

use std::iter;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use super::nav_button::{BUTTON_WIDTH, NavButton, NavButtonKind};
use super::status_bar::StatusMessage;
use super::suggestions_popup::SuggestionsPopup;
use super::url_input::{InputChange, UrlInput, UrlInputView};
use crate::application::services::{
    HistoryController, LocationResolver, SuggestionService, SuggestionState,
};
use crate::application::use_cases::NavigateUseCase;
use crate::domain::events::{HostEvent, HostEventKind};
use crate::domain::keybinding::{self, Action, Keybind};
use crate::domain::navigation::{HOME_LINK, NavigationIntent};
use crate::domain::ports::{HostEventBus, LocationProvider, NavigationDispatcher, Subscription};
use crate::infrastructure::config::{BarConfig, BarPosition};
use crate::presentation::events::{EventResult, is_key_press, is_left_click};
use crate::presentation::theme::Theme;

/// Width of the bar when it floats over the content.
pub const FLOATING_WIDTH: u16 = 60;

/// Where the bar and the content go within the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavBarLayout {
    /// Rows taken by the bar itself.
    pub bar: Rect,
    /// Area left for the client content. A floating bar overlaps it.
    pub content: Rect,
}

impl NavBarLayout {
    /// Splits `area` according to the configured position and height.
    #[must_use]
    pub fn compute(area: Rect, config: &BarConfig) -> Self {
        let rows = config.rows().min(area.height);

        match config.position {
            BarPosition::Top => {
                let [bar, content] =
                    Layout::vertical([Constraint::Length(rows), Constraint::Fill(1)]).areas(area);
                Self { bar, content }
            }
            BarPosition::Bottom => {
                let [content, bar] =
                    Layout::vertical([Constraint::Fill(1), Constraint::Length(rows)]).areas(area);
                Self { bar, content }
            }
            BarPosition::Floating => {
                let width = FLOATING_WIDTH.min(area.width);
                let x = area.x + (area.width - width) / 2;
                Self {
                    bar: Rect::new(x, area.y, width, rows),
                    content: area,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
struct HitAreas {
    buttons: Vec<(NavButtonKind, Rect)>,
    input: Rect,
    suggestions: Option<Rect>,
}

/// Everything the navigation bar keeps between frames.
pub struct NavBarState {
    config: BarConfig,
    resolver: LocationResolver,
    navigate: NavigateUseCase,
    history: HistoryController,
    suggestions: SuggestionService,
    input: UrlInput,
    current_link: String,
    status: Option<StatusMessage>,
    host_events: Option<mpsc::UnboundedReceiver<HostEvent>>,
    subscription: Option<Subscription>,
    bar_keys: Vec<Keybind>,
    input_keys: Vec<Keybind>,
    hit: HitAreas,
}

impl NavBarState {
    /// Unmounted bar reading from `provider` and navigating through `dispatcher`.
    #[must_use]
    pub fn new(
        config: BarConfig,
        provider: Arc<dyn LocationProvider>,
        dispatcher: Arc<dyn NavigationDispatcher>,
    ) -> Self {
        Self {
            config,
            resolver: LocationResolver::new(provider),
            navigate: NavigateUseCase::new(dispatcher),
            history: HistoryController::new(),
            suggestions: SuggestionService::new(),
            input: UrlInput::new(),
            current_link: HOME_LINK.to_string(),
            status: None,
            host_events: None,
            subscription: None,
            bar_keys: keybinding::default_keybindings(),
            input_keys: keybinding::input_keybindings(),
            hit: HitAreas::default(),
        }
    }

    /// Subscribes to location changes and records where the client is now.
    /// History starts empty on every mount.
    pub fn mount(&mut self, bus: &dyn HostEventBus) {
        if self.is_mounted() {
            debug!("Navigation bar already mounted");
            return;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        self.subscription = Some(bus.subscribe(&HostEventKind::LOCATION_CHANGES, tx));
        self.host_events = Some(rx);
        self.history = HistoryController::new();
        self.sync_location();

        info!(link = %self.current_link, "Navigation bar mounted");
    }

    /// Cancels the host subscription and discards history.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
        self.host_events = None;
        self.history.clear();
        self.suggestions.reset();
        self.input.set_focused(false);
        self.status = None;

        info!("Navigation bar unmounted");
    }

    /// Whether a host subscription is live.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Receiver for host notifications, while mounted.
    pub fn host_events(&mut self) -> Option<&mut mpsc::UnboundedReceiver<HostEvent>> {
        self.host_events.as_mut()
    }

    /// Handles every notification already queued. Returns how many there were.
    pub fn drain_host_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.host_events.as_mut().and_then(|rx| rx.try_recv().ok()) {
            self.handle_host_event(&event);
            handled += 1;
        }
        handled
    }

    /// Any location notification re-reads the location from the host.
    pub fn handle_host_event(&mut self, event: &HostEvent) {
        trace!(?event, "Host location changed");
        self.sync_location();
    }

    /// Records the host's current location. The input is only overwritten
    /// while the user is not typing in it.
    pub fn sync_location(&mut self) {
        let link = self.resolver.current_link();
        let title = self.resolver.title_for(&link);

        if self.history.record_location(link.clone(), title) {
            debug!(link = %link, entries = self.history.len(), "Recorded location");
        }
        if !self.input.is_focused() {
            self.input.set_value(link.clone());
        }
        self.current_link = link;
    }

    /// Navigates to the previous history entry. The pointer only moves
    /// once the host has accepted the navigation.
    pub fn go_back(&mut self) -> bool {
        let Some(link) = self.history.peek_back().map(|entry| entry.link().to_owned()) else {
            return false;
        };
        let accepted = self.navigate_to(&link);
        if accepted {
            self.history.go_back();
        }
        accepted
    }

    /// Navigates to the next history entry, with the same rule as [`Self::go_back`].
    pub fn go_forward(&mut self) -> bool {
        let Some(link) = self.history.peek_forward().map(|entry| entry.link().to_owned()) else {
            return false;
        };
        let accepted = self.navigate_to(&link);
        if accepted {
            self.history.go_forward();
        }
        accepted
    }

    /// Re-resolves where the client is and navigates there again.
    pub fn refresh(&mut self) -> bool {
        let link = self.resolver.current_link();
        self.navigate_to(&link)
    }

    /// Navigates to the direct messages home.
    pub fn go_home(&mut self) -> bool {
        self.navigate_to(HOME_LINK)
    }

    /// Follows the highlighted suggestion, or the typed text when nothing
    /// is highlighted.
    pub fn submit(&mut self) -> bool {
        let target = self
            .suggestions
            .take_selected()
            .unwrap_or_else(|| self.input.value().trim().to_owned());

        if target.is_empty() {
            return false;
        }
        self.navigate_to(&target)
    }

    /// Hands `link` to the host. On failure the input goes back to the last
    /// valid link and the error is shown in the status line.
    pub fn navigate_to(&mut self, link: &str) -> bool {
        self.suggestions.reset();

        match self.navigate.execute(link) {
            Ok(NavigationIntent::OpenExternal { url }) => {
                self.status = Some(StatusMessage::info(format!("Opened {url} in the browser")));
                true
            }
            Ok(_) => {
                self.input.set_value(link);
                self.input.set_focused(false);
                self.current_link = link.to_owned();
                self.status = None;
                true
            }
            Err(e) => {
                self.input.set_value(self.current_link.clone());
                self.status = Some(if e.is_user_error() {
                    StatusMessage::warning(e.to_string())
                } else {
                    StatusMessage::error(e.to_string())
                });
                false
            }
        }
    }

    /// Moves focus to or away from the input. Losing focus closes the
    /// dropdown after a short delay so a click on a suggestion still lands.
    pub fn set_focus(&mut self, focused: bool, now: Instant) {
        if focused == self.input.is_focused() {
            return;
        }
        self.input.set_focused(focused);
        if focused {
            self.suggestions.show_if_any();
        } else {
            self.suggestions.schedule_dismiss(now);
        }
    }

    /// Applies time-based state. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.suggestions.tick(now)
    }

    /// Bar shortcuts first, then the input while it has focus.
    pub fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if !is_key_press(key) {
            return EventResult::Continue;
        }

        let bindings = if self.input.is_focused() {
            &self.input_keys
        } else {
            &self.bar_keys
        };
        if let Some(action) = keybinding::resolve(bindings, key) {
            return self.apply(action);
        }

        if !self.input.is_focused() {
            return EventResult::Continue;
        }
        if self.input.handle_key(key) == InputChange::Edited {
            self.suggestions
                .update(self.input.value(), self.history.entries());
        }
        EventResult::Consumed
    }

    fn apply(&mut self, action: Action) -> EventResult {
        match action {
            Action::Quit => return EventResult::Exit,
            Action::GoBack => {
                self.go_back();
            }
            Action::GoForward => {
                self.go_forward();
            }
            Action::Refresh => {
                self.refresh();
            }
            Action::GoHome => {
                self.go_home();
            }
            Action::FocusInput => self.set_focus(true, Instant::now()),
            Action::Submit => {
                self.submit();
            }
            Action::Cancel => {
                if self.suggestions.state().is_visible() {
                    self.suggestions.hide();
                } else {
                    self.set_focus(false, Instant::now());
                    self.input.set_value(self.current_link.clone());
                }
            }
            Action::NextSuggestion => self.suggestions.select_next(),
            Action::PreviousSuggestion => self.suggestions.select_previous(),
        }
        EventResult::Consumed
    }

    /// Handles a click using the areas of the last render.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) -> EventResult {
        if !is_left_click(mouse) {
            return EventResult::Continue;
        }
        let position = Position::new(mouse.column, mouse.row);

        if let Some(area) = self.hit.suggestions
            && area.contains(position)
            && self.suggestions.state().is_visible()
        {
            if let Some(index) =
                SuggestionsPopup::row_to_index(area, self.suggestions.state(), mouse.row)
            {
                self.suggestions.select(index);
                self.submit();
            }
            return EventResult::Consumed;
        }

        let clicked = self
            .hit
            .buttons
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(kind, _)| *kind);
        if let Some(kind) = clicked {
            match kind {
                NavButtonKind::Back => self.go_back(),
                NavButtonKind::Forward => self.go_forward(),
                NavButtonKind::Refresh => self.refresh(),
                NavButtonKind::Home => self.go_home(),
            };
            return EventResult::Consumed;
        }

        if self.hit.input.contains(position) {
            self.set_focus(true, now);
            return EventResult::Consumed;
        }

        self.set_focus(false, now);
        EventResult::Continue
    }

    #[must_use]
    pub const fn config(&self) -> &BarConfig {
        &self.config
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryController {
        &self.history
    }

    #[must_use]
    pub const fn input(&self) -> &UrlInput {
        &self.input
    }

    /// Current dropdown contents.
    #[must_use]
    pub fn suggestions(&self) -> &SuggestionState {
        self.suggestions.state()
    }

    /// Last location the host confirmed or the bar navigated to.
    #[must_use]
    pub fn current_link(&self) -> &str {
        &self.current_link
    }

    /// Title of the current location.
    #[must_use]
    pub fn current_title(&self) -> String {
        self.resolver.title_for(&self.current_link)
    }

    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Replaces the status line message.
    pub fn set_status(&mut self, status: Option<StatusMessage>) {
        self.status = status;
    }

    /// Keybindings worth listing in a help line.
    pub fn visible_keybindings(&self) -> impl Iterator<Item = &Keybind> {
        self.bar_keys.iter().filter(|binding| binding.visible_in_bar)
    }

    fn visible_buttons(&self) -> Vec<NavButtonKind> {
        let mut buttons = Vec::with_capacity(4);
        if self.config.show_history {
            buttons.extend([NavButtonKind::Back, NavButtonKind::Forward]);
        }
        if self.config.show_refresh {
            buttons.push(NavButtonKind::Refresh);
        }
        if self.config.show_home {
            buttons.push(NavButtonKind::Home);
        }
        buttons
    }

    fn is_enabled(&self, kind: NavButtonKind) -> bool {
        match kind {
            NavButtonKind::Back => self.history.can_go_back(),
            NavButtonKind::Forward => self.history.can_go_forward(),
            NavButtonKind::Refresh | NavButtonKind::Home => true,
        }
    }
}

impl Drop for NavBarState {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.unmount();
        }
    }
}

/// Dropdown placement: under the input for a top or floating bar, above it
/// for a bottom bar. `None` when there is no room for a single row.
fn suggestions_area(
    frame: Rect,
    bar: Rect,
    input: Rect,
    position: BarPosition,
    wanted: u16,
) -> Option<Rect> {
    let (y, height) = match position {
        BarPosition::Top | BarPosition::Floating => {
            let y = bar.bottom();
            (y, wanted.min(frame.bottom().saturating_sub(y)))
        }
        BarPosition::Bottom => {
            let height = wanted.min(bar.y.saturating_sub(frame.y));
            (bar.y - height, height)
        }
    };

    (height >= 3).then(|| Rect::new(input.x, y, input.width, height))
}

/// Draws the bar into the frame area given to it, along with the dropdown.
pub struct NavBar<'a> {
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl StatefulWidget for NavBar<'_> {
    type State = NavBarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let position = state.config.position;
        let bar = NavBarLayout::compute(area, &state.config).bar;

        if position == BarPosition::Floating {
            Clear.render(bar, buf);
        }
        Block::default().style(self.theme.bar_style).render(bar, buf);

        let buttons = state.visible_buttons();
        let constraints = buttons
            .iter()
            .map(|_| Constraint::Length(BUTTON_WIDTH))
            .chain(iter::once(Constraint::Fill(1)));
        let areas = Layout::horizontal(constraints).split(bar);

        state.hit.buttons.clear();
        for (kind, rect) in buttons.iter().zip(areas.iter()) {
            NavButton::new(*kind, self.theme)
                .enabled(state.is_enabled(*kind))
                .render(*rect, buf);
            state.hit.buttons.push((*kind, *rect));
        }

        let input_area = areas[buttons.len()];
        UrlInputView::new(&state.input, self.theme).render(input_area, buf);
        state.hit.input = input_area;

        let suggestions = state.suggestions.state();
        state.hit.suggestions = if suggestions.is_visible() {
            suggestions_area(
                area,
                bar,
                input_area,
                position,
                SuggestionsPopup::height_for(suggestions),
            )
        } else {
            None
        };

        if let Some(popup) = state.hit.suggestions {
            SuggestionsPopup::new(suggestions, self.theme).render(popup, buf);
        }
    }
}
