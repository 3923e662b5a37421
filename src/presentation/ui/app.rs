//! Main application orchestrator.

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use super::client_screen::{ClientScreen, Destination};
use super::utils::help_line;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::host::InMemoryHost;
use crate::presentation::events::{EventResult, is_key_press};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{NavBar, NavBarLayout, NavBarState, StatusBar, StatusMessage};

/// Drives pending dropdown dismissal; well under the dismissal delay.
const TICK_RATE: Duration = Duration::from_millis(50);
const MAX_DESTINATIONS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Terminal front end hosting the navigation bar over an in-memory client.
pub struct App {
    state: AppState,
    host: InMemoryHost,
    nav_bar: NavBarState,
    destinations: Vec<Destination>,
    theme: Theme,
    mouse: bool,
    hints: String,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig, host: InMemoryHost) -> Self {
        let nav_bar = NavBarState::new(
            config.bar.clone(),
            std::sync::Arc::new(host.clone()),
            std::sync::Arc::new(host.clone()),
        );

        let destinations: Vec<Destination> = host
            .guilds()
            .iter()
            .flat_map(|guild| {
                host.channels_of(guild.id())
                    .into_iter()
                    .map(move |channel| Destination::new(guild, &channel))
            })
            .take(MAX_DESTINATIONS)
            .collect();

        let hints = format!(
            "{} · 1-9 Open channel · m Mount",
            help_line(nav_bar.visible_keybindings())
        );

        Self {
            state: AppState::Running,
            host,
            nav_bar,
            destinations,
            theme: Theme::new(&config.theme.accent_color),
            mouse: config.mouse,
            hints,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.nav_bar.mount(&self.host);

        let result = self.run_event_loop(terminal).await;

        self.nav_bar.unmount();
        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let host_event = match self.nav_bar.host_events() {
                Some(rx) => Either::Left(rx.recv()),
                None => Either::Right(std::future::pending()),
            };
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(event) = host_event => {
                    self.nav_bar.handle_host_event(&event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = tick_interval.tick() => {
                    if self.nav_bar.tick(Instant::now()) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(&key),
            Event::Mouse(mouse) if self.mouse => self.nav_bar.handle_mouse(&mouse, Instant::now()),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if !self.nav_bar.is_mounted() {
            return self.handle_content_key(key);
        }

        let result = self.nav_bar.handle_key(key);
        if result.is_handled() {
            return result;
        }
        self.handle_content_key(key)
    }

    /// Keys the client content reacts to when the bar lets them through.
    fn handle_content_key(&mut self, key: &KeyEvent) -> EventResult {
        if !is_key_press(key) || key.modifiers != KeyModifiers::NONE {
            return EventResult::Continue;
        }

        match key.code {
            KeyCode::Char('q') => EventResult::Exit,
            KeyCode::Char('m') => {
                self.toggle_mount();
                EventResult::Consumed
            }
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|digit| usize::try_from(digit).ok())
                .and_then(|digit| digit.checked_sub(1))
                .and_then(|index| self.destinations.get(index))
                .map_or(EventResult::Continue, |destination| {
                    debug!(channel = %destination.label, "Opening channel from content");
                    self.host
                        .select(Some(destination.guild_id), Some(destination.channel_id));
                    EventResult::Consumed
                }),
            _ => EventResult::Continue,
        }
    }

    fn toggle_mount(&mut self) {
        if self.nav_bar.is_mounted() {
            self.nav_bar.unmount();
        } else {
            self.nav_bar.mount(&self.host);
            self.nav_bar
                .set_status(Some(StatusMessage::info("Navigation bar mounted, history reset")));
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [main, status_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let layout = NavBarLayout::compute(main, self.nav_bar.config());

        frame.render_widget(
            ClientScreen::new(&self.nav_bar, &self.destinations, &self.theme),
            layout.content,
        );

        if self.nav_bar.is_mounted() {
            frame.render_stateful_widget(NavBar::new(&self.theme), main, &mut self.nav_bar);
        }

        frame.render_widget(
            StatusBar::new(self.nav_bar.status()).hints(&self.hints),
            status_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ChannelId;
    use crate::domain::ports::LocationProvider;

    fn app() -> App {
        let mut app = App::new(&AppConfig::default(), InMemoryHost::demo());
        app.nav_bar.mount(&app.host);
        app
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_destinations_from_host() {
        let app = app();

        assert_eq!(app.destinations.len(), 6);
        assert_eq!(app.destinations[0].label, "Rustaceans › #general");
    }

    #[test]
    fn test_digit_opens_channel_in_host() {
        let mut app = app();

        assert_eq!(app.handle_key(&key('2')), EventResult::Consumed);
        app.nav_bar.drain_host_events();

        assert_eq!(app.host.current_channel_id(), Ok(Some(ChannelId(2_002))));
        assert_eq!(app.nav_bar.history().len(), 2);
    }

    #[test]
    fn test_digits_go_to_input_while_focused() {
        let mut app = app();
        app.handle_key(&KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));

        assert_eq!(app.handle_key(&key('2')), EventResult::Consumed);

        assert_eq!(app.host.current_channel_id(), Ok(None));
        assert!(app.nav_bar.input().value().ends_with('2'));
    }

    #[test]
    fn test_toggle_mount() {
        let mut app = app();
        assert_eq!(app.host.subscriber_count(), 1);

        app.handle_key(&key('m'));
        assert!(!app.nav_bar.is_mounted());
        assert_eq!(app.host.subscriber_count(), 0);

        app.handle_key(&key('m'));
        assert!(app.nav_bar.is_mounted());
        assert_eq!(app.host.subscriber_count(), 1);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert_eq!(app.handle_key(&key('q')), EventResult::Exit);
    }
}
