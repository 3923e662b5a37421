//! Stand-in for the client content under the navigation bar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use super::utils::format_time;
use crate::domain::entities::{Channel, ChannelId, Guild, GuildId};
use crate::domain::navigation::channel_link;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::NavBarState;

/// Channel the user can jump to from the content pane with a digit key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub label: String,
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
}

impl Destination {
    #[must_use]
    pub fn new(guild: &Guild, channel: &Channel) -> Self {
        Self {
            label: format!("{} › {}", guild.name(), channel.display_name()),
            guild_id: guild.id(),
            channel_id: channel.id(),
        }
    }

    #[must_use]
    pub fn link(&self) -> String {
        channel_link(self.guild_id, self.channel_id)
    }
}

/// Content pane: where the client is, the channels to visit and the
/// navigation history with its pointer.
pub struct ClientScreen<'a> {
    nav_bar: &'a NavBarState,
    destinations: &'a [Destination],
    theme: &'a Theme,
}

impl<'a> ClientScreen<'a> {
    #[must_use]
    pub const fn new(
        nav_bar: &'a NavBarState,
        destinations: &'a [Destination],
        theme: &'a Theme,
    ) -> Self {
        Self {
            nav_bar,
            destinations,
            theme,
        }
    }

    fn destination_items(&self) -> Vec<ListItem<'a>> {
        let current = self.nav_bar.current_link();
        self.destinations
            .iter()
            .enumerate()
            .map(|(index, destination)| {
                let style = if destination.link() == current {
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    self.theme.base_style
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", index + 1), self.theme.dimmed_style),
                    Span::styled(destination.label.as_str(), style),
                ]))
            })
            .collect()
    }

    fn history_items(&self) -> Vec<ListItem<'a>> {
        let history = self.nav_bar.history();
        history
            .entries()
            .enumerate()
            .map(|(index, entry)| {
                let at_pointer = index == history.current_index();
                let (marker, style) = if at_pointer {
                    ("▶ ", self.theme.selection_style)
                } else {
                    ("  ", self.theme.base_style)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(format_time(entry.timestamp()), self.theme.dimmed_style),
                    Span::raw(" "),
                    Span::styled(entry.title().to_owned(), style),
                    Span::raw("  "),
                    Span::styled(entry.link().to_owned(), self.theme.dimmed_style),
                ]))
            })
            .collect()
    }
}

impl Widget for ClientScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(format!(" {} ", self.nav_bar.current_title()))
            .title_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        block.render(area, buf);

        let [header, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);
        let [channels, history] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Location: ", self.theme.dimmed_style),
                Span::raw(self.nav_bar.current_link()),
            ]),
            Line::from(Span::styled(
                if self.nav_bar.is_mounted() {
                    "Navigation bar mounted"
                } else {
                    "Navigation bar unmounted"
                },
                self.theme.dimmed_style,
            )),
        ])
        .render(header, buf);

        List::new(self.destination_items())
            .block(Block::default().borders(Borders::TOP).title(" Channels "))
            .render(channels, buf);

        let title = format!(" History ({}) ", self.nav_bar.history().len());
        List::new(self.history_items())
            .block(Block::default().borders(Borders::TOP).title(title))
            .render(history, buf);
    }
}
