//! Host notifications the navigation bar listens to.

use crate::domain::entities::{ChannelId, GuildId};

/// Kind of host notification, used to filter subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    TransitionStart,
    ChannelSelect,
    GuildSelect,
}

impl HostEventKind {
    /// Every kind that signals a location change.
    pub const LOCATION_CHANGES: [Self; 3] =
        [Self::TransitionStart, Self::ChannelSelect, Self::GuildSelect];
}

/// Notification emitted by the host when the user moves around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A route transition started.
    TransitionStart { path: String },
    /// A channel was selected, or the selection was cleared.
    ChannelSelect {
        guild_id: Option<GuildId>,
        channel_id: Option<ChannelId>,
    },
    /// A guild was selected.
    GuildSelect { guild_id: GuildId },
}

impl HostEvent {
    #[must_use]
    pub const fn kind(&self) -> HostEventKind {
        match self {
            Self::TransitionStart { .. } => HostEventKind::TransitionStart,
            Self::ChannelSelect { .. } => HostEventKind::ChannelSelect,
            Self::GuildSelect { .. } => HostEventKind::GuildSelect,
        }
    }
}
