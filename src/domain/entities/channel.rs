//! Channels as far as navigation cares: id, owning guild, name and kind.

use serde::{Deserialize, Serialize};

use super::GuildId;
pub use super::snowflake::ChannelId;

/// Decides how a channel is labelled and which selection slot it occupies
/// in the host (voice channels are tracked apart from text channels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelKind {
    #[default]
    Text,
    Voice,
    Dm,
}

impl ChannelKind {
    #[must_use]
    pub const fn is_voice(self) -> bool {
        matches!(self, Self::Voice)
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Text => "#",
            Self::Voice => "🔊",
            Self::Dm => "@",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    id: ChannelId,
    guild_id: Option<GuildId>,
    name: String,
    kind: ChannelKind,
}

impl Channel {
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            id: id.into(),
            guild_id: None,
            name: name.into(),
            kind,
        }
    }

    /// Attaches the channel to a guild. Channels without one are DMs.
    #[must_use]
    pub fn with_guild(self, guild_id: impl Into<GuildId>) -> Self {
        Self {
            guild_id: Some(guild_id.into()),
            ..self
        }
    }

    #[must_use]
    pub const fn id(&self) -> ChannelId {
        self.id
    }

    #[must_use]
    pub const fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    /// Bare name, as used in `<Guild> - <Channel>` titles.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// Name with its kind marker, for lists: `#general`, `🔊Lounge`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.name)
    }
}
