//! Current client location.

use serde::{Deserialize, Serialize};

use super::{ChannelId, GuildId};

/// Snapshot of where the user currently is in the client.
///
/// An empty location means the user is on the direct messages home.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    guild_id: Option<GuildId>,
    channel_id: Option<ChannelId>,
}

impl Location {
    /// Location of the direct messages home.
    #[must_use]
    pub const fn home() -> Self {
        Self {
            guild_id: None,
            channel_id: None,
        }
    }

    /// Location of a guild without a selected channel.
    #[must_use]
    pub const fn guild(guild_id: GuildId) -> Self {
        Self {
            guild_id: Some(guild_id),
            channel_id: None,
        }
    }

    /// Location of a channel inside a guild.
    #[must_use]
    pub const fn channel(guild_id: GuildId, channel_id: ChannelId) -> Self {
        Self {
            guild_id: Some(guild_id),
            channel_id: Some(channel_id),
        }
    }

    /// Builds a location from optional parts as reported by the host.
    #[must_use]
    pub const fn from_parts(guild_id: Option<GuildId>, channel_id: Option<ChannelId>) -> Self {
        Self {
            guild_id,
            channel_id,
        }
    }

    #[must_use]
    pub const fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    #[must_use]
    pub const fn channel_id(&self) -> Option<ChannelId> {
        self.channel_id
    }
}
