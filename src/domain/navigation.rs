//! Canonical links and navigation intents.

use crate::domain::entities::{ChannelId, GuildId, Location};

/// Domain the client serves its deep links from.
pub const CLIENT_DOMAIN: &str = "discord.com";

/// Link of the direct messages home.
pub const HOME_LINK: &str = "https://discord.com/@me";

/// Destinations always offered as suggestions.
pub const WELL_KNOWN_DESTINATIONS: [&str; 4] = [
    HOME_LINK,
    "https://discord.com/channels",
    "https://discord.com/settings",
    "https://discord.com/invite",
];

/// Title shown for the direct messages home.
pub const HOME_TITLE: &str = "Direct Messages";
/// Title shown when a link cannot be interpreted.
pub const FALLBACK_TITLE: &str = "Discord";
/// Placeholder for a guild that does not resolve.
pub const UNKNOWN_GUILD: &str = "Unknown Server";
/// Placeholder for a channel that does not resolve.
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

/// Returns the canonical link of a guild.
#[must_use]
pub fn guild_link(guild_id: GuildId) -> String {
    format!("https://{CLIENT_DOMAIN}/channels/{guild_id}")
}

/// Returns the canonical link of a channel inside a guild.
#[must_use]
pub fn channel_link(guild_id: GuildId, channel_id: ChannelId) -> String {
    format!("https://{CLIENT_DOMAIN}/channels/{guild_id}/{channel_id}")
}

/// Instruction handed to the host to move the client somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Select a channel and, implicitly, its guild.
    SelectChannel {
        guild_id: GuildId,
        channel_id: ChannelId,
    },
    /// Select a guild without a channel.
    SelectGuild { guild_id: GuildId },
    /// Clear the channel selection, landing on the direct messages home.
    ClearChannel,
    /// Same-domain link with no navigation attached.
    None,
    /// Link outside the client; the host environment should open it.
    OpenExternal { url: String },
}

impl NavigationIntent {
    /// Returns the location this intent leads to, if it stays inside the client.
    #[must_use]
    pub const fn target(&self) -> Option<Location> {
        match self {
            Self::SelectChannel {
                guild_id,
                channel_id,
            } => Some(Location::channel(*guild_id, *channel_id)),
            Self::SelectGuild { guild_id } => Some(Location::guild(*guild_id)),
            Self::ClearChannel => Some(Location::home()),
            Self::None | Self::OpenExternal { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_builders() {
        assert_eq!(guild_link(GuildId(1)), "https://discord.com/channels/1");
        assert_eq!(
            channel_link(GuildId(1), ChannelId(2)),
            "https://discord.com/channels/1/2"
        );
    }

    #[test]
    fn test_well_known_destinations_share_domain() {
        for link in WELL_KNOWN_DESTINATIONS {
            assert!(link.contains(CLIENT_DOMAIN));
        }
    }

    #[test]
    fn test_intent_target() {
        assert_eq!(
            NavigationIntent::SelectGuild {
                guild_id: GuildId(5)
            }
            .target(),
            Some(Location::guild(GuildId(5)))
        );
        assert_eq!(NavigationIntent::ClearChannel.target(), Some(Location::home()));
        assert_eq!(NavigationIntent::None.target(), None);
    }
}
