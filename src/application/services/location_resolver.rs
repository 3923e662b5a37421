//! Conversion between host locations, canonical links and navigation intents.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::domain::entities::{ChannelId, GuildId, Location};
use crate::domain::errors::{HostError, NavigationError};
use crate::domain::navigation::{
    CLIENT_DOMAIN, FALLBACK_TITLE, HOME_LINK, HOME_TITLE, NavigationIntent, UNKNOWN_CHANNEL,
    UNKNOWN_GUILD, channel_link, guild_link,
};
use crate::domain::ports::LocationProvider;

const CHANNELS_SEGMENT: &str = "channels";
const HOME_SEGMENT: &str = "@me";

/// Path of a same-domain link, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkPath<'a> {
    Channel(&'a str, &'a str),
    Guild(&'a str),
    Home,
    Other,
}

impl<'a> LinkPath<'a> {
    fn classify(segments: &[&'a str]) -> Self {
        match segments {
            [CHANNELS_SEGMENT, HOME_SEGMENT, ..] | [HOME_SEGMENT, ..] => Self::Home,
            [CHANNELS_SEGMENT, guild, channel, ..] => Self::Channel(*guild, *channel),
            [CHANNELS_SEGMENT, guild] => Self::Guild(*guild),
            _ => Self::Other,
        }
    }
}

fn path_segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

fn parse_guild_id(segment: &str) -> Result<GuildId, NavigationError> {
    segment
        .parse()
        .map_err(|_| NavigationError::invalid_snowflake(segment))
}

fn parse_channel_id(segment: &str) -> Result<ChannelId, NavigationError> {
    segment
        .parse()
        .map_err(|_| NavigationError::invalid_snowflake(segment))
}

/// Resolves host locations to canonical links and back.
pub struct LocationResolver {
    provider: Arc<dyn LocationProvider>,
}

impl LocationResolver {
    #[must_use]
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        Self { provider }
    }

    /// Reads the current location from the host.
    ///
    /// A connected voice channel takes precedence over the selected text
    /// channel. Lookup failures yield the home location.
    #[must_use]
    pub fn current_location(&self) -> Location {
        self.try_current_location().unwrap_or_else(|err| {
            debug!(error = %err, "Could not read current location, assuming home");
            Location::home()
        })
    }

    fn try_current_location(&self) -> Result<Location, HostError> {
        let guild_id = self.provider.current_guild_id()?;
        let channel_id = match self.provider.current_voice_channel_id()? {
            Some(voice) => Some(voice),
            None => self.provider.current_channel_id()?,
        };
        Ok(Location::from_parts(guild_id, channel_id))
    }

    /// Canonical link of the host's current location.
    #[must_use]
    pub fn current_link(&self) -> String {
        self.to_link(&self.current_location())
    }

    /// Canonical link of a location.
    ///
    /// A channel link is produced only when both the guild and the channel are
    /// known to the host. Lookup failures yield the home link.
    #[must_use]
    pub fn to_link(&self, location: &Location) -> String {
        self.try_link(location).unwrap_or_else(|err| {
            debug!(error = %err, ?location, "Location lookup failed, falling back to home");
            HOME_LINK.to_string()
        })
    }

    fn try_link(&self, location: &Location) -> Result<String, HostError> {
        if let (Some(guild_id), Some(channel_id)) = (location.guild_id(), location.channel_id()) {
            let guild = self.provider.guild(guild_id)?;
            let channel = self.provider.channel(channel_id)?;

            if guild.is_some() && channel.is_some() {
                return Ok(channel_link(guild_id, channel_id));
            }
        }

        Ok(location
            .guild_id()
            .map_or_else(|| HOME_LINK.to_string(), guild_link))
    }

    /// Human readable title of a link. Never fails; unreadable input yields a
    /// generic title.
    #[must_use]
    pub fn title_for(&self, link: &str) -> String {
        let Ok(url) = Url::parse(link) else {
            return FALLBACK_TITLE.to_string();
        };
        let segments = path_segments(&url);

        match LinkPath::classify(&segments) {
            LinkPath::Channel(guild, channel) => {
                format!("{} - {}", self.guild_name(guild), self.channel_name(channel))
            }
            LinkPath::Guild(guild) => self.guild_name(guild),
            LinkPath::Home => HOME_TITLE.to_string(),
            LinkPath::Other => FALLBACK_TITLE.to_string(),
        }
    }

    fn guild_name(&self, segment: &str) -> String {
        segment
            .parse::<GuildId>()
            .ok()
            .and_then(|id| self.provider.guild(id).ok().flatten())
            .map_or_else(|| UNKNOWN_GUILD.to_string(), |guild| guild.name().to_string())
    }

    fn channel_name(&self, segment: &str) -> String {
        segment
            .parse::<ChannelId>()
            .ok()
            .and_then(|id| self.provider.channel(id).ok().flatten())
            .map_or_else(
                || UNKNOWN_CHANNEL.to_string(),
                |channel| channel.name().to_string(),
            )
    }

    /// Parses a typed link into the intent it represents.
    ///
    /// # Errors
    /// Returns `NavigationError::InvalidUrl` if the input is not an absolute
    /// URL and `NavigationError::InvalidSnowflake` if a same-domain link carries
    /// a non-numeric guild or channel ID.
    pub fn parse(link: &str) -> Result<NavigationIntent, NavigationError> {
        let input = link.trim();
        let url = Url::parse(input).map_err(|err| NavigationError::invalid_url(input, err))?;

        if url.host_str() != Some(CLIENT_DOMAIN) {
            return Ok(NavigationIntent::OpenExternal {
                url: url.to_string(),
            });
        }

        let segments = path_segments(&url);
        let intent = match LinkPath::classify(&segments) {
            LinkPath::Channel(guild, channel) => NavigationIntent::SelectChannel {
                guild_id: parse_guild_id(guild)?,
                channel_id: parse_channel_id(channel)?,
            },
            LinkPath::Guild(guild) => NavigationIntent::SelectGuild {
                guild_id: parse_guild_id(guild)?,
            },
            LinkPath::Home => NavigationIntent::ClearChannel,
            LinkPath::Other => NavigationIntent::None,
        };

        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Channel, ChannelKind, Guild};
    use crate::domain::ports::mocks::MockLocationProvider;
    use test_case::test_case;

    const GUILD: GuildId = GuildId(100);
    const CHANNEL: ChannelId = ChannelId(200);

    fn known_provider() -> MockLocationProvider {
        let mut provider = MockLocationProvider::new();
        provider
            .expect_guild()
            .returning(|id| Ok((id == GUILD).then(|| Guild::new(GUILD, "Rustaceans"))));
        provider.expect_channel().returning(|id| {
            Ok((id == CHANNEL)
                .then(|| Channel::new(CHANNEL, "general", ChannelKind::Text).with_guild(GUILD)))
        });
        provider
    }

    fn failing_provider() -> MockLocationProvider {
        let mut provider = MockLocationProvider::new();
        provider
            .expect_guild()
            .returning(|_| Err(HostError::lookup("store unavailable")));
        provider
            .expect_channel()
            .returning(|_| Err(HostError::lookup("store unavailable")));
        provider
            .expect_current_guild_id()
            .returning(|| Err(HostError::lookup("store unavailable")));
        provider
    }

    fn resolver(provider: MockLocationProvider) -> LocationResolver {
        LocationResolver::new(Arc::new(provider))
    }

    #[test]
    fn test_to_link_channel() {
        let resolver = resolver(known_provider());

        assert_eq!(
            resolver.to_link(&Location::channel(GUILD, CHANNEL)),
            "https://discord.com/channels/100/200"
        );
    }

    #[test]
    fn test_to_link_unknown_channel_falls_back_to_guild() {
        let resolver = resolver(known_provider());

        assert_eq!(
            resolver.to_link(&Location::channel(GUILD, ChannelId(999))),
            "https://discord.com/channels/100"
        );
    }

    #[test]
    fn test_to_link_guild_only() {
        let resolver = resolver(known_provider());

        assert_eq!(
            resolver.to_link(&Location::guild(GUILD)),
            "https://discord.com/channels/100"
        );
    }

    #[test]
    fn test_to_link_channel_without_guild_is_home() {
        let resolver = resolver(known_provider());

        assert_eq!(
            resolver.to_link(&Location::from_parts(None, Some(CHANNEL))),
            HOME_LINK
        );
        assert_eq!(resolver.to_link(&Location::home()), HOME_LINK);
    }

    #[test]
    fn test_to_link_lookup_failure_is_home() {
        let resolver = resolver(failing_provider());

        assert_eq!(resolver.to_link(&Location::channel(GUILD, CHANNEL)), HOME_LINK);
        assert_eq!(resolver.current_link(), HOME_LINK);
    }

    #[test]
    fn test_current_location_prefers_voice_channel() {
        let mut provider = known_provider();
        provider
            .expect_current_guild_id()
            .returning(|| Ok(Some(GUILD)));
        provider
            .expect_current_voice_channel_id()
            .returning(|| Ok(Some(CHANNEL)));
        provider.expect_current_channel_id().never();
        let resolver = resolver(provider);

        assert_eq!(resolver.current_location(), Location::channel(GUILD, CHANNEL));
        assert_eq!(resolver.current_link(), "https://discord.com/channels/100/200");
    }

    #[test]
    fn test_current_location_uses_text_channel_without_voice() {
        let mut provider = known_provider();
        provider
            .expect_current_guild_id()
            .returning(|| Ok(Some(GUILD)));
        provider
            .expect_current_voice_channel_id()
            .returning(|| Ok(None));
        provider
            .expect_current_channel_id()
            .returning(|| Ok(Some(CHANNEL)));
        let resolver = resolver(provider);

        assert_eq!(resolver.current_location(), Location::channel(GUILD, CHANNEL));
    }

    #[test_case("https://discord.com/channels/100/200", "Rustaceans - general" ; "guild_and_channel")]
    #[test_case("https://discord.com/channels/100", "Rustaceans" ; "guild_only")]
    #[test_case("https://discord.com/@me", "Direct Messages" ; "home")]
    #[test_case("https://discord.com/channels/@me/5", "Direct Messages" ; "dm_channel")]
    #[test_case("https://discord.com/channels/1/200", "Unknown Server - general" ; "unknown_guild")]
    #[test_case("https://discord.com/channels/100/9", "Rustaceans - Unknown Channel" ; "unknown_channel")]
    #[test_case("https://discord.com/channels/x", "Unknown Server" ; "non_numeric_guild")]
    #[test_case("https://discord.com/settings", "Discord" ; "other_path")]
    #[test_case("not a link at all", "Discord" ; "malformed")]
    #[test_case("", "Discord" ; "empty")]
    fn test_title_for(link: &str, expected: &str) {
        let resolver = resolver(known_provider());

        assert_eq!(resolver.title_for(link), expected);
    }

    #[test]
    fn test_title_for_lookup_failure_uses_placeholders() {
        let resolver = resolver(failing_provider());

        assert_eq!(
            resolver.title_for("https://discord.com/channels/100/200"),
            "Unknown Server - Unknown Channel"
        );
    }

    #[test_case("https://discord.com/channels/1/2", NavigationIntent::SelectChannel { guild_id: GuildId(1), channel_id: ChannelId(2) } ; "channel")]
    #[test_case("https://discord.com/channels/1/2/3", NavigationIntent::SelectChannel { guild_id: GuildId(1), channel_id: ChannelId(2) } ; "message_link")]
    #[test_case("https://discord.com/channels/1", NavigationIntent::SelectGuild { guild_id: GuildId(1) } ; "guild")]
    #[test_case("https://discord.com/channels/1/", NavigationIntent::SelectGuild { guild_id: GuildId(1) } ; "trailing_slash")]
    #[test_case("https://discord.com/@me", NavigationIntent::ClearChannel ; "home")]
    #[test_case("https://discord.com/channels", NavigationIntent::None ; "channels_root")]
    #[test_case("https://discord.com/settings", NavigationIntent::None ; "settings")]
    #[test_case("  https://discord.com/@me  ", NavigationIntent::ClearChannel ; "surrounding_whitespace")]
    #[test_case("https://example.com/page", NavigationIntent::OpenExternal { url: "https://example.com/page".to_string() } ; "external")]
    #[test_case("https://canary.discord.com/channels/1", NavigationIntent::OpenExternal { url: "https://canary.discord.com/channels/1".to_string() } ; "other_subdomain")]
    fn test_parse(link: &str, expected: NavigationIntent) {
        assert_eq!(LocationResolver::parse(link), Ok(expected));
    }

    #[test_case("disc" ; "partial_word")]
    #[test_case("discord.com/@me" ; "missing_scheme")]
    #[test_case("" ; "empty")]
    #[test_case("https://" ; "empty_host")]
    fn test_parse_rejects_malformed_input(link: &str) {
        let err = LocationResolver::parse(link).unwrap_err();
        assert!(matches!(err, NavigationError::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric_ids() {
        assert_eq!(
            LocationResolver::parse("https://discord.com/channels/abc/2"),
            Err(NavigationError::invalid_snowflake("abc"))
        );
        assert_eq!(
            LocationResolver::parse("https://discord.com/channels/1/general"),
            Err(NavigationError::invalid_snowflake("general"))
        );
    }

    #[test]
    fn test_parse_round_trips_to_link() {
        let resolver = resolver(known_provider());

        let channel = resolver.to_link(&Location::channel(GUILD, CHANNEL));
        assert_eq!(
            LocationResolver::parse(&channel).map(|intent| intent.target()),
            Ok(Some(Location::channel(GUILD, CHANNEL)))
        );

        let guild = resolver.to_link(&Location::guild(GUILD));
        assert_eq!(
            LocationResolver::parse(&guild),
            Ok(NavigationIntent::SelectGuild { guild_id: GUILD })
        );

        let home = resolver.to_link(&Location::home());
        assert_eq!(LocationResolver::parse(&home), Ok(NavigationIntent::ClearChannel));
    }
}
