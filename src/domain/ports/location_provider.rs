//! Read access to the host's location stores.

use crate::domain::entities::{Channel, ChannelId, Guild, GuildId};
use crate::domain::errors::HostError;

/// Port over the host's selected-channel and guild stores.
///
/// Every lookup may fail or come back empty; callers treat both the same.
#[cfg_attr(test, mockall::automock)]
pub trait LocationProvider: Send + Sync {
    /// Guild the user currently has selected.
    fn current_guild_id(&self) -> Result<Option<GuildId>, HostError>;

    /// Voice channel the user is connected to, if any.
    fn current_voice_channel_id(&self) -> Result<Option<ChannelId>, HostError>;

    /// Text channel the user currently has selected.
    fn current_channel_id(&self) -> Result<Option<ChannelId>, HostError>;

    /// Looks up a guild by ID.
    fn guild(&self, id: GuildId) -> Result<Option<Guild>, HostError>;

    /// Looks up a channel by ID.
    fn channel(&self, id: ChannelId) -> Result<Option<Channel>, HostError>;
}
