//! Domain entity definitions.

mod channel;
mod guild;
mod history_entry;
mod location;
mod snowflake;

pub use channel::{Channel, ChannelId, ChannelKind};
pub use guild::{Guild, GuildId};
pub use history_entry::HistoryEntry;
pub use location::Location;
