use serde::{Deserialize, Serialize};

pub use super::snowflake::GuildId;

/// A server the host knows by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guild {
    id: GuildId,
    name: String,
}

impl Guild {
    #[must_use]
    pub fn new(id: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> GuildId {
        self.id
    }

    /// Name shown in titles, e.g. the `Rustaceans` of `Rustaceans - general`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
