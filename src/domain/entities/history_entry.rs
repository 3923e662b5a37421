//! Navigation history entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visited location, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    link: String,
    title: String,
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(link: impl Into<String>, title: impl Into<String>) -> Self {
        Self::at(link, title, Utc::now())
    }

    /// Creates an entry with an explicit timestamp.
    #[must_use]
    pub fn at(link: impl Into<String>, title: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            link: link.into(),
            title: title.into(),
            timestamp,
        }
    }

    /// Canonical link of the visited location.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Human readable title resolved when the entry was recorded.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Case-insensitive substring match on link or title.
    ///
    /// `lower_query` must already be lowercased.
    #[must_use]
    pub fn matches(&self, lower_query: &str) -> bool {
        self.link.to_lowercase().contains(lower_query)
            || self.title.to_lowercase().contains(lower_query)
    }
}
