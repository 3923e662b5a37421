//! Bounded navigation history with a back/forward pointer.

use std::collections::VecDeque;

use tracing::trace;

use crate::domain::entities::HistoryEntry;

/// Maximum number of entries kept; the oldest is evicted beyond this.
pub const HISTORY_CAPACITY: usize = 50;

/// Owns the visited locations and the position the user is at.
///
/// Entries are ordered oldest to newest. Moving back and forward only moves
/// the pointer; new entries are created solely by [`record_location`].
///
/// [`record_location`]: HistoryController::record_location
#[derive(Debug, Clone)]
pub struct HistoryController {
    entries: VecDeque<HistoryEntry>,
    current_index: usize,
}

impl Default for HistoryController {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
            current_index: 0,
        }
    }

    /// Records a visit to `link`.
    ///
    /// Nothing is appended when `link` is the entry under the pointer, which
    /// is what the host reports after replaying a back/forward step. When the
    /// pointer sits behind the newest entry and `link` is that newest entry,
    /// the pointer jumps to it instead of duplicating it. Otherwise a new entry
    /// is appended, the oldest evicted past [`HISTORY_CAPACITY`], and the
    /// pointer moved to the new entry.
    ///
    /// Returns true if an entry was appended.
    pub fn record_location(&mut self, link: impl Into<String>, title: impl Into<String>) -> bool {
        self.record(HistoryEntry::new(link, title))
    }

    /// Records a prebuilt entry, with the same rules as [`record_location`].
    ///
    /// [`record_location`]: HistoryController::record_location
    pub fn record(&mut self, entry: HistoryEntry) -> bool {
        if self.current().is_some_and(|current| current.link() == entry.link()) {
            trace!(link = entry.link(), "Location unchanged");
            return false;
        }

        if let Some(newest) = self.entries.back()
            && newest.link() == entry.link()
        {
            self.current_index = self.entries.len() - 1;
            trace!(link = entry.link(), "Returned to newest entry");
            return false;
        }

        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        self.current_index = self.entries.len() - 1;
        true
    }

    /// Steps back one entry. Returns the entry now pointed at, or `None` when
    /// already at the oldest entry.
    pub fn go_back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.current_index -= 1;
        self.current()
    }

    /// Steps forward one entry. Returns the entry now pointed at, or `None`
    /// when already at the newest entry.
    pub fn go_forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.current_index += 1;
        self.current()
    }

    /// Entry one step back, without moving the pointer.
    #[must_use]
    pub fn peek_back(&self) -> Option<&HistoryEntry> {
        self.current_index
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    /// Entry one step forward, without moving the pointer.
    #[must_use]
    pub fn peek_forward(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.current_index + 1)
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.current_index + 1 < self.entries.len()
    }

    /// Entry under the pointer.
    #[must_use]
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.current_index)
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_index = 0;
    }
}
