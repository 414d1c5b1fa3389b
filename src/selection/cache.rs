//! Side cache of selection state for unbound tabs.
//!
//! When the user switches away from an unbound (selector) tab, its full
//! selection state is snapshotted here keyed by tab id and restored verbatim
//! on re-entry. Both call sites (tab switch and tab removal) run on the
//! single UI thread; the only discipline required is ordering:
//! save-before-switch, restore-after-switch, purge-on-removal.

use std::collections::HashMap;

use crate::selection::SelectionState;
use crate::tab::TabId;

/// Per-tab saved selection states.
#[derive(Debug, Default)]
pub struct SelectionCache {
    entries: HashMap<TabId, SelectionState>,
}

impl SelectionCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the selection state of an outgoing unbound tab.
    pub fn save(&mut self, tab_id: TabId, state: SelectionState) {
        self.entries.insert(tab_id, state);
    }

    /// Take the saved state for a tab being re-entered, if any.
    pub fn restore(&mut self, tab_id: TabId) -> Option<SelectionState> {
        self.entries.remove(&tab_id)
    }

    /// Drop the entry for a removed tab.
    pub fn purge(&mut self, tab_id: TabId) {
        self.entries.remove(&tab_id);
    }

    /// Drop every entry whose tab is no longer part of the collection
    /// (wholesale host replacement).
    pub fn retain(&mut self, live: &std::collections::HashSet<TabId>) {
        self.entries.retain(|id, _| live.contains(id));
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
