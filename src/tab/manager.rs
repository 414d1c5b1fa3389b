//! Tab manager coordinating the ordered tab collection and active pointer.

use std::collections::BTreeMap;

use tabdeck_registry::RegistryView;

use super::{DUPLICATE_SUFFIX, LayoutId, RenameState, Tab, TabId};

/// Owns the ordered collection of tabs and the active-tab pointer.
///
/// The collection is never empty and the active pointer always resolves to a
/// member: removal of the last tab synthesizes a fresh unbound tab, and any
/// wholesale replacement repairs the pointer. All operations are best-effort
/// local mutations; invariant violations are silent no-ops, not errors.
pub struct TabManager {
    /// All tabs in storage (creation/insertion) order.
    tabs: Vec<Tab>,
    /// Currently active tab ID; always a member of `tabs`.
    active_tab_id: TabId,
    /// Inline-rename state machine.
    rename: RenameState,
}

impl TabManager {
    /// Create a manager holding a single fresh unbound tab.
    pub fn new() -> Self {
        let tab = Tab::new_unbound();
        let active_tab_id = tab.id;
        Self {
            tabs: vec![tab],
            active_tab_id,
            rename: RenameState::Idle,
        }
    }

    /// Create a manager seeded with a specific first tab.
    pub fn with_first_tab(tab: Tab) -> Self {
        let active_tab_id = tab.id;
        Self {
            tabs: vec![tab],
            active_tab_id,
            rename: RenameState::Idle,
        }
    }

    /// Replace the whole collection (host-supplied controlled snapshot).
    ///
    /// Repairs the collection and active pointer: an empty snapshot gets a
    /// fresh unbound tab, and a vanished active id falls back to the first
    /// tab in display order.
    pub fn replace_tabs(&mut self, tabs: Vec<Tab>) {
        self.tabs = tabs;
        self.rename = RenameState::Idle;
        self.ensure_invariants();
        log::info!(
            "Replaced tab collection ({} tabs, active {})",
            self.tabs.len(),
            self.active_tab_id
        );
    }

    /// Repair the non-empty and active-membership invariants.
    fn ensure_invariants(&mut self) {
        if self.tabs.is_empty() {
            let tab = Tab::new_unbound();
            log::info!("Tab collection empty, synthesized fresh tab {}", tab.id);
            self.active_tab_id = tab.id;
            self.tabs.push(tab);
            return;
        }
        if !self.tabs.iter().any(|t| t.id == self.active_tab_id) {
            self.active_tab_id = self.display_ids()[0];
            log::debug!("Active tab vanished, fell back to {}", self.active_tab_id);
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// All tabs in storage order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// The active tab ID.
    pub fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    /// Reference to the active tab.
    pub fn active_tab(&self) -> &Tab {
        self.tabs
            .iter()
            .find(|t| t.id == self.active_tab_id)
            .expect("active tab is always a member")
    }

    /// Get a tab by ID.
    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a tab by ID.
    pub fn get_tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// Tab IDs in display order: pinned tabs first, otherwise stable.
    pub fn display_ids(&self) -> Vec<TabId> {
        let mut ids: Vec<TabId> = self
            .tabs
            .iter()
            .filter(|t| t.pinned)
            .map(|t| t.id)
            .collect();
        ids.extend(self.tabs.iter().filter(|t| !t.pinned).map(|t| t.id));
        ids
    }

    /// Tabs in display order.
    pub fn display_order(&self) -> Vec<&Tab> {
        self.display_ids()
            .iter()
            .filter_map(|id| self.get_tab(*id))
            .collect()
    }

    /// Number of tabs bound to the given layout.
    pub fn count_bound_to(&self, layout_id: &str) -> usize {
        self.tabs
            .iter()
            .filter(|t| t.layout_id.as_deref() == Some(layout_id))
            .count()
    }

    /// First tab bound to the given layout, in storage order.
    pub fn find_by_layout(&self, layout_id: &str) -> Option<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.layout_id.as_deref() == Some(layout_id))
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Create a new unbound tab, append it, and make it active.
    ///
    /// Returns `None` without creating anything when the tab limit is
    /// reached (`max_tabs <= 0` means unlimited).
    pub fn add_tab(&mut self, max_tabs: i32) -> Option<TabId> {
        if max_tabs > 0 && self.tabs.len() >= max_tabs as usize {
            log::warn!("Cannot create new tab: max_tabs limit ({max_tabs}) reached");
            return None;
        }

        let tab = Tab::new_unbound();
        let id = tab.id;
        self.tabs.push(tab);
        self.active_tab_id = id;
        log::info!("Created new tab {} (total: {})", id, self.tabs.len());
        Some(id)
    }

    /// Append an already-built tab (share-link spawn) and make it active.
    ///
    /// The same capacity gate as [`TabManager::add_tab`] applies.
    pub fn insert_tab(&mut self, tab: Tab, max_tabs: i32) -> Option<TabId> {
        if max_tabs > 0 && self.tabs.len() >= max_tabs as usize {
            log::warn!("Cannot insert tab: max_tabs limit ({max_tabs}) reached");
            return None;
        }
        let id = tab.id;
        self.tabs.push(tab);
        self.active_tab_id = id;
        log::info!("Inserted tab {} (total: {})", id, self.tabs.len());
        Some(id)
    }

    /// Remove a tab by ID. No-op for locked or unknown tabs.
    ///
    /// If the removed tab was active, activation falls to the tab
    /// immediately before it in display order, or the new first tab.
    /// Removing the last tab synthesizes a fresh unbound tab.
    ///
    /// Returns true if a tab was removed.
    pub fn remove_tab(&mut self, id: TabId) -> bool {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            return false;
        };
        if self.tabs[idx].locked {
            log::warn!("Refusing to remove locked tab {id}");
            return false;
        }

        // Activation fallback is decided against pre-removal display order.
        let display = self.display_ids();
        let display_pos = display.iter().position(|d| *d == id);

        if self.rename.is_editing(id) {
            self.rename = RenameState::Idle;
        }

        self.tabs.remove(idx);
        log::info!("Closed tab {} (remaining: {})", id, self.tabs.len());

        if self.active_tab_id == id && !self.tabs.is_empty() {
            self.active_tab_id = match display_pos {
                Some(pos) if pos > 0 => display[pos - 1],
                _ => self.display_ids()[0],
            };
            log::debug!("Activation fell to tab {}", self.active_tab_id);
        }

        self.ensure_invariants();
        true
    }

    /// Set the active pointer. Returns true if the active tab changed.
    pub fn select_tab(&mut self, id: TabId) -> bool {
        if self.active_tab_id == id || !self.tabs.iter().any(|t| t.id == id) {
            return false;
        }
        self.active_tab_id = id;
        log::debug!("Switched to tab {id}");
        true
    }

    /// Switch to the next tab in display order (wraps around).
    pub fn next_tab(&mut self) {
        self.cycle(1);
    }

    /// Switch to the previous tab in display order (wraps around).
    pub fn prev_tab(&mut self) {
        self.cycle(-1);
    }

    fn cycle(&mut self, direction: i32) {
        if self.tabs.len() <= 1 {
            return;
        }
        let display = self.display_ids();
        let current = display
            .iter()
            .position(|d| *d == self.active_tab_id)
            .unwrap_or(0);
        let len = display.len() as i32;
        let next = (current as i32 + direction).rem_euclid(len) as usize;
        self.select_tab(display[next]);
    }

    /// Switch to a tab by display-order index (1-based).
    pub fn select_index(&mut self, index: usize) {
        let display = self.display_ids();
        if index > 0 && index <= display.len() {
            self.select_tab(display[index - 1]);
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Rename a tab. No-op for locked tabs and for names that trim empty.
    pub fn rename_tab(&mut self, id: TabId, name: &str) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return;
        }
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if tab.locked {
            log::warn!("Refusing to rename locked tab {id}");
            return;
        }
        tab.name = trimmed.to_string();
        log::debug!("Renamed tab {id} to {trimmed:?}");
    }

    /// Lock a tab. Requires a bound layout (the selector view cannot lock).
    pub fn lock_tab(&mut self, id: TabId) {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if !tab.is_bound() {
            log::warn!("Refusing to lock selector tab {id}");
            return;
        }
        tab.locked = true;
        log::debug!("Locked tab {id}");
    }

    /// Unlock a tab. Unconditional.
    pub fn unlock_tab(&mut self, id: TabId) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.locked = false;
            log::debug!("Unlocked tab {id}");
        }
    }

    /// Set the pinned flag. Storage order is untouched; only display order
    /// (pinned-first, stable otherwise) changes.
    pub fn pin_tab(&mut self, id: TabId, pinned: bool) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.pinned = pinned;
            log::debug!("Tab {id} pinned = {pinned}");
        }
    }

    /// Bind a layout to a tab, setting the display name and any collected
    /// parameters.
    ///
    /// Refused for locked tabs and for layouts with `allow_multiple = false`
    /// that some *other* tab is already bound to. Returns true on binding.
    pub fn update_tab_layout(
        &mut self,
        id: TabId,
        registry: &RegistryView,
        layout_id: LayoutId,
        name: impl Into<String>,
        layout_params: Option<BTreeMap<String, String>>,
        layout_param_option_key: Option<String>,
    ) -> bool {
        let exclusive = registry
            .get(&layout_id)
            .is_some_and(|meta| !meta.allow_multiple);
        if exclusive
            && self
                .tabs
                .iter()
                .any(|t| t.id != id && t.layout_id.as_deref() == Some(layout_id.as_str()))
        {
            log::warn!("Refusing second binding of exclusive layout {layout_id:?}");
            return false;
        }

        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if tab.locked {
            log::warn!("Refusing layout change on locked tab {id}");
            return false;
        }

        tab.name = name.into();
        tab.layout_id = Some(layout_id);
        tab.layout_params = layout_params;
        tab.layout_param_option_key = layout_param_option_key;
        tab.loading = true;
        log::info!(
            "Bound layout {:?} to tab {id}",
            tab.layout_id.as_deref().unwrap_or_default()
        );
        true
    }

    /// Duplicate a tab: new id, fresh timestamp, name suffixed, lock/pin
    /// reset, inserted immediately after the source, activated.
    ///
    /// Refused when the source layout disallows multiple instances; a copy
    /// would violate exclusivity.
    pub fn duplicate_tab(&mut self, registry: &RegistryView, id: TabId) -> Option<TabId> {
        let idx = self.tabs.iter().position(|t| t.id == id)?;
        let source = &self.tabs[idx];

        if let Some(layout_id) = source.layout_id.as_deref()
            && registry.get(layout_id).is_some_and(|m| !m.allow_multiple)
        {
            log::warn!("Refusing to duplicate tab {id}: layout {layout_id:?} is single-instance");
            return None;
        }

        let mut copy = Tab::new_unbound();
        copy.layout_id = source.layout_id.clone();
        copy.name = format!("{}{}", source.name, DUPLICATE_SUFFIX);
        copy.layout_params = source.layout_params.clone();
        copy.layout_param_option_key = source.layout_param_option_key.clone();
        copy.loading = copy.is_bound();

        let new_id = copy.id;
        self.tabs.insert(idx + 1, copy);
        self.active_tab_id = new_id;
        log::info!("Duplicated tab {id} as {new_id}");
        Some(new_id)
    }

    /// Move a tab to a specific storage index (drag-reorder landing).
    ///
    /// The target index is clamped. Returns true if the tab actually moved.
    pub fn move_tab_to_index(&mut self, id: TabId, target_index: usize) -> bool {
        let Some(current_idx) = self.tabs.iter().position(|t| t.id == id) else {
            return false;
        };

        let clamped_target = target_index.min(self.tabs.len().saturating_sub(1));
        if clamped_target == current_idx {
            return false;
        }

        let tab = self.tabs.remove(current_idx);
        self.tabs.insert(clamped_target, tab);
        log::debug!("Moved tab {id} from index {current_idx} to {clamped_target}");
        true
    }

    /// Move the active tab one slot left in storage order (wraps around).
    pub fn move_active_left(&mut self) {
        self.move_tab(self.active_tab_id, -1);
    }

    /// Move the active tab one slot right in storage order (wraps around).
    pub fn move_active_right(&mut self) {
        self.move_tab(self.active_tab_id, 1);
    }

    /// Move a tab left or right; direction: -1 for left, 1 for right.
    fn move_tab(&mut self, id: TabId, direction: i32) {
        let Some(current_idx) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        let new_idx = if direction < 0 {
            if current_idx == 0 {
                self.tabs.len() - 1
            } else {
                current_idx - 1
            }
        } else if current_idx >= self.tabs.len() - 1 {
            0
        } else {
            current_idx + 1
        };

        if new_idx != current_idx {
            let tab = self.tabs.remove(current_idx);
            self.tabs.insert(new_idx, tab);
            log::debug!("Moved tab {id} from index {current_idx} to {new_idx}");
        }
    }

    // ------------------------------------------------------------------
    // Inline rename sub-protocol
    // ------------------------------------------------------------------

    /// Current rename state.
    pub fn rename_state(&self) -> &RenameState {
        &self.rename
    }

    /// Begin an inline rename, seeding the buffer with the current name.
    /// No-op for locked or unknown tabs.
    pub fn start_rename(&mut self, id: TabId) {
        let Some(tab) = self.get_tab(id) else {
            return;
        };
        if tab.locked {
            log::warn!("Refusing to start rename on locked tab {id}");
            return;
        }
        self.rename = RenameState::Editing {
            tab_id: id,
            buffer: tab.name.clone(),
        };
    }

    /// Replace the rename buffer text. No-op outside `Editing`.
    pub fn rename_input(&mut self, text: &str) {
        if let RenameState::Editing { buffer, .. } = &mut self.rename {
            *buffer = text.to_string();
        }
    }

    /// Commit the inline rename. A buffer that trims empty leaves the prior
    /// name in place.
    pub fn commit_rename(&mut self) {
        if let RenameState::Editing { tab_id, buffer } = std::mem::take(&mut self.rename) {
            self.rename_tab(tab_id, &buffer);
        }
    }

    /// Discard the inline rename buffer.
    pub fn cancel_rename(&mut self) {
        self.rename = RenameState::Idle;
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with_tabs(count: usize) -> TabManager {
        let mut mgr = TabManager::new();
        for _ in 1..count {
            mgr.add_tab(0);
        }
        mgr
    }

    fn registry_with(layout_id: &str, allow_multiple: bool) -> RegistryView {
        let mut layouts = std::collections::BTreeMap::new();
        let mut meta = tabdeck_registry::LayoutMeta::new(layout_id.to_uppercase());
        meta.allow_multiple = allow_multiple;
        layouts.insert(layout_id.to_string(), meta);
        RegistryView::from_layouts(layouts)
    }

    #[test]
    fn new_manager_has_one_active_unbound_tab() {
        let mgr = TabManager::new();
        assert_eq!(mgr.tab_count(), 1);
        assert_eq!(mgr.active_tab().id, mgr.active_tab_id());
        assert!(!mgr.active_tab().is_bound());
    }

    #[test]
    fn add_tab_respects_limit() {
        let mut mgr = manager_with_tabs(2);
        assert!(mgr.add_tab(2).is_none());
        assert_eq!(mgr.tab_count(), 2);
        assert!(mgr.add_tab(0).is_some());
        assert!(mgr.add_tab(-1).is_some());
    }

    #[test]
    fn remove_last_tab_synthesizes_fresh_one() {
        let mut mgr = TabManager::new();
        let old_id = mgr.active_tab_id();
        assert!(mgr.remove_tab(old_id));
        assert_eq!(mgr.tab_count(), 1);
        assert_ne!(mgr.active_tab_id(), old_id);
        assert!(!mgr.active_tab().is_bound());
    }

    #[test]
    fn remove_active_activates_display_predecessor() {
        let mut mgr = manager_with_tabs(3);
        let ids: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        assert_eq!(mgr.active_tab_id(), ids[2]);
        mgr.remove_tab(ids[2]);
        assert_eq!(mgr.active_tab_id(), ids[1]);
    }

    #[test]
    fn remove_display_first_active_falls_to_new_first() {
        let mut mgr = manager_with_tabs(3);
        let ids: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        mgr.select_tab(ids[0]);
        mgr.remove_tab(ids[0]);
        assert_eq!(mgr.active_tab_id(), ids[1]);
    }

    #[test]
    fn remove_locked_tab_is_noop() {
        let mut mgr = manager_with_tabs(2);
        let registry = registry_with("x", true);
        let id = mgr.tabs()[0].id;
        mgr.update_tab_layout(id, &registry, "x".into(), "X", None, None);
        mgr.lock_tab(id);
        assert!(!mgr.remove_tab(id));
        assert_eq!(mgr.tab_count(), 2);
    }

    #[test]
    fn rename_trims_and_ignores_empty() {
        let mut mgr = TabManager::new();
        let id = mgr.active_tab_id();
        mgr.rename_tab(id, "  Reports  ");
        assert_eq!(mgr.active_tab().name, "Reports");
        mgr.rename_tab(id, "   ");
        assert_eq!(mgr.active_tab().name, "Reports");
    }

    #[test]
    fn rename_locked_tab_is_noop() {
        let mut mgr = TabManager::new();
        let registry = registry_with("x", true);
        let id = mgr.active_tab_id();
        mgr.update_tab_layout(id, &registry, "x".into(), "X", None, None);
        mgr.lock_tab(id);
        mgr.rename_tab(id, "New Name");
        assert_eq!(mgr.active_tab().name, "X");
    }

    #[test]
    fn lock_requires_bound_layout() {
        let mut mgr = TabManager::new();
        let id = mgr.active_tab_id();
        mgr.lock_tab(id);
        assert!(!mgr.active_tab().locked);
    }

    #[test]
    fn pinned_tabs_sort_first_in_display_order() {
        let mut mgr = manager_with_tabs(3);
        let ids: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        mgr.pin_tab(ids[2], true);
        assert_eq!(mgr.display_ids(), vec![ids[2], ids[0], ids[1]]);
        // Storage order is untouched.
        let storage: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        assert_eq!(storage, ids);
    }

    #[test]
    fn exclusive_layout_binds_at_most_once() {
        let mut mgr = manager_with_tabs(2);
        let registry = registry_with("x", false);
        let ids: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        assert!(mgr.update_tab_layout(ids[0], &registry, "x".into(), "X", None, None));
        assert!(!mgr.update_tab_layout(ids[1], &registry, "x".into(), "X", None, None));
        assert_eq!(mgr.count_bound_to("x"), 1);
    }

    #[test]
    fn rebinding_same_tab_is_not_a_conflict() {
        let mut mgr = TabManager::new();
        let registry = registry_with("x", false);
        let id = mgr.active_tab_id();
        assert!(mgr.update_tab_layout(id, &registry, "x".into(), "X", None, None));
        assert!(mgr.update_tab_layout(id, &registry, "x".into(), "X again", None, None));
    }

    #[test]
    fn duplicate_inserts_after_source_with_suffix() {
        let mut mgr = manager_with_tabs(2);
        let registry = registry_with("x", true);
        let ids: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        mgr.update_tab_layout(ids[0], &registry, "x".into(), "X", None, None);
        mgr.pin_tab(ids[0], true);
        mgr.lock_tab(ids[0]);

        let copy_id = mgr.duplicate_tab(&registry, ids[0]).unwrap();
        assert_eq!(mgr.tabs()[1].id, copy_id);
        let copy = mgr.get_tab(copy_id).unwrap();
        assert_eq!(copy.name, "X (copy)");
        assert!(!copy.locked);
        assert!(!copy.pinned);
        assert_ne!(copy.created_at, mgr.tabs()[0].created_at);
        assert_eq!(mgr.active_tab_id(), copy_id);
    }

    #[test]
    fn duplicate_of_single_instance_layout_is_refused() {
        let mut mgr = TabManager::new();
        let registry = registry_with("x", false);
        let id = mgr.active_tab_id();
        mgr.update_tab_layout(id, &registry, "x".into(), "X", None, None);
        assert!(mgr.duplicate_tab(&registry, id).is_none());
        assert_eq!(mgr.count_bound_to("x"), 1);
    }

    #[test]
    fn move_tab_to_index_clamps_and_reorders() {
        let mut mgr = manager_with_tabs(3);
        let ids: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        assert!(mgr.move_tab_to_index(ids[0], 100));
        let order: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
        // Same position is a no-op.
        assert!(!mgr.move_tab_to_index(ids[0], 2));
    }

    #[test]
    fn cycle_wraps_in_display_order() {
        let mut mgr = manager_with_tabs(3);
        let ids: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        mgr.next_tab();
        assert_eq!(mgr.active_tab_id(), ids[0]);
        mgr.prev_tab();
        assert_eq!(mgr.active_tab_id(), ids[2]);
    }

    #[test]
    fn select_index_is_one_based_display_order() {
        let mut mgr = manager_with_tabs(3);
        let ids: Vec<TabId> = mgr.tabs().iter().map(|t| t.id).collect();
        mgr.pin_tab(ids[2], true);
        mgr.select_index(1);
        assert_eq!(mgr.active_tab_id(), ids[2]);
        mgr.select_index(99);
        assert_eq!(mgr.active_tab_id(), ids[2]);
    }

    #[test]
    fn inline_rename_commit_and_cancel() {
        let mut mgr = TabManager::new();
        let id = mgr.active_tab_id();

        mgr.start_rename(id);
        assert!(mgr.rename_state().is_editing(id));
        mgr.rename_input("Analysis");
        mgr.commit_rename();
        assert_eq!(mgr.active_tab().name, "Analysis");
        assert_eq!(*mgr.rename_state(), RenameState::Idle);

        mgr.start_rename(id);
        mgr.rename_input("Discarded");
        mgr.cancel_rename();
        assert_eq!(mgr.active_tab().name, "Analysis");
    }

    #[test]
    fn inline_rename_empty_buffer_keeps_prior_name() {
        let mut mgr = TabManager::new();
        let id = mgr.active_tab_id();
        mgr.rename_tab(id, "Kept");
        mgr.start_rename(id);
        mgr.rename_input("   ");
        mgr.commit_rename();
        assert_eq!(mgr.active_tab().name, "Kept");
    }

    #[test]
    fn replace_tabs_repairs_active_pointer() {
        let mut mgr = manager_with_tabs(2);
        let replacement = vec![Tab::new_unbound(), Tab::new_unbound()];
        let first = replacement[0].id;
        mgr.replace_tabs(replacement);
        assert_eq!(mgr.active_tab_id(), first);

        mgr.replace_tabs(Vec::new());
        assert_eq!(mgr.tab_count(), 1);
    }
}
