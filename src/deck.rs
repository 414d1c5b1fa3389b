//! Deck orchestration: one struct owning the tab store, selection engine,
//! sync bridge, and notification queue, dispatching presentation intents.
//!
//! All mutations happen on discrete user-input or host-message callbacks on
//! a single thread; the ordering discipline that matters is around tab
//! switches (save the outgoing selector state, restore the incoming one) and
//! removals (purge the cached state).

use std::collections::HashSet;

use anyhow::Context as _;
use tabdeck_registry::{LayoutId, ParameterPreset, RegistryView};

use crate::actions::TabAction;
use crate::config::DeckConfig;
use crate::content::{self, ContentLocator};
use crate::notifications::{NotificationQueue, Severity, UserNotification};
use crate::selection::{
    AppliedSelection, SelectOutcome, SelectionCache, SelectionMode, SelectionState, suggestions,
};
use crate::share::{self, SharePayload};
use crate::sync::{HostReport, HostSyncBridge};
use crate::tab::{Tab, TabId, TabManager};

/// The tab/layout management core for one widget instance.
pub struct TabDeck {
    config: DeckConfig,
    registry: RegistryView,
    manager: TabManager,
    selection: SelectionState,
    cache: SelectionCache,
    bridge: HostSyncBridge,
    notifications: NotificationQueue,
    loading: HashSet<TabId>,
}

impl TabDeck {
    /// Create a deck.
    ///
    /// When `config.initial_tab` names a registered layout, the first tab is
    /// seeded bound to it; otherwise the deck starts on the selector view.
    pub fn new(config: DeckConfig, registry: RegistryView) -> Self {
        let manager = match config.initial_tab.as_deref() {
            Some(layout_id) if registry.contains(layout_id) => {
                let name = registry.display_name(layout_id).to_string();
                TabManager::with_first_tab(Tab::new_bound(layout_id.to_string(), name, None, None))
            }
            Some(layout_id) => {
                log::warn!("initial_tab {layout_id:?} is not registered; starting on selector");
                TabManager::new()
            }
            None => TabManager::new(),
        };

        let mut loading = HashSet::new();
        if let Some(tab) = manager.tabs().first()
            && tab.is_bound()
        {
            loading.insert(tab.id);
        }

        Self {
            bridge: HostSyncBridge::new(config.persistence),
            config,
            registry,
            manager,
            selection: SelectionState::new(),
            cache: SelectionCache::new(),
            notifications: NotificationQueue::new(),
            loading,
        }
    }

    // ------------------------------------------------------------------
    // Read access for the presentation layer
    // ------------------------------------------------------------------

    /// The tab store.
    pub fn manager(&self) -> &TabManager {
        &self.manager
    }

    /// The host-supplied registry snapshot.
    pub fn registry(&self) -> &RegistryView {
        &self.registry
    }

    /// The active tab's selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The controlled props currently in effect.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Tab ids currently awaiting host content.
    pub fn loading_tabs(&self) -> &HashSet<TabId> {
        &self.loading
    }

    /// Layout suggestions for the current query, in presentation order.
    pub fn suggestions(&self) -> Vec<LayoutId> {
        suggestions(
            &self.registry,
            &self.config.displayed_layouts,
            &self.selection.query,
        )
    }

    /// Preset options of the layout currently in preset choice, in key order.
    pub fn preset_options(&self) -> Vec<(String, ParameterPreset)> {
        let Some(collection) = &self.selection.params else {
            return Vec::new();
        };
        self.registry
            .get(&collection.layout_id)
            .map(|meta| {
                meta.parameter_options
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether a layout is shown-but-unselectable for the active tab.
    pub fn is_layout_disabled(&self, layout_id: &str) -> bool {
        crate::selection::layout_disabled(
            &self.registry,
            self.manager.tabs(),
            self.manager.active_tab_id(),
            layout_id,
        )
    }

    /// Drain pending user notifications.
    pub fn drain_notifications(&mut self) -> Vec<UserNotification> {
        self.notifications.drain()
    }

    // ------------------------------------------------------------------
    // Host-controlled props (inbound)
    // ------------------------------------------------------------------

    /// Replace the registry snapshot.
    pub fn set_registry(&mut self, registry: RegistryView) {
        self.registry = registry;
    }

    /// Replace the controlled props bundle (`registry` travels separately).
    pub fn set_config(&mut self, config: DeckConfig) {
        self.config = config;
    }

    /// Apply a host-supplied controlled tabs snapshot.
    pub fn apply_controlled_tabs(&mut self, snapshot: Vec<Tab>) {
        self.with_activation(|deck| {
            if deck.bridge.apply_controlled_tabs(&mut deck.manager, snapshot) {
                // Vanished tabs lose their cached selector state; restored
                // bound tabs wait for host content.
                let live: HashSet<TabId> = deck.manager.tabs().iter().map(|t| t.id).collect();
                deck.loading = deck
                    .manager
                    .tabs()
                    .iter()
                    .filter(|t| t.is_bound())
                    .map(|t| t.id)
                    .collect();
                deck.cache.retain(&live);
            }
        });
    }

    /// Parse and apply a controlled tabs snapshot straight from host JSON.
    pub fn apply_controlled_tabs_json(&mut self, json: &str) -> anyhow::Result<()> {
        let snapshot: Vec<Tab> =
            serde_json::from_str(json).context("Failed to parse controlled tabs snapshot")?;
        self.apply_controlled_tabs(snapshot);
        Ok(())
    }

    /// Parse and apply a registry snapshot straight from host JSON.
    pub fn set_registry_json(&mut self, json: &str) -> anyhow::Result<()> {
        let registry = RegistryView::from_json(json).context("Failed to parse registry snapshot")?;
        self.set_registry(registry);
        Ok(())
    }

    /// Apply a host-supplied controlled active-tab reference (by layout id).
    pub fn apply_controlled_active(&mut self, layout_id: &str) {
        self.with_activation(|deck| {
            deck.bridge
                .apply_controlled_active(&mut deck.manager, layout_id);
        });
    }

    /// Compute the outbound report for the host, if this cycle should push.
    pub fn report(&mut self) -> Option<HostReport> {
        self.bridge.report(&self.manager)
    }

    /// Reconcile loading state against the host's rendered content.
    pub fn sync_content(&mut self, locator: &dyn ContentLocator) {
        let rendered = content::rendered_tabs(locator);
        self.loading = self
            .manager
            .tabs()
            .iter()
            .filter(|t| t.is_bound() && !rendered.contains(&t.id))
            .map(|t| t.id)
            .collect();
        for tab_id in self.manager.tabs().iter().map(|t| t.id).collect::<Vec<_>>() {
            let loading = self.loading.contains(&tab_id);
            if let Some(tab) = self.manager.get_tab_mut(tab_id) {
                tab.loading = loading;
            }
        }
        if self
            .selection
            .echo
            .as_ref()
            .is_some_and(|echo| rendered.contains(&echo.tab_id))
        {
            self.selection.clear_echo();
        }
    }

    // ------------------------------------------------------------------
    // User intents
    // ------------------------------------------------------------------

    /// Dispatch one presentation-layer intent.
    pub fn handle_action(&mut self, action: TabAction) {
        match action {
            TabAction::None => {}

            TabAction::Select(id) => self.with_activation(|deck| {
                deck.manager.select_tab(id);
            }),
            TabAction::Close(id) => self.close_tab(id),
            TabAction::NewTab => self.new_tab(),
            TabAction::Duplicate(id) => self.with_activation(|deck| {
                if let Some(new_id) = deck.manager.duplicate_tab(&deck.registry, id)
                    && deck.manager.get_tab(new_id).is_some_and(Tab::is_bound)
                {
                    deck.loading.insert(new_id);
                }
            }),
            TabAction::Lock(id) => self.manager.lock_tab(id),
            TabAction::Unlock(id) => self.manager.unlock_tab(id),
            TabAction::Pin(id, pinned) => self.manager.pin_tab(id, pinned),
            TabAction::Reorder(id, index) => {
                self.manager.move_tab_to_index(id, index);
            }
            TabAction::MoveActiveLeft => self.manager.move_active_left(),
            TabAction::MoveActiveRight => self.manager.move_active_right(),
            TabAction::NextTab => self.with_activation(|deck| deck.manager.next_tab()),
            TabAction::PrevTab => self.with_activation(|deck| deck.manager.prev_tab()),
            TabAction::SelectIndex(index) => {
                self.with_activation(|deck| deck.manager.select_index(index))
            }

            TabAction::StartRename(id) => self.manager.start_rename(id),
            TabAction::RenameInput(text) => self.manager.rename_input(&text),
            TabAction::CommitRename => self.manager.commit_rename(),
            TabAction::CancelRename => self.manager.cancel_rename(),
            TabAction::Rename(id, name) => self.manager.rename_tab(id, &name),

            TabAction::SearchInput(text) => self.selection.set_query(&text),
            TabAction::OpenDropdown => self.selection.open_dropdown(),
            TabAction::RequestCloseDropdown => self.selection.request_close(),
            TabAction::ConfirmCloseDropdown => self.selection.confirm_close(),
            TabAction::CursorUp => self.selection.cursor_up(),
            TabAction::CursorDown => {
                let len = match self.selection.mode {
                    SelectionMode::ParamOptions => self.preset_options().len(),
                    _ => self.suggestions().len(),
                };
                self.selection.cursor_down(len);
            }
            TabAction::ChooseLayout(layout_id) => self.choose_layout(&layout_id),
            TabAction::ChoosePreset(key) => self.choose_preset(&key),
            TabAction::ParamChar(c) => self.selection.push_param_char(c),
            TabAction::ParamBackspace => self.selection.param_backspace(),
            TabAction::ParamInput(text) => self.selection.set_param_input(&text),
            TabAction::Enter => self.enter(),
            TabAction::Escape => self.escape(),
        }
    }

    fn new_tab(&mut self) {
        self.with_activation(|deck| {
            deck.manager.add_tab(deck.config.max_tabs);
        });
    }

    fn close_tab(&mut self, id: TabId) {
        self.with_activation(|deck| {
            if deck.manager.remove_tab(id) {
                deck.cache.purge(id);
                deck.loading.remove(&id);
            }
        });
    }

    fn choose_layout(&mut self, layout_id: &str) {
        let active = self.manager.active_tab_id();
        let outcome =
            self.selection
                .select_layout(&self.registry, self.manager.tabs(), active, layout_id);
        match outcome {
            SelectOutcome::Applied(applied) => self.commit_selection(applied),
            SelectOutcome::Conflict(layout_id) => {
                let name = self.registry.display_name(&layout_id).to_string();
                self.notifications.push(
                    Severity::Warning,
                    format!("{name} is already open; switching to the existing tab"),
                );
                if let Some(existing) = self.manager.find_by_layout(&layout_id).map(|t| t.id) {
                    self.with_activation(|deck| {
                        deck.manager.select_tab(existing);
                    });
                }
            }
            SelectOutcome::CollectingParams
            | SelectOutcome::ChoosingPreset
            | SelectOutcome::Ignored => {}
        }
    }

    fn choose_preset(&mut self, key: &str) {
        let active = self.manager.active_tab_id();
        if let Some(applied) = self.selection.select_preset(&self.registry, active, key) {
            self.commit_selection(applied);
        }
    }

    fn enter(&mut self) {
        match self.selection.mode {
            SelectionMode::Search => {
                let list = self.suggestions();
                if let Some(layout_id) = list.get(self.selection.cursor).cloned() {
                    self.choose_layout(&layout_id);
                }
            }
            SelectionMode::Params => {
                let active = self.manager.active_tab_id();
                if let Some(applied) = self.selection.params_enter(&self.registry, active) {
                    self.commit_selection(applied);
                }
            }
            SelectionMode::ParamOptions => {
                let keys: Vec<String> =
                    self.preset_options().into_iter().map(|(k, _)| k).collect();
                if let Some(key) = keys.get(self.selection.preset_cursor).cloned() {
                    self.choose_preset(&key);
                }
            }
            SelectionMode::Applied => {}
        }
    }

    fn escape(&mut self) {
        match self.selection.mode {
            SelectionMode::Params | SelectionMode::ParamOptions => self.selection.abort(),
            _ => {
                self.selection.request_close();
                self.selection.confirm_close();
            }
        }
    }

    /// Commit a finalized selection to the active tab.
    fn commit_selection(&mut self, applied: AppliedSelection) {
        let active = self.manager.active_tab_id();
        let bound = self.manager.update_tab_layout(
            active,
            &self.registry,
            applied.layout_id.clone(),
            applied.name,
            applied.params,
            applied.option_key,
        );
        if bound {
            self.loading.insert(active);
        } else {
            // The store refused (lock or a race on exclusivity); fall back
            // to a clean selector.
            log::warn!("Selection of {:?} was refused by the store", applied.layout_id);
            self.selection = SelectionState::new();
        }
    }

    // ------------------------------------------------------------------
    // Share links
    // ------------------------------------------------------------------

    /// Build a share link for a tab. `None` for unknown or unbound tabs.
    pub fn generate_share_link(&self, tab_id: TabId, location: &str) -> Option<String> {
        let tab = self.manager.get_tab(tab_id)?;
        share::generate_share_link(tab, location)
    }

    /// Spawn a tab from a decoded share payload.
    ///
    /// Validations in order: the layout must be registered; a
    /// single-instance layout already open activates the existing tab
    /// instead; the tab limit must not be exceeded.
    pub fn spawn_shared_tab(&mut self, payload: SharePayload) -> Option<TabId> {
        if !self.registry.contains(&payload.layout_id) {
            self.notifications.push(
                Severity::Error,
                format!("Shared link references unknown layout {:?}", payload.layout_id),
            );
            return None;
        }

        let exclusive = self
            .registry
            .get(&payload.layout_id)
            .is_some_and(|meta| !meta.allow_multiple);
        if exclusive
            && let Some(existing) = self.manager.find_by_layout(&payload.layout_id).map(|t| t.id)
        {
            let name = self.registry.display_name(&payload.layout_id).to_string();
            self.notifications.push(
                Severity::Error,
                format!("{name} is already open; switching to the existing tab"),
            );
            self.with_activation(|deck| {
                deck.manager.select_tab(existing);
            });
            return None;
        }

        let tab = Tab::new_bound(
            payload.layout_id,
            payload.name,
            payload.layout_params,
            payload.layout_param_option_key,
        );
        let mut spawned = None;
        self.with_activation(|deck| {
            spawned = deck.manager.insert_tab(tab, deck.config.max_tabs);
            if let Some(id) = spawned {
                deck.loading.insert(id);
            }
        });
        if spawned.is_none() {
            self.notifications
                .push(Severity::Error, "Tab limit reached; cannot open shared tab");
        }
        spawned
    }

    /// Process a location fragment on mount or on fragment change.
    ///
    /// A recognized token triggers decode-and-spawn; decode failures report
    /// a generic invalid-link error. The fragment is cleared from the
    /// returned location regardless of outcome so a refresh cannot
    /// re-process it. Unrecognized fragments pass through untouched.
    pub fn process_fragment(&mut self, location: &str) -> String {
        let Some(token) = share::extract_fragment_token(location) else {
            return location.to_string();
        };
        match share::decode_share_token(token) {
            Ok(payload) => {
                self.spawn_shared_tab(payload);
            }
            Err(e) => {
                log::warn!("Failed to decode share token: {e}");
                self.notifications
                    .push(Severity::Error, "Invalid share link");
            }
        }
        share::strip_fragment(location)
    }

    // ------------------------------------------------------------------
    // Activation discipline
    // ------------------------------------------------------------------

    /// Run a mutation that may change the active tab, keeping the selection
    /// cache consistent: the outgoing selector state is saved (if its tab
    /// survives and is still unbound) and the incoming tab's state is
    /// restored verbatim, or reset when the incoming tab is bound.
    fn with_activation(&mut self, f: impl FnOnce(&mut Self)) {
        let outgoing = self.manager.active_tab_id();
        f(self);
        let incoming = self.manager.active_tab_id();
        if incoming == outgoing {
            return;
        }

        if self
            .manager
            .get_tab(outgoing)
            .is_some_and(|t| !t.is_bound())
        {
            self.cache.save(outgoing, std::mem::take(&mut self.selection));
        }

        self.selection = if self.manager.active_tab().is_bound() {
            SelectionState::new()
        } else {
            self.cache.restore(incoming).unwrap_or_default()
        };
    }
}
