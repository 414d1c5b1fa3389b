//! Per-tab layout selection state machine.
//!
//! Drives the selector view of an unbound tab: search/filter, parameter
//! collection (one parameter at a time), and parameter-preset choice. The
//! machine decides *when* a layout becomes applied; actually binding it to
//! the tab is the tab store's job, so terminal transitions hand back an
//! [`AppliedSelection`] for the orchestrator to commit.

mod cache;
mod filter;

pub use cache::SelectionCache;
pub use filter::{layout_disabled, layout_matches, suggestions};

use std::collections::BTreeMap;

use tabdeck_registry::{LayoutId, RegistryView};

use crate::tab::{Tab, TabId};

/// Control state of the selector for one tab.
///
/// `loading` is deliberately not a mode here: it is a display overlay shown
/// after `Applied` while the host has not yet delivered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Browsing/filtering the layout list.
    #[default]
    Search,
    /// Collecting parameters one at a time.
    Params,
    /// Choosing a pre-defined parameter preset.
    ParamOptions,
    /// A layout + params has been committed for this cycle.
    Applied,
}

/// In-progress free-form parameter collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamCollection {
    /// Layout the parameters are being collected for.
    pub layout_id: LayoutId,
    /// Index of the parameter currently being edited.
    pub index: usize,
    /// Values collected so far, keyed by parameter name.
    pub values: BTreeMap<String, String>,
    /// Current input buffer.
    pub input: String,
    /// The buffer holds an untouched default: cleared, not appended to, on
    /// the next keystroke.
    pub showing_default: bool,
}

/// Transient display snapshot shown while the host renders freshly applied
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingEcho {
    /// Tab the selection was applied to.
    pub tab_id: TabId,
    /// Display name of the chosen layout.
    pub layout_name: String,
    /// Chosen parameter values, if any.
    pub params: Option<BTreeMap<String, String>>,
    /// Chosen preset key, if any.
    pub option_key: Option<String>,
}

/// A finalized selection, ready to be committed to the tab store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSelection {
    /// Layout to bind.
    pub layout_id: LayoutId,
    /// Display name for the tab.
    pub name: String,
    /// Collected parameter values, if the layout took any.
    pub params: Option<BTreeMap<String, String>>,
    /// Preset key, when applied via a preset.
    pub option_key: Option<String>,
}

/// Outcome of a layout click/choose event in `Search` mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing happened (unknown id, or a no-op event).
    Ignored,
    /// The layout is single-instance and another tab already holds it.
    Conflict(LayoutId),
    /// Parameter collection started; the machine is now in `Params`.
    CollectingParams,
    /// Preset choice started; the machine is now in `ParamOptions`.
    ChoosingPreset,
    /// The selection finalized immediately.
    Applied(AppliedSelection),
}

/// Selection machine state for one tab.
///
/// Cached verbatim per tab id while the tab stays unbound; discarded when
/// the tab is removed or becomes bound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Current control mode.
    pub mode: SelectionMode,
    /// Search query text.
    pub query: String,
    /// Whether the suggestion dropdown is visible.
    pub dropdown_open: bool,
    /// A dropdown close has been requested and not yet confirmed.
    pending_close: bool,
    /// Cursor index into the current suggestion list.
    pub cursor: usize,
    /// Free-form parameter collection, present in `Params` mode.
    pub params: Option<ParamCollection>,
    /// Cursor index into the preset list, used in `ParamOptions` mode.
    pub preset_cursor: usize,
    /// Display snapshot of the most recent application, while content is
    /// pending.
    pub echo: Option<LoadingEcho>,
}

impl SelectionState {
    /// Fresh state: `Search` mode, empty query, dropdown closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query text; resets the cursor and opens the dropdown.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.cursor = 0;
        self.dropdown_open = true;
        self.pending_close = false;
    }

    /// Open the suggestion dropdown.
    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
        self.pending_close = false;
    }

    /// First phase of closing the dropdown: arm a pending close.
    ///
    /// Any selection or navigation event that arrives before
    /// [`SelectionState::confirm_close`] disarms it, so a click on a
    /// suggestion is never lost to the close that the triggering blur also
    /// requested.
    pub fn request_close(&mut self) {
        if self.dropdown_open {
            self.pending_close = true;
        }
    }

    /// Second phase: close only if the request is still armed.
    pub fn confirm_close(&mut self) {
        if self.pending_close {
            self.dropdown_open = false;
            self.pending_close = false;
        }
    }

    /// Whether a close is armed (visible for tests).
    pub fn close_pending(&self) -> bool {
        self.pending_close
    }

    /// Move the suggestion cursor down, clamped to the list length.
    pub fn cursor_down(&mut self, list_len: usize) {
        self.pending_close = false;
        match self.mode {
            SelectionMode::ParamOptions => {
                if self.preset_cursor + 1 < list_len {
                    self.preset_cursor += 1;
                }
            }
            _ => {
                if self.cursor + 1 < list_len {
                    self.cursor += 1;
                }
            }
        }
    }

    /// Move the suggestion cursor up.
    pub fn cursor_up(&mut self) {
        self.pending_close = false;
        match self.mode {
            SelectionMode::ParamOptions => {
                self.preset_cursor = self.preset_cursor.saturating_sub(1);
            }
            _ => self.cursor = self.cursor.saturating_sub(1),
        }
    }

    /// Handle a layout being chosen in `Search` mode.
    ///
    /// Zero-input layouts finalize immediately; layouts with presets enter
    /// `ParamOptions` (presets take precedence over free-form entry);
    /// layouts with parameters enter `Params` at index 0, pre-filling a
    /// default when the first parameter has one.
    pub fn select_layout(
        &mut self,
        registry: &RegistryView,
        tabs: &[Tab],
        current_tab: TabId,
        layout_id: &str,
    ) -> SelectOutcome {
        self.pending_close = false;

        let Some(meta) = registry.get(layout_id) else {
            log::debug!("Ignoring selection of unknown layout {layout_id:?}");
            return SelectOutcome::Ignored;
        };
        if filter::layout_disabled(registry, tabs, current_tab, layout_id) {
            log::debug!("Layout {layout_id:?} is disabled for tab {current_tab}");
            return SelectOutcome::Conflict(layout_id.to_string());
        }

        if !meta.parameter_options.is_empty() {
            self.mode = SelectionMode::ParamOptions;
            self.preset_cursor = 0;
            self.params = Some(ParamCollection {
                layout_id: layout_id.to_string(),
                index: 0,
                values: BTreeMap::new(),
                input: String::new(),
                showing_default: false,
            });
            return SelectOutcome::ChoosingPreset;
        }

        if !meta.parameters.is_empty() {
            let first = &meta.parameters[0];
            let (input, showing_default) = match (&first.default, first.has_default) {
                (Some(d), true) => (d.clone(), true),
                _ => (String::new(), false),
            };
            self.mode = SelectionMode::Params;
            self.params = Some(ParamCollection {
                layout_id: layout_id.to_string(),
                index: 0,
                values: BTreeMap::new(),
                input,
                showing_default,
            });
            return SelectOutcome::CollectingParams;
        }

        SelectOutcome::Applied(self.finalize(registry, current_tab, layout_id.to_string(), None, None))
    }

    /// Append a character to the parameter input.
    ///
    /// A displayed default is cleared, not appended to, on the first
    /// keystroke.
    pub fn push_param_char(&mut self, c: char) {
        if let Some(collection) = &mut self.params {
            if collection.showing_default {
                collection.input.clear();
                collection.showing_default = false;
            }
            collection.input.push(c);
        }
    }

    /// Delete the last character of the parameter input. Editing a
    /// displayed default first clears it entirely.
    pub fn param_backspace(&mut self) {
        if let Some(collection) = &mut self.params {
            if collection.showing_default {
                collection.input.clear();
                collection.showing_default = false;
            } else {
                collection.input.pop();
            }
        }
    }

    /// Replace the parameter input wholesale (hosts with full-field text
    /// editing).
    pub fn set_param_input(&mut self, text: &str) {
        if let Some(collection) = &mut self.params {
            collection.input = text.to_string();
            collection.showing_default = false;
        }
    }

    /// Handle Enter in `Params` mode: advance to the next parameter, or
    /// finalize on the last one.
    ///
    /// The committed value is the input text, or the parameter default when
    /// the input is empty and a default exists. Enter is inert while a
    /// required (no-default) parameter has an empty input.
    pub fn params_enter(
        &mut self,
        registry: &RegistryView,
        current_tab: TabId,
    ) -> Option<AppliedSelection> {
        if self.mode != SelectionMode::Params {
            return None;
        }
        let collection = self.params.as_mut()?;
        let meta = registry.get(&collection.layout_id)?;
        let param = meta.parameters.get(collection.index)?;

        let value = if !collection.input.is_empty() {
            collection.input.clone()
        } else if let Some(default) = param.default.clone().filter(|_| param.has_default) {
            default
        } else {
            // Required parameter with no input: Enter is a no-op.
            return None;
        };
        collection.values.insert(param.name.clone(), value);
        collection.index += 1;

        if collection.index < meta.parameters.len() {
            let next = &meta.parameters[collection.index];
            match (&next.default, next.has_default) {
                (Some(d), true) => {
                    collection.input = d.clone();
                    collection.showing_default = true;
                }
                _ => {
                    collection.input.clear();
                    collection.showing_default = false;
                }
            }
            return None;
        }

        let layout_id = collection.layout_id.clone();
        let values = std::mem::take(&mut collection.values);
        Some(self.finalize(registry, current_tab, layout_id, Some(values), None))
    }

    /// Choose a preset in `ParamOptions` mode: applies its fixed params plus
    /// the preset key.
    pub fn select_preset(
        &mut self,
        registry: &RegistryView,
        current_tab: TabId,
        key: &str,
    ) -> Option<AppliedSelection> {
        if self.mode != SelectionMode::ParamOptions {
            return None;
        }
        self.pending_close = false;
        let layout_id = self.params.as_ref()?.layout_id.clone();
        let preset = registry.get(&layout_id)?.parameter_options.get(key)?.clone();
        Some(self.finalize(
            registry,
            current_tab,
            layout_id,
            Some(preset.params),
            Some(key.to_string()),
        ))
    }

    /// Abort parameter collection or preset choice, discarding all values,
    /// and return to `Search`. Synchronous and total: no partial application.
    pub fn abort(&mut self) {
        match self.mode {
            SelectionMode::Params | SelectionMode::ParamOptions => {
                self.params = None;
                self.preset_cursor = 0;
                self.mode = SelectionMode::Search;
                log::debug!("Aborted parameter collection");
            }
            _ => {}
        }
    }

    /// Clear the loading echo (host delivered content for its tab).
    pub fn clear_echo(&mut self) {
        self.echo = None;
    }

    fn finalize(
        &mut self,
        registry: &RegistryView,
        current_tab: TabId,
        layout_id: LayoutId,
        params: Option<BTreeMap<String, String>>,
        option_key: Option<String>,
    ) -> AppliedSelection {
        let name = registry.display_name(&layout_id).to_string();
        self.mode = SelectionMode::Applied;
        self.params = None;
        self.dropdown_open = false;
        self.pending_close = false;
        self.echo = Some(LoadingEcho {
            tab_id: current_tab,
            layout_name: name.clone(),
            params: params.clone(),
            option_key: option_key.clone(),
        });
        log::info!("Applied layout {layout_id:?} for tab {current_tab}");
        AppliedSelection {
            layout_id,
            name,
            params,
            option_key,
        }
    }
}
