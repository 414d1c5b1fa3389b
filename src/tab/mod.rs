//! Tab state for the tabdeck core.
//!
//! This module provides:
//! - `Tab`: one user-visible slot, bound to zero or one layout instance
//! - `TabManager`: the ordered collection and active-tab pointer
//! - `RenameState`: the inline-rename sub-protocol state machine

mod manager;

pub use manager::TabManager;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use tabdeck_registry::{LayoutId, TabId};

/// Suffix appended to the name of a duplicated tab.
pub const DUPLICATE_SUFFIX: &str = " (copy)";

/// Display name for a tab that has no layout bound yet.
pub const UNBOUND_TAB_NAME: &str = "New Tab";

/// A single user-visible tab.
///
/// A tab with `layout_id == None` is the "selector" tab: it shows the layout
/// picker instead of host content. Binding a layout is one-directional; the
/// core never resets a bound tab to unbound (only removal or a host-supplied
/// replacement snapshot can).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Unique identifier, generated locally, stable for the tab's lifetime.
    pub id: TabId,

    /// Bound layout, or `None` for the selector view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_id: Option<LayoutId>,

    /// Display name; defaults to the layout name on binding, user-editable.
    pub name: String,

    /// Creation timestamp, set once and never mutated.
    pub created_at: DateTime<Utc>,

    /// A locked tab cannot be closed, renamed, or have its layout changed.
    #[serde(default)]
    pub locked: bool,

    /// Pinned tabs sort before unpinned tabs in display order.
    #[serde(default)]
    pub pinned: bool,

    /// Parameter values collected when the layout was bound, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_params: Option<BTreeMap<String, String>>,

    /// Preset key, when the layout was bound via a parameter preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_param_option_key: Option<String>,

    /// True while the host has not yet delivered rendered content for this
    /// tab's layout. Derived from content correlation, never persisted.
    #[serde(skip)]
    pub loading: bool,
}

impl Tab {
    /// Create a fresh unbound (selector) tab.
    pub fn new_unbound() -> Self {
        Self {
            id: Uuid::new_v4(),
            layout_id: None,
            name: UNBOUND_TAB_NAME.to_string(),
            created_at: Utc::now(),
            locked: false,
            pinned: false,
            layout_params: None,
            layout_param_option_key: None,
            loading: false,
        }
    }

    /// Create a tab already bound to a layout (share-link spawn, initial tab).
    pub fn new_bound(
        layout_id: LayoutId,
        name: impl Into<String>,
        layout_params: Option<BTreeMap<String, String>>,
        layout_param_option_key: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            layout_id: Some(layout_id),
            name: name.into(),
            created_at: Utc::now(),
            locked: false,
            pinned: false,
            layout_params,
            layout_param_option_key,
            loading: true,
        }
    }

    /// Whether this tab has a layout bound.
    pub fn is_bound(&self) -> bool {
        self.layout_id.is_some()
    }
}

/// Inline-rename sub-protocol.
///
/// The transient name buffer lives here rather than on the tab itself;
/// `commit`/`cancel` are the only exits from `Editing`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenameState {
    /// No rename in progress.
    #[default]
    Idle,
    /// A rename is being edited for `tab_id`.
    Editing {
        /// Tab whose name is being edited.
        tab_id: TabId,
        /// The in-progress name text.
        buffer: String,
    },
}

impl RenameState {
    /// Whether a rename is being edited for the given tab.
    pub fn is_editing(&self, id: TabId) -> bool {
        matches!(self, RenameState::Editing { tab_id, .. } if *tab_id == id)
    }
}
