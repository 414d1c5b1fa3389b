//! Controlled-prop bundle supplied by the host.
//!
//! There is no file I/O here: the host owns persistence and hands these
//! props in wholesale each render, alongside the registry snapshot.

use serde::{Deserialize, Serialize};

use tabdeck_registry::LayoutId;

/// Host-supplied knobs for one deck instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckConfig {
    /// Maximum number of tabs; `<= 0` means unlimited.
    pub max_tabs: i32,

    /// Whether the host persists and restores reported state. When set, the
    /// very first outbound push is suppressed so restored state can arrive
    /// first.
    pub persistence: bool,

    /// Layout to seed the first tab with when no persisted tabs exist.
    /// `None` shows the selector view instead.
    pub initial_tab: Option<LayoutId>,

    /// Ordered layout suggestions for an empty selector query.
    pub displayed_layouts: Vec<LayoutId>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            max_tabs: -1,
            persistence: false,
            initial_tab: None,
            displayed_layouts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited_selector_first() {
        let config = DeckConfig::default();
        assert!(config.max_tabs <= 0);
        assert!(!config.persistence);
        assert_eq!(config.initial_tab, None);
    }

    #[test]
    fn deserializes_host_props() {
        let config: DeckConfig = serde_json::from_str(
            r#"{"maxTabs": 4, "persistence": true, "initialTab": "home"}"#,
        )
        .unwrap();
        assert_eq!(config.max_tabs, 4);
        assert!(config.persistence);
        assert_eq!(config.initial_tab.as_deref(), Some("home"));
        assert!(config.displayed_layouts.is_empty());
    }
}
