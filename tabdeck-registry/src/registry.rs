//! Read-only projection of the host's layout registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutMeta;
use crate::types::LayoutId;

/// The set of layouts the host has registered, keyed by layout id.
///
/// Supplied wholesale by the host at mount and on update; the core treats it
/// as an immutable snapshot per render cycle and never mutates entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryView {
    layouts: BTreeMap<LayoutId, LayoutMeta>,
}

impl RegistryView {
    /// An empty registry (host has registered nothing yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a view from an explicit id → metadata map.
    pub fn from_layouts(layouts: BTreeMap<LayoutId, LayoutMeta>) -> Self {
        Self { layouts }
    }

    /// Parse a wholesale host snapshot (camelCase JSON, `layoutId → meta`).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let view: Self = serde_json::from_str(json)?;
        log::debug!("Parsed registry snapshot ({} layouts)", view.len());
        Ok(view)
    }

    /// Look up a layout's metadata.
    pub fn get(&self, layout_id: &str) -> Option<&LayoutMeta> {
        self.layouts.get(layout_id)
    }

    /// Whether the host has registered this layout id.
    pub fn contains(&self, layout_id: &str) -> bool {
        self.layouts.contains_key(layout_id)
    }

    /// Display name for a layout id, falling back to the id itself for
    /// unknown layouts.
    pub fn display_name<'a>(&'a self, layout_id: &'a str) -> &'a str {
        self.layouts
            .get(layout_id)
            .map(|m| m.name.as_str())
            .unwrap_or(layout_id)
    }

    /// Iterate over all registered layouts in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&LayoutId, &LayoutMeta)> {
        self.layouts.iter()
    }

    /// All registered layout ids in registry order.
    pub fn ids(&self) -> impl Iterator<Item = &LayoutId> {
        self.layouts.keys()
    }

    /// Number of registered layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_parses_host_map() {
        let view = RegistryView::from_json(
            r#"{
                "home": {"name": "Home", "description": "Welcome page"},
                "report": {"name": "Report", "allowMultiple": true}
            }"#,
        )
        .unwrap();
        assert_eq!(view.len(), 2);
        assert!(view.contains("home"));
        assert_eq!(view.display_name("report"), "Report");
        assert!(view.get("report").unwrap().allow_multiple);
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let view = RegistryView::new();
        assert_eq!(view.display_name("mystery"), "mystery");
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        assert!(RegistryView::from_json("{not json").is_err());
    }
}
