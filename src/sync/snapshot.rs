//! Outbound snapshot records reported to the host.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tab::{LayoutId, Tab, TabId};

/// Normalized record of the active tab, reported to the host.
///
/// Absent entirely when the active tab is unbound (selector view).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTabData {
    /// Tab id.
    pub id: TabId,
    /// Bound layout id.
    pub layout_id: LayoutId,
    /// Display name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Parameter values the layout was bound with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_params: Option<BTreeMap<String, String>>,
    /// Preset key, when bound via a preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_param_option_key: Option<String>,
}

impl ActiveTabData {
    /// Build from a tab; `None` for unbound tabs.
    pub fn from_tab(tab: &Tab) -> Option<Self> {
        let layout_id = tab.layout_id.clone()?;
        Some(Self {
            id: tab.id,
            layout_id,
            name: tab.name.clone(),
            created_at: tab.created_at,
            layout_params: tab.layout_params.clone(),
            layout_param_option_key: tab.layout_param_option_key.clone(),
        })
    }
}

/// Compact record of one bound tab, used to signal the host to (re)render
/// tab content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContentRecord {
    /// Tab id.
    pub id: TabId,
    /// Bound layout id.
    pub layout_id: LayoutId,
    /// Parameter values, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_params: Option<BTreeMap<String, String>>,
    /// Preset key, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_param_option_key: Option<String>,
}

impl TabContentRecord {
    /// Build from a tab; `None` for unbound tabs.
    pub fn from_tab(tab: &Tab) -> Option<Self> {
        let layout_id = tab.layout_id.clone()?;
        Some(Self {
            id: tab.id,
            layout_id,
            layout_params: tab.layout_params.clone(),
            layout_param_option_key: tab.layout_param_option_key.clone(),
        })
    }
}

/// Everything the bridge reports to the host after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostReport {
    /// Layout id of the active tab, absent for the selector view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab: Option<LayoutId>,

    /// Normalized active-tab record, absent for the selector view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_data: Option<ActiveTabData>,

    /// The full tab collection in storage order.
    pub tabs: Vec<Tab>,

    /// Bound-tab content records, present only when their content signature
    /// changed since the last report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs_data: Option<Vec<TabContentRecord>>,
}

/// Content records for all bound tabs, in storage order.
pub fn content_records(tabs: &[Tab]) -> Vec<TabContentRecord> {
    tabs.iter().filter_map(TabContentRecord::from_tab).collect()
}

/// Stable signature of the bound-tab content set.
///
/// Two reports with equal signatures would trigger identical host renders,
/// so the compact list is only emitted when the signature moves.
pub fn content_signature(records: &[TabContentRecord]) -> String {
    serde_json::to_string(records).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_tabs_produce_no_records() {
        let tab = Tab::new_unbound();
        assert!(ActiveTabData::from_tab(&tab).is_none());
        assert!(TabContentRecord::from_tab(&tab).is_none());
        assert!(content_records(&[tab]).is_empty());
    }

    #[test]
    fn signature_tracks_params_not_names() {
        let mut tab = Tab::new_bound("x".to_string(), "X", None, None);
        let records = content_records(std::slice::from_ref(&tab));
        let before = content_signature(&records);

        // Renaming does not move the signature.
        tab.name = "Renamed".to_string();
        let renamed = content_signature(&content_records(std::slice::from_ref(&tab)));
        assert_eq!(before, renamed);

        // Changing params does.
        tab.layout_params = Some([("year".to_string(), "2025".to_string())].into());
        let changed = content_signature(&content_records(std::slice::from_ref(&tab)));
        assert_ne!(before, changed);
    }

    #[test]
    fn report_wire_shape_is_camel_case() {
        let tab = Tab::new_bound("x".to_string(), "X", None, Some("fast".to_string()));
        let report = HostReport {
            active_tab: tab.layout_id.clone(),
            active_tab_data: ActiveTabData::from_tab(&tab),
            tabs: vec![tab],
            tabs_data: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["activeTab"], "x");
        assert_eq!(json["activeTabData"]["layoutParamOptionKey"], "fast");
        assert!(json.get("tabsData").is_none());
    }
}
