//! Search-match and disabled-layout policy for the layout selector.

use tabdeck_registry::{LayoutId, LayoutMeta, RegistryView};

use crate::tab::{Tab, TabId};

/// Whether a layout matches a search query.
///
/// A layout matches when the query is a case-insensitive substring of its
/// name, description, or any keyword. The empty query matches everything.
pub fn layout_matches(meta: &LayoutMeta, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    meta.name.to_lowercase().contains(&query)
        || meta.description.to_lowercase().contains(&query)
        || meta
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(&query))
}

/// Whether a layout is disabled for selection from the given tab.
///
/// Disabled means shown but not selectable: the layout disallows multiple
/// instances and some *other* tab is already bound to it.
pub fn layout_disabled(
    registry: &RegistryView,
    tabs: &[Tab],
    current_tab: TabId,
    layout_id: &str,
) -> bool {
    let Some(meta) = registry.get(layout_id) else {
        return false;
    };
    if meta.allow_multiple {
        return false;
    }
    tabs.iter()
        .any(|t| t.id != current_tab && t.layout_id.as_deref() == Some(layout_id))
}

/// Layout ids to offer for the given query, in presentation order.
///
/// An empty query browses the host-supplied `displayed_layouts` list (in host
/// order, unknown ids skipped), falling back to every registered layout when
/// the host supplies none. A non-empty query filters the full registry.
pub fn suggestions(
    registry: &RegistryView,
    displayed_layouts: &[LayoutId],
    query: &str,
) -> Vec<LayoutId> {
    if query.trim().is_empty() && !displayed_layouts.is_empty() {
        return displayed_layouts
            .iter()
            .filter(|id| registry.contains(id.as_str()))
            .cloned()
            .collect();
    }
    registry
        .iter()
        .filter(|(_, meta)| layout_matches(meta, query))
        .map(|(id, _)| id.clone())
        .collect()
}
