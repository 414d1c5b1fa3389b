//! Rendered-content correlation.
//!
//! The host attaches a tab-scoped compound identifier to each piece of
//! rendered content (`"<tab-id>::<rest>"`). The core matches those
//! identifiers against tab ids to decide visibility and loading membership.
//! The locator is an injected capability rather than ambient global state.

use std::collections::HashSet;

use uuid::Uuid;

use crate::tab::{Tab, TabId};

/// Reserved delimiter separating the tab scope from the rest of a compound
/// content identifier.
pub const SCOPE_DELIMITER: &str = "::";

/// Capability to enumerate the compound identifiers of content the host has
/// rendered so far.
pub trait ContentLocator {
    /// Compound identifiers of all currently rendered content nodes.
    fn rendered_ids(&self) -> Vec<String>;
}

/// Extract the tab scope from a compound identifier: split on the reserved
/// delimiter, take the first segment.
pub fn extract_tab_scope(compound_id: &str) -> &str {
    match compound_id.split_once(SCOPE_DELIMITER) {
        Some((scope, _)) => scope,
        None => compound_id,
    }
}

/// Tab ids the locator confirms content for. Segments that do not parse as
/// tab ids are ignored.
pub fn rendered_tabs(locator: &dyn ContentLocator) -> HashSet<TabId> {
    locator
        .rendered_ids()
        .iter()
        .filter_map(|id| Uuid::parse_str(extract_tab_scope(id)).ok())
        .collect()
}

/// The loading set: bound tabs minus tabs with observed rendered content.
///
/// Multiple tabs may be loading concurrently; a tab can stay here forever if
/// the host never delivers, which is the host's responsibility to avoid.
pub fn loading_set(tabs: &[Tab], locator: &dyn ContentLocator) -> HashSet<TabId> {
    let rendered = rendered_tabs(locator);
    tabs.iter()
        .filter(|t| t.is_bound() && !rendered.contains(&t.id))
        .map(|t| t.id)
        .collect()
}
