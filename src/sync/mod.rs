//! Host synchronization bridge.
//!
//! The embedding host owns authoritative layout content and persistence; the
//! core owns tab state. This bridge reconciles the two directions without
//! feedback loops:
//!
//! - **Inbound**: the host may push a controlled tabs snapshot (e.g. restored
//!   persisted state) or a controlled active-tab reference by layout id,
//!   since the host only knows layout identity.
//! - **Outbound**: after every mutation the bridge computes a normalized
//!   report for the host, emitting the compact content-render list only when
//!   its signature actually moved.
//!
//! Each inbound change sets a one-shot guard consumed by the next outbound
//! cycle, so reflecting host-supplied state back never re-triggers a push the
//! host would see as a phantom change.

mod snapshot;

pub use snapshot::{ActiveTabData, HostReport, TabContentRecord, content_records, content_signature};

use crate::tab::{Tab, TabManager};

/// Reconciles internal tab state with host-controlled props.
#[derive(Debug)]
pub struct HostSyncBridge {
    /// Host persistence is enabled; the first outbound push yields to
    /// restored state.
    persistence: bool,
    /// One-shot guard: the next outbound cycle reflects an inbound change
    /// and must not push.
    inbound_guard: bool,
    /// A controlled tabs snapshot has arrived at least once.
    controlled_seen: bool,
    /// The initial-mount suppression has been spent.
    initial_push_done: bool,
    /// Signature of the last emitted (or reconciled) content set.
    last_signature: Option<String>,
}

impl HostSyncBridge {
    /// Create a bridge; `persistence` mirrors the host's persistence flag.
    pub fn new(persistence: bool) -> Self {
        Self {
            persistence,
            inbound_guard: false,
            controlled_seen: false,
            initial_push_done: false,
            last_signature: None,
        }
    }

    /// Whether an inbound change is waiting to be consumed by `report`.
    pub fn guard_armed(&self) -> bool {
        self.inbound_guard
    }

    /// Inbound: reconcile a host-supplied controlled tabs snapshot.
    ///
    /// Replaces internal state when the snapshot differs by deep (wire-level)
    /// equality; a vanished active tab falls back to the first tab. Returns
    /// true when internal state changed.
    pub fn apply_controlled_tabs(&mut self, manager: &mut TabManager, snapshot: Vec<Tab>) -> bool {
        self.controlled_seen = true;

        // Wire-level equality: transient fields are serde-skipped, so value
        // comparison sees exactly what the host sees.
        let current = serde_json::to_value(manager.tabs()).unwrap_or_default();
        let incoming = serde_json::to_value(&snapshot).unwrap_or_default();
        if current == incoming {
            log::debug!("Controlled tabs snapshot matches internal state");
            return false;
        }

        log::info!("Applying controlled tabs snapshot ({} tabs)", snapshot.len());
        manager.replace_tabs(snapshot);
        self.inbound_guard = true;
        true
    }

    /// Inbound: activate the tab bound to a host-supplied layout id.
    ///
    /// Returns true when the active tab changed.
    pub fn apply_controlled_active(&mut self, manager: &mut TabManager, layout_id: &str) -> bool {
        let Some(target) = manager.find_by_layout(layout_id).map(|t| t.id) else {
            log::debug!("No tab bound to controlled active layout {layout_id:?}");
            return false;
        };
        if !manager.select_tab(target) {
            return false;
        }
        log::info!("Controlled active layout {layout_id:?} activated tab {target}");
        self.inbound_guard = true;
        true
    }

    /// Outbound: compute the report for the host after a mutation.
    ///
    /// Returns `None` when the cycle reflects an inbound change (guard
    /// consumed) or when the very first push is suppressed to let persisted
    /// state arrive first.
    pub fn report(&mut self, manager: &TabManager) -> Option<HostReport> {
        let records = content_records(manager.tabs());
        let signature = content_signature(&records);

        if std::mem::take(&mut self.inbound_guard) {
            // Reflecting host state back; remember the signature so the next
            // genuine mutation diffs against what the host already has.
            self.last_signature = Some(signature);
            log::debug!("Outbound push skipped (inbound guard)");
            return None;
        }

        if self.persistence && !self.controlled_seen && !self.initial_push_done {
            self.initial_push_done = true;
            log::debug!("Initial outbound push suppressed awaiting persisted state");
            return None;
        }
        self.initial_push_done = true;

        let tabs_data = if self.last_signature.as_deref() != Some(signature.as_str()) {
            self.last_signature = Some(signature);
            Some(records)
        } else {
            None
        };

        let active = manager.active_tab();
        Some(HostReport {
            active_tab: active.layout_id.clone(),
            active_tab_data: ActiveTabData::from_tab(active),
            tabs: manager.tabs().to_vec(),
            tabs_data,
        })
    }
}
