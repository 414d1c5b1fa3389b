//! Identifier aliases shared between the core and the host.

use uuid::Uuid;

/// Unique identifier for a tab, generated locally and stable for the tab's
/// lifetime.
pub type TabId = Uuid;

/// Identifier of a host-registered layout. The host owns the namespace; the
/// core only compares and forwards these.
pub type LayoutId = String;
