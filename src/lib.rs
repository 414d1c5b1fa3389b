//! Headless tab and layout management core for embeddable dashboard hosts.
//!
//! The embedding host registers named layouts and renders their content;
//! this crate owns everything stateful in between: the tab collection and
//! active pointer, the layout-selection/parameter-collection flow, the
//! bidirectional state-sync protocol with the host, share links, and
//! loading-state correlation. Presentation layers read deck state and emit
//! [`actions::TabAction`] intents.

/// Library version (root crate version, for use by hosts and sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod actions;
pub mod config;
pub mod content;
pub mod deck;
pub mod notifications;
pub mod selection;
pub mod share;
pub mod sync;
pub mod tab;

// Re-export the shared-types crate for hosts that only need the metadata
// schema.
pub use tabdeck_registry as registry;

pub use actions::TabAction;
pub use config::DeckConfig;
pub use deck::TabDeck;
pub use tab::{LayoutId, Tab, TabId, TabManager};
pub use tabdeck_registry::{LayoutMeta, LayoutParameter, ParameterPreset, RegistryView};
