//! Shared identifiers and layout metadata for the tabdeck tab manager.
//!
//! This crate holds the types that cross the boundary between the tabdeck
//! core and the embedding host:
//!
//! - Identifier aliases (`TabId`, `LayoutId`)
//! - Layout metadata as supplied by the host (`LayoutMeta`, `LayoutParameter`,
//!   `ParameterPreset`)
//! - The read-only [`RegistryView`] projection the core consults

pub mod layout;
pub mod registry;
mod types;

pub use layout::{LayoutMeta, LayoutParameter, ParameterPreset};
pub use registry::RegistryView;
pub use types::{LayoutId, TabId};
