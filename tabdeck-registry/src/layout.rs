//! Layout metadata as supplied by the host.
//!
//! The host registers layouts (named content definitions, optionally
//! parameterized) and hands the core a wholesale metadata snapshot each
//! render. Field names follow the host wire protocol (camelCase).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single parameter a layout accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParameter {
    /// Parameter name, used as the key in collected parameter maps.
    pub name: String,

    /// Whether the parameter carries a default value.
    #[serde(default)]
    pub has_default: bool,

    /// The default value, present only when `has_default` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl LayoutParameter {
    /// A parameter with no default; input is required before advancing.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_default: false,
            default: None,
        }
    }

    /// A parameter pre-filled with a default value.
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_default: true,
            default: Some(default.into()),
        }
    }
}

/// A named, pre-filled parameter set for a layout.
///
/// When a layout defines presets, users pick one of these instead of
/// entering parameters one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterPreset {
    /// Human-readable description shown in the preset picker.
    pub description: String,

    /// Fixed parameter values applied when this preset is chosen.
    pub params: BTreeMap<String, String>,
}

/// Metadata for one host-registered layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMeta {
    /// Display name.
    pub name: String,

    /// Description, searchable alongside the name.
    #[serde(default)]
    pub description: String,

    /// Keywords for search/filtering.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Whether multiple tabs may bind this layout simultaneously.
    /// When false, at most one tab in the collection may be bound to it.
    #[serde(default)]
    pub allow_multiple: bool,

    /// Parameters collected one at a time when the layout is selected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<LayoutParameter>,

    /// Pre-defined parameter sets. When non-empty these take precedence
    /// over free-form parameter entry.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameter_options: BTreeMap<String, ParameterPreset>,
}

impl LayoutMeta {
    /// Minimal metadata with just a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
            allow_multiple: false,
            parameters: Vec::new(),
            parameter_options: BTreeMap::new(),
        }
    }

    /// Whether selecting this layout requires any user input beyond the click.
    pub fn needs_input(&self) -> bool {
        !self.parameters.is_empty() || !self.parameter_options.is_empty()
    }
}
