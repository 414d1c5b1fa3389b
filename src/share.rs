//! Share-token codec for tab layout bindings.
//!
//! A share link carries one tab's layout binding as a URL fragment:
//! `<location-without-fragment>#<prefix><base64(JSON)>` with URL-safe,
//! unpadded base64. Spawning from a decoded token is the orchestrator's job
//! (it needs the registry, the tab limit, and the notification channel);
//! this module only encodes, decodes, and recognizes fragments.

use std::collections::BTreeMap;
use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::tab::{LayoutId, Tab};

/// Fragment prefix that marks a recognized share token.
pub const SHARE_PREFIX: &str = "tabdeck:";

/// The serialized layout binding carried by a share link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    /// Layout to spawn.
    pub layout_id: LayoutId,
    /// Display name for the spawned tab.
    pub name: String,
    /// Parameter values, if the layout was bound with any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_params: Option<BTreeMap<String, String>>,
    /// Preset key, when bound via a preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_param_option_key: Option<String>,
}

impl SharePayload {
    /// Build from a tab; `None` for unbound tabs, which have nothing to
    /// share.
    pub fn from_tab(tab: &Tab) -> Option<Self> {
        let layout_id = tab.layout_id.clone()?;
        Some(Self {
            layout_id,
            name: tab.name.clone(),
            layout_params: tab.layout_params.clone(),
            layout_param_option_key: tab.layout_param_option_key.clone(),
        })
    }
}

/// Errors produced while decoding a share token.
///
/// These are exposed so hosts can match on specific failure modes instead of
/// opaque strings; user-facing reporting collapses them into one generic
/// invalid-link notification.
#[derive(Debug)]
pub enum ShareError {
    /// The token was not valid URL-safe base64.
    Decode(base64::DecodeError),

    /// The decoded bytes were not a valid payload document.
    Parse(serde_json::Error),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Decode(e) => write!(f, "Invalid share token encoding: {e}"),
            ShareError::Parse(e) => write!(f, "Invalid share payload: {e}"),
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShareError::Decode(e) => Some(e),
            ShareError::Parse(e) => Some(e),
        }
    }
}

impl From<base64::DecodeError> for ShareError {
    fn from(e: base64::DecodeError) -> Self {
        ShareError::Decode(e)
    }
}

impl From<serde_json::Error> for ShareError {
    fn from(e: serde_json::Error) -> Self {
        ShareError::Parse(e)
    }
}

/// Encode a payload into a bare share token (no prefix).
pub fn encode_share_token(payload: &SharePayload) -> String {
    let json = serde_json::to_vec(payload).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a bare share token (no prefix) back into a payload.
pub fn decode_share_token(token: &str) -> Result<SharePayload, ShareError> {
    let bytes = URL_SAFE_NO_PAD.decode(token)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Build a share link for a tab, replacing any fragment on `location`.
///
/// Returns `None` for unbound tabs.
pub fn generate_share_link(tab: &Tab, location: &str) -> Option<String> {
    let payload = SharePayload::from_tab(tab)?;
    let base = strip_fragment(location);
    Some(format!("{base}#{SHARE_PREFIX}{}", encode_share_token(&payload)))
}

/// The location with its fragment (and `#`) removed.
pub fn strip_fragment(location: &str) -> String {
    match location.split_once('#') {
        Some((base, _)) => base.to_string(),
        None => location.to_string(),
    }
}

/// Extract the bare token from a location whose fragment carries the share
/// prefix. `None` when there is no fragment or it is not ours.
pub fn extract_fragment_token(location: &str) -> Option<&str> {
    let (_, fragment) = location.split_once('#')?;
    fragment.strip_prefix(SHARE_PREFIX)
}
