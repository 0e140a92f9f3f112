//! Wire records handed to the native toolbar layer.
//!
//! Field names follow the bridge contract exactly, so the serialized payloads
//! can be consumed by the platform side without translation. Unset fields are
//! omitted from the payload. Selection callbacks are not part of the record;
//! they are wired separately through the host's event channel.

use serde::{Deserialize, Serialize};

use super::identity::{HostToken, ItemIdentifier};
use super::preview::PreviewAnchor;

/// Classification tag carried only by spacer items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpacerKind {
    /// A gap of caller-specified width.
    #[serde(rename = "fixedSpacer")]
    Fixed,
    /// A gap that expands to fill available space.
    #[serde(rename = "fluidSpacer")]
    Fluid,
}

/// The attribute record describing one toolbar entry to the native layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarItemDescriptor {
    pub identifier: ItemIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_image_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SpacerKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares_background: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hides_shared_background: Option<bool>,
}

/// Host-level record sent when a toolbar attaches to a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDescriptor {
    pub identifier: HostToken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    pub preview: PreviewAnchor,
}
