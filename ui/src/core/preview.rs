//! Preview anchor placeholder forwarded to the toolbar host.

use serde::{Deserialize, Serialize};

/// Visibility and target reference for a link preview hosted near the toolbar.
///
/// The toolbar currently always forwards the detached placeholder; nothing in
/// this crate drives the anchor yet. It is passed to the host as an explicit
/// value rather than propagated ambiently, so future preview wiring stays a
/// parameter change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewAnchor {
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl PreviewAnchor {
    /// The fixed placeholder: not visible, no target.
    pub fn detached() -> Self {
        Self {
            visible: false,
            target: None,
        }
    }
}

impl Default for PreviewAnchor {
    fn default() -> Self {
        Self::detached()
    }
}
