//! Restricted styling surface for custom toolbar views.
//!
//! The native host positions toolbar items itself, so the style type exposed
//! to callers deliberately has no positional or flex fields. The container a
//! custom view renders into always starts at `position:absolute`; a caller
//! cannot express an override because the field does not exist.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Appearance knobs available to a custom toolbar view.
///
/// All fields default to unset, which leaves the native appearance untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewStyle {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub padding: Option<f64>,
    pub background_color: Option<String>,
    pub border_radius: Option<f64>,
    pub opacity: Option<f64>,
}

impl ViewStyle {
    /// CSS declarations for the set fields only.
    pub fn declarations(&self) -> String {
        let mut css = String::new();
        if let Some(width) = self.width {
            let _ = write!(css, "width:{width}px;");
        }
        if let Some(height) = self.height {
            let _ = write!(css, "height:{height}px;");
        }
        if let Some(padding) = self.padding {
            let _ = write!(css, "padding:{padding}px;");
        }
        if let Some(color) = &self.background_color {
            let _ = write!(css, "background-color:{color};");
        }
        if let Some(radius) = self.border_radius {
            let _ = write!(css, "border-radius:{radius}px;");
        }
        if let Some(opacity) = self.opacity {
            let _ = write!(css, "opacity:{opacity};");
        }
        css
    }

    /// Inline style for the view container. Always anchored absolutely; the
    /// host decides where the item actually lands.
    pub fn container_style(&self) -> String {
        format!("position:absolute;{}", self.declarations())
    }
}
