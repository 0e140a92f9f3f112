//! Explicit configuration for toolbar items.
//!
//! Each item kind is described by a plain struct with documented defaults and
//! a fallible `descriptor` operation that shapes the native wire record. The
//! only rules enforced locally are the ones that are locally checkable: a
//! provided width must be finite and non-negative. Everything else (unknown
//! symbol names, unsupported tint values) stays a native-layer concern.

use serde::{Deserialize, Serialize};

use super::descriptor::{SpacerKind, ToolbarItemDescriptor};
use super::identity::ItemIdentifier;
use super::style::ViewStyle;

/// Rejected item configuration. Construction is the only place these can
/// surface; a descriptor that exists is always forwardable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemConfigError {
    NonFiniteWidth(f64),
    NegativeWidth(f64),
}

impl std::fmt::Display for ItemConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteWidth(width) => {
                write!(f, "item width must be finite, got {width}")
            }
            Self::NegativeWidth(width) => {
                write!(f, "item width must be non-negative, got {width}")
            }
        }
    }
}

impl std::error::Error for ItemConfigError {}

fn validated_width(width: Option<f64>) -> Result<Option<f64>, ItemConfigError> {
    match width {
        Some(value) if !value.is_finite() => Err(ItemConfigError::NonFiniteWidth(value)),
        Some(value) if value < 0.0 => Err(ItemConfigError::NegativeWidth(value)),
        other => Ok(other),
    }
}

fn hidden_flag(hidden: bool) -> Option<bool> {
    hidden.then_some(true)
}

/// Configuration for a titled/symboled toolbar button.
///
/// Defaults: no label, no symbol, natural width, no tint, visible, background
/// sharing left to the native layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonConfig {
    /// Label content; forwarded to the native layer as the item title.
    pub label: Option<String>,
    /// SF symbol name rendered next to (or instead of) the title.
    pub system_image: Option<String>,
    /// Fixed width in points. Unset lets the item size itself.
    pub width: Option<f64>,
    pub tint_color: Option<String>,
    pub hidden: bool,
    pub shares_background: Option<bool>,
    pub hides_shared_background: Option<bool>,
}

impl ButtonConfig {
    /// Shapes the wire record for this button under the given identifier.
    pub fn descriptor(
        &self,
        identity: ItemIdentifier,
    ) -> Result<ToolbarItemDescriptor, ItemConfigError> {
        let width = validated_width(self.width)?;
        Ok(ToolbarItemDescriptor {
            identifier: identity,
            title: self.label.clone(),
            system_image_name: self.system_image.clone(),
            width,
            kind: None,
            tint_color: self.tint_color.clone(),
            hidden: hidden_flag(self.hidden),
            shares_background: self.shares_background,
            hides_shared_background: self.hides_shared_background,
        })
    }

    /// Construction-scoped variant: generates the item's identifier itself.
    pub fn build(&self) -> Result<ToolbarItemDescriptor, ItemConfigError> {
        self.descriptor(ItemIdentifier::generate())
    }
}

/// Configuration for a toolbar gap.
///
/// Defaults: fluid (no width), visible, background sharing left to the native
/// layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerConfig {
    /// Fixed gap width in points. Unset makes the gap expand to fill space.
    pub width: Option<f64>,
    pub hidden: bool,
    pub shares_background: Option<bool>,
    pub hides_shared_background: Option<bool>,
}

impl SpacerConfig {
    /// Fixed when a width is provided, fluid otherwise.
    pub fn kind(&self) -> SpacerKind {
        if self.width.is_some() {
            SpacerKind::Fixed
        } else {
            SpacerKind::Fluid
        }
    }

    pub fn descriptor(
        &self,
        identity: ItemIdentifier,
    ) -> Result<ToolbarItemDescriptor, ItemConfigError> {
        let width = validated_width(self.width)?;
        Ok(ToolbarItemDescriptor {
            identifier: identity,
            title: None,
            system_image_name: None,
            width,
            kind: Some(self.kind()),
            tint_color: None,
            hidden: hidden_flag(self.hidden),
            shares_background: self.shares_background,
            hides_shared_background: self.hides_shared_background,
        })
    }

    pub fn build(&self) -> Result<ToolbarItemDescriptor, ItemConfigError> {
        self.descriptor(ItemIdentifier::generate())
    }
}

/// Configuration for a custom-content toolbar item.
///
/// Defaults: unstyled, visible, background sharing left to the native layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    pub style: ViewStyle,
    pub hidden: bool,
    pub shares_background: Option<bool>,
    pub hides_shared_background: Option<bool>,
}

impl ViewConfig {
    pub fn descriptor(
        &self,
        identity: ItemIdentifier,
    ) -> Result<ToolbarItemDescriptor, ItemConfigError> {
        Ok(ToolbarItemDescriptor {
            identifier: identity,
            title: None,
            system_image_name: None,
            width: None,
            kind: None,
            tint_color: None,
            hidden: hidden_flag(self.hidden),
            shares_background: self.shares_background,
            hides_shared_background: self.hides_shared_background,
        })
    }

    pub fn build(&self) -> Result<ToolbarItemDescriptor, ItemConfigError> {
        self.descriptor(ItemIdentifier::generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_becomes_the_title() {
        let config = ButtonConfig {
            label: Some("Search".to_string()),
            ..ButtonConfig::default()
        };
        let descriptor = config.build().expect("valid config");
        assert_eq!(descriptor.title.as_deref(), Some("Search"));
        assert!(descriptor.system_image_name.is_none());
        assert!(descriptor.kind.is_none());
    }

    #[test]
    fn button_forwards_attributes_unchanged() {
        let config = ButtonConfig {
            label: Some("Done".to_string()),
            system_image: Some("checkmark".to_string()),
            width: Some(56.0),
            tint_color: Some("#2f6f4f".to_string()),
            hidden: true,
            shares_background: Some(true),
            hides_shared_background: Some(false),
        };
        let descriptor = config.build().expect("valid config");
        assert_eq!(descriptor.system_image_name.as_deref(), Some("checkmark"));
        assert_eq!(descriptor.width, Some(56.0));
        assert_eq!(descriptor.tint_color.as_deref(), Some("#2f6f4f"));
        assert_eq!(descriptor.hidden, Some(true));
        assert_eq!(descriptor.shares_background, Some(true));
        assert_eq!(descriptor.hides_shared_background, Some(false));
    }

    #[test]
    fn visible_items_omit_the_hidden_flag() {
        let descriptor = ButtonConfig::default().build().expect("valid config");
        assert_eq!(descriptor.hidden, None);
    }

    #[test]
    fn spacer_with_width_is_fixed() {
        let config = SpacerConfig {
            width: Some(20.0),
            ..SpacerConfig::default()
        };
        assert_eq!(config.kind(), SpacerKind::Fixed);
        let descriptor = config.build().expect("valid config");
        assert_eq!(descriptor.kind, Some(SpacerKind::Fixed));
        assert_eq!(descriptor.width, Some(20.0));
    }

    #[test]
    fn spacer_without_width_is_fluid() {
        let config = SpacerConfig::default();
        assert_eq!(config.kind(), SpacerKind::Fluid);
        let descriptor = config.build().expect("valid config");
        assert_eq!(descriptor.kind, Some(SpacerKind::Fluid));
        assert_eq!(descriptor.width, None);
    }

    #[test]
    fn descriptors_built_separately_get_distinct_identifiers() {
        let config = ButtonConfig::default();
        let first = config.build().expect("valid config");
        let second = config.build().expect("valid config");
        assert_ne!(first.identifier, second.identifier);
    }

    #[test]
    fn descriptor_is_stable_under_a_held_identifier() {
        // Re-shaping with the same identity must yield the same record, which
        // is what keeps re-renders from churning the native layer.
        let identity = ItemIdentifier::generate();
        let config = ButtonConfig {
            label: Some("Search".to_string()),
            ..ButtonConfig::default()
        };
        let first = config.descriptor(identity.clone()).expect("valid config");
        let second = config.descriptor(identity).expect("valid config");
        assert_eq!(first, second);
    }

    #[test]
    fn non_finite_width_is_rejected() {
        let config = ButtonConfig {
            width: Some(f64::NAN),
            ..ButtonConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(ItemConfigError::NonFiniteWidth(_))
        ));

        let config = SpacerConfig {
            width: Some(f64::INFINITY),
            ..SpacerConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(ItemConfigError::NonFiniteWidth(_))
        ));
    }

    #[test]
    fn negative_width_is_rejected() {
        let config = SpacerConfig {
            width: Some(-4.0),
            ..SpacerConfig::default()
        };
        assert_eq!(config.build(), Err(ItemConfigError::NegativeWidth(-4.0)));
    }

    #[test]
    fn view_descriptor_carries_flags_only() {
        let config = ViewConfig {
            shares_background: Some(true),
            ..ViewConfig::default()
        };
        let descriptor = config.build().expect("valid config");
        assert!(descriptor.title.is_none());
        assert!(descriptor.width.is_none());
        assert!(descriptor.kind.is_none());
        assert_eq!(descriptor.shares_background, Some(true));
    }
}
