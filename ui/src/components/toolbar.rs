//! Router bottom-toolbar surface.
//!
//! `Toolbar` and its item components are a thin shaping layer: each item
//! memoizes one identifier for its lifetime, folds its props into an explicit
//! config struct, and forwards the resulting descriptor to the bridge pair in
//! [`crate::host`]. No layout or event plumbing happens here.
//!
//! ```ignore
//! rsx! {
//!     Toolbar {
//!         ToolbarButton { label: "Search", system_image: "magnifyingglass", on_press: move |_| open() }
//!         ToolbarSpacer {}
//!         ToolbarMenu { title: "Filter",
//!             ToolbarMenuAction { title: "Easy", on_pressed: move |_| filter("easy") }
//!         }
//!     }
//! }
//! ```

use dioxus::prelude::*;

use crate::core::config::{ButtonConfig, ItemConfigError, SpacerConfig, ViewConfig};
use crate::core::identity::ItemIdentifier;
use crate::core::preview::PreviewAnchor;
use crate::core::style::ViewStyle;
use crate::host::{RouterToolbarHost, RouterToolbarItem};

// The toolbar menu is the shared link menu, unchanged. Only the re-export
// names differ.
pub use crate::link_menu::{Menu as ToolbarMenu, MenuAction as ToolbarMenuAction};

fn log_dropped_item(kind: &str, err: &ItemConfigError) {
    #[cfg(debug_assertions)]
    println!("[toolbar] dropped {kind} item: {err}");
    #[cfg(not(debug_assertions))]
    let _ = (kind, err);
}

/// Root of the toolbar surface. Mounts the host bridge and hands it the
/// preview placeholder.
#[component]
pub fn Toolbar(hidden: Option<bool>, children: Element) -> Element {
    // Link previews do not drive the anchor yet; the host always receives the
    // detached placeholder.
    let preview = PreviewAnchor::detached();

    rsx! {
        RouterToolbarHost { preview, hidden, {children} }
    }
}

/// A titled and/or symboled toolbar button.
///
/// The press handler is forwarded to the bridge as the item's selection
/// handler. Width, tint, and the background-sharing flags pass through
/// unchanged.
#[component]
pub fn ToolbarButton(
    label: Option<String>,
    system_image: Option<String>,
    width: Option<f64>,
    on_press: Option<EventHandler<()>>,
    tint_color: Option<String>,
    #[props(default)] hidden: bool,
    shares_background: Option<bool>,
    hides_shared_background: Option<bool>,
) -> Element {
    let identity = use_hook(ItemIdentifier::generate);

    let config = ButtonConfig {
        label,
        system_image,
        width,
        tint_color,
        hidden,
        shares_background,
        hides_shared_background,
    };
    let descriptor = match config.descriptor(identity) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            log_dropped_item("button", &err);
            return rsx! {};
        }
    };

    rsx! {
        RouterToolbarItem { descriptor, on_selected: on_press }
    }
}

/// A toolbar gap: fixed when a width is given, fluid otherwise.
#[component]
pub fn ToolbarSpacer(
    width: Option<f64>,
    #[props(default)] hidden: bool,
    shares_background: Option<bool>,
    hides_shared_background: Option<bool>,
) -> Element {
    let identity = use_hook(ItemIdentifier::generate);

    let config = SpacerConfig {
        width,
        hidden,
        shares_background,
        hides_shared_background,
    };
    let descriptor = match config.descriptor(identity) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            log_dropped_item("spacer", &err);
            return rsx! {};
        }
    };

    rsx! {
        RouterToolbarItem { descriptor }
    }
}

/// Arbitrary content hosted as a toolbar item.
///
/// The content is wrapped in an absolutely positioned container; the native
/// host decides where the item lands, so the restricted [`ViewStyle`] cannot
/// move it.
#[component]
pub fn ToolbarView(
    #[props(default)] style: ViewStyle,
    #[props(default)] hidden: bool,
    shares_background: Option<bool>,
    hides_shared_background: Option<bool>,
    children: Element,
) -> Element {
    let identity = use_hook(ItemIdentifier::generate);

    let config = ViewConfig {
        style: style.clone(),
        hidden,
        shares_background,
        hides_shared_background,
    };
    let descriptor = match config.descriptor(identity) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            log_dropped_item("view", &err);
            return rsx! {};
        }
    };

    let container_style = style.container_style();

    rsx! {
        RouterToolbarItem { descriptor,
            div { class: "router-toolbar__view", style: "{container_style}", {children} }
        }
    }
}
