//! Shared menu primitives.
//!
//! `Menu` and `MenuAction` are used in two places: link previews render them
//! as context menus, and the bottom toolbar re-exports them as menu items. The
//! background-sharing flags in `Menu`'s signature only take effect when the
//! menu is hosted in a toolbar; elsewhere they are forwarded and ignored.

use dioxus::prelude::*;

use crate::core::config::ButtonConfig;
use crate::core::identity::ItemIdentifier;
use crate::host::RouterToolbarItem;

fn log_dropped_menu(err: &crate::core::config::ItemConfigError) {
    #[cfg(debug_assertions)]
    println!("[toolbar] dropped menu item: {err}");
    #[cfg(not(debug_assertions))]
    let _ = err;
}

/// A labeled container of actions.
///
/// Renders as a titled disclosure in the DOM fallback; a native layer shows
/// its platform menu from the forwarded descriptor.
#[component]
pub fn Menu(
    title: Option<String>,
    system_image: Option<String>,
    #[props(default)] hidden: bool,
    shares_background: Option<bool>,
    hides_shared_background: Option<bool>,
    children: Element,
) -> Element {
    let identity = use_hook(ItemIdentifier::generate);

    let config = ButtonConfig {
        label: title,
        system_image,
        width: None,
        tint_color: None,
        hidden,
        shares_background,
        hides_shared_background,
    };
    let descriptor = match config.descriptor(identity) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            log_dropped_menu(&err);
            return rsx! {};
        }
    };

    rsx! {
        RouterToolbarItem { descriptor,
            div { class: "link-menu",
                div { class: "link-menu__actions", {children} }
            }
        }
    }
}

/// A single menu entry.
#[component]
pub fn MenuAction(
    title: String,
    system_image: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] destructive: bool,
    on_pressed: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        button {
            class: "link-menu__action",
            class: if destructive { "link-menu__action--destructive" },
            disabled: disabled,
            onclick: move |_| {
                if let Some(handler) = on_pressed {
                    handler.call(());
                }
            },
            if let Some(symbol) = &system_image {
                span { class: "link-menu__symbol", "data-symbol": "{symbol}" }
            }
            span { class: "link-menu__title", "{title}" }
        }
    }
}
