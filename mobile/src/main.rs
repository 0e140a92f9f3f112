use dioxus::prelude::*;

use ui::components::{
    Toolbar, ToolbarButton, ToolbarMenu, ToolbarMenuAction, ToolbarSpacer, ToolbarView,
};
use ui::core::descriptor::{HostDescriptor, ToolbarItemDescriptor};
use ui::core::style::ViewStyle;
use ui::host::{register_toolbar_binding, NativeToolbarBinding};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileShell)]
    #[route("/")]
    Trails {},
    #[route("/map")]
    TrailMap {},
    #[route("/saved")]
    Saved {},
}

fn main() {
    dioxus::launch(App);
}

/// Mirrors toolbar traffic to stdout while the real platform binding is under
/// construction. Payloads are the exact records a native binding receives.
struct LogBinding;

fn log_payload<T: serde::Serialize>(tag: &str, value: &T) {
    #[cfg(debug_assertions)]
    match serde_json::to_string(value) {
        Ok(payload) => println!("[toolbar] {tag} {payload}"),
        Err(err) => println!("[toolbar] {tag} <unserializable: {err}>"),
    }
    #[cfg(not(debug_assertions))]
    let _ = (tag, value);
}

impl NativeToolbarBinding for LogBinding {
    fn toolbar_attached(&self, host: &HostDescriptor) {
        log_payload("attached", host);
    }

    fn items_changed(&self, host: &str, items: &[ToolbarItemDescriptor]) {
        log_payload(&format!("items {host}"), &items);
    }

    fn toolbar_detached(&self, host: &str) {
        #[cfg(debug_assertions)]
        println!("[toolbar] detached {host}");
        #[cfg(not(debug_assertions))]
        let _ = host;
    }
}

#[component]
fn App() -> Element {
    // Idempotent; the first registration wins.
    register_toolbar_binding(LogBinding);

    rsx! {
        Router::<Route> {}
    }
}

/// Shell layout shared by every mobile screen.
#[component]
fn MobileShell() -> Element {
    rsx! {
        header { class: "screen-header",
            span { class: "screen-header__mark", "Switchback" }
            nav { class: "screen-tabs",
                Link { class: "screen-tabs__link", to: Route::Trails {}, "Trails" }
                Link { class: "screen-tabs__link", to: Route::TrailMap {}, "Map" }
                Link { class: "screen-tabs__link", to: Route::Saved {}, "Saved" }
            }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn Trails() -> Element {
    let mut search_open = use_signal(|| false);
    let mut difficulty = use_signal(|| Option::<&'static str>::None);

    let filter_label = match difficulty() {
        Some(level) => format!("Filtered: {level}"),
        None => "All difficulties".to_string(),
    };

    rsx! {
        section { class: "page page-trails",
            h2 { "Nearby trails" }
            p { class: "page-trails__filter", "{filter_label}" }
            if search_open() {
                p { class: "page-trails__search-hint", "Type to search trail names." }
            }
        }

        Toolbar {
            ToolbarButton {
                label: "Search",
                system_image: "magnifyingglass",
                on_press: move |_| {
                    let next = !search_open();
                    search_open.set(next);
                },
            }
            ToolbarSpacer {}
            ToolbarMenu {
                title: "Filter",
                system_image: "line.3.horizontal.decrease",
                ToolbarMenuAction {
                    title: "Easy",
                    on_pressed: move |_| difficulty.set(Some("easy")),
                }
                ToolbarMenuAction {
                    title: "Moderate",
                    on_pressed: move |_| difficulty.set(Some("moderate")),
                }
                ToolbarMenuAction {
                    title: "Clear filter",
                    destructive: true,
                    on_pressed: move |_| difficulty.set(None),
                }
            }
        }
    }
}

#[component]
fn TrailMap() -> Element {
    let mut centered = use_signal(|| false);

    let elevation_style = ViewStyle {
        width: Some(140.0),
        border_radius: Some(10.0),
        ..ViewStyle::default()
    };

    rsx! {
        section { class: "page page-map",
            h2 { "Trail map" }
            if centered() {
                p { class: "page-map__status", "Centered on your position." }
            }
        }

        Toolbar {
            ToolbarButton {
                system_image: "location",
                tint_color: "#6fae8f",
                on_press: move |_| centered.set(true),
            }
            ToolbarSpacer { width: 20.0 }
            ToolbarView { style: elevation_style,
                span { class: "page-map__elevation", "Elevation 1,240 m" }
            }
        }
    }
}

#[component]
fn Saved() -> Element {
    rsx! {
        section { class: "page page-saved",
            h2 { "Saved trails" }
            p { "Trails you bookmark will appear here." }
        }

        // Toolbar stays mounted but out of sight until sharing lands.
        Toolbar { hidden: true,
            ToolbarButton { label: "Share", system_image: "square.and.arrow.up" }
        }
    }
}
