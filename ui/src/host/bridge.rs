//! The host/item bridge component pair.
//!
//! `RouterToolbarHost` owns one mounted toolbar: it memoizes a host token,
//! collects the descriptors its item children publish, forwards the list to
//! the registered native binding, and drains native selection events back to
//! the matching item handler. `RouterToolbarItem` publishes one descriptor and
//! renders the DOM fallback used on webview targets, where no native binding
//! draws the bar.

use std::collections::HashMap;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::descriptor::{HostDescriptor, SpacerKind, ToolbarItemDescriptor};
use crate::core::identity::HostToken;
use crate::core::preview::PreviewAnchor;

use super::binding::{self, ToolbarEvent};

// Toolbar stylesheet for the DOM fallback (linked on web, inlined in release
// native builds so packaged apps need no external file).
const TOOLBAR_CSS: Asset = asset!("/assets/styling/toolbar.css");
const TOOLBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/toolbar.css"
));

/// Shared state one mounted host provides to its item children.
///
/// Items publish their descriptor here after each render pass; the host
/// forwards the ordered list (mount order) to the native binding whenever it
/// changes.
#[derive(Clone, Copy)]
pub(crate) struct ToolbarRegistry {
    items: Signal<Vec<ToolbarItemDescriptor>>,
    handlers: Signal<HashMap<String, EventHandler<()>>>,
}

impl ToolbarRegistry {
    fn new(
        items: Signal<Vec<ToolbarItemDescriptor>>,
        handlers: Signal<HashMap<String, EventHandler<()>>>,
    ) -> Self {
        Self { items, handlers }
    }

    pub(crate) fn upsert(
        &self,
        descriptor: ToolbarItemDescriptor,
        handler: Option<EventHandler<()>>,
    ) {
        let mut handlers = self.handlers;
        match handler {
            Some(handler) => {
                handlers
                    .write()
                    .insert(descriptor.identifier.as_str().to_string(), handler);
            }
            None => {
                if handlers.peek().contains_key(descriptor.identifier.as_str()) {
                    handlers.write().remove(descriptor.identifier.as_str());
                }
            }
        }

        let mut items = self.items;
        let position = items
            .peek()
            .iter()
            .position(|existing| existing.identifier == descriptor.identifier);
        match position {
            // Only touch the list when the record actually changed, so the
            // host does not re-notify the binding on every render pass.
            Some(index) => {
                if items.peek()[index] != descriptor {
                    items.write()[index] = descriptor;
                }
            }
            None => items.write().push(descriptor),
        }
    }

    pub(crate) fn remove(&self, identifier: &str) {
        let mut items = self.items;
        let position = items
            .peek()
            .iter()
            .position(|existing| existing.identifier.as_str() == identifier);
        if let Some(index) = position {
            items.write().remove(index);
        }

        let mut handlers = self.handlers;
        if handlers.peek().contains_key(identifier) {
            handlers.write().remove(identifier);
        }
    }

    pub(crate) fn select(&self, identifier: &str) -> bool {
        let handler = self.handlers.peek().get(identifier).copied();
        match handler {
            Some(handler) => {
                handler.call(());
                true
            }
            None => false,
        }
    }
}

#[cfg(debug_assertions)]
fn log_unrouted_selection(item: &str) {
    println!("[toolbar] selection event for unknown item {item}");
}

#[component]
pub fn RouterToolbarHost(
    #[props(default)] preview: PreviewAnchor,
    hidden: Option<bool>,
    children: Element,
) -> Element {
    let token = use_hook(HostToken::generate);
    let items = use_signal(Vec::<ToolbarItemDescriptor>::new);
    let handlers = use_signal(HashMap::<String, EventHandler<()>>::new);
    let registry = use_context_provider(|| ToolbarRegistry::new(items, handlers));

    // One attach notification per mount.
    {
        let host = HostDescriptor {
            identifier: token.clone(),
            hidden,
            preview: preview.clone(),
        };
        use_hook(move || {
            if let Some(bound) = binding::binding() {
                bound.toolbar_attached(&host);
            }
        });
    }

    // Native selection events drain here and route to the item's handler.
    let selection = use_coroutine(move |mut rx: UnboundedReceiver<ToolbarEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                ToolbarEvent::Selected { item } => {
                    let routed = registry.select(&item);
                    if !routed {
                        #[cfg(debug_assertions)]
                        log_unrouted_selection(&item);
                    }
                }
            }
        }
    });
    use_hook(move || binding::install_event_sink(selection.tx()));

    // Forward the ordered descriptor list whenever an item updates it.
    {
        let token = token.clone();
        use_effect(move || {
            let snapshot = items();
            if let Some(bound) = binding::binding() {
                bound.items_changed(token.as_str(), &snapshot);
            }
        });
    }

    use_drop({
        let token = token.clone();
        move || {
            binding::clear_event_sink();
            if let Some(bound) = binding::binding() {
                bound.toolbar_detached(token.as_str());
            }
        }
    });

    let hidden_bar = hidden.unwrap_or(false);

    rsx! {
        document::Link { rel: "stylesheet", href: TOOLBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{TOOLBAR_CSS_INLINE}" }
        }

        div {
            class: "router-toolbar",
            class: if hidden_bar { "router-toolbar--hidden" },
            "data-toolbar-host": "{token}",
            {children}
        }
    }
}

#[component]
pub fn RouterToolbarItem(
    descriptor: ToolbarItemDescriptor,
    on_selected: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let registry = try_use_context::<ToolbarRegistry>();

    // Mirror the latest record into the host registry after each render pass.
    let effect_descriptor = descriptor.clone();
    use_effect(use_reactive!(|(effect_descriptor,)| {
        if let Some(registry) = registry {
            registry.upsert(effect_descriptor, on_selected);
        }
    }));

    use_drop({
        let identifier = descriptor.identifier.clone();
        move || {
            if let Some(registry) = registry {
                registry.remove(identifier.as_str());
            }
        }
    });

    let hidden = descriptor.hidden.unwrap_or(false);
    let is_spacer = descriptor.kind.is_some();
    let width_css = descriptor
        .width
        .map(|width| format!("width:{width}px;"))
        .unwrap_or_default();
    let tint_css = descriptor
        .tint_color
        .as_ref()
        .map(|color| format!("color:{color};"))
        .unwrap_or_default();
    let has_button_face = descriptor.title.is_some() || descriptor.system_image_name.is_some();

    rsx! {
        div {
            class: "router-toolbar__item",
            class: if matches!(descriptor.kind, Some(SpacerKind::Fixed)) { "router-toolbar__spacer--fixed" },
            class: if matches!(descriptor.kind, Some(SpacerKind::Fluid)) { "router-toolbar__spacer--fluid" },
            class: if hidden { "router-toolbar__item--hidden" },
            style: "{width_css}",
            "data-toolbar-item": "{descriptor.identifier}",
            if !is_spacer {
                if has_button_face {
                    button {
                        class: "router-toolbar__button",
                        style: "{tint_css}",
                        onclick: move |_| {
                            if let Some(handler) = on_selected {
                                handler.call(());
                            }
                        },
                        if let Some(symbol) = &descriptor.system_image_name {
                            span {
                                class: "router-toolbar__symbol",
                                "data-symbol": "{symbol}",
                            }
                        }
                        if let Some(title) = &descriptor.title {
                            span { class: "router-toolbar__title", "{title}" }
                        }
                    }
                }
                {children}
            }
        }
    }
}
