//! Native binding registration and event ingress.
//!
//! Platforms provide the actual toolbar rendering. A platform crate registers
//! one [`NativeToolbarBinding`] at startup; the bridge components notify it as
//! hosts attach, item lists change, and hosts detach. Selection events travel
//! the other way: the native side calls [`deliver_event`], and the mounted
//! host drains the channel and invokes the matching item handler.

use std::sync::Mutex;

use futures_channel::mpsc::UnboundedSender;
use once_cell::sync::{Lazy, OnceCell};

use crate::core::descriptor::{HostDescriptor, ToolbarItemDescriptor};

/// Contract the platform side implements. Consumed here, never rendered here.
pub trait NativeToolbarBinding: Send + Sync {
    /// A toolbar host mounted on a screen.
    fn toolbar_attached(&self, host: &HostDescriptor);

    /// The ordered item list of a mounted host changed.
    fn items_changed(&self, host: &str, items: &[ToolbarItemDescriptor]);

    /// A toolbar host unmounted.
    fn toolbar_detached(&self, host: &str);
}

static BINDING: OnceCell<Box<dyn NativeToolbarBinding>> = OnceCell::new();

/// Registers the process-wide native binding. The first registration wins;
/// later calls return `false` and leave the existing binding in place.
pub fn register_toolbar_binding(binding: impl NativeToolbarBinding + 'static) -> bool {
    BINDING.set(Box::new(binding)).is_ok()
}

pub(crate) fn binding() -> Option<&'static dyn NativeToolbarBinding> {
    BINDING.get().map(|binding| binding.as_ref())
}

/// Event delivered by the native layer to the mounted toolbar host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarEvent {
    /// The user activated the item with the given identifier.
    Selected { item: String },
}

// One toolbar host is active per screen; the most recently mounted host owns
// the ingress channel.
static EVENT_SINK: Lazy<Mutex<Option<UnboundedSender<ToolbarEvent>>>> =
    Lazy::new(|| Mutex::new(None));

/// Hands a native event to the mounted host. Returns `false` when no host is
/// mounted (the event is dropped).
pub fn deliver_event(event: ToolbarEvent) -> bool {
    let Ok(slot) = EVENT_SINK.lock() else {
        return false;
    };
    match slot.as_ref() {
        Some(sink) => sink.unbounded_send(event).is_ok(),
        None => false,
    }
}

pub(crate) fn install_event_sink(sink: UnboundedSender<ToolbarEvent>) {
    if let Ok(mut slot) = EVENT_SINK.lock() {
        *slot = Some(sink);
    }
}

pub(crate) fn clear_event_sink() {
    if let Ok(mut slot) = EVENT_SINK.lock() {
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::identity::HostToken;
    use crate::core::preview::PreviewAnchor;

    #[derive(Default)]
    struct RecordingBinding {
        log: Arc<Mutex<Vec<String>>>,
    }

    impl NativeToolbarBinding for RecordingBinding {
        fn toolbar_attached(&self, host: &HostDescriptor) {
            self.log
                .lock()
                .unwrap()
                .push(format!("attached {}", host.identifier));
        }

        fn items_changed(&self, host: &str, items: &[ToolbarItemDescriptor]) {
            self.log
                .lock()
                .unwrap()
                .push(format!("items {host} x{}", items.len()));
        }

        fn toolbar_detached(&self, host: &str) {
            self.log.lock().unwrap().push(format!("detached {host}"));
        }
    }

    #[test]
    fn first_registration_wins() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registered = register_toolbar_binding(RecordingBinding { log: log.clone() });

        // Whether or not another test got there first, a second registration
        // must be refused and the resident binding must stay callable.
        assert!(!register_toolbar_binding(RecordingBinding::default()));
        let resident = binding().expect("a binding is registered");
        resident.toolbar_attached(&HostDescriptor {
            identifier: HostToken::generate(),
            hidden: None,
            preview: PreviewAnchor::detached(),
        });

        if registered {
            let entries = log.lock().unwrap();
            assert_eq!(entries.len(), 1);
            assert!(entries[0].starts_with("attached "));
        }
    }

    #[test]
    fn events_reach_an_installed_sink_and_are_dropped_without_one() {
        clear_event_sink();
        assert!(!deliver_event(ToolbarEvent::Selected {
            item: "tbi-nobody".to_string(),
        }));

        let (sink, mut source) = futures_channel::mpsc::unbounded();
        install_event_sink(sink);
        assert!(deliver_event(ToolbarEvent::Selected {
            item: "tbi-somebody".to_string(),
        }));
        let received = source.try_next().expect("channel open").expect("one event");
        assert_eq!(
            received,
            ToolbarEvent::Selected {
                item: "tbi-somebody".to_string(),
            }
        );

        clear_event_sink();
        assert!(!deliver_event(ToolbarEvent::Selected {
            item: "tbi-late".to_string(),
        }));
    }
}
