//! Native bridge boundary for the router toolbar.
//!
//! The actual bottom-bar rendering, layout, and hit-testing live in the
//! platform layer behind [`NativeToolbarBinding`]. This module only carries
//! descriptors across and routes selection events back.

pub mod binding;
mod bridge;

pub use binding::{deliver_event, register_toolbar_binding, NativeToolbarBinding, ToolbarEvent};
pub use bridge::{RouterToolbarHost, RouterToolbarItem};
