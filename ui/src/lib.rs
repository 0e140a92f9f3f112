//! Shared UI crate for Switchback. Cross-platform components and the router
//! toolbar surface live here.

pub mod core;
pub mod host;

mod link_menu;
pub mod components {
    // Router bottom-toolbar surface (components/toolbar.rs)
    pub mod toolbar;
    pub use toolbar::{
        Toolbar, ToolbarButton, ToolbarMenu, ToolbarMenuAction, ToolbarSpacer, ToolbarView,
    };

    // Shared menu primitives the toolbar re-exports (ui/src/link_menu.rs)
    pub use super::link_menu::{Menu, MenuAction, MenuActionProps, MenuProps};
}
