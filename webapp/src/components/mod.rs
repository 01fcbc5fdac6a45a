pub mod layout;
pub mod loader;
pub mod theme_toggle;
pub mod toaster;
pub mod top_nav;
