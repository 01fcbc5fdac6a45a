// interaction core for the portfolio site
//
// everything in here is platform-neutral: the browser (document root, storage,
// timers, scrolling, http) is reached only through the small traits each module
// defines, and the webapp crate supplies the real implementations
pub mod config;
pub mod contact;
pub mod loader;
pub mod nav;
pub mod notify;
pub mod theme;
