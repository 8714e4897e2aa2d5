pub mod api;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod model;
pub mod sync;
pub mod ui;
