pub mod config;
pub mod dirs;
pub mod logging;
