pub mod commands;
pub mod config;
pub mod logging;
pub mod properties;
pub mod store;
pub mod version;
