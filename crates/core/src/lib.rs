//! Weather Dashboard Core Library
//!
//! Shared utilities for the dashboard service:
//! - Configuration loading (XDG-compliant)
//! - File system checks

mod config;
pub mod fs;

pub use config::{find_config_file, load_config, ConfigSource};
pub use fs::{is_file, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "weather-dashboard";

/// Default dashboard port
pub const DEFAULT_DASHBOARD_PORT: u16 = 8050;

/// Default dashboard host
pub const DEFAULT_DASHBOARD_HOST: &str = "127.0.0.1";
