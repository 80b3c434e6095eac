//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Artificial latency of a credentials submission, in milliseconds
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;

/// Address shown in the browser chrome
pub const DEFAULT_ADDRESS: &str = "lumina.io/auth-secure";

/// Log file written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "lumina.log";

/// Directory (under the home directory) holding the config file
pub const CONFIG_DIR_NAME: &str = ".lumina";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Display name used when the email has no local part
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// Application name
pub const APP_NAME: &str = "Lumina";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
