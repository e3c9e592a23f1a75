//! Configuration and persisted preferences for Roster.
//!
//! - **`paths`**: where the roster home, config file, preferences and logs live
//! - **`config`**: read-only `config.toml` (display options)
//! - **`preferences`**: the key-value store behind persisted settings
//! - **`theme`**: the light/dark preference read at startup and written on toggle

pub mod config;
pub mod paths;
pub mod preferences;
pub mod theme;

pub use config::{AppConfig, ConfigError, RosterConfig};
pub use paths::{config_path, log_file_candidates, preferences_path, roster_home};
pub use preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore,
};
pub use theme::ThemePreference;
