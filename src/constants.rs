//! App Constants
//!
//! Centralized constants for storage layout and default preferences.

/// Storage key the config record lives under
pub const CONFIG_KEY: &str = "app-config";

/// File extension used by the file backend for each key
pub const STORAGE_FILE_EXTENSION: &str = "json";

/// Default preferences
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_USERNAME: &str = "admin";

/// Languages offered by the demo panel
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "es"];

/// Runtime settings file name inside the config directory
pub const SETTINGS_FILENAME: &str = "config-demo.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "config-demo.log";

/// Project directory qualifiers
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORGANIZATION: &str = "goldwind";
pub const PROJECT_APPLICATION: &str = "config-demo";
