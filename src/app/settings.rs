//! Runtime Settings
//!
//! Optional TOML file in the config directory controlling storage and logging.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::constants::{CONFIG_KEY, SETTINGS_FILENAME};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Settings for the demo binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Storage directory; the platform data dir when unset
    pub storage_dir: Option<PathBuf>,
    /// Key the config record is stored under
    pub storage_key: String,
    /// Default tracing filter directive, `RUST_LOG` still wins
    pub log_filter: String,
    /// Also write logs to a daily file in the data dir
    pub log_to_file: bool,
    /// Keep preferences in memory only
    pub in_memory: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: CONFIG_KEY.to_string(),
            log_filter: "info".to_string(),
            log_to_file: false,
            in_memory: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(get_or_create_config_dir()?.join(SETTINGS_FILENAME))
    }

    /// Load settings from the default location
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from `path`; a missing or blank file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path)?;
        Self::from_toml_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })
    }

    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_blank_settings_are_default() {
        assert_eq!(Settings::from_toml_str("").expect("parse"), Settings::default());
    }

    #[test]
    fn test_partial_settings() {
        let settings = Settings::from_toml_str(
            r#"
storage_dir = "/tmp/prefs"
in_memory = true
"#,
        )
        .expect("parse");
        assert_eq!(settings.storage_dir, Some(PathBuf::from("/tmp/prefs")));
        assert!(settings.in_memory);
        assert_eq!(settings.storage_key, "app-config");
        assert_eq!(settings.log_filter, "info");
        assert!(!settings.log_to_file);
    }

    #[test]
    fn test_bad_settings_error() {
        let result = Settings::from_toml_str("log_to_file = \"sometimes\"");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir()
            .join(format!("config-demo-test-{}", uuid::Uuid::new_v4()))
            .join("config-demo.toml");
        assert_eq!(Settings::load_from(&path).expect("load"), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("config-demo-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create dir");
        let path = dir.join("config-demo.toml");
        std::fs::write(&path, "storage_key = \"other\"\nlog_filter = \"debug\"\n").expect("write");

        let settings = Settings::load_from(&path).expect("load");
        assert_eq!(settings.storage_key, "other");
        assert_eq!(settings.log_filter, "debug");

        let _ = std::fs::remove_dir_all(dir);
    }
}
