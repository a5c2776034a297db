//! Config - User Configuration Record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_USERNAME};
use crate::error::Error;

/// Color theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::Invalid {
                message: format!("unknown theme '{other}', expected 'light' or 'dark'"),
            }),
        }
    }
}

/// The persisted user configuration
///
/// Fields absent from a stored record take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    pub theme: Theme,
    /// Free-form language tag (e.g. "en", "es")
    pub language: String,
    /// May be empty
    pub username: String,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: DEFAULT_LANGUAGE.to_string(),
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl ConfigRecord {
    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }

    pub fn with_language(&self, language: String) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    pub fn with_username(&self, username: String) -> Self {
        Self {
            username,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = ConfigRecord::default();
        assert_eq!(record.theme, Theme::Light);
        assert_eq!(record.language, "en");
        assert_eq!(record.username, "admin");
    }

    #[test]
    fn test_serialized_layout() {
        let record = ConfigRecord {
            theme: Theme::Dark,
            language: "es".to_string(),
            username: "alice".to_string(),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"theme":"dark","language":"es","username":"alice"}"#);
    }

    #[test]
    fn test_partial_record_takes_defaults() {
        let record: ConfigRecord = serde_json::from_str(r#"{"theme":"dark"}"#).expect("decode");
        assert_eq!(record.theme, Theme::Dark);
        assert_eq!(record.language, "en");
        assert_eq!(record.username, "admin");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let result = serde_json::from_str::<ConfigRecord>(r#"{"theme":"blue"}"#);
        assert!(result.is_err());
        assert!("blue".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(" Dark ".parse::<Theme>().expect("parse"), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_with_field_leaves_others() {
        let base = ConfigRecord::default();
        let next = base.with_username(String::new());
        assert_eq!(next.username, "");
        assert_eq!(next.theme, base.theme);
        assert_eq!(next.language, base.language);
    }
}
