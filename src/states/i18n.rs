//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on the configured language.

use rust_i18n::t;

use crate::constants::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
use crate::domain::config::Theme;

/// Map a free-form language tag onto a bundled locale
///
/// Only the primary subtag is considered (`es-MX` → `es`); anything unknown maps to English.
pub fn resolve_locale(language: &str) -> &'static str {
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|supported| *supported == primary)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Get translated string from "header" namespace
pub fn i18n_header(language: &str, key: &str) -> String {
    let locale = resolve_locale(language);
    t!(format!("header.{key}"), locale = locale).to_string()
}

/// Get translated string from "demo" namespace
pub fn i18n_demo(language: &str, key: &str) -> String {
    let locale = resolve_locale(language);
    t!(format!("demo.{key}"), locale = locale).to_string()
}

/// Get translated string from "session" namespace
pub fn i18n_session(language: &str, key: &str) -> String {
    let locale = resolve_locale(language);
    t!(format!("session.{key}"), locale = locale).to_string()
}

/// Localized theme name
pub fn i18n_theme(language: &str, theme: Theme) -> String {
    let locale = resolve_locale(language);
    t!(format!("theme.{}", theme.as_str()), locale = locale).to_string()
}

/// Greeting for the header; an empty username greets a guest
pub fn i18n_greeting(language: &str, username: &str) -> String {
    let locale = resolve_locale(language);
    if username.trim().is_empty() {
        t!("header.anonymous", locale = locale).to_string()
    } else {
        t!("header.greeting", locale = locale, name = username).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("en"), "en");
        assert_eq!(resolve_locale("es"), "es");
        assert_eq!(resolve_locale("ES-mx"), "es");
        assert_eq!(resolve_locale("es_AR"), "es");
        assert_eq!(resolve_locale("fr"), "en");
        assert_eq!(resolve_locale(""), "en");
    }

    #[test]
    fn test_translations() {
        assert_eq!(i18n_header("en", "title"), "Config Demo");
        assert_eq!(i18n_demo("es", "theme"), "Tema");
        assert_eq!(i18n_theme("es", Theme::Dark), "Oscuro");
        assert_eq!(i18n_theme("de", Theme::Light), "Light");
    }

    #[test]
    fn test_greeting() {
        assert_eq!(i18n_greeting("en", "alice"), "Hello, alice");
        assert_eq!(i18n_greeting("es", "alice"), "Hola, alice");
        assert_eq!(i18n_greeting("en", ""), "Hello, guest");
    }
}
