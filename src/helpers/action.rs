//! Session Actions
//!
//! Parses input lines into the actions the panels understand.

use std::str::FromStr;

use crate::domain::config::Theme;
use crate::error::Error;

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Flip between light and dark
    ToggleTheme,
    /// Set an explicit theme
    SetTheme(Theme),
    /// Change the language tag
    ChangeLanguage(String),
    /// Change the username; may be empty
    ChangeUsername(String),
    /// Redraw both panels
    Show,
    /// Print the command list
    Help,
    /// End the session
    Quit,
}

impl FromStr for SessionAction {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "theme" if rest.is_empty() => Ok(SessionAction::ToggleTheme),
            "theme" => Ok(SessionAction::SetTheme(rest.parse()?)),
            "lang" | "language" if rest.is_empty() => Err(Error::Invalid {
                message: "lang needs a language code".to_string(),
            }),
            "lang" | "language" => Ok(SessionAction::ChangeLanguage(rest.to_string())),
            "user" | "username" => Ok(SessionAction::ChangeUsername(rest.to_string())),
            "show" => Ok(SessionAction::Show),
            "help" | "?" => Ok(SessionAction::Help),
            "quit" | "exit" => Ok(SessionAction::Quit),
            other => Err(Error::Invalid {
                message: format!("unknown command '{other}'"),
            }),
        }
    }
}
