//! Error types for Config Demo
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the configuration store and its backends
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Stored value exists but does not decode as a config record
    #[snafu(display("Malformed persisted data under '{key}': {source}"))]
    MalformedPersistedData {
        key: String,
        source: serde_json::Error,
    },

    /// Backend failed to read a key
    #[snafu(display("Failed to read '{key}' from storage: {source}"))]
    PersistenceRead { key: String, source: std::io::Error },

    /// Backend rejected a write
    #[snafu(display("Failed to write '{key}' to storage: {source}"))]
    PersistenceWrite { key: String, source: std::io::Error },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
