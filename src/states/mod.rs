//! State Management Layer
//!
//! The configuration store and the translation helpers that read from it.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! Panel Action → Store Setter → Persist → Notify Subscribers → Panel Refresh
//! ```

mod config;
mod i18n;

pub use config::*;
pub use i18n::*;
