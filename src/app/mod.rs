//! Application Layer
//!
//! Contains runtime settings, logging setup, and the session loop.

pub mod application;
pub mod logging;
pub mod settings;
