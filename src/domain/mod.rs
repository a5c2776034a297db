//! Domain - Pure Data Structures
//!
//! These types don't depend on storage or rendering and represent the user configuration.

pub mod config;
