//! Layout Components
//!
//! The panels that make up the session screen.

mod config_demo;
mod header;

pub use config_demo::*;
pub use header::*;
