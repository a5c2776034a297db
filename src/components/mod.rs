//! Components - Display Panels
//!
//! Panels read the store through its getters and only write through its setters.

pub mod invalidation;
pub mod layout;
