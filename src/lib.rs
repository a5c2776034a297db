//! Config Demo Library
//!
//! A persisted, observable store for user preferences (theme, language, username)
//! and the two panels that display and edit it.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod states;
pub mod storage;
