//! Configuration State
//!
//! Single source of truth for user preferences. Every setter swaps in a new
//! record, writes it to the backend and then notifies subscribers:
//!
//! ```text
//! Panel Action → set_* → new ConfigRecord → backend.set → subscribers → Panel re-render
//! ```

use std::fmt;
use std::rc::Rc;

use snafu::ResultExt;
use tracing::{debug, error, info, warn};

use crate::constants::CONFIG_KEY;
use crate::domain::config::{ConfigRecord, Theme};
use crate::error::{Error, MalformedPersistedDataSnafu, Result};
use crate::storage::PersistenceBackend;

/// Handle returned by [`ConfigStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ConfigRecord)>;

/// Persisted, observable configuration store
pub struct ConfigStore<B: PersistenceBackend> {
    record: Rc<ConfigRecord>,
    backend: B,
    key: String,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    last_write_error: Option<Error>,
}

impl<B: PersistenceBackend> ConfigStore<B> {
    /// Create a store over `backend` using the default storage key
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, CONFIG_KEY)
    }

    /// Create a store over `backend` using a custom storage key
    ///
    /// Seeds from a previously stored record when one decodes; otherwise starts
    /// from defaults. The resulting record is written back once.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let record = match Self::load_persisted(&backend, &key) {
            Ok(Some(record)) => {
                info!(key = %key, "Loaded persisted config");
                record
            }
            Ok(None) => {
                info!(key = %key, "No persisted config, using defaults");
                ConfigRecord::default()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring persisted config, using defaults");
                ConfigRecord::default()
            }
        };

        let mut store = Self {
            record: Rc::new(record),
            backend,
            key,
            observers: Vec::new(),
            next_subscription: 0,
            last_write_error: None,
        };
        store.persist();
        store
    }

    /// Read and decode the record stored under `key`
    ///
    /// Blank values count as absent. Missing fields take their defaults.
    pub fn load_persisted(backend: &B, key: &str) -> Result<Option<ConfigRecord>> {
        let Some(raw) = backend.get(key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let record = serde_json::from_str(&raw).context(MalformedPersistedDataSnafu { key })?;
        Ok(Some(record))
    }

    // ==================== Getters ====================

    /// Get the current theme
    pub fn theme(&self) -> Theme {
        self.record.theme
    }

    /// Get the current language tag
    pub fn language(&self) -> &str {
        &self.record.language
    }

    /// Get the current username
    pub fn username(&self) -> &str {
        &self.record.username
    }

    /// Current record; stays valid after later updates replace it
    pub fn snapshot(&self) -> Rc<ConfigRecord> {
        Rc::clone(&self.record)
    }

    /// Get the storage key the record is written under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the persistence backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the store, returning its backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Take the most recent write failure, if any
    pub fn take_write_error(&mut self) -> Option<Error> {
        self.last_write_error.take()
    }

    // ==================== Setters ====================

    pub fn set_theme(&mut self, theme: Theme) {
        self.update(|record| record.with_theme(theme));
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        self.update(|record| record.with_language(language));
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        let username = username.into();
        self.update(|record| record.with_username(username));
    }

    fn update(&mut self, mutation: impl FnOnce(&ConfigRecord) -> ConfigRecord) {
        self.record = Rc::new(mutation(&self.record));
        self.persist();
        self.notify();
    }

    // ==================== Subscriptions ====================

    /// Register a callback run with the new record after every change
    pub fn subscribe(&mut self, observer: impl FnMut(&ConfigRecord) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a subscription; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let record = Rc::clone(&self.record);
        for (_, observer) in &mut self.observers {
            observer(&record);
        }
    }

    // ==================== Persistence ====================

    /// Write the full record; failures are recorded, not retried
    fn persist(&mut self) {
        let result = serde_json::to_string(self.record.as_ref())
            .map_err(Error::from)
            .and_then(|json| self.backend.set(&self.key, &json));

        match result {
            Ok(()) => debug!(key = %self.key, "Config persisted"),
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to persist config");
                self.last_write_error = Some(e);
            }
        }
    }
}

impl<B: PersistenceBackend> fmt::Debug for ConfigStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("key", &self.key)
            .field("record", &self.record)
            .field("observers", &self.observers.len())
            .finish()
    }
}
