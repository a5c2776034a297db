//! Config Demo Panel
//!
//! Shows the current preferences and forwards user input to the store.

use crate::components::invalidation::Invalidation;
use crate::constants::SUPPORTED_LANGUAGES;
use crate::states::{ConfigStore, i18n_demo, i18n_theme};
use crate::storage::PersistenceBackend;

/// Demo panel component
#[derive(Debug)]
pub struct ConfigDemo {
    invalidation: Invalidation,
}

impl ConfigDemo {
    pub fn new<B: PersistenceBackend>(store: &mut ConfigStore<B>) -> Self {
        Self {
            invalidation: Invalidation::observe(store),
        }
    }

    pub fn needs_render(&self) -> bool {
        self.invalidation.is_dirty()
    }

    /// Stop observing the store
    pub fn detach<B: PersistenceBackend>(&self, store: &mut ConfigStore<B>) -> bool {
        self.invalidation.detach(store)
    }

    /// Force the next frame to render even without a store change
    pub fn invalidate(&self) {
        self.invalidation.mark_dirty();
    }

    // ==================== Actions ====================

    pub fn toggle_theme<B: PersistenceBackend>(&self, store: &mut ConfigStore<B>) {
        let next = store.theme().toggled();
        store.set_theme(next);
    }

    pub fn change_language<B: PersistenceBackend>(&self, store: &mut ConfigStore<B>, lang: &str) {
        store.set_language(lang);
    }

    pub fn on_username_change<B: PersistenceBackend>(
        &self,
        store: &mut ConfigStore<B>,
        value: &str,
    ) {
        store.set_username(value);
    }

    // ==================== Render ====================

    pub fn render<B: PersistenceBackend>(&self, store: &ConfigStore<B>) -> String {
        self.invalidation.clear();

        let language = store.language();
        let languages = SUPPORTED_LANGUAGES
            .iter()
            .map(|code| {
                if *code == language {
                    format!("[{code}]")
                } else {
                    (*code).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        [
            format!("-- {} --", i18n_demo(language, "title")),
            format!(
                "{}: {}",
                i18n_demo(language, "theme"),
                i18n_theme(language, store.theme())
            ),
            format!("{}: {}", i18n_demo(language, "language"), language),
            format!("{}: {}", i18n_demo(language, "username"), store.username()),
            format!("{}: {}", i18n_demo(language, "languages"), languages),
        ]
        .join("\n")
    }
}
