//! Header Component
//!
//! The application header with title, theme badge, and a greeting for the current user.

use crate::components::invalidation::Invalidation;
use crate::states::{ConfigStore, i18n_greeting, i18n_header, i18n_theme};
use crate::storage::PersistenceBackend;

/// Header component
#[derive(Debug)]
pub struct Header {
    invalidation: Invalidation,
}

impl Header {
    pub fn new<B: PersistenceBackend>(store: &mut ConfigStore<B>) -> Self {
        // Observe config changes
        Self {
            invalidation: Invalidation::observe(store),
        }
    }

    pub fn needs_render(&self) -> bool {
        self.invalidation.is_dirty()
    }

    /// Force the next frame to render even without a store change
    pub fn invalidate(&self) {
        self.invalidation.mark_dirty();
    }

    /// Stop observing the store
    pub fn detach<B: PersistenceBackend>(&self, store: &mut ConfigStore<B>) -> bool {
        self.invalidation.detach(store)
    }

    pub fn render<B: PersistenceBackend>(&self, store: &ConfigStore<B>) -> String {
        self.invalidation.clear();

        let language = store.language();
        let title = i18n_header(language, "title");
        let theme = i18n_theme(language, store.theme());
        let greeting = i18n_greeting(language, store.username());

        format!("== {title} [{theme}] | {greeting} ==")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::Theme;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_header_render() {
        let mut store = ConfigStore::new(MemoryBackend::new());
        let header = Header::new(&mut store);

        assert!(header.needs_render());
        assert_eq!(header.render(&store), "== Config Demo [Light] | Hello, admin ==");
        assert!(!header.needs_render());

        store.set_theme(Theme::Dark);
        store.set_language("es");
        store.set_username("alice");
        assert!(header.needs_render());
        assert_eq!(
            header.render(&store),
            "== Demo de configuración [Oscuro] | Hola, alice =="
        );
    }
}
