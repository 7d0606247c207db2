//! Preference Store
//!
//! Two persisted string flags: theme and language. The backend is a seam so
//! the embedder can map it onto whatever key-value persistence the host
//! offers; `MemoryStore` is the bundled implementation. Write failures are
//! logged and swallowed: preferences degrade to session-only state.

use alloc::string::{String, ToString};

use hashbrown::HashMap;

use crate::i18n::Language;
use crate::theme::Theme;

/// Storage key for the theme flag.
pub const THEME_KEY: &str = "theme";
/// Storage key for the language flag.
pub const LANGUAGE_KEY: &str = "language";

/// Preference backend error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The backend rejected the write.
    WriteFailed,
}

/// Key-value persistence seam.
pub trait PrefStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed view over the preference flags.
pub struct Preferences {
    store: alloc::boxed::Box<dyn PrefStore>,
}

impl Preferences {
    /// Wrap a backend store.
    pub fn new(store: alloc::boxed::Box<dyn PrefStore>) -> Self {
        Self { store }
    }

    /// Current theme. Absence or any value other than the literal "light"
    /// means dark.
    pub fn theme(&self) -> Theme {
        Theme::from_stored(self.store.get(THEME_KEY).as_deref())
    }

    /// Persist the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.store.set(THEME_KEY, theme.as_str()).is_err() {
            log::warn!("preference store rejected theme write");
        }
    }

    /// Current language. Absence or any value other than the literal "de"
    /// means English.
    pub fn language(&self) -> Language {
        Language::from_stored(self.store.get(LANGUAGE_KEY).as_deref())
    }

    /// Persist the language.
    pub fn set_language(&mut self, language: Language) {
        if self.store.set(LANGUAGE_KEY, language.as_str()).is_err() {
            log::warn!("preference store rejected language write");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;

    #[test]
    fn test_theme_defaults_to_dark() {
        let prefs = Preferences::new(Box::new(MemoryStore::new()));
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_roundtrip_through_store() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();

        // Simulated reload: a fresh Preferences over the same backing data
        let prefs = Preferences::new(Box::new(store));
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_garbage_theme_value_means_dark() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        let prefs = Preferences::new(Box::new(store));
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn test_language_defaults_to_english() {
        let prefs = Preferences::new(Box::new(MemoryStore::new()));
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn test_language_roundtrip() {
        let mut prefs = Preferences::new(Box::new(MemoryStore::new()));
        prefs.set_language(Language::De);
        assert_eq!(prefs.language(), Language::De);
    }
}
