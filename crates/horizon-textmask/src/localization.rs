//! Localization of placeholder captions.
//!
//! A [`LocalizedPlaceholder`](crate::placeholder::LocalizedPlaceholder) stores a
//! caption key and asks a [`LocalizationProvider`] for the text on every
//! render, so switching the application locale takes effect on the next
//! repaint without rebuilding any placeholder.
//!
//! ```
//! use horizon_textmask::localization::{LocalizationProvider, StaticCatalog};
//!
//! let catalog = StaticCatalog::new("en-US");
//! catalog.insert("en-US", "phone.hint", "Phone number");
//! catalog.insert("de-DE", "phone.hint", "Telefonnummer");
//!
//! assert_eq!(catalog.translate("phone.hint").as_deref(), Some("Phone number"));
//! catalog.set_locale("de-DE");
//! assert_eq!(catalog.translate("phone.hint").as_deref(), Some("Telefonnummer"));
//! ```

use std::collections::HashMap;
use std::fmt;

use horizon_textmask_core::Signal;
use horizon_textmask_core::logging::targets;
use parking_lot::RwLock;

use crate::direction::TextDirection;

/// Locale used when the system locale is unknown.
pub const DEFAULT_LOCALE: &str = "en-US";

/// External source of localized strings.
pub trait LocalizationProvider: Send + Sync {
    /// The current locale identifier (e.g. `"en-US"`).
    fn locale(&self) -> String;

    /// Resolve a caption key for the current locale.
    fn translate(&self, key: &str) -> Option<String>;

    /// The conventional text direction of the current locale.
    fn direction(&self) -> TextDirection {
        TextDirection::for_locale(&self.locale())
    }
}

/// An in-memory, per-locale string table.
///
/// Lookups fall back to the fallback locale when the current locale has no
/// entry for a key.
pub struct StaticCatalog {
    state: RwLock<CatalogState>,
    /// Emitted with the new locale identifier when the locale changes.
    pub locale_changed: Signal<String>,
}

#[derive(Debug, Clone, Default)]
struct CatalogState {
    locale: String,
    fallback: Option<String>,
    tables: HashMap<String, HashMap<String, String>>,
}

impl StaticCatalog {
    /// Create an empty catalog for the given locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(CatalogState {
                locale: locale.into(),
                ..Default::default()
            }),
            locale_changed: Signal::new(),
        }
    }

    /// Create an empty catalog for the system locale, or `en-US` if it
    /// cannot be determined.
    pub fn for_system_locale() -> Self {
        Self::new(sys_locale::get_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string()))
    }

    /// Set the locale consulted when the current locale lacks a key.
    pub fn with_fallback(self, fallback: impl Into<String>) -> Self {
        self.state.write().fallback = Some(fallback.into());
        self
    }

    /// Add or replace a string.
    pub fn insert(&self, locale: &str, key: impl Into<String>, text: impl Into<String>) {
        self.state
            .write()
            .tables
            .entry(locale.to_string())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Add every entry of a locale table.
    pub fn extend<I, K, V>(&self, locale: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut state = self.state.write();
        let table = state.tables.entry(locale.to_string()).or_default();
        table.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Switch the current locale.
    ///
    /// Returns `true` and emits [`locale_changed`](Self::locale_changed) if the
    /// locale actually changed.
    pub fn set_locale(&self, locale: impl Into<String>) -> bool {
        let locale = locale.into();
        {
            let mut state = self.state.write();
            if state.locale == locale {
                return false;
            }
            state.locale.clone_from(&locale);
        }
        tracing::debug!(target: targets::LOCALIZATION, %locale, "locale changed");
        self.locale_changed.emit(locale);
        true
    }

    /// The fallback locale, if any.
    pub fn fallback(&self) -> Option<String> {
        self.state.read().fallback.clone()
    }

    /// Locales with at least one entry.
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.state.read().tables.keys().cloned().collect();
        locales.sort();
        locales
    }
}

impl LocalizationProvider for StaticCatalog {
    fn locale(&self) -> String {
        self.state.read().locale.clone()
    }

    fn translate(&self, key: &str) -> Option<String> {
        let state = self.state.read();
        let lookup = |locale: &str| {
            state
                .tables
                .get(locale)
                .and_then(|table| table.get(key))
                .cloned()
        };
        lookup(state.locale.as_str()).or_else(|| state.fallback.as_deref().and_then(lookup))
    }
}

impl fmt::Debug for StaticCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("StaticCatalog")
            .field("locale", &state.locale)
            .field("fallback", &state.fallback)
            .field("locales", &state.tables.len())
            .finish()
    }
}
