//! Declarative input configuration.
//!
//! A [`TextMaskConfig`] describes a placeholder, an optional string catalog
//! for localized captions, and the layout direction. It can be loaded from
//! TOML or JSON:
//!
//! ```toml
//! direction = "left_to_right"
//!
//! [placeholder]
//! kind = "mask"
//! pattern = "(999) 999-9999;_"
//! empty_input = "clear"
//!
//! [catalog]
//! locale = "en-US"
//! fallback = "en-US"
//!
//! [catalog.strings.en-US]
//! "phone.hint" = "Phone number"
//! ```
//!
//! # Example
//!
//! ```
//! use horizon_textmask::config::TextMaskConfig;
//!
//! let config = TextMaskConfig::from_toml_str(r#"
//! [placeholder]
//! kind = "mask"
//! pattern = "99:99"
//! "#).unwrap();
//!
//! let edit = config.build_edit().unwrap();
//! edit.insert_str("0930");
//! assert_eq!(edit.text(), "09:30");
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use horizon_textmask_core::logging::targets;
use horizon_textmask_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::direction::TextDirection;
use crate::edit::MaskedLineEdit;
use crate::localization::{LocalizationProvider, StaticCatalog};
use crate::mask::{EmptyInputPolicy, Mask};
use crate::placeholder::Placeholder;

/// Configuration of a single placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlaceholderConfig {
    /// A fixed caption.
    Text {
        /// The caption.
        caption: String,
    },
    /// A caption looked up in the catalog.
    Localized {
        /// The caption key.
        key: String,
    },
    /// An input mask.
    Mask {
        /// Mask pattern string, e.g. `"(999) 999-9999"`.
        pattern: String,
        /// Filtering of empty input.
        #[serde(default)]
        empty_input: EmptyInputPolicy,
    },
}

impl PlaceholderConfig {
    /// Build the placeholder.
    ///
    /// Localized placeholders need a provider; masks fail if the pattern does
    /// not parse.
    pub fn build(&self, provider: Option<Arc<dyn LocalizationProvider>>) -> Result<Placeholder> {
        match self {
            PlaceholderConfig::Text { caption } => Ok(Placeholder::text(caption.clone())),
            PlaceholderConfig::Localized { key } => {
                let provider = provider.ok_or_else(|| Error::missing_provider(key.clone()))?;
                Ok(Placeholder::localized(key.clone(), provider))
            }
            PlaceholderConfig::Mask {
                pattern,
                empty_input,
            } => {
                let mask = Mask::parse(pattern)?.with_empty_input(*empty_input);
                Ok(Placeholder::mask(mask))
            }
        }
    }
}

/// An in-memory string catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// The initial locale.
    pub locale: String,
    /// Locale consulted for keys missing from the current one.
    #[serde(default)]
    pub fallback: Option<String>,
    /// Strings per locale, keyed by caption key.
    #[serde(default)]
    pub strings: BTreeMap<String, BTreeMap<String, String>>,
}

impl CatalogConfig {
    /// Create the catalog.
    pub fn into_catalog(self) -> StaticCatalog {
        let mut catalog = StaticCatalog::new(self.locale);
        if let Some(fallback) = self.fallback {
            catalog = catalog.with_fallback(fallback);
        }
        for (locale, table) in self.strings {
            catalog.extend(&locale, table);
        }
        catalog
    }
}

/// Top-level configuration of a masked input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMaskConfig {
    /// Initial layout direction.
    #[serde(default)]
    pub direction: TextDirection,
    /// The placeholder.
    pub placeholder: PlaceholderConfig,
    /// Strings for localized placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogConfig>,
}

impl TextMaskConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Error::config(format!("invalid TOML: {e}")))?;
        tracing::debug!(target: targets::CONFIG, format = "toml", "loaded configuration");
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)
            .map_err(|e| Error::config(format!("invalid JSON: {e}")))?;
        tracing::debug!(target: targets::CONFIG, format = "json", "loaded configuration");
        Ok(config)
    }

    /// Load a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::config(format!(
                    "unsupported configuration format: {}",
                    path.display()
                )));
            }
        };

        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "reading configuration");
        parse(&source)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(format!("cannot serialize TOML: {e}")))
    }

    /// Build the catalog, if one is configured.
    pub fn build_catalog(&self) -> Option<Arc<StaticCatalog>> {
        self.catalog
            .clone()
            .map(|catalog| Arc::new(catalog.into_catalog()))
    }

    /// Build the placeholder, using the configured catalog as provider.
    pub fn build_placeholder(&self) -> Result<Placeholder> {
        let provider = self
            .build_catalog()
            .map(|catalog| catalog as Arc<dyn LocalizationProvider>);
        self.placeholder.build(provider)
    }

    /// Build an empty edit with the configured placeholder and direction.
    pub fn build_edit(&self) -> Result<MaskedLineEdit> {
        Ok(MaskedLineEdit::new(self.build_placeholder()?).with_direction(self.direction))
    }
}
