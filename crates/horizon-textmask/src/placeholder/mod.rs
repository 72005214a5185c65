//! Placeholder engine.
//!
//! A [`Placeholder`] is the configured "ghost" content of an input. It offers
//! the two operations an input host calls:
//!
//! - [`Placeholder::filter_input`] on every edit, turning raw text into the
//!   value the host commits;
//! - [`Placeholder::render_overlay`] on every repaint, producing the
//!   [`OverlayRun`]s drawn behind and after the committed value.
//!
//! Both are pure functions of their arguments and the immutable placeholder
//! configuration.
//!
//! # Variants
//!
//! | Variant | Filter | Overlay |
//! |---------|--------|---------|
//! | [`TextPlaceholder`] | identity | caption while empty |
//! | [`LocalizedPlaceholder`] | identity | translated caption while empty |
//! | [`MaskPlaceholder`] | mask filter | unfilled part of the mask display |
//!
//! # Example
//!
//! ```
//! use horizon_textmask::TextDirection;
//! use horizon_textmask::placeholder::{OverlayRun, Placeholder};
//!
//! let placeholder = Placeholder::mask_pattern("(999) 999").unwrap();
//! let value = placeholder.filter_input("55");
//! assert_eq!(value, "(55");
//!
//! let runs = placeholder.render_overlay(&value, TextDirection::LeftToRight);
//! assert_eq!(runs, vec![OverlayRun::hidden("(55"), OverlayRun::visible("_) ___")]);
//! ```

mod run;

use std::fmt;
use std::sync::Arc;

use horizon_textmask_core::logging::{span_names, targets};
use horizon_textmask_core::{PerfSpan, Result};

pub use run::{OverlayRun, RunVisibility, concat_runs, visible_text};

use crate::direction::TextDirection;
use crate::localization::LocalizationProvider;
use crate::mask::Mask;

/// A fixed caption shown while the input is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextPlaceholder {
    caption: String,
}

impl TextPlaceholder {
    /// Create a caption placeholder.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
        }
    }

    /// The caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    fn render_overlay(&self, value: &str) -> Vec<OverlayRun> {
        caption_overlay(&self.caption, value)
    }
}

/// A caption resolved through a [`LocalizationProvider`] at render time.
#[derive(Clone)]
pub struct LocalizedPlaceholder {
    key: String,
    provider: Arc<dyn LocalizationProvider>,
}

impl LocalizedPlaceholder {
    /// Create a localized placeholder for a caption key.
    pub fn new(key: impl Into<String>, provider: Arc<dyn LocalizationProvider>) -> Self {
        Self {
            key: key.into(),
            provider,
        }
    }

    /// The caption key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve the caption for the provider's current locale.
    ///
    /// An unknown key renders as the key itself.
    pub fn caption(&self) -> String {
        match self.provider.translate(&self.key) {
            Some(text) => text,
            None => {
                tracing::debug!(
                    target: targets::PLACEHOLDER,
                    key = %self.key,
                    locale = %self.provider.locale(),
                    "untranslated placeholder key"
                );
                self.key.clone()
            }
        }
    }

    fn render_overlay(&self, value: &str) -> Vec<OverlayRun> {
        if value.is_empty() {
            vec![OverlayRun::visible(self.caption())]
        } else {
            vec![OverlayRun::hidden("")]
        }
    }
}

impl fmt::Debug for LocalizedPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizedPlaceholder")
            .field("key", &self.key)
            .field("locale", &self.provider.locale())
            .finish()
    }
}

/// The display string of a mask, shown for positions not yet filled.
#[derive(Debug, Clone)]
pub struct MaskPlaceholder {
    mask: Arc<Mask>,
}

impl MaskPlaceholder {
    /// Create a mask placeholder.
    pub fn new(mask: impl Into<Arc<Mask>>) -> Self {
        Self { mask: mask.into() }
    }

    /// The wrapped mask.
    pub fn mask(&self) -> &Arc<Mask> {
        &self.mask
    }

    fn render_overlay(&self, value: &str, direction: TextDirection) -> Vec<OverlayRun> {
        let display = self.mask.display_text();

        if direction.resolve(value).is_rtl() {
            // Bidi reordering would put a suffix on the wrong side, so the whole
            // display is shown while empty and only reserves space afterwards.
            return if value.is_empty() {
                vec![OverlayRun::visible(display)]
            } else {
                vec![OverlayRun::hidden(display)]
            };
        }

        let typed = value.chars().count().min(self.mask.len());
        let typed_prefix: String = value.chars().take(typed).collect();
        let remainder: String = display.chars().skip(typed).collect();
        vec![OverlayRun::hidden(typed_prefix), OverlayRun::visible(remainder)]
    }
}

/// The configured placeholder of an input.
#[derive(Debug, Clone)]
pub enum Placeholder {
    /// Fixed caption.
    Text(TextPlaceholder),
    /// Localized caption.
    Localized(LocalizedPlaceholder),
    /// Input mask.
    Mask(MaskPlaceholder),
}

impl Placeholder {
    /// Create a fixed caption placeholder.
    pub fn text(caption: impl Into<String>) -> Self {
        Placeholder::Text(TextPlaceholder::new(caption))
    }

    /// Create a localized caption placeholder.
    pub fn localized(key: impl Into<String>, provider: Arc<dyn LocalizationProvider>) -> Self {
        Placeholder::Localized(LocalizedPlaceholder::new(key, provider))
    }

    /// Create a mask placeholder.
    pub fn mask(mask: impl Into<Arc<Mask>>) -> Self {
        Placeholder::Mask(MaskPlaceholder::new(mask))
    }

    /// Parse a mask pattern and wrap it.
    pub fn mask_pattern(pattern: &str) -> Result<Self> {
        Ok(Self::mask(Mask::parse(pattern)?))
    }

    /// Derive the value to commit from raw input.
    ///
    /// Captions pass input through unchanged; masks filter it.
    pub fn filter_input(&self, raw: &str) -> String {
        let _span = PerfSpan::new(span_names::FILTER);
        match self {
            Placeholder::Text(_) | Placeholder::Localized(_) => raw.to_string(),
            Placeholder::Mask(placeholder) => placeholder.mask.filter(raw),
        }
    }

    /// Compute the overlay runs for the current value.
    ///
    /// For masks, the concatenated runs span exactly the mask display length.
    pub fn render_overlay(&self, value: &str, direction: TextDirection) -> Vec<OverlayRun> {
        let _span = PerfSpan::new(span_names::OVERLAY);
        let runs = match self {
            Placeholder::Text(placeholder) => placeholder.render_overlay(value),
            Placeholder::Localized(placeholder) => placeholder.render_overlay(value),
            Placeholder::Mask(placeholder) => placeholder.render_overlay(value, direction),
        };
        tracing::trace!(
            target: targets::PLACEHOLDER,
            value_len = value.len(),
            ?direction,
            runs = runs.len(),
            "rendered overlay"
        );
        runs
    }

    /// The mask, for mask placeholders.
    pub fn as_mask(&self) -> Option<&Arc<Mask>> {
        match self {
            Placeholder::Mask(placeholder) => Some(placeholder.mask()),
            _ => None,
        }
    }
}

impl From<Mask> for Placeholder {
    fn from(mask: Mask) -> Self {
        Placeholder::mask(mask)
    }
}

fn caption_overlay(caption: &str, value: &str) -> Vec<OverlayRun> {
    if value.is_empty() {
        vec![OverlayRun::visible(caption)]
    } else {
        vec![OverlayRun::hidden("")]
    }
}

static_assertions::assert_impl_all!(Placeholder: Send, Sync);
