//! Text flow direction.
//!
//! The host passes its layout direction to
//! [`Placeholder::render_overlay`](crate::placeholder::Placeholder::render_overlay).
//! [`TextDirection::Auto`] is resolved from the value being rendered using the
//! first-strong rule of the Unicode Bidirectional Algorithm.
//!
//! ```
//! use horizon_textmask::TextDirection;
//!
//! assert_eq!(TextDirection::Auto.resolve("Hello"), TextDirection::LeftToRight);
//! assert_eq!(TextDirection::Auto.resolve("שלום"), TextDirection::RightToLeft);
//! assert_eq!(TextDirection::for_locale("ar-EG"), TextDirection::RightToLeft);
//! ```

use serde::{Deserialize, Serialize};
use unicode_bidi::{BidiClass, bidi_class};

/// Layout direction of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    /// Left-to-right (Latin, Cyrillic, Greek, ...).
    #[default]
    LeftToRight,
    /// Right-to-left (Arabic, Hebrew, ...).
    RightToLeft,
    /// Detect from the text content.
    Auto,
}

impl TextDirection {
    /// Check if this direction is right-to-left.
    ///
    /// `Auto` is not right-to-left until resolved.
    pub fn is_rtl(self) -> bool {
        matches!(self, TextDirection::RightToLeft)
    }

    /// Check if this direction is left-to-right.
    pub fn is_ltr(self) -> bool {
        matches!(self, TextDirection::LeftToRight)
    }

    /// Resolve `Auto` against the given text; explicit directions are returned as is.
    pub fn resolve(self, text: &str) -> TextDirection {
        match self {
            TextDirection::Auto => detect_base_direction(text),
            dir => dir,
        }
    }

    /// The conventional direction for a locale identifier such as `"he-IL"`.
    pub fn for_locale(locale: &str) -> TextDirection {
        let lang = locale.split(['-', '_']).next().unwrap_or(locale);
        match lang.to_ascii_lowercase().as_str() {
            "ar" | "he" | "fa" | "ur" | "yi" | "ps" | "sd" | "ug" | "ku" | "ckb" | "dv" | "arc"
            | "syr" => TextDirection::RightToLeft,
            _ => TextDirection::LeftToRight,
        }
    }
}

/// Detect the base direction of text from its first strong character.
///
/// Text without strong characters (empty, digits, punctuation) is left-to-right.
pub fn detect_base_direction(text: &str) -> TextDirection {
    for ch in text.chars() {
        match bidi_class(ch) {
            BidiClass::L => return TextDirection::LeftToRight,
            BidiClass::R | BidiClass::AL => return TextDirection::RightToLeft,
            _ => continue,
        }
    }
    TextDirection::LeftToRight
}
