//! Mask items: the description of one position in a mask.
//!
//! A position is either a literal ([`StaticItem`]) that is always shown and
//! always committed, or a character slot ([`PatternItem`]) constrained by a
//! [`CharPattern`], with an optional case conversion and a display character
//! shown while the slot is unfilled.

use std::fmt;
use std::sync::Arc;

use horizon_textmask_core::{Error, Result};

/// Case conversion mode for characters accepted by a pattern slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMode {
    /// No case conversion.
    #[default]
    None,
    /// Convert to uppercase.
    Upper,
    /// Convert to lowercase.
    Lower,
}

impl CaseMode {
    /// Apply the conversion to a single character.
    ///
    /// Conversions that expand to several characters (`'ß'` → `"SS"`) keep the
    /// first one so that a slot always holds exactly one character.
    pub fn apply(self, ch: char) -> char {
        match self {
            CaseMode::None => ch,
            CaseMode::Upper => ch.to_uppercase().next().unwrap_or(ch),
            CaseMode::Lower => ch.to_lowercase().next().unwrap_or(ch),
        }
    }
}

/// Built-in character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letter (A-Z, a-z and other alphabetic characters).
    Letter,
    /// Alphanumeric.
    Alphanumeric,
    /// Any non-blank character.
    Any,
    /// Digit (0-9).
    Digit,
    /// Non-zero digit (1-9).
    NonZeroDigit,
    /// Digit or sign (+/-).
    DigitOrSign,
    /// Hexadecimal (0-9, A-F, a-f).
    Hex,
    /// Binary (0-1).
    Binary,
}

impl CharClass {
    /// Check if a character belongs to this character class.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            CharClass::Letter => ch.is_alphabetic(),
            CharClass::Alphanumeric => ch.is_alphanumeric(),
            CharClass::Any => !ch.is_whitespace() && !ch.is_control(),
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::NonZeroDigit => ch.is_ascii_digit() && ch != '0',
            CharClass::DigitOrSign => ch.is_ascii_digit() || ch == '+' || ch == '-',
            CharClass::Hex => ch.is_ascii_hexdigit(),
            CharClass::Binary => ch == '0' || ch == '1',
        }
    }
}

/// Opaque single-character predicate used by a [`PatternItem`].
///
/// The engine never interprets pattern syntax beyond compiling it once at
/// construction time.
#[derive(Clone)]
pub enum CharPattern {
    /// One of the built-in character classes.
    Class(CharClass),
    /// A regular expression matched against the whole one-character string.
    Regex(regex::Regex),
    /// An arbitrary predicate.
    Custom(Arc<dyn Fn(char) -> bool + Send + Sync>),
}

impl CharPattern {
    /// Compile a regular expression character pattern such as `[0-9a-f]`.
    ///
    /// The expression is anchored so it has to match the entire character.
    /// An invalid expression fails here, never while filtering.
    pub fn regex(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{pattern})$");
        let regex = regex::Regex::new(&anchored)
            .map_err(|err| Error::invalid_pattern(pattern, err.to_string()))?;
        Ok(CharPattern::Regex(regex))
    }

    /// Wrap an arbitrary predicate.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        CharPattern::Custom(Arc::new(predicate))
    }

    /// Test a single character.
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            CharPattern::Class(class) => class.accepts(ch),
            CharPattern::Regex(regex) => {
                let mut buf = [0u8; 4];
                regex.is_match(ch.encode_utf8(&mut buf))
            }
            CharPattern::Custom(predicate) => predicate(ch),
        }
    }
}

impl From<CharClass> for CharPattern {
    fn from(class: CharClass) -> Self {
        CharPattern::Class(class)
    }
}

impl fmt::Debug for CharPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharPattern::Class(class) => f.debug_tuple("Class").field(class).finish(),
            CharPattern::Regex(regex) => f.debug_tuple("Regex").field(&regex.as_str()).finish(),
            CharPattern::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A literal position, committed as-is whether or not the user typed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticItem {
    display_char: char,
}

impl StaticItem {
    /// Create a literal position.
    pub fn new(display_char: char) -> Self {
        Self { display_char }
    }

    /// The literal character.
    pub fn display_char(&self) -> char {
        self.display_char
    }
}

/// A character slot that accepts exactly one character matching its pattern.
#[derive(Debug, Clone)]
pub struct PatternItem {
    pattern: CharPattern,
    case: CaseMode,
    display_char: char,
    required: bool,
}

impl PatternItem {
    /// Create a required slot with no case conversion.
    pub fn new(pattern: impl Into<CharPattern>, display_char: char) -> Self {
        Self {
            pattern: pattern.into(),
            case: CaseMode::None,
            display_char,
            required: true,
        }
    }

    /// Set the case conversion applied to accepted characters.
    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    /// Fold accepted characters to upper case.
    pub fn uppercase(self) -> Self {
        self.with_case(CaseMode::Upper)
    }

    /// Mark the slot as optional for validation purposes.
    ///
    /// Filtering treats optional and required slots identically.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Test a candidate character.
    ///
    /// Returns the (case-converted) character to commit when the pattern
    /// accepts it, `None` otherwise.
    pub fn matches(&self, candidate: char) -> Option<char> {
        self.pattern
            .accepts(candidate)
            .then(|| self.case.apply(candidate))
    }

    /// The character pattern.
    pub fn pattern(&self) -> &CharPattern {
        &self.pattern
    }

    /// The case conversion mode.
    pub fn case(&self) -> CaseMode {
        self.case
    }

    /// Whether accepted characters are folded to upper case.
    pub fn is_uppercase(&self) -> bool {
        self.case == CaseMode::Upper
    }

    /// The character shown while the slot is unfilled.
    pub fn display_char(&self) -> char {
        self.display_char
    }

    /// Whether the slot must be filled for the input to be complete.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// One position in a mask.
#[derive(Debug, Clone)]
pub enum MaskItem {
    /// A literal separator.
    Static(StaticItem),
    /// A pattern-constrained character slot.
    Pattern(PatternItem),
}

impl MaskItem {
    /// Create a literal item.
    pub fn literal(ch: char) -> Self {
        MaskItem::Static(StaticItem::new(ch))
    }

    /// Create a required pattern slot.
    pub fn pattern(pattern: impl Into<CharPattern>, display_char: char) -> Self {
        MaskItem::Pattern(PatternItem::new(pattern, display_char))
    }

    /// The character this item contributes to the display string.
    pub fn display_char(&self) -> char {
        match self {
            MaskItem::Static(item) => item.display_char(),
            MaskItem::Pattern(item) => item.display_char(),
        }
    }

    /// Returns true if this item is a literal.
    pub fn is_static(&self) -> bool {
        matches!(self, MaskItem::Static(_))
    }

    /// Returns true if this item accepts user input.
    pub fn is_editable(&self) -> bool {
        matches!(self, MaskItem::Pattern(_))
    }

    /// Returns true if this item is a slot that must be filled.
    pub fn is_required(&self) -> bool {
        match self {
            MaskItem::Static(_) => false,
            MaskItem::Pattern(item) => item.is_required(),
        }
    }
}

impl From<StaticItem> for MaskItem {
    fn from(item: StaticItem) -> Self {
        MaskItem::Static(item)
    }
}

impl From<PatternItem> for MaskItem {
    fn from(item: PatternItem) -> Self {
        MaskItem::Pattern(item)
    }
}
