//! Input masks.
//!
//! A [`Mask`] is an immutable, ordered sequence of [`MaskItem`]s fixed at
//! construction. Its length is the maximum length of the canonical value and
//! its display string (each item's display character, concatenated) is
//! computed once.
//!
//! Masks are built from items, with [`MaskBuilder`], or parsed from a Qt-style
//! pattern string:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `A`  | Letter required |
//! | `a`  | Letter permitted but not required |
//! | `N`  | Alphanumeric required |
//! | `n`  | Alphanumeric permitted but not required |
//! | `X`  | Any non-blank character required |
//! | `x`  | Any non-blank character permitted but not required |
//! | `9`  | Digit required |
//! | `0`  | Digit permitted but not required |
//! | `D`  | Digit 1-9 required |
//! | `d`  | Digit 1-9 permitted but not required |
//! | `#`  | Digit or +/- sign permitted but not required |
//! | `H`  | Hex character required |
//! | `h`  | Hex character permitted but not required |
//! | `B`  | Binary character required |
//! | `b`  | Binary character permitted but not required |
//! | `>`  | All following alphabetic characters are uppercased |
//! | `<`  | All following alphabetic characters are lowercased |
//! | `!`  | Switch off case conversion |
//! | `\`  | Escape the following character to use it as a literal |
//! | `;c` | Terminates the mask and sets the blank character to `c` |
//!
//! # Example
//!
//! ```
//! use horizon_textmask::mask::Mask;
//!
//! let mask = Mask::parse("(999) 999-9999").unwrap();
//! assert_eq!(mask.display_text(), "(___) ___-____");
//! assert_eq!(mask.filter("555 123 4567"), "(555) 123-4567");
//! ```

mod filter;
mod item;
mod parse;

use std::fmt;

use horizon_textmask_core::logging::span_names;
use horizon_textmask_core::{PerfSpan, Result};
use serde::{Deserialize, Serialize};

pub use filter::filter;
pub use item::{CaseMode, CharClass, CharPattern, MaskItem, PatternItem, StaticItem};

/// Blank character used for unfilled slots when a pattern does not set one.
pub const DEFAULT_BLANK: char = '_';

/// What [`Mask::filter`] returns for an empty raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Run the normal pass: literals ahead of the first slot are committed
    /// even though nothing was typed (`"(999)"` yields `"("`).
    #[default]
    EmitLiterals,
    /// An empty raw input always yields an empty value.
    Clear,
}

/// An immutable input mask.
#[derive(Debug, Clone)]
pub struct Mask {
    items: Vec<MaskItem>,
    display: String,
    pattern: Option<String>,
    empty_input: EmptyInputPolicy,
}

impl Mask {
    /// Create a mask from items.
    pub fn new(items: impl IntoIterator<Item = MaskItem>) -> Self {
        Self::from_parts(items.into_iter().collect(), None)
    }

    /// Start building a mask item by item.
    pub fn builder() -> MaskBuilder {
        MaskBuilder::default()
    }

    /// Parse a mask from a pattern string such as `"(999) 999-9999;_"`.
    pub fn parse(pattern: &str) -> Result<Self> {
        let _span = PerfSpan::new(span_names::PARSE);
        let parsed = parse::parse_pattern(pattern)?;
        Ok(Self::from_parts(parsed, Some(pattern.to_string())))
    }

    fn from_parts(items: Vec<MaskItem>, pattern: Option<String>) -> Self {
        let display = items.iter().map(MaskItem::display_char).collect();
        Self {
            items,
            display,
            pattern,
            empty_input: EmptyInputPolicy::default(),
        }
    }

    /// Set how an empty raw input is filtered.
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// The empty input policy.
    pub fn empty_input(&self) -> EmptyInputPolicy {
        self.empty_input
    }

    /// Derive the canonical value from raw input.
    ///
    /// See [`filter()`] for the algorithm.
    pub fn filter(&self, raw: &str) -> String {
        filter(self, raw)
    }

    /// The mask items in order.
    pub fn items(&self) -> &[MaskItem] {
        &self.items
    }

    /// Get the item at a given position.
    pub fn item_at(&self, pos: usize) -> Option<&MaskItem> {
        self.items.get(pos)
    }

    /// The number of positions, which bounds the canonical value length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the mask has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The display string shown for a completely unfilled input.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// The pattern string this mask was parsed from, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// The literals ahead of the first slot, e.g. `"+1 "` for `"+1 999"`.
    pub fn leading_literals(&self) -> String {
        self.items
            .iter()
            .take_while(|item| item.is_static())
            .map(MaskItem::display_char)
            .collect()
    }

    /// Get the number of editable positions.
    pub fn editable_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_editable()).count()
    }

    /// Get the number of required positions.
    pub fn required_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_required()).count()
    }

    /// Check whether a canonical value fills every required slot.
    ///
    /// Characters of `value` line up one-to-one with mask positions.
    pub fn is_complete(&self, value: &str) -> bool {
        let filled = value.chars().count();
        self.items
            .iter()
            .enumerate()
            .all(|(pos, item)| !item.is_required() || pos < filled)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pattern {
            Some(pattern) => f.write_str(pattern),
            None => f.write_str(&self.display),
        }
    }
}

/// Incremental construction of a [`Mask`].
///
/// ```
/// use horizon_textmask::mask::{CharClass, Mask};
///
/// let mask = Mask::builder()
///     .literal('(')
///     .slots(CharClass::Digit, 3)
///     .literal(')')
///     .build();
/// assert_eq!(mask.display_text(), "(___)");
/// ```
#[derive(Debug, Clone)]
pub struct MaskBuilder {
    items: Vec<MaskItem>,
    blank: char,
    case: CaseMode,
    empty_input: EmptyInputPolicy,
}

impl Default for MaskBuilder {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            blank: DEFAULT_BLANK,
            case: CaseMode::None,
            empty_input: EmptyInputPolicy::default(),
        }
    }
}

impl MaskBuilder {
    /// Set the display character used by subsequent slots.
    pub fn blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    /// Set the case conversion used by subsequent slots.
    pub fn case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    /// Append a literal.
    pub fn literal(mut self, ch: char) -> Self {
        self.items.push(MaskItem::literal(ch));
        self
    }

    /// Append every character of `text` as a literal.
    pub fn literals(mut self, text: &str) -> Self {
        self.items.extend(text.chars().map(MaskItem::literal));
        self
    }

    /// Append one required slot.
    pub fn slot(self, pattern: impl Into<CharPattern>) -> Self {
        let item = PatternItem::new(pattern, self.blank).with_case(self.case);
        self.item(item)
    }

    /// Append `count` required slots of the same class.
    pub fn slots(mut self, class: CharClass, count: usize) -> Self {
        for _ in 0..count {
            self = self.slot(class);
        }
        self
    }

    /// Append an arbitrary item.
    pub fn item(mut self, item: impl Into<MaskItem>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Set the empty input policy of the built mask.
    pub fn empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Finish the mask.
    pub fn build(self) -> Mask {
        Mask::new(self.items).with_empty_input(self.empty_input)
    }
}

static_assertions::assert_impl_all!(Mask: Send, Sync);
