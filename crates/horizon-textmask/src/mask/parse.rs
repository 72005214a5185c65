//! Mask pattern string parser.

use horizon_textmask_core::logging::targets;
use horizon_textmask_core::{Error, Result};

use super::{CaseMode, CharClass, DEFAULT_BLANK, MaskItem, PatternItem};

/// Parse a pattern string into mask items.
pub(super) fn parse_pattern(pattern: &str) -> Result<Vec<MaskItem>> {
    let (body, blank) = split_blank_specifier(pattern);

    let mut items = Vec::new();
    let mut case = CaseMode::None;
    let mut chars = body.chars().enumerate();

    while let Some((pos, ch)) = chars.next() {
        let current_case = case;
        let slot = move |class: CharClass, required: bool| {
            let item = PatternItem::new(class, blank).with_case(current_case);
            MaskItem::Pattern(if required { item } else { item.optional() })
        };

        let item = match ch {
            '\\' => match chars.next() {
                Some((_, escaped)) => MaskItem::literal(escaped),
                None => {
                    return Err(Error::invalid_mask(
                        pattern,
                        pos,
                        "escape character at end of mask",
                    ));
                }
            },
            '>' => {
                case = CaseMode::Upper;
                continue;
            }
            '<' => {
                case = CaseMode::Lower;
                continue;
            }
            '!' => {
                case = CaseMode::None;
                continue;
            }
            'A' => slot(CharClass::Letter, true),
            'a' => slot(CharClass::Letter, false),
            'N' => slot(CharClass::Alphanumeric, true),
            'n' => slot(CharClass::Alphanumeric, false),
            'X' => slot(CharClass::Any, true),
            'x' => slot(CharClass::Any, false),
            '9' => slot(CharClass::Digit, true),
            '0' => slot(CharClass::Digit, false),
            'D' => slot(CharClass::NonZeroDigit, true),
            'd' => slot(CharClass::NonZeroDigit, false),
            '#' => slot(CharClass::DigitOrSign, false),
            'H' => slot(CharClass::Hex, true),
            'h' => slot(CharClass::Hex, false),
            'B' => slot(CharClass::Binary, true),
            'b' => slot(CharClass::Binary, false),
            other => MaskItem::literal(other),
        };
        items.push(item);
    }

    if items.is_empty() {
        return Err(Error::empty_mask(pattern));
    }

    tracing::debug!(
        target: targets::MASK,
        pattern,
        items = items.len(),
        %blank,
        "parsed mask pattern"
    );
    Ok(items)
}

/// Split off a trailing `;c` blank specifier.
///
/// The first unescaped `;` that is followed by a character ends the mask; a
/// lone `;` at the very end is an ordinary literal.
fn split_blank_specifier(pattern: &str) -> (&str, char) {
    let mut chars = pattern.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            ';' => {
                if let Some((_, blank)) = chars.next() {
                    return (&pattern[..idx], blank);
                }
            }
            _ => {}
        }
    }
    (pattern, DEFAULT_BLANK)
}
