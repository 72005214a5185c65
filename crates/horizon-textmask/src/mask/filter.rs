//! The mask filter: raw input in, canonical value out.

use std::collections::VecDeque;

use horizon_textmask_core::logging::targets;

use super::{EmptyInputPolicy, Mask, MaskItem};

/// Derive the canonical value of `raw` under `mask`.
///
/// A single greedy pass over the mask, consuming input front to back:
///
/// - A literal is always appended. If the next input character is that same
///   literal (typed, pasted, or already canonical) it is consumed with it.
/// - A slot pops input characters until one matches, appending the
///   case-converted match. Every rejected character is dropped for good and is
///   never retried at a later slot.
/// - When the input runs out while a slot is waiting, the pass stops and the
///   remaining positions stay unfilled.
///
/// The result never exceeds the mask length, and filtering a result again
/// returns it unchanged.
///
/// ```
/// use horizon_textmask::mask::Mask;
///
/// let mask = Mask::parse("99").unwrap();
/// assert_eq!(mask.filter("a1b2"), "12");
/// ```
pub fn filter(mask: &Mask, raw: &str) -> String {
    if raw.is_empty() && mask.empty_input() == EmptyInputPolicy::Clear {
        return String::new();
    }

    let mut pending: VecDeque<char> = raw.chars().collect();
    let mut output = String::with_capacity(mask.len());
    let mut dropped = 0usize;

    'items: for item in mask.items() {
        match item {
            MaskItem::Static(literal) => {
                let ch = literal.display_char();
                if pending.front() == Some(&ch) {
                    pending.pop_front();
                }
                output.push(ch);
            }
            MaskItem::Pattern(slot) => loop {
                let Some(candidate) = pending.pop_front() else {
                    break 'items;
                };
                if let Some(accepted) = slot.matches(candidate) {
                    output.push(accepted);
                    break;
                }
                dropped += 1;
            },
        }
    }

    tracing::trace!(
        target: targets::MASK,
        raw_len = raw.len(),
        output_len = output.len(),
        dropped,
        unused = pending.len(),
        "filtered input"
    );
    output
}
