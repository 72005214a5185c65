//! Masked line edit model.
//!
//! [`MaskedLineEdit`] is the state a single-line input widget keeps for its
//! text: the committed value, the layout direction, the placeholder and an
//! optional validator. Every edit builds a raw candidate, runs it through
//! [`Placeholder::filter_input`] and commits the result, so the stored value
//! is always canonical.
//!
//! The value lock is held across read, filter and write. Signals are emitted
//! after it is released, so slots may read the edit back.
//!
//! ```
//! use horizon_textmask::edit::MaskedLineEdit;
//! use horizon_textmask::placeholder::{OverlayRun, Placeholder};
//! use horizon_textmask::validator::ValidationState;
//!
//! let edit = MaskedLineEdit::new(Placeholder::mask_pattern("99/99").unwrap());
//! edit.insert_str("1");
//! edit.insert_char('2');
//! assert_eq!(edit.text(), "12/");
//! assert_eq!(edit.validation_state(), ValidationState::Intermediate);
//!
//! edit.insert_str("31");
//! assert!(edit.is_acceptable());
//! assert_eq!(
//!     edit.overlay(),
//!     vec![OverlayRun::hidden("12/31"), OverlayRun::visible("")]
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_textmask_core::logging::{span_names, targets};
use horizon_textmask_core::{PerfSpan, Property, Signal};
use parking_lot::Mutex;

use crate::direction::TextDirection;
use crate::mask::{Mask, MaskItem};
use crate::placeholder::{OverlayRun, Placeholder};
use crate::validator::{MaskValidator, ValidationState, Validator};

/// Candidate produced by an edit operation.
enum Pending {
    /// Raw text to filter and commit.
    Raw(String),
    /// Commit an empty value without filtering.
    Cleared,
}

/// Text state of a masked single-line input.
pub struct MaskedLineEdit {
    value: Mutex<String>,
    direction: Property<TextDirection>,
    validation: Property<ValidationState>,
    placeholder: Arc<Placeholder>,
    validator: Option<Arc<dyn Validator>>,

    /// Emitted with the new value when the committed value changes.
    pub text_changed: Signal<String>,
    /// Emitted when the validation state changes.
    pub validation_changed: Signal<ValidationState>,
    /// Emitted when the layout direction changes.
    pub direction_changed: Signal<TextDirection>,
}

impl MaskedLineEdit {
    /// Create an empty edit.
    ///
    /// Mask placeholders come with a [`MaskValidator`] for their mask.
    pub fn new(placeholder: impl Into<Arc<Placeholder>>) -> Self {
        let placeholder = placeholder.into();
        let validator = placeholder
            .as_mask()
            .map(|mask| Arc::new(MaskValidator::new(Arc::clone(mask))) as Arc<dyn Validator>);

        let edit = Self {
            value: Mutex::new(String::new()),
            direction: Property::new(TextDirection::default()),
            validation: Property::new(ValidationState::Acceptable),
            placeholder,
            validator,
            text_changed: Signal::new(),
            validation_changed: Signal::new(),
            direction_changed: Signal::new(),
        };
        edit.validation.set_silent(edit.evaluate(""));
        edit
    }

    /// Replace the validator.
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        let state = self.evaluate(&self.text());
        self.validation.set_silent(state);
        self
    }

    /// Remove the validator; every value is then acceptable.
    pub fn without_validator(mut self) -> Self {
        self.validator = None;
        self.validation.set_silent(ValidationState::Acceptable);
        self
    }

    /// Set the layout direction.
    pub fn with_direction(self, direction: TextDirection) -> Self {
        self.direction.set_silent(direction);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The committed value.
    pub fn text(&self) -> String {
        self.value.lock().clone()
    }

    /// Check if the committed value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.lock().is_empty()
    }

    /// The placeholder.
    pub fn placeholder(&self) -> &Arc<Placeholder> {
        &self.placeholder
    }

    /// The validator, if any.
    pub fn validator(&self) -> Option<&Arc<dyn Validator>> {
        self.validator.as_ref()
    }

    /// The layout direction.
    pub fn direction(&self) -> TextDirection {
        self.direction.get()
    }

    /// Set the layout direction, returning `true` if it changed.
    pub fn set_direction(&self, direction: TextDirection) -> bool {
        if self.direction.set(direction) {
            self.direction_changed.emit(direction);
            true
        } else {
            false
        }
    }

    /// The validation state of the committed value.
    pub fn validation_state(&self) -> ValidationState {
        self.validation.get()
    }

    /// Check if the committed value is acceptable.
    pub fn is_acceptable(&self) -> bool {
        self.validation_state() == ValidationState::Acceptable
    }

    /// The overlay runs for the committed value and current direction.
    pub fn overlay(&self) -> Vec<OverlayRun> {
        let value = self.text();
        self.placeholder.render_overlay(&value, self.direction())
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Replace the whole value. `None` is treated as empty input.
    ///
    /// Returns `true` if the committed value changed.
    pub fn set_text(&self, text: Option<&str>) -> bool {
        let raw = text.unwrap_or_default().to_string();
        self.apply("set_text", |_| Pending::Raw(raw))
    }

    /// Append a typed character.
    pub fn insert_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        let typed: &str = ch.encode_utf8(&mut buf);
        self.apply("insert_char", |value| Pending::Raw(self.appended(value, typed)))
    }

    /// Append pasted text.
    pub fn insert_str(&self, text: &str) -> bool {
        self.apply("insert_str", |value| Pending::Raw(self.appended(value, text)))
    }

    /// Raw candidate for text typed at the end of `value`.
    ///
    /// Typing into an empty masked edit starts after the mask's leading
    /// literals, so a keystroke equal to one of them fills a slot instead of
    /// being taken as an echo of the literal. Text that already carries the
    /// leading literals is used as is.
    fn appended(&self, value: &str, typed: &str) -> String {
        if value.is_empty() {
            if let Some(mask) = self.placeholder.as_mask() {
                let prefix = mask.leading_literals();
                if !typed.starts_with(prefix.as_str()) {
                    return format!("{prefix}{typed}");
                }
            }
        }
        format!("{value}{typed}")
    }

    /// Delete backwards from the end of the value.
    ///
    /// With a mask, trailing literals go together with the last filled slot,
    /// and a value left with only literals is cleared.
    pub fn backspace(&self) -> bool {
        let mask = self.placeholder.as_mask().cloned();
        self.apply("backspace", |value| match mask {
            Some(mask) => backspace_masked(&mask, value),
            None => {
                let mut raw = value.to_string();
                raw.pop();
                if raw.is_empty() {
                    Pending::Cleared
                } else {
                    Pending::Raw(raw)
                }
            }
        })
    }

    /// Clear the value.
    pub fn clear(&self) -> bool {
        self.apply("clear", |_| Pending::Cleared)
    }

    fn apply<F>(&self, op: &'static str, edit: F) -> bool
    where
        F: FnOnce(&str) -> Pending,
    {
        let _span = PerfSpan::new(span_names::EDIT);

        // Validation is stored under the value lock so the state always
        // describes the committed value; signals go out after release.
        let committed = {
            let mut value = self.value.lock();
            let next = match edit(&value) {
                Pending::Raw(raw) => self.placeholder.filter_input(&raw),
                Pending::Cleared => String::new(),
            };
            if *value == next {
                None
            } else {
                value.clone_from(&next);
                let state = self.evaluate(&next);
                let state_changed = self.validation.set(state);
                Some((next, state, state_changed))
            }
        };

        let Some((value, state, state_changed)) = committed else {
            tracing::trace!(target: targets::EDIT, op, "edit left value unchanged");
            return false;
        };

        tracing::debug!(target: targets::EDIT, op, value = %value, "committed value");
        self.text_changed.emit(value);
        if state_changed {
            tracing::debug!(target: targets::EDIT, %state, "validation state changed");
            self.validation_changed.emit(state);
        }
        true
    }

    fn evaluate(&self, value: &str) -> ValidationState {
        self.validator
            .as_ref()
            .map_or(ValidationState::Acceptable, |validator| validator.validate(value))
    }
}

fn backspace_masked(mask: &Mask, value: &str) -> Pending {
    let is_literal = |pos: usize| mask.item_at(pos).is_some_and(MaskItem::is_static);

    let mut chars: Vec<char> = value.chars().collect();
    while chars.len().checked_sub(1).is_some_and(is_literal) {
        chars.pop();
    }
    chars.pop();

    if (0..chars.len()).all(is_literal) {
        Pending::Cleared
    } else {
        Pending::Raw(chars.into_iter().collect())
    }
}

impl fmt::Debug for MaskedLineEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedLineEdit")
            .field("text", &self.text())
            .field("direction", &self.direction())
            .field("validation", &self.validation_state())
            .field("placeholder", &self.placeholder)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(MaskedLineEdit: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::CustomValidator;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn phone_edit() -> MaskedLineEdit {
        MaskedLineEdit::new(Placeholder::mask_pattern("(999) 999").unwrap())
    }

    #[test]
    fn test_typing_commits_filtered_value() {
        let edit = phone_edit();
        for ch in "555x1".chars() {
            edit.insert_char(ch);
        }
        assert_eq!(edit.text(), "(555) 1");
    }

    #[test]
    fn test_paste_and_set_text() {
        let edit = phone_edit();
        assert!(edit.insert_str("5551234"));
        assert_eq!(edit.text(), "(555) 123");

        assert!(edit.set_text(Some("12")));
        assert_eq!(edit.text(), "(12");

        // Absent input is empty input: the leading literal is still emitted.
        assert!(edit.set_text(None));
        assert_eq!(edit.text(), "(");
    }

    #[test]
    fn test_text_changed_only_on_change() {
        let edit = phone_edit();
        let values = Arc::new(Mutex::new(Vec::new()));
        let values_clone = values.clone();
        edit.text_changed.connect(move |value: &String| {
            values_clone.lock().push(value.clone());
        });

        edit.insert_str("555");
        edit.insert_char('x');
        edit.set_text(Some("555"));

        assert_eq!(*values.lock(), vec!["(555) ".to_string()]);
    }

    #[test]
    fn test_validation_changed() {
        let edit = phone_edit();
        assert_eq!(edit.validation_state(), ValidationState::Intermediate);

        let changes = Arc::new(AtomicUsize::new(0));
        let changes_clone = changes.clone();
        edit.validation_changed.connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        edit.insert_str("55512");
        assert_eq!(changes.load(Ordering::SeqCst), 0);
        edit.insert_char('3');
        assert!(edit.is_acceptable());
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        edit.backspace();
        assert_eq!(edit.validation_state(), ValidationState::Intermediate);
        assert_eq!(changes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_backspace_over_literals() {
        let edit = phone_edit();
        edit.insert_str("5551");
        assert_eq!(edit.text(), "(555) 1");

        edit.backspace();
        assert_eq!(edit.text(), "(555) ");
        edit.backspace();
        assert_eq!(edit.text(), "(55");
        edit.backspace();
        edit.backspace();
        assert_eq!(edit.text(), "");
        assert!(!edit.backspace());
    }

    #[test]
    fn test_backspace_without_mask() {
        let edit = MaskedLineEdit::new(Placeholder::text("Name"));
        edit.insert_str("Jo");
        edit.backspace();
        assert_eq!(edit.text(), "J");
        edit.backspace();
        assert!(edit.is_empty());
        assert!(edit.is_acceptable());
    }

    #[test]
    fn test_clear() {
        let edit = phone_edit();
        edit.insert_str("5");
        assert!(edit.clear());
        assert_eq!(edit.text(), "");
        assert!(!edit.clear());
    }

    #[test]
    fn test_overlay_follows_direction() {
        let edit = phone_edit();
        edit.insert_str("5");
        assert_eq!(
            edit.overlay(),
            vec![OverlayRun::hidden("(5"), OverlayRun::visible("__) ___")]
        );

        let directions = Arc::new(AtomicUsize::new(0));
        let directions_clone = directions.clone();
        edit.direction_changed.connect(move |_| {
            directions_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(edit.set_direction(TextDirection::RightToLeft));
        assert!(!edit.set_direction(TextDirection::RightToLeft));
        assert_eq!(directions.load(Ordering::SeqCst), 1);
        assert_eq!(edit.overlay(), vec![OverlayRun::hidden("(___) ___")]);
    }

    #[test]
    fn test_caption_overlay() {
        let edit = MaskedLineEdit::new(Placeholder::text("Search"))
            .with_direction(TextDirection::RightToLeft);
        assert_eq!(edit.overlay(), vec![OverlayRun::visible("Search")]);
        edit.insert_char('q');
        assert_eq!(edit.overlay(), vec![OverlayRun::hidden("")]);
    }

    #[test]
    fn test_custom_validator() {
        let edit = MaskedLineEdit::new(Placeholder::text("Code")).with_validator(
            CustomValidator::new(|input: &str| {
                if input.len() == 3 {
                    ValidationState::Acceptable
                } else {
                    ValidationState::Intermediate
                }
            }),
        );
        assert!(!edit.is_acceptable());
        edit.insert_str("abc");
        assert!(edit.is_acceptable());

        let edit = phone_edit().without_validator();
        assert!(edit.validator().is_none());
        assert!(edit.is_acceptable());
    }

    #[test]
    fn test_typed_digit_matching_leading_literal() {
        let edit = MaskedLineEdit::new(Placeholder::mask_pattern("+1 999").unwrap());
        edit.insert_char('1');
        assert_eq!(edit.text(), "+1 1");
        edit.insert_char('2');
        assert_eq!(edit.text(), "+1 12");

        edit.clear();
        edit.insert_str("12");
        assert_eq!(edit.text(), "+1 12");

        // Pasted text that is already formatted keeps its prefix once.
        edit.clear();
        edit.insert_str("+1 123");
        assert_eq!(edit.text(), "+1 123");
        assert!(edit.is_acceptable());
    }

    #[test]
    fn test_validation_matches_text_across_threads() {
        let edit = Arc::new(phone_edit());
        let validator = MaskValidator::new(Arc::clone(edit.placeholder().as_mask().unwrap()));
        let inputs = ["5551234", "55", "", "555", "123456", "9"];

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let edit = Arc::clone(&edit);
                std::thread::spawn(move || {
                    for round in 0..200 {
                        let raw = inputs[(worker + round) % inputs.len()];
                        edit.set_text(Some(raw));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(edit.validation_state(), validator.validate(&edit.text()));
    }

    #[test]
    fn test_slot_can_read_edit() {
        let edit = Arc::new(phone_edit());
        let seen = Arc::new(Mutex::new(String::new()));
        let edit_clone = Arc::clone(&edit);
        let seen_clone = seen.clone();
        edit.text_changed.connect(move |_| {
            *seen_clone.lock() = edit_clone.text();
        });

        edit.insert_char('7');
        assert_eq!(*seen.lock(), "(7");
    }
}
