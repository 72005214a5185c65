//! Input validation for masked inputs.
//!
//! Validators judge a committed value without changing it. The host binding
//! ([`MaskedLineEdit`](crate::edit::MaskedLineEdit)) re-validates after every
//! commit and reports state transitions.
//!
//! # Validation States
//!
//! - [`ValidationState::Invalid`]: the value could not have come out of the filter
//! - [`ValidationState::Intermediate`]: the value is canonical but still missing required characters
//! - [`ValidationState::Acceptable`]: the value is canonical and complete
//!
//! # Example
//!
//! ```
//! use horizon_textmask::mask::Mask;
//! use horizon_textmask::validator::{MaskValidator, ValidationState, Validator};
//!
//! let validator = MaskValidator::new(Mask::parse("99-99").unwrap());
//! assert_eq!(validator.validate("12-"), ValidationState::Intermediate);
//! assert_eq!(validator.validate("12-34"), ValidationState::Acceptable);
//! assert_eq!(validator.validate("ab"), ValidationState::Invalid);
//! assert_eq!(validator.fixup("1234").as_deref(), Some("12-34"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::mask::Mask;

/// The result of validating a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// The value is wrong and further typing cannot repair it.
    Invalid,
    /// The value is incomplete but could become acceptable.
    #[default]
    Intermediate,
    /// The value is acceptable as a final result.
    Acceptable,
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationState::Invalid => write!(f, "Invalid"),
            ValidationState::Intermediate => write!(f, "Intermediate"),
            ValidationState::Acceptable => write!(f, "Acceptable"),
        }
    }
}

/// Trait for value validators.
///
/// Validators must be `Send + Sync` so they can be shared with the signal
/// system.
pub trait Validator: Send + Sync {
    /// Validate a value.
    fn validate(&self, input: &str) -> ValidationState;

    /// Attempt to repair a value that is not acceptable.
    ///
    /// Returns `None` when no repair applies. The default does nothing.
    fn fixup(&self, _input: &str) -> Option<String> {
        None
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }

    fn fixup(&self, input: &str) -> Option<String> {
        (**self).fixup(input)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }

    fn fixup(&self, input: &str) -> Option<String> {
        (**self).fixup(input)
    }
}

/// Validator that checks values against a [`Mask`].
///
/// A value is canonical when filtering it returns it unchanged. Canonical
/// values are acceptable once every required slot is filled.
#[derive(Debug, Clone)]
pub struct MaskValidator {
    mask: Arc<Mask>,
}

impl MaskValidator {
    /// Create a validator for a mask.
    pub fn new(mask: impl Into<Arc<Mask>>) -> Self {
        Self { mask: mask.into() }
    }

    /// The mask being validated against.
    pub fn mask(&self) -> &Arc<Mask> {
        &self.mask
    }
}

impl Validator for MaskValidator {
    fn validate(&self, input: &str) -> ValidationState {
        // An empty value is never final, even for all-optional masks.
        if input.is_empty() {
            return ValidationState::Intermediate;
        }
        if self.mask.filter(input) != input {
            return ValidationState::Invalid;
        }
        if self.mask.is_complete(input) {
            ValidationState::Acceptable
        } else {
            ValidationState::Intermediate
        }
    }

    fn fixup(&self, input: &str) -> Option<String> {
        let filtered = self.mask.filter(input);
        (filtered != input).then_some(filtered)
    }
}

/// A validator built from closures.
///
/// ```
/// use horizon_textmask::validator::{CustomValidator, ValidationState, Validator};
///
/// let validator = CustomValidator::new(|input: &str| {
///     if input.ends_with('0') {
///         ValidationState::Invalid
///     } else {
///         ValidationState::Acceptable
///     }
/// });
/// assert_eq!(validator.validate("10"), ValidationState::Invalid);
/// ```
pub struct CustomValidator<F>
where
    F: Fn(&str) -> ValidationState + Send + Sync,
{
    validate_fn: F,
    fixup_fn: Option<Box<dyn Fn(&str) -> Option<String> + Send + Sync>>,
}

impl<F> CustomValidator<F>
where
    F: Fn(&str) -> ValidationState + Send + Sync,
{
    /// Create a validator from a validation function.
    pub fn new(validate_fn: F) -> Self {
        Self {
            validate_fn,
            fixup_fn: None,
        }
    }

    /// Add a fixup function.
    pub fn with_fixup<G>(mut self, fixup_fn: G) -> Self
    where
        G: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.fixup_fn = Some(Box::new(fixup_fn));
        self
    }
}

impl<F> Validator for CustomValidator<F>
where
    F: Fn(&str) -> ValidationState + Send + Sync,
{
    fn validate(&self, input: &str) -> ValidationState {
        (self.validate_fn)(input)
    }

    fn fixup(&self, input: &str) -> Option<String> {
        self.fixup_fn.as_ref().and_then(|f| f(input))
    }
}

impl<F> fmt::Debug for CustomValidator<F>
where
    F: Fn(&str) -> ValidationState + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValidator")
            .field("has_fixup", &self.fixup_fn.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(MaskValidator: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> MaskValidator {
        MaskValidator::new(Mask::parse("(999) 999").unwrap())
    }

    #[test]
    fn test_mask_validator_states() {
        let validator = phone();
        assert_eq!(validator.validate(""), ValidationState::Intermediate);
        assert_eq!(validator.validate("(55"), ValidationState::Intermediate);
        assert_eq!(validator.validate("(555) "), ValidationState::Intermediate);
        assert_eq!(validator.validate("(555) 123"), ValidationState::Acceptable);
    }

    #[test]
    fn test_mask_validator_rejects_non_canonical() {
        let validator = phone();
        assert_eq!(validator.validate("555"), ValidationState::Invalid);
        assert_eq!(validator.validate("(555) 1234"), ValidationState::Invalid);
        assert_eq!(validator.validate("(abc"), ValidationState::Invalid);
    }

    #[test]
    fn test_mask_validator_optional_slots() {
        let validator = MaskValidator::new(Mask::parse("99-00").unwrap());
        assert_eq!(validator.validate("12-"), ValidationState::Acceptable);
        assert_eq!(validator.validate("12-3"), ValidationState::Acceptable);
        assert_eq!(validator.validate("1"), ValidationState::Intermediate);
    }

    #[test]
    fn test_mask_validator_fixup() {
        let validator = phone();
        assert_eq!(validator.fixup("5551234").as_deref(), Some("(555) 123"));
        assert_eq!(validator.fixup("(555) 123"), None);
    }

    #[test]
    fn test_validator_through_pointers() {
        let shared: Arc<dyn Validator> = Arc::new(phone());
        assert_eq!(shared.validate("(555) 123"), ValidationState::Acceptable);

        let boxed: Box<dyn Validator> = Box::new(phone());
        assert_eq!(boxed.fixup("1").as_deref(), Some("(1"));
    }

    #[test]
    fn test_custom_validator() {
        let validator = CustomValidator::new(|input: &str| {
            if input.len() >= 3 {
                ValidationState::Acceptable
            } else {
                ValidationState::Intermediate
            }
        })
        .with_fixup(|input| Some(input.trim().to_string()));

        assert_eq!(validator.validate("ab"), ValidationState::Intermediate);
        assert_eq!(validator.validate("abc"), ValidationState::Acceptable);
        assert_eq!(validator.fixup(" x ").as_deref(), Some("x"));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ValidationState::Acceptable.to_string(), "Acceptable");
        assert_eq!(ValidationState::default(), ValidationState::Intermediate);
    }
}
