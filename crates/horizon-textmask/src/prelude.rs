//! Prelude module for Horizon Textmask.
//!
//! ```
//! use horizon_textmask::prelude::*;
//! ```

// ============================================================================
// Errors and Signals
// ============================================================================

pub use crate::{Error, Property, Result, Signal};

// ============================================================================
// Masks
// ============================================================================

pub use crate::mask::{CaseMode, CharClass, CharPattern, EmptyInputPolicy, Mask, MaskItem};

// ============================================================================
// Placeholders
// ============================================================================

pub use crate::direction::TextDirection;
pub use crate::localization::{LocalizationProvider, StaticCatalog};
pub use crate::placeholder::{OverlayRun, Placeholder, RunVisibility};

// ============================================================================
// Editing
// ============================================================================

pub use crate::config::TextMaskConfig;
pub use crate::edit::MaskedLineEdit;
pub use crate::validator::{MaskValidator, ValidationState, Validator};
