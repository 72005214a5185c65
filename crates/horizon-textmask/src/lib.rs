//! Horizon Textmask - masked text input and placeholder overlays.
//!
//! This crate turns raw keystrokes into masked, canonical values and renders
//! the placeholder "ghost" text that shows which characters are still
//! expected, including right-to-left layouts.
//!
//! The two operations a host calls are [`Placeholder::filter_input`] on every
//! edit and [`Placeholder::render_overlay`] on every repaint.
//!
//! # Example
//!
//! ```
//! use horizon_textmask::prelude::*;
//!
//! let placeholder = Placeholder::mask_pattern("(999) 999").unwrap();
//! assert_eq!(placeholder.filter_input("5551234"), "(555) 123");
//!
//! let runs = placeholder.render_overlay("5", TextDirection::RightToLeft);
//! assert_eq!(runs, vec![OverlayRun::hidden("(___) ___")]);
//! ```

pub use horizon_textmask_core::*;

pub mod config;
pub mod direction;
pub mod edit;
pub mod localization;
pub mod mask;
pub mod placeholder;
pub mod prelude;
pub mod validator;

pub use direction::TextDirection;
pub use placeholder::{OverlayRun, Placeholder, RunVisibility};
