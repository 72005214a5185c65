//! Core primitives for Horizon Textmask.
//!
//! This crate provides the foundation shared by the masked input engine and its
//! hosts:
//!
//! - **Errors**: The [`Error`] type raised while configuring masks and placeholders
//! - **Logging**: `tracing` targets, span names and [`PerfSpan`]
//! - **Signal/Slot System**: Change notification for input hosts
//! - **Property System**: Values with change detection
//!
//! # Example
//!
//! ```
//! use horizon_textmask_core::{Property, Signal};
//!
//! struct Field {
//!     value: Property<String>,
//!     value_changed: Signal<String>,
//! }
//!
//! impl Field {
//!     fn commit(&self, text: &str) {
//!         if self.value.set(text.to_string()) {
//!             self.value_changed.emit(text.to_string());
//!         }
//!     }
//! }
//!
//! let field = Field { value: Property::new(String::new()), value_changed: Signal::new() };
//! field.commit("(555)");
//! assert_eq!(field.value.get(), "(555)");
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{Error, Result};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
