//! Logging facilities for Horizon Textmask.
//!
//! Horizon Textmask uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_textmask::mask=trace")
//!         .init();
//! }
//! ```
//!
//! Filtering and overlay rendering run on every keystroke and repaint, so
//! they only log at `trace` level. Configuration and parsing log at `debug`.

/// Span names used throughout Horizon Textmask for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Mask filter pass.
    pub const FILTER: &str = "horizon_textmask::filter";
    /// Placeholder overlay rendering.
    pub const OVERLAY: &str = "horizon_textmask::overlay";
    /// Mask pattern parsing.
    pub const PARSE: &str = "horizon_textmask::parse";
    /// Host edit operation (insert, backspace, set text).
    pub const EDIT: &str = "horizon_textmask::edit";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "horizon_textmask_core";
    /// Signal system target.
    pub const SIGNAL: &str = "horizon_textmask_core::signal";
    /// Mask model, parser and filter target.
    pub const MASK: &str = "horizon_textmask::mask";
    /// Placeholder engine target.
    pub const PLACEHOLDER: &str = "horizon_textmask::placeholder";
    /// Localization provider target.
    pub const LOCALIZATION: &str = "horizon_textmask::localization";
    /// Host binding target.
    pub const EDIT: &str = "horizon_textmask::edit";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_textmask::config";
    /// Performance spans target.
    pub const PERF: &str = "horizon_textmask::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace with the core target.
#[macro_export]
macro_rules! textmask_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let _span = PerfSpan::new("test_operation");
        textmask_trace!(value = 1, "inside perf span");
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::MASK,
            targets::PLACEHOLDER,
            targets::LOCALIZATION,
            targets::EDIT,
            targets::CONFIG,
            targets::PERF,
        ] {
            assert!(target.starts_with("horizon_textmask::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
