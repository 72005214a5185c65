//! Error types for Horizon Textmask.
//!
//! Errors only occur while *configuring* an input: compiling a character
//! pattern, parsing a mask string, or loading a configuration file. Filtering
//! and overlay rendering never fail.

use std::path::PathBuf;

/// Result type alias for Horizon Textmask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building masks and placeholders.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A character pattern (regular expression) could not be compiled.
    #[error("Invalid character pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A mask pattern string is malformed.
    #[error("Invalid mask '{mask}' at position {position}: {message}")]
    InvalidMask {
        mask: String,
        position: usize,
        message: String,
    },

    /// A mask pattern produced no mask items.
    #[error("Mask '{0}' contains no items")]
    EmptyMask(String),

    /// A localized placeholder was configured without a localization provider.
    #[error("Localized placeholder '{key}' requires a localization provider")]
    MissingProvider { key: String },

    /// Configuration could not be parsed or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a pattern compilation error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a mask parse error.
    pub fn invalid_mask(mask: impl Into<String>, position: usize, message: impl Into<String>) -> Self {
        Self::InvalidMask {
            mask: mask.into(),
            position,
            message: message.into(),
        }
    }

    /// Create an empty mask error.
    pub fn empty_mask(mask: impl Into<String>) -> Self {
        Self::EmptyMask(mask.into())
    }

    /// Create a missing provider error.
    pub fn missing_provider(key: impl Into<String>) -> Self {
        Self::MissingProvider { key: key.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error was raised while compiling a pattern or mask.
    pub fn is_pattern_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::InvalidMask { .. } | Self::EmptyMask(_)
        )
    }
}
