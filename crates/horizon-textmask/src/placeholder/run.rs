//! Overlay text runs.

use std::fmt;

/// Whether a run is painted or only reserves its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunVisibility {
    /// Painted with the placeholder color.
    #[default]
    Visible,
    /// Laid out but painted transparent.
    Hidden,
}

/// A styled segment of a placeholder overlay.
///
/// Hidden runs stand in for text the host already draws itself, so the
/// visible remainder lines up right after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverlayRun {
    /// The text content of this run.
    pub text: String,
    /// How the run is painted.
    pub visibility: RunVisibility,
}

impl OverlayRun {
    /// Create a visible run.
    pub fn visible(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: RunVisibility::Visible,
        }
    }

    /// Create a hidden, space-reserving run.
    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: RunVisibility::Hidden,
        }
    }

    /// Check if the run is painted.
    pub fn is_visible(&self) -> bool {
        self.visibility == RunVisibility::Visible
    }

    /// Check if the run has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the run in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for OverlayRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Concatenate the text of all runs, visible or not.
pub fn concat_runs(runs: &[OverlayRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

/// Concatenate only the visible runs.
pub fn visible_text(runs: &[OverlayRun]) -> String {
    runs.iter()
        .filter(|run| run.is_visible())
        .map(|run| run.text.as_str())
        .collect()
}
