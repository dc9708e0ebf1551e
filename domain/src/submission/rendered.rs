//! What the result surface displays

use serde::{Deserialize, Serialize};

/// A summary as shown on the result surface.
///
/// `html` is the fragment placed in the result region. `text` is the
/// region's visible plain text, which is what the copy action reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSummary {
    pub html: String,
    pub text: String,
}

impl RenderedSummary {
    pub fn new(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            text: text.into(),
        }
    }

    /// Display markdown as-is, for when no renderer is available
    pub fn raw(markdown: &str) -> Self {
        Self::new(markdown, markdown)
    }

    /// Plain text the copy action would place on the clipboard
    pub fn copy_text(&self) -> &str {
        self.text.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.copy_text().is_empty()
    }
}
