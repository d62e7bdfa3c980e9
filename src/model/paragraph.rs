//! Paragraph-level types.

use serde::{Deserialize, Serialize};

use super::ParagraphStyle;

/// A styled paragraph of text.
///
/// Text may contain decorative glyphs (`✓`, `⚠`, `→`, ...); the PDF writer
/// draws those from the symbol fonts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a paragraph with the given text and style.
    pub fn new(text: impl Into<String>, style: &ParagraphStyle) -> Self {
        Self {
            text: text.into(),
            style: style.clone(),
        }
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> &str {
        &self.text
    }
}
