//! Classified line types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic role of a single line of analysis text.
///
/// The role only selects visual styling; a wrong role is cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Document-level title (`#### ...` or `***...***`)
    Title,
    /// Section heading (`### ...` or `**...**`)
    Heading1,
    /// Subsection heading (`## ...` or `*...*`)
    Heading2,
    /// Positive finding
    Success,
    /// Gap or deficiency
    Warning,
    /// Metric or list item
    Highlight,
    /// Quotation or recommendation
    Quote,
    /// Plain body text
    Body,
    /// Blank separator line
    Spacer,
}

impl LineKind {
    /// All kinds, in rule-evaluation order.
    pub const ALL: [LineKind; 9] = [
        LineKind::Spacer,
        LineKind::Title,
        LineKind::Heading1,
        LineKind::Heading2,
        LineKind::Success,
        LineKind::Warning,
        LineKind::Highlight,
        LineKind::Quote,
        LineKind::Body,
    ];

    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Title => "title",
            LineKind::Heading1 => "heading1",
            LineKind::Heading2 => "heading2",
            LineKind::Success => "success",
            LineKind::Warning => "warning",
            LineKind::Highlight => "highlight",
            LineKind::Quote => "quote",
            LineKind::Body => "body",
            LineKind::Spacer => "spacer",
        }
    }

    /// Check if this kind is one of the heading levels (including title).
    pub fn is_heading(&self) -> bool {
        matches!(self, LineKind::Title | LineKind::Heading1 | LineKind::Heading2)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input line tagged with its semantic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// The role selected by the first matching rule
    pub kind: LineKind,

    /// Line content with signaling markup removed (or a marker added)
    pub text: String,
}

impl ClassifiedLine {
    /// Create a new classified line.
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a blank separator line.
    pub fn spacer() -> Self {
        Self::new(LineKind::Spacer, String::new())
    }

    /// Check if this line carries no visible text.
    pub fn is_spacer(&self) -> bool {
        self.kind == LineKind::Spacer
    }
}
