//! Document-level types.

use super::Block;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A fully built analysis document, ready for layout.
///
/// Built fresh by each render call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDocument {
    /// Display name of the analysis (or of the combined report)
    pub title: String,

    /// Document metadata written to the PDF info dictionary
    pub metadata: Metadata,

    /// Styled blocks in reading order
    pub blocks: Vec<Block>,
}

impl AnalysisDocument {
    /// Create a document from its parts.
    pub fn new(title: impl Into<String>, metadata: Metadata, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            metadata,
            blocks,
        }
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the whole document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| b.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// Creation date
    pub created: Option<DateTime<FixedOffset>>,
}

impl Metadata {
    /// Format a date the way PDF info dictionaries expect,
    /// e.g. `D:20261017143005+02'00'`.
    pub fn pdf_date(date: &DateTime<FixedOffset>) -> String {
        let offset = date.offset().local_minus_utc();
        let sign = if offset < 0 { '-' } else { '+' };
        let offset = offset.abs();
        format!(
            "D:{}{}{:02}'{:02}'",
            date.format("%Y%m%d%H%M%S"),
            sign,
            offset / 3600,
            (offset % 3600) / 60
        )
    }
}

/// One named analysis inside a combined report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Analysis title
    pub title: String,

    /// Raw analysis text
    pub text: String,
}

impl Section {
    /// Create a new section.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// An ordered mapping of analysis titles to raw text.
///
/// Sections render in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedReport {
    /// Sections in render order
    pub sections: Vec<Section>,
}

impl CombinedReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    pub fn add_section(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.sections.push(Section::new(title, text));
    }

    /// Append a section, builder style.
    pub fn with_section(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.add_section(title, text);
        self
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the report has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section titles in order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }
}

impl<T, R> FromIterator<(T, R)> for CombinedReport
where
    T: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, R)>>(iter: I) -> Self {
        Self {
            sections: iter
                .into_iter()
                .map(|(title, text)| Section::new(title, text))
                .collect(),
        }
    }
}
