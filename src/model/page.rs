//! Page geometry and content blocks.

use super::{Color, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// Points per centimeter.
pub const CM: f32 = 72.0 / 2.54;

/// Points per inch.
pub const INCH: f32 = 72.0;

/// Page dimensions in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
}

impl PageSize {
    /// ISO A4 (210 x 297 mm).
    pub const A4: PageSize = PageSize {
        width: 595.2756,
        height: 841.8898,
    };

    /// US Letter (8.5 x 11 inches).
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
    /// Right margin
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 2.5 * CM,
            bottom: 2.0 * CM,
            left: 2.0 * CM,
            right: 2.0 * CM,
        }
    }
}

/// A content block in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A horizontal rule / separator
    Rule {
        /// Stroke color
        color: Color,
        /// Rule width in points (centered in the content area)
        width: f32,
    },

    /// Vertical whitespace
    Spacer {
        /// Height in points
        height: f32,
    },

    /// A forced page break
    PageBreak,
}

impl Block {
    /// Create a spacer block.
    pub fn spacer(height: f32) -> Self {
        Block::Spacer { height }
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }

    /// Get the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Paragraph(p) => Some(p.text.clone()),
            Block::Table(t) => Some(t.plain_text()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_sizes() {
        assert!(!PageSize::A4.is_landscape());
        assert!(!PageSize::LETTER.is_landscape());
        assert!((PageSize::A4.width - 21.0 * CM).abs() < 0.01);
    }

    #[test]
    fn test_default_margins() {
        let m = Margins::default();
        assert!((m.left - 56.69).abs() < 0.01);
        assert!(m.top > m.bottom);
    }

    #[test]
    fn test_block_variants() {
        let spacer = Block::spacer(15.0);
        assert!(!spacer.is_paragraph());
        assert!(spacer.plain_text().is_none());
        assert!(Block::PageBreak.is_page_break());
    }
}
