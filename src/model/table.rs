//! Table types.
//!
//! Tables carry the report header, cover metadata, table of contents and
//! footer. Cells hold single-line text; there are no merged cells.

use super::{Alignment, Color, FontFace};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Column widths in points
    pub column_widths: Vec<f32>,

    /// Grid line color (no grid when `None`)
    pub grid: Option<Color>,

    /// Background fill of the first row
    pub header_background: Option<Color>,

    /// Cell padding in points (top, bottom, left, right)
    pub padding: Padding,
}

impl Table {
    /// Create a new empty table with the given column widths.
    pub fn new(column_widths: Vec<f32>) -> Self {
        Self {
            rows: Vec::new(),
            column_widths,
            grid: None,
            header_background: None,
            padding: Padding::default(),
        }
    }

    /// Set the grid color.
    pub fn with_grid(mut self, color: Color) -> Self {
        self.grid = Some(color);
        self
    }

    /// Set the first-row background.
    pub fn with_header_background(mut self, color: Color) -> Self {
        self.header_background = Some(color);
        self
    }

    /// Set cell padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Total table width in points.
    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Cell padding in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    /// Top padding
    pub top: f32,
    /// Bottom padding
    pub bottom: f32,
    /// Left padding
    pub left: f32,
    /// Right padding
    pub right: f32,
}

impl Padding {
    /// Same padding on every side.
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    /// Vertical and horizontal padding.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::symmetric(3.0, 6.0)
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text (single line)
    pub text: String,

    /// Cell text style
    pub style: CellStyle,
}

impl TableCell {
    /// Create a cell with text and style.
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Text style of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    /// Font face
    pub face: FontFace,
    /// Font size in points
    pub font_size: f32,
    /// Text color
    pub color: Color,
    /// Horizontal alignment within the cell
    pub alignment: Alignment,
}

impl CellStyle {
    /// Create a left-aligned cell style.
    pub const fn new(face: FontFace, font_size: f32, color: Color) -> Self {
        Self {
            face,
            font_size,
            color,
            alignment: Alignment::Left,
        }
    }

    /// Set alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}
