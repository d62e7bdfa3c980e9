//! Document model types for styled report content.
//!
//! This module defines the intermediate representation that bridges line
//! classification and PDF output: styled paragraphs, tables, rules and
//! spacers, grouped into an [`AnalysisDocument`].

mod document;
mod page;
mod paragraph;
mod style;
mod table;

pub use document::{AnalysisDocument, CombinedReport, Metadata, Section};
pub use page::{Block, Margins, PageSize, CM, INCH};
pub use paragraph::Paragraph;
pub use style::{
    palette, sizes, Alignment, Border, Color, FontFace, ParagraphStyle, StyleSheet,
};
pub use table::{CellStyle, Padding, Table, TableCell, TableRow};
