//! Rendering result with identifiers and statistics.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classify::LineKind;
use crate::error::Result;

/// A finished report: PDF bytes plus the name to save them under.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// The PDF file contents
    pub bytes: Vec<u8>,

    /// File name, `{prefix}_{title}_{timestamp}.pdf`
    pub filename: String,

    /// Identifier printed in the footer
    pub report_id: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderedReport {
    /// Size of the PDF in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the PDF is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the PDF into `dir` under its file name and return the full path.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes)?;
        log::debug!("wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(path)
    }
}

/// Statistics collected while building and laying out a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of pages in the PDF
    pub page_count: u32,

    /// Number of analysis sections (1 for single reports)
    pub section_count: u32,

    /// Number of title lines
    pub title_count: u32,

    /// Number of heading1 and heading2 lines
    pub heading_count: u32,

    /// Number of success lines
    pub success_count: u32,

    /// Number of warning lines
    pub warning_count: u32,

    /// Number of highlight lines
    pub highlight_count: u32,

    /// Number of quote lines
    pub quote_count: u32,

    /// Number of body lines
    pub body_count: u32,

    /// Number of spacer lines
    pub spacer_count: u32,

    /// Lines that failed styling and were rendered as raw body text
    pub fallback_lines: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line.
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Title => self.title_count += 1,
            LineKind::Heading1 | LineKind::Heading2 => self.heading_count += 1,
            LineKind::Success => self.success_count += 1,
            LineKind::Warning => self.warning_count += 1,
            LineKind::Highlight => self.highlight_count += 1,
            LineKind::Quote => self.quote_count += 1,
            LineKind::Body => self.body_count += 1,
            LineKind::Spacer => self.spacer_count += 1,
        }
    }

    /// Count one per-line fallback.
    pub fn add_fallback(&mut self) {
        self.fallback_lines += 1;
    }

    /// Total number of classified lines.
    pub fn line_count(&self) -> u32 {
        self.title_count
            + self.heading_count
            + self.success_count
            + self.warning_count
            + self.highlight_count
            + self.quote_count
            + self.body_count
            + self.spacer_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.page_count += other.page_count;
        self.section_count += other.section_count;
        self.title_count += other.title_count;
        self.heading_count += other.heading_count;
        self.success_count += other.success_count;
        self.warning_count += other.warning_count;
        self.highlight_count += other.highlight_count;
        self.quote_count += other.quote_count;
        self.body_count += other.body_count;
        self.spacer_count += other.spacer_count;
        self.fallback_lines += other.fallback_lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_and_count() {
        let mut stats = RenderStats::new();
        for kind in LineKind::ALL {
            stats.record(kind);
        }
        stats.add_fallback();

        assert_eq!(stats.line_count(), 9);
        assert_eq!(stats.heading_count, 2);
        assert_eq!(stats.fallback_lines, 1);
    }

    #[test]
    fn test_merge() {
        let mut a = RenderStats {
            body_count: 2,
            page_count: 1,
            ..Default::default()
        };
        let b = RenderStats {
            body_count: 3,
            warning_count: 1,
            ..Default::default()
        };
        a.merge(&b);

        assert_eq!(a.body_count, 5);
        assert_eq!(a.warning_count, 1);
        assert_eq!(a.page_count, 1);
    }

    #[test]
    fn test_write_to_dir() {
        let dir = TempDir::new().unwrap();
        let report = RenderedReport {
            bytes: b"%PDF-1.5\n".to_vec(),
            filename: "ATS_Analysis_Test_20261017_090000.pdf".to_string(),
            report_id: "ATS_Analysis_Test_20261017_090000".to_string(),
            stats: RenderStats::default(),
        };

        let path = report.write_to_dir(dir.path().join("out")).unwrap();
        assert!(path.ends_with("ATS_Analysis_Test_20261017_090000.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), report.bytes);
    }
}
