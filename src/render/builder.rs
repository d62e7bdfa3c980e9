//! Builds styled documents from classified lines.
//!
//! The builder owns everything that is fixed about a report: the header
//! table, the separator, per-kind decorations, the footer and, for combined
//! reports, the cover page and table of contents. Layout happens later.

use chrono::{DateTime, FixedOffset};

use super::{RenderOptions, RenderStats, TypographyPipeline};
use crate::classify::{ClassifiedLine, LineKind};
use crate::error::{Error, Result};
use crate::model::{
    palette, AnalysisDocument, Alignment, Block, CellStyle, FontFace, Metadata, Padding,
    Paragraph, ParagraphStyle, Table, TableCell, TableRow, INCH,
};

/// Height of the gap a spacer line leaves.
pub const SPACER_HEIGHT: f32 = 15.0;

const QUOTE_CHARS: &[char] = &['"', '“', '”'];

/// Where a run of classified lines is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The only analysis in a single report
    Standalone,
    /// One section of a combined report; titles are demoted to subtitles
    Section,
}

/// Builds [`AnalysisDocument`]s.
pub struct DocumentBuilder<'a> {
    options: &'a RenderOptions,
    timestamp: DateTime<FixedOffset>,
    typography: TypographyPipeline,
    stats: RenderStats,
}

impl<'a> DocumentBuilder<'a> {
    /// Create a builder stamping every document with `timestamp`.
    pub fn new(options: &'a RenderOptions, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            options,
            timestamp,
            typography: TypographyPipeline::new(options.typography.clone()),
            stats: RenderStats::new(),
        }
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Consume the builder and return its statistics.
    pub fn into_stats(self) -> RenderStats {
        self.stats
    }

    /// Build a single-analysis document.
    pub fn build_single(
        &mut self,
        title: &str,
        lines: &[ClassifiedLine],
        report_id: &str,
    ) -> Result<AnalysisDocument> {
        if lines.iter().all(ClassifiedLine::is_spacer) {
            return Err(Error::EmptyContent(format!(
                "analysis {:?} has no text",
                title
            )));
        }

        let mut blocks = self.header(title);
        self.push_lines(&mut blocks, lines, Placement::Standalone);
        blocks.push(Block::spacer(40.0));
        blocks.push(Block::Table(self.footer(report_id)));
        self.stats.section_count += 1;

        log::debug!("built {:?}: {} blocks", title, blocks.len());
        Ok(AnalysisDocument::new(title, self.metadata(title), blocks))
    }

    /// Build a combined document from titled, classified sections.
    pub fn build_combined(
        &mut self,
        sections: &[(String, Vec<ClassifiedLine>)],
        report_id: &str,
    ) -> Result<AnalysisDocument> {
        if sections.is_empty() {
            return Err(Error::EmptyContent(
                "combined report has no sections".to_string(),
            ));
        }

        let styles = &self.options.styles;
        let mut blocks = self.cover(sections.len());
        blocks.push(Block::Paragraph(Paragraph::new(
            "📋 Table of Contents",
            &styles.heading1,
        )));
        blocks.push(Block::spacer(20.0));
        blocks.push(Block::Table(table_of_contents(
            sections.iter().map(|(title, _)| title.as_str()),
        )));
        blocks.push(Block::PageBreak);

        let count = sections.len();
        for (i, (title, lines)) in sections.iter().enumerate() {
            let number = i + 1;
            if number > 1 {
                blocks.push(Block::PageBreak);
            }
            blocks.push(Block::Paragraph(Paragraph::new(
                format!("Analysis {}: {}", number, title),
                &self.options.styles.title,
            )));
            blocks.push(Block::spacer(25.0));

            self.push_lines(&mut blocks, lines, Placement::Section);
            self.stats.section_count += 1;

            if number < count {
                blocks.push(Block::spacer(30.0));
            }
        }

        blocks.push(Block::spacer(40.0));
        blocks.push(Block::Table(self.final_footer(report_id)));

        let title = self.options.combined_title.clone();
        log::debug!("built combined report: {} sections, {} blocks", count, blocks.len());
        Ok(AnalysisDocument::new(
            title.clone(),
            self.metadata(&title),
            blocks,
        ))
    }

    /// Style every line, falling back to raw body text for lines that fail.
    fn push_lines(&mut self, blocks: &mut Vec<Block>, lines: &[ClassifiedLine], at: Placement) {
        for (index, line) in lines.iter().enumerate() {
            self.stats.record(line.kind);
            match self.style_line(line, at) {
                Ok(block) => blocks.push(block),
                Err(e) => {
                    log::warn!("line {} ({}): {}; rendering as plain text", index + 1, line.kind, e);
                    self.stats.add_fallback();
                    blocks.push(Block::Paragraph(Paragraph::new(
                        line.text.clone(),
                        &self.options.styles.body,
                    )));
                }
            }
        }
    }

    /// Map one classified line to its styled block.
    pub fn style_line(&self, line: &ClassifiedLine, at: Placement) -> Result<Block> {
        if let Some(c) = line.text.chars().find(|c| c.is_control() && *c != '\t') {
            return Err(Error::Style(format!(
                "control character U+{:04X}",
                c as u32
            )));
        }

        let styles = &self.options.styles;
        let text = &line.text;
        let (text, style): (String, &ParagraphStyle) = match line.kind {
            LineKind::Title => match at {
                Placement::Standalone => (text.clone(), &styles.title),
                Placement::Section => (text.clone(), &styles.subtitle),
            },
            LineKind::Heading1 => (format!("▸ {}", text), &styles.heading1),
            LineKind::Heading2 => (format!("• {}", text), &styles.heading2),
            LineKind::Success => (format!("✓ {}", text), &styles.success),
            LineKind::Warning => (format!("⚠ {}", text), &styles.warning),
            LineKind::Highlight => (format!("→ {}", text), &styles.highlight),
            LineKind::Quote => (
                format!("“{}”", text.trim_matches(QUOTE_CHARS)),
                &styles.quote,
            ),
            LineKind::Body => (self.typography.process(text), &styles.body),
            LineKind::Spacer => return Ok(Block::spacer(SPACER_HEIGHT)),
        };

        Ok(Block::Paragraph(Paragraph::new(text, style)))
    }

    fn banner(&self) -> String {
        format!("🎯 {}", self.options.product_name)
    }

    /// Two-column header: banner and date, then title and time.
    fn header(&self, title: &str) -> Vec<Block> {
        let left_banner = CellStyle::new(FontFace::Bold, 16.0, palette::PRIMARY_DARK);
        let left_title = CellStyle::new(FontFace::Bold, 14.0, palette::PRIMARY_DARK);
        let right = CellStyle::new(FontFace::Regular, 10.0, palette::TEXT_SECONDARY)
            .aligned(Alignment::Right);

        let mut table = Table::new(vec![4.0 * INCH, 2.0 * INCH]).with_padding(Padding {
            top: 3.0,
            bottom: 12.0,
            left: 6.0,
            right: 6.0,
        });
        table.add_row(TableRow::new(vec![
            TableCell::new(self.banner(), left_banner),
            TableCell::new(self.timestamp.format("%B %d, %Y").to_string(), right),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::new(title, left_title),
            TableCell::new(self.timestamp.format("%H:%M").to_string(), right),
        ]));

        vec![
            Block::Table(table),
            Block::spacer(20.0),
            Block::Rule {
                color: palette::BORDER,
                width: 6.0 * INCH,
            },
            Block::spacer(20.0),
        ]
    }

    fn footer(&self, report_id: &str) -> Table {
        let attribution = CellStyle::new(FontFace::Bold, 10.0, palette::PRIMARY_MEDIUM)
            .aligned(Alignment::Center);
        let muted =
            CellStyle::new(FontFace::Regular, 8.0, palette::TEXT_MUTED).aligned(Alignment::Center);

        let mut table = Table::new(vec![6.0 * INCH]).with_padding(footer_padding());
        table.add_row(TableRow::new(vec![TableCell::new(
            format!("Generated by {}", self.options.product_name),
            attribution,
        )]));
        table.add_row(TableRow::new(vec![TableCell::new(
            self.options.tagline.clone(),
            muted,
        )]));
        table.add_row(TableRow::new(vec![TableCell::new(
            format!("Report ID: {}", report_id),
            muted,
        )]));
        table
    }

    fn final_footer(&self, report_id: &str) -> Table {
        let closing =
            CellStyle::new(FontFace::Bold, 12.0, palette::PRIMARY_DARK).aligned(Alignment::Center);
        let medium = CellStyle::new(FontFace::Regular, 10.0, palette::PRIMARY_MEDIUM)
            .aligned(Alignment::Center);
        let muted =
            CellStyle::new(FontFace::Regular, 8.0, palette::TEXT_MUTED).aligned(Alignment::Center);

        let mut table = Table::new(vec![6.0 * INCH]).with_padding(footer_padding());
        for (text, style) in [
            ("📊 End of Report".to_string(), closing),
            (format!("Generated by {}", self.options.product_name), medium),
            (
                "For questions or support, contact our AI Career Assistant".to_string(),
                medium,
            ),
            (format!("Report ID: {}", report_id), muted),
        ] {
            table.add_row(TableRow::new(vec![TableCell::new(text, style)]));
        }
        table
    }

    /// Cover page: banner, subtitle and the metadata table.
    fn cover(&self, section_count: usize) -> Vec<Block> {
        let styles = &self.options.styles;
        let label = CellStyle::new(FontFace::Regular, 11.0, palette::TEXT_SECONDARY)
            .aligned(Alignment::Right);
        let value = CellStyle::new(FontFace::Regular, 11.0, palette::TEXT_PRIMARY);

        let mut table =
            Table::new(vec![2.0 * INCH, 3.0 * INCH]).with_padding(Padding::symmetric(8.0, 10.0));
        for (name, text) in [
            ("Report Date:", self.timestamp.format("%B %d, %Y").to_string()),
            ("Generated At:", self.timestamp.format("%H:%M:%S").to_string()),
            ("Total Analyses:", section_count.to_string()),
            ("Report Type:", "Comprehensive Assessment".to_string()),
        ] {
            table.add_row(TableRow::new(vec![
                TableCell::new(name, label),
                TableCell::new(text, value),
            ]));
        }

        vec![
            Block::spacer(2.0 * INCH),
            Block::Paragraph(Paragraph::new(self.banner(), &styles.title)),
            Block::spacer(20.0),
            Block::Paragraph(Paragraph::new(
                self.options.combined_title.clone(),
                &styles.subtitle,
            )),
            Block::spacer(30.0),
            Block::Table(table),
            Block::spacer(60.0),
        ]
    }

    fn metadata(&self, title: &str) -> Metadata {
        Metadata {
            title: Some(format!("{} - {}", self.options.product_name, title)),
            author: Some(self.options.author.clone()),
            subject: Some("ATS Resume Analysis Report".to_string()),
            creator: Some(self.options.product_name.clone()),
            created: Some(self.timestamp),
        }
    }
}

fn footer_padding() -> Padding {
    Padding {
        top: 5.0,
        bottom: 3.0,
        left: 6.0,
        right: 6.0,
    }
}

/// Table of contents rows: number, title, placeholder page `index + 1`.
fn table_of_contents<'t>(titles: impl Iterator<Item = &'t str>) -> Table {
    let cell = CellStyle::new(FontFace::Regular, 11.0, palette::TEXT_PRIMARY);
    let mut table = Table::new(vec![0.5 * INCH, 4.0 * INCH, 1.0 * INCH])
        .with_padding(Padding::symmetric(6.0, 5.0))
        .with_grid(palette::BORDER)
        .with_header_background(palette::BACKGROUND);

    for (i, title) in titles.enumerate() {
        let number = i + 1;
        table.add_row(TableRow::new(vec![
            TableCell::new(format!("{}.", number), cell.aligned(Alignment::Right)),
            TableCell::new(title, cell),
            TableCell::new(format!("Page {}", number + 1), cell.aligned(Alignment::Right)),
        ]));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use chrono::TimeZone;

    fn options() -> RenderOptions {
        let ts = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 17, 14, 30, 5)
            .unwrap();
        RenderOptions::new().with_timestamp(ts)
    }

    fn paragraphs(doc: &AnalysisDocument) -> Vec<&Paragraph> {
        doc.blocks.iter().filter_map(Block::as_paragraph).collect()
    }

    #[test]
    fn test_single_header_and_footer() {
        let opts = options();
        let mut builder = DocumentBuilder::new(&opts, opts.timestamp());
        let lines = classify("Plain text");
        let doc = builder
            .build_single("Percentage Match", &lines, "ATS_Analysis_Percentage_Match_20261017_143005")
            .unwrap();

        let text = doc.plain_text();
        assert!(text.contains("🎯 ATS Resume Expert\tOctober 17, 2026"));
        assert!(text.contains("Percentage Match\t14:30"));
        assert!(text.contains("Generated by ATS Resume Expert"));
        assert!(text.contains("Your AI-Powered Career Assistant"));
        assert!(text.contains("Report ID: ATS_Analysis_Percentage_Match_20261017_143005"));
        assert!(doc.blocks.iter().any(|b| matches!(b, Block::Rule { .. })));
        assert_eq!(
            doc.metadata.title.as_deref(),
            Some("ATS Resume Expert - Percentage Match")
        );
    }

    #[test]
    fn test_decorations() {
        let opts = options();
        let builder = DocumentBuilder::new(&opts, opts.timestamp());
        let cases = [
            (LineKind::Heading1, "Skills", "▸ Skills"),
            (LineKind::Heading2, "Python", "• Python"),
            (LineKind::Success, "Strong fit", "✓ Strong fit"),
            (LineKind::Warning, "Missing Go", "⚠ Missing Go"),
            (LineKind::Highlight, "📊 Match: 87%", "→ 📊 Match: 87%"),
            (LineKind::Quote, "\"Add metrics\"", "“Add metrics”"),
            (LineKind::Title, "Summary", "Summary"),
        ];

        for (kind, text, expected) in cases {
            let block = builder
                .style_line(&ClassifiedLine::new(kind, text), Placement::Standalone)
                .unwrap();
            let para = block.as_paragraph().unwrap();
            assert_eq!(para.text, expected, "{kind}");
            assert_eq!(para.style, *opts.styles.for_kind(kind));
        }
    }

    #[test]
    fn test_section_title_uses_subtitle() {
        let opts = options();
        let builder = DocumentBuilder::new(&opts, opts.timestamp());
        let block = builder
            .style_line(&ClassifiedLine::new(LineKind::Title, "Summary"), Placement::Section)
            .unwrap();
        assert_eq!(block.as_paragraph().unwrap().style.name, "subtitle");
    }

    #[test]
    fn test_body_typography() {
        let opts = options();
        let builder = DocumentBuilder::new(&opts, opts.timestamp());
        let block = builder
            .style_line(
                &ClassifiedLine::new(LineKind::Body, "It's a \"fit\"--mostly..."),
                Placement::Standalone,
            )
            .unwrap();
        assert_eq!(block.as_paragraph().unwrap().text, "It’s a “fit”—mostly…");

        // Only body lines get typography
        let block = builder
            .style_line(
                &ClassifiedLine::new(LineKind::Highlight, "- a -- b"),
                Placement::Standalone,
            )
            .unwrap();
        assert_eq!(block.as_paragraph().unwrap().text, "→ - a -- b");
    }

    #[test]
    fn test_spacer_block() {
        let opts = options();
        let builder = DocumentBuilder::new(&opts, opts.timestamp());
        let block = builder
            .style_line(&ClassifiedLine::spacer(), Placement::Standalone)
            .unwrap();
        assert_eq!(block, Block::spacer(SPACER_HEIGHT));
    }

    #[test]
    fn test_control_character_falls_back() {
        let opts = options();
        let mut builder = DocumentBuilder::new(&opts, opts.timestamp());
        let lines = vec![
            ClassifiedLine::new(LineKind::Success, "Strong Rust"),
            ClassifiedLine::new(LineKind::Warning, "Missing\u{0007} tests"),
            ClassifiedLine::new(LineKind::Body, "Closing words"),
        ];

        assert!(matches!(
            builder.style_line(&lines[1], Placement::Standalone),
            Err(Error::Style(_))
        ));

        let doc = builder.build_single("Fit", &lines, "id").unwrap();
        let texts: Vec<&str> = paragraphs(&doc).iter().map(|p| p.text.as_str()).collect();
        assert!(texts.contains(&"✓ Strong Rust"));
        assert!(texts.contains(&"Missing\u{0007} tests"));
        assert!(texts.contains(&"Closing words"));

        let fallback = paragraphs(&doc)
            .into_iter()
            .find(|p| p.text.starts_with("Missing"))
            .unwrap();
        assert_eq!(fallback.style.name, "body");
        assert_eq!(builder.stats().fallback_lines, 1);
        assert_eq!(builder.stats().line_count(), 3);
    }

    #[test]
    fn test_empty_content() {
        let opts = options();
        let mut builder = DocumentBuilder::new(&opts, opts.timestamp());
        let err = builder.build_single("Fit", &classify("\n  \n"), "id").unwrap_err();
        assert!(matches!(err, Error::EmptyContent(_)));

        let err = builder.build_combined(&[], "id").unwrap_err();
        assert!(matches!(err, Error::EmptyContent(_)));
    }

    #[test]
    fn test_combined_structure() {
        let opts = options();
        let mut builder = DocumentBuilder::new(&opts, opts.timestamp());
        let sections = vec![
            ("Percentage Match".to_string(), classify("Match: 80%")),
            ("Skill Gaps".to_string(), classify("#### Gaps\nMissing Docker")),
            ("Cold Email".to_string(), classify("Dear hiring manager")),
        ];
        let doc = builder.build_combined(&sections, "ATS_Complete").unwrap();

        let text = doc.plain_text();
        assert!(text.contains("Complete Analysis Report"));
        assert!(text.contains("Total Analyses:\t3"));
        assert!(text.contains("Report Type:\tComprehensive Assessment"));
        assert!(text.contains("1.\tPercentage Match\tPage 2"));
        assert!(text.contains("3.\tCold Email\tPage 4"));
        assert!(text.contains("📊 End of Report"));
        assert!(text.contains("For questions or support, contact our AI Career Assistant"));

        let headings: Vec<&str> = paragraphs(&doc)
            .iter()
            .map(|p| p.text.as_str())
            .filter(|t| t.starts_with("Analysis "))
            .collect();
        assert_eq!(
            headings,
            vec![
                "Analysis 1: Percentage Match",
                "Analysis 2: Skill Gaps",
                "Analysis 3: Cold Email"
            ]
        );

        // One break after the table of contents, then one between sections
        let breaks = doc.blocks.iter().filter(|b| b.is_page_break()).count();
        assert_eq!(breaks, 3);
        assert_eq!(builder.stats().section_count, 3);
    }
}
