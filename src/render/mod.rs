//! Rendering pipeline: classified lines to PDF bytes.
//!
//! Each render call is self-contained: it reads the clock once (or uses the
//! pinned timestamp), builds a fresh [`AnalysisDocument`], lays it out,
//! serializes it and returns a [`RenderedReport`].
//!
//! [`AnalysisDocument`]: crate::model::AnalysisDocument

mod builder;
pub mod filename;
mod json;
pub mod layout;
pub mod metrics;
mod options;
mod pdf;
mod result;
mod typography;

pub use builder::{DocumentBuilder, Placement, SPACER_HEIGHT};
pub use filename::{report_filename, report_id, sanitize_title};
pub use json::{to_json, JsonFormat};
pub use layout::{DrawOp, LaidOutPage, LayoutEngine};
pub use options::{
    RenderOptions, DEFAULT_COMBINED_PREFIX, DEFAULT_COMBINED_TITLE, DEFAULT_PREFIX,
    DEFAULT_PRODUCT_NAME, DEFAULT_TAGLINE,
};
pub use pdf::PdfWriter;
pub use result::{RenderStats, RenderedReport};
pub use typography::{TypographyOptions, TypographyPipeline, TypographyPreset};

use crate::classify::{classify, ClassifiedLine};
use crate::error::Result;
use crate::model::{AnalysisDocument, CombinedReport};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Render one analysis from already classified lines.
pub fn render_single(
    title: &str,
    lines: &[ClassifiedLine],
    options: &RenderOptions,
) -> Result<RenderedReport> {
    let timestamp = options.timestamp();
    let id = report_id(&options.filename_prefix, title, &timestamp)?;

    let mut builder = DocumentBuilder::new(options, timestamp);
    let doc = builder.build_single(title, lines, &id)?;
    finish(doc, id, builder.into_stats(), options)
}

/// Classify a raw analysis response and render it.
pub fn render_response(title: &str, text: &str, options: &RenderOptions) -> Result<RenderedReport> {
    let lines = classify(text);
    log::debug!("classified {:?}: {} lines", title, lines.len());
    render_single(title, &lines, options)
}

/// Render every section of a combined report into one PDF.
///
/// Sections keep their insertion order; each is classified independently.
pub fn render_combined(report: &CombinedReport, options: &RenderOptions) -> Result<RenderedReport> {
    let timestamp = options.timestamp();
    let id = report_id(&options.combined_prefix, &options.combined_title, &timestamp)?;

    let sections: Vec<(String, Vec<ClassifiedLine>)> = report
        .sections
        .iter()
        .map(|s| (s.title.clone(), classify(&s.text)))
        .collect();

    let mut builder = DocumentBuilder::new(options, timestamp);
    let doc = builder.build_combined(&sections, &id)?;
    finish(doc, id, builder.into_stats(), options)
}

/// Render many independent `(title, text)` analyses in parallel.
///
/// Results come back in input order; one failure does not affect the rest.
#[cfg(feature = "parallel")]
pub fn render_batch<T, R>(items: &[(T, R)], options: &RenderOptions) -> Vec<Result<RenderedReport>>
where
    T: AsRef<str> + Sync,
    R: AsRef<str> + Sync,
{
    items
        .par_iter()
        .map(|(title, text)| render_response(title.as_ref(), text.as_ref(), options))
        .collect()
}

/// Render many independent `(title, text)` analyses one after another.
#[cfg(not(feature = "parallel"))]
pub fn render_batch<T, R>(items: &[(T, R)], options: &RenderOptions) -> Vec<Result<RenderedReport>>
where
    T: AsRef<str>,
    R: AsRef<str>,
{
    items
        .iter()
        .map(|(title, text)| render_response(title.as_ref(), text.as_ref(), options))
        .collect()
}

/// Lay out and serialize a built document.
fn finish(
    doc: AnalysisDocument,
    report_id: String,
    mut stats: RenderStats,
    options: &RenderOptions,
) -> Result<RenderedReport> {
    let pages = LayoutEngine::new(options.page_size, options.margins)?
        .with_page_numbers(options.page_numbers)
        .layout(&doc.blocks)?;

    let bytes = PdfWriter::new(options.page_size)
        .with_compression(options.compress)
        .write(&doc.metadata, &pages)?;

    stats.page_count = pages.len() as u32;
    if stats.fallback_lines > 0 {
        log::warn!(
            "{}: {} line(s) rendered without styling",
            report_id,
            stats.fallback_lines
        );
    }

    Ok(RenderedReport {
        filename: format!("{}.pdf", report_id),
        report_id,
        bytes,
        stats,
    })
}
