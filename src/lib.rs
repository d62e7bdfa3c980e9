//! # ats-report
//!
//! Turn AI-generated ATS resume analyses into styled PDF reports.
//!
//! The pipeline has two stages: a line classifier that tags each line of a
//! response (title, heading, success, warning, metric, quote, body, spacer),
//! and a document builder that styles the tagged lines, lays them out on A4
//! pages and writes a PDF together with a deterministic file name.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ats_report::{render_response, RenderOptions};
//!
//! fn main() -> ats_report::Result<()> {
//!     let text = "#### Summary\nMatch: 87%\nStrong Python background\nMissing Kubernetes";
//!     let report = render_response("Percentage Match", text, &RenderOptions::default())?;
//!
//!     let path = report.write_to_dir("reports")?;
//!     println!("{} ({} pages)", path.display(), report.stats.page_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Rule-table classifier**: ordered, first-match-wins heuristics
//! - **Combined reports**: cover page, table of contents, one section per analysis
//! - **Deterministic output**: pin the timestamp to get identical bytes
//! - **Parallel batches**: `render_batch` uses Rayon (feature `parallel`)
//! - **No external fonts**: standard PDF Type1 fonts with symbol fallbacks

pub mod classify;
pub mod error;
pub mod model;
pub mod render;

pub use classify::{classify, classify_line, ClassifiedLine, Classifier, LineKind};
pub use error::{Error, Result};
pub use model::{AnalysisDocument, Block, CombinedReport, Paragraph, ParagraphStyle, Section};
pub use render::{
    render_batch, render_combined, render_response, render_single, JsonFormat, RenderOptions,
    RenderStats, RenderedReport, TypographyOptions, TypographyPreset,
};

use std::fs;
use std::path::Path;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Classify the contents of a text file.
///
/// # Example
///
/// ```no_run
/// use ats_report::classify_file;
///
/// for line in classify_file("analysis.txt").unwrap() {
///     println!("{:>10}  {}", line.kind, line.text);
/// }
/// ```
pub fn classify_file<P: AsRef<Path>>(path: P) -> Result<Vec<ClassifiedLine>> {
    let text = fs::read_to_string(path)?;
    Ok(classify(&text))
}

/// Render a text file as a single-analysis report.
///
/// The title defaults to the file stem.
///
/// # Example
///
/// ```no_run
/// use ats_report::{render_file, RenderOptions};
///
/// let report = render_file("skill_gaps.txt", None, &RenderOptions::default()).unwrap();
/// std::fs::write(&report.filename, &report.bytes).unwrap();
/// ```
pub fn render_file<P: AsRef<Path>>(
    path: P,
    title: Option<&str>,
    options: &RenderOptions,
) -> Result<RenderedReport> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let title = match title {
        Some(t) => t.to_string(),
        None => title_from_path(path),
    };
    render_response(&title, &text, options)
}

/// Render several text files as one combined report, in the given order.
///
/// Section titles are the file stems.
pub fn render_files<P: AsRef<Path>>(paths: &[P], options: &RenderOptions) -> Result<RenderedReport> {
    let mut report = CombinedReport::new();
    for path in paths {
        let path = path.as_ref();
        report.add_section(title_from_path(path), fs::read_to_string(path)?);
    }
    render_combined(&report, options)
}

/// Convert classified lines to JSON.
///
/// # Example
///
/// ```
/// use ats_report::{classify, to_json, JsonFormat};
///
/// let json = to_json(&classify("Missing Docker"), JsonFormat::Compact).unwrap();
/// assert_eq!(json, r#"[{"kind":"warning","text":"Missing Docker"}]"#);
/// ```
pub fn to_json(lines: &[ClassifiedLine], format: JsonFormat) -> Result<String> {
    render::to_json(lines, format)
}

/// Human-readable title from a file stem: `skill_gaps` becomes `Skill Gaps`.
pub fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    stem.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
