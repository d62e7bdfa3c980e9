//! Integration tests for combined reports.

use ats_report::{render_combined, CombinedReport, Error, RenderOptions};
use chrono::{FixedOffset, TimeZone};
use lopdf::Document;

fn options() -> RenderOptions {
    let ts = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 17, 9, 15, 0)
        .unwrap();
    RenderOptions::new()
        .with_timestamp(ts)
        .with_compression(false)
}

fn report() -> CombinedReport {
    CombinedReport::new()
        .with_section(
            "Percentage Match",
            "#### Match Overview\nMatch: 82%\nStrong backend experience",
        )
        .with_section("Skill Gaps", "**Gaps**\nMissing Terraform\nLacks team leadership")
        .with_section("Cold Email", "Dear hiring manager,\nI am excited to apply.")
}

fn position(haystack: &[u8], needle: &str) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w == needle.as_bytes())
}

#[test]
fn test_combined_filename() {
    let rendered = render_combined(&report(), &options()).unwrap();
    assert_eq!(
        rendered.filename,
        "ATS_Complete_Analysis_Report_20261017_091500.pdf"
    );
}

#[test]
fn test_sections_in_insertion_order() {
    let rendered = render_combined(&report(), &options()).unwrap();
    let bytes = &rendered.bytes;

    let first = position(bytes, "(Analysis 1: Percentage Match)").unwrap();
    let second = position(bytes, "(Analysis 2: Skill Gaps)").unwrap();
    let third = position(bytes, "(Analysis 3: Cold Email)").unwrap();
    assert!(first < second && second < third);
    assert_eq!(rendered.stats.section_count, 3);
}

#[test]
fn test_each_section_starts_a_page() {
    let rendered = render_combined(&report(), &options()).unwrap();
    let doc = Document::load_mem(&rendered.bytes).unwrap();
    let pages = doc.get_pages().len() as u32;

    // Cover and contents, then one page per short section
    assert_eq!(pages, 4);
    assert_eq!(rendered.stats.page_count, pages);
}

#[test]
fn test_cover_and_contents() {
    let rendered = render_combined(&report(), &options()).unwrap();
    let pdf = String::from_utf8_lossy(&rendered.bytes);

    assert!(pdf.contains("(Complete Analysis Report)"));
    assert!(pdf.contains("(Total Analyses:)"));
    assert!(pdf.contains("(Comprehensive Assessment)"));
    assert!(pdf.contains("(09:15:00)"));
    assert!(pdf.contains("( Table of Contents)"));
    assert!(pdf.contains("(Page 2)"));
    assert!(pdf.contains("(Page 4)"));
    assert!(pdf.contains("( End of Report)"));
    assert!(pdf.contains("(Report ID: ATS_Complete_Analysis_Report_20261017_091500)"));
}

#[test]
fn test_sections_classified_independently() {
    let rendered = render_combined(&report(), &options()).unwrap();
    let stats = &rendered.stats;

    assert_eq!(stats.title_count, 1);
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.success_count, 1);
    assert_eq!(stats.warning_count, 2);
    assert_eq!(stats.highlight_count, 1);
    assert_eq!(stats.body_count, 2);
}

#[test]
fn test_custom_combined_title() {
    let options = options()
        .with_combined_prefix("Career")
        .with_combined_title("Quarterly Review");
    let rendered = render_combined(&report(), &options).unwrap();

    assert_eq!(
        rendered.filename,
        "Career_Quarterly_Review_20261017_091500.pdf"
    );
    assert!(String::from_utf8_lossy(&rendered.bytes).contains("(Quarterly Review)"));
}

#[test]
fn test_no_sections_is_an_error() {
    let err = render_combined(&CombinedReport::new(), &options()).unwrap_err();
    assert!(matches!(err, Error::EmptyContent(_)));
}

#[test]
fn test_empty_section_still_rendered() {
    let report = CombinedReport::new()
        .with_section("Skill Gaps", "Missing Go")
        .with_section("Notes", "");
    let rendered = render_combined(&report, &options()).unwrap();

    assert!(position(&rendered.bytes, "(Analysis 2: Notes)").is_some());
    assert_eq!(rendered.stats.spacer_count, 1);
}
