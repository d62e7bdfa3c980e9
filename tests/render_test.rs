//! Integration tests for single-analysis rendering.

use ats_report::{
    classify, render_response, render_single, ClassifiedLine, Error, LineKind, RenderOptions,
};
use chrono::{DateTime, FixedOffset, TimeZone};
use lopdf::Document;

const ANALYSIS: &str = "\
#### Percentage Match
Match: 78%

**Strengths**
Strong Python and SQL background
- Built data pipelines processing 2M events/day
**Gaps**
Missing Kubernetes experience
We recommend adding a cloud certification
The profile is a good fit for mid-level data engineering roles... mostly.";

fn ts(hour: u32, minute: u32, second: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 17, hour, minute, second)
        .unwrap()
}

fn plain_options() -> RenderOptions {
    RenderOptions::new()
        .with_timestamp(ts(14, 30, 5))
        .with_compression(false)
}

fn raw(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_string()
}

#[test]
fn test_produces_loadable_pdf() {
    let report = render_response("Percentage Match", ANALYSIS, &RenderOptions::default()).unwrap();

    assert!(report.bytes.starts_with(b"%PDF-"));
    let doc = Document::load_mem(&report.bytes).unwrap();
    assert_eq!(doc.get_pages().len() as u32, report.stats.page_count);
    assert!(report.stats.page_count >= 1);
}

#[test]
fn test_filename_contract() {
    let report = render_response("Cold Email: Round 2!!", ANALYSIS, &plain_options()).unwrap();
    assert_eq!(
        report.filename,
        "ATS_Analysis_Cold_Email_Round_2_20261017_143005.pdf"
    );
    assert_eq!(report.report_id, "ATS_Analysis_Cold_Email_Round_2_20261017_143005");
}

#[test]
fn test_deterministic_with_pinned_timestamp() {
    let options = RenderOptions::new().with_timestamp(ts(9, 0, 0));
    let first = render_response("Skill Gaps", ANALYSIS, &options).unwrap();
    let second = render_response("Skill Gaps", ANALYSIS, &options).unwrap();

    assert_eq!(first.bytes, second.bytes);
    assert_eq!(first.filename, second.filename);
}

#[test]
fn test_timestamp_only_changes_time_fields() {
    let early = render_response("Skill Gaps", ANALYSIS, &plain_options()).unwrap();
    let late = render_response(
        "Skill Gaps",
        ANALYSIS,
        &plain_options().with_timestamp(ts(16, 45, 59)),
    )
    .unwrap();

    assert_ne!(early.bytes, late.bytes);
    assert_eq!(early.stats, late.stats);
    assert!(early.filename.starts_with("ATS_Analysis_Skill_Gaps_20261017_"));
    assert!(late.filename.ends_with("_20261017_164559.pdf"));
    assert!(raw(&early.bytes).contains("(14:30)"));
    assert!(raw(&late.bytes).contains("(16:45)"));
}

#[test]
fn test_header_footer_and_content_drawn() {
    let report = render_response("Skill Gaps", ANALYSIS, &plain_options()).unwrap();
    let pdf = raw(&report.bytes);

    assert!(pdf.contains("( ATS Resume Expert)"));
    assert!(pdf.contains("(October 17, 2026)"));
    assert!(pdf.contains("(Generated by ATS Resume Expert)"));
    assert!(pdf.contains("(Report ID: ATS_Analysis_Skill_Gaps_20261017_143005)"));
    assert!(pdf.contains("( Missing Kubernetes experience)"));
    assert!(pdf.contains("( Strong Python and SQL background)"));
    assert!(pdf.contains("/ZapfDingbats"));
    assert!(pdf.contains("(Page 1 of 1)"));
}

#[test]
fn test_custom_product_name() {
    let options = plain_options()
        .with_product_name("Resume Radar")
        .with_tagline("Sharper applications");
    let report = render_response("Fit", "Plain body text", &options).unwrap();
    let pdf = raw(&report.bytes);

    assert!(pdf.contains("(Generated by Resume Radar)"));
    assert!(pdf.contains("(Sharper applications)"));
}

#[test]
fn test_stats_count_kinds() {
    let report = render_response("Fit", ANALYSIS, &plain_options()).unwrap();
    let stats = &report.stats;

    assert_eq!(stats.title_count, 1);
    assert_eq!(stats.heading_count, 2);
    assert_eq!(stats.success_count, 1);
    assert_eq!(stats.warning_count, 1);
    assert_eq!(stats.highlight_count, 2);
    assert_eq!(stats.quote_count, 1);
    assert_eq!(stats.spacer_count, 1);
    assert_eq!(stats.body_count, 1);
    assert_eq!(stats.fallback_lines, 0);
    assert_eq!(stats.section_count, 1);
}

#[test]
fn test_styling_failure_keeps_other_lines() {
    let text = "Alpha line\nBeta\u{0007}line\nGamma line";
    let report = render_response("Fault", text, &plain_options()).unwrap();
    let pdf = raw(&report.bytes);

    assert_eq!(report.stats.fallback_lines, 1);
    assert!(pdf.contains("(Alpha line)"));
    assert!(pdf.contains("(Betaline)"));
    assert!(pdf.contains("(Gamma line)"));
}

#[test]
fn test_whole_document_failures() {
    let err = render_response("!!!", ANALYSIS, &plain_options()).unwrap_err();
    assert!(matches!(err, Error::EmptyTitle(_)));

    let err = render_response("Fit", "\n \n\t", &plain_options()).unwrap_err();
    assert!(matches!(err, Error::EmptyContent(_)));

    let err = render_single("Fit", &[], &plain_options()).unwrap_err();
    assert!(matches!(err, Error::EmptyContent(_)));
}

#[test]
fn test_render_single_with_prepared_lines() {
    let lines = vec![
        ClassifiedLine::new(LineKind::Title, "Hand-built"),
        ClassifiedLine::new(LineKind::Body, "Rendered without the classifier"),
    ];
    let report = render_single("Manual", &lines, &plain_options()).unwrap();
    let pdf = raw(&report.bytes);

    assert!(pdf.contains("(Hand-built)"));
    assert!(pdf.contains("(Rendered without the classifier)"));
}

#[test]
fn test_long_analysis_paginates() {
    let text: String = (1..=120)
        .map(|i| format!("Observation {} about the candidate's project history.\n", i))
        .collect();
    let lines = classify(&text);
    let report = render_single("Long", &lines, &plain_options()).unwrap();

    assert!(report.stats.page_count > 1);
    let doc = Document::load_mem(&report.bytes).unwrap();
    assert_eq!(doc.get_pages().len() as u32, report.stats.page_count);

    let last = format!(
        "(Page {} of {})",
        report.stats.page_count, report.stats.page_count
    );
    assert!(raw(&report.bytes).contains(&last));
}

#[test]
fn test_page_numbers_can_be_disabled() {
    let report = render_response(
        "Fit",
        "Plain body text",
        &plain_options().with_page_numbers(false),
    )
    .unwrap();
    assert!(!raw(&report.bytes).contains("(Page 1 of 1)"));
}

#[test]
fn test_title_too_long_for_a_page_is_reported() {
    let title = "Very long analysis title ".repeat(400);
    let err = render_response(&title, ANALYSIS, &plain_options()).unwrap_err();
    assert!(matches!(err, Error::Layout(_)));
}

#[test]
fn test_body_spacing_after_punctuation() {
    let report = render_response("Fit", "Skills:Python and Go", &plain_options()).unwrap();
    assert!(raw(&report.bytes).contains("(Skills: Python and Go)"));
}
