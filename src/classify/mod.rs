//! Content classification for AI analysis text.
//!
//! The classifier splits a response into lines and tags each one with a
//! [`LineKind`] using an ordered cascade of heuristic rules (see [`rules`]).
//! It never fails: anything no rule recognizes is plain body text.
//!
//! # Example
//!
//! ```
//! use ats_report::classify::{classify, LineKind};
//!
//! let lines = classify("#### Summary\nMatch: 87%\n\nMissing Python experience");
//! assert_eq!(lines.len(), 4);
//! assert_eq!(lines[0].kind, LineKind::Title);
//! assert_eq!(lines[0].text, "Summary");
//! assert_eq!(lines[1].kind, LineKind::Highlight);
//! assert_eq!(lines[2].kind, LineKind::Spacer);
//! assert_eq!(lines[3].kind, LineKind::Warning);
//! ```

mod line;
pub mod rules;

pub use line::{ClassifiedLine, LineKind};
pub use rules::{Matcher, Rule, Transform, METRIC_MARKER, SUCCESS_KEYWORDS, WARNING_KEYWORDS};

use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Classify every line of `text` with the default English rules.
pub fn classify(text: &str) -> Vec<ClassifiedLine> {
    default_classifier().classify(text)
}

/// Classify a single line with the default English rules.
pub fn classify_line(line: &str) -> ClassifiedLine {
    default_classifier().classify_line(line)
}

fn default_classifier() -> &'static Classifier {
    static DEFAULT: OnceLock<Classifier> = OnceLock::new();
    DEFAULT.get_or_init(Classifier::new)
}

/// Line classifier holding a compiled rule table.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Create a classifier with the English keyword sets.
    pub fn new() -> Self {
        Self::with_keywords(SUCCESS_KEYWORDS, WARNING_KEYWORDS)
    }

    /// Create a classifier with custom success and warning keyword sets.
    ///
    /// Keywords are matched as case-insensitive substrings. Everything else
    /// (heading markers, metrics, list and quote detection) is unchanged.
    pub fn with_keywords<S, W>(success: &[S], warning: &[W]) -> Self
    where
        S: AsRef<str>,
        W: AsRef<str>,
    {
        Self {
            rules: rules::standard_rules(success, warning),
        }
    }

    /// Classify every line of `text`.
    ///
    /// The output has exactly one entry per `\n`-separated input line.
    pub fn classify(&self, text: &str) -> Vec<ClassifiedLine> {
        let normalized: String = text.nfc().collect();
        normalized
            .split('\n')
            .map(|line| self.classify_line(line))
            .collect()
    }

    /// Classify one line. Surrounding whitespace is ignored.
    pub fn classify_line(&self, line: &str) -> ClassifiedLine {
        let line = line.trim();
        let lower = line.to_lowercase();

        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(line, &lower))
            .unwrap_or_else(|| ClassifiedLine::new(LineKind::Body, line))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_markers() {
        let line = classify_line("#### Summary");
        assert_eq!(line.kind, LineKind::Title);
        assert_eq!(line.text, "Summary");

        let line = classify_line("***Final Verdict***");
        assert_eq!(line.kind, LineKind::Title);
        assert_eq!(line.text, "Final Verdict");
    }

    #[test]
    fn test_heading_levels() {
        let line = classify_line("**Key Finding**");
        assert_eq!(line.kind, LineKind::Heading1);
        assert_eq!(line.text, "Key Finding");

        let line = classify_line("### ATS Analysis Results");
        assert_eq!(line.kind, LineKind::Heading1);
        assert_eq!(line.text, "ATS Analysis Results");

        let line = classify_line("## Education");
        assert_eq!(line.kind, LineKind::Heading2);
        assert_eq!(line.text, "Education");

        let line = classify_line("*Side note*");
        assert_eq!(line.kind, LineKind::Heading2);
        assert_eq!(line.text, "Side note");
    }

    #[test]
    fn test_spacer() {
        let line = classify_line("   \t ");
        assert_eq!(line.kind, LineKind::Spacer);
        assert_eq!(line.text, "");
    }

    #[test]
    fn test_keywords_precede_metrics() {
        let line = classify_line("Strong overlap: 92%");
        assert_eq!(line.kind, LineKind::Success);
        assert_eq!(line.text, "Strong overlap: 92%");

        let line = classify_line("Missing Python experience");
        assert_eq!(line.kind, LineKind::Warning);
    }

    #[test]
    fn test_success_precedes_warning() {
        let line = classify_line("Excellent projects, but lacks leadership");
        assert_eq!(line.kind, LineKind::Success);
    }

    #[test]
    fn test_metric_prefix() {
        let line = classify_line("Match: 87%");
        assert_eq!(line.kind, LineKind::Highlight);
        assert!(line.text.starts_with(METRIC_MARKER));
        assert!(line.text.contains("87%"));
    }

    #[test]
    fn test_list_items() {
        for input in ["• Python", "- SQL", "→ Docker", "▸ Rust", "12. Kubernetes"] {
            let line = classify_line(input);
            assert_eq!(line.kind, LineKind::Highlight, "input: {}", input);
            assert_eq!(line.text, input);
        }
    }

    #[test]
    fn test_bullet_star_is_highlight_not_heading() {
        let line = classify_line("* Python and Go");
        assert_eq!(line.kind, LineKind::Highlight);
    }

    #[test]
    fn test_quotes_and_recommendations() {
        assert_eq!(classify_line("\"Solid candidate.\"").kind, LineKind::Quote);
        assert_eq!(classify_line("“Solid candidate.”").kind, LineKind::Quote);
        assert_eq!(
            classify_line("We Recommend a phone screen").kind,
            LineKind::Quote
        );
    }

    #[test]
    fn test_body_fallback() {
        let line = classify_line("  The candidate worked at Acme for three years.  ");
        assert_eq!(line.kind, LineKind::Body);
        assert_eq!(line.text, "The candidate worked at Acme for three years.");
    }

    #[test]
    fn test_length_preserving() {
        let text = "a\n\nb\r\n#### c\n";
        let lines = classify(text);
        assert_eq!(lines.len(), text.split('\n').count());
        assert_eq!(lines[0].text, "a");
        assert_eq!(lines[2].text, "b");
        assert_eq!(lines[3].text, "c");
        assert!(lines[4].is_spacer());
    }

    #[test]
    fn test_nfc_normalization() {
        let decomposed = "Cafe\u{0301} experience";
        let line = classify(decomposed).remove(0);
        assert_eq!(line.text, "Café experience");
    }

    #[test]
    fn test_custom_keywords() {
        let classifier = Classifier::with_keywords(&["sehr gut"], &["fehlt"]);
        assert_eq!(
            classifier.classify_line("Python: sehr gut").kind,
            LineKind::Success
        );
        assert_eq!(
            classifier.classify_line("Erfahrung fehlt").kind,
            LineKind::Warning
        );
        // English keywords are no longer recognized
        assert_eq!(
            classifier.classify_line("Excellent fit").kind,
            LineKind::Body
        );
    }
}
