//! Ordered classification rules.
//!
//! Each rule pairs a set of matchers (any one may fire) with the kind it
//! assigns and the text transform it applies. Rules are evaluated in table
//! order and the first hit wins, so a line that both names a strength and
//! quotes a percentage is a `success`, never a `highlight`.

use regex::Regex;

use super::{ClassifiedLine, LineKind};

/// Positive-sentiment keywords (English only, matched case-insensitively).
pub const SUCCESS_KEYWORDS: &[&str] = &[
    "excellent",
    "strong",
    "good match",
    "well-suited",
    "perfect",
    "outstanding",
];

/// Deficiency keywords (English only, matched case-insensitively).
pub const WARNING_KEYWORDS: &[&str] = &[
    "missing",
    "lacks",
    "needs improvement",
    "consider adding",
    "weak",
    "insufficient",
];

/// Marker prepended to lines that carry a percentage figure.
pub const METRIC_MARKER: &str = "📊";

/// Leading glyphs that mark a list item.
pub const LIST_MARKERS: &[char] = &['•', '-', '*', '→', '▸'];

/// Leading glyphs that open a quotation.
pub const QUOTE_MARKERS: &[char] = &['"', '“'];

/// A single line predicate.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Whitespace-only line
    Blank,
    /// Line starts with the token
    StartsWith(&'static str),
    /// Line starts and ends with the token
    Wrapped(&'static str),
    /// Line starts and ends with the char, but does not start with it twice
    WrappedOnce(char),
    /// Line starts with any of the chars
    LeadingChar(&'static [char]),
    /// Lower-cased line contains any of the (lower-case) keywords
    ContainsAny(Vec<String>),
    /// Regex matches anywhere in the line
    Pattern(Regex),
}

impl Matcher {
    /// Build a keyword matcher, lower-casing the keywords once.
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Matcher::ContainsAny(
            keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }

    /// Test the matcher against a trimmed line and its lower-case form.
    pub fn matches(&self, line: &str, lower: &str) -> bool {
        match self {
            Matcher::Blank => line.is_empty(),
            Matcher::StartsWith(token) => line.starts_with(token),
            Matcher::Wrapped(token) => line.starts_with(token) && line.ends_with(token),
            Matcher::WrappedOnce(c) => {
                let mut doubled = String::with_capacity(2);
                doubled.push(*c);
                doubled.push(*c);
                line.starts_with(*c) && line.ends_with(*c) && !line.starts_with(&doubled)
            }
            Matcher::LeadingChar(chars) => line.starts_with(*chars),
            Matcher::ContainsAny(keywords) => keywords.iter().any(|k| lower.contains(k.as_str())),
            Matcher::Pattern(re) => re.is_match(line),
        }
    }
}

/// How a matching rule rewrites the line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Keep the trimmed line as-is
    Keep,
    /// Drop the text entirely
    Clear,
    /// Remove every `#` and `*`, then trim
    StripMarkers,
    /// Prepend the marker and a space
    Prefix(&'static str),
}

impl Transform {
    /// Apply the transform to a trimmed line.
    pub fn apply(&self, line: &str) -> String {
        match self {
            Transform::Keep => line.to_string(),
            Transform::Clear => String::new(),
            Transform::StripMarkers => line
                .chars()
                .filter(|c| *c != '#' && *c != '*')
                .collect::<String>()
                .trim()
                .to_string(),
            Transform::Prefix(marker) => format!("{} {}", marker, line),
        }
    }
}

/// One entry of the classification cascade.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Kind assigned when the rule fires
    pub kind: LineKind,

    /// The rule fires if any matcher matches
    pub matchers: Vec<Matcher>,

    /// Text rewrite applied on a hit
    pub transform: Transform,
}

impl Rule {
    /// Create a new rule.
    pub fn new(kind: LineKind, matchers: Vec<Matcher>, transform: Transform) -> Self {
        Self {
            kind,
            matchers,
            transform,
        }
    }

    /// Evaluate the rule against a trimmed line.
    pub fn evaluate(&self, line: &str, lower: &str) -> Option<ClassifiedLine> {
        if self.matchers.iter().any(|m| m.matches(line, lower)) {
            Some(ClassifiedLine::new(self.kind, self.transform.apply(line)))
        } else {
            None
        }
    }
}

/// Build the standard rule table with the given keyword sets.
pub fn standard_rules<S, W>(success: &[S], warning: &[W]) -> Vec<Rule>
where
    S: AsRef<str>,
    W: AsRef<str>,
{
    let percentage = Regex::new(r"\d+%").unwrap();
    let ordinal = Regex::new(r"^\d+\.").unwrap();

    vec![
        Rule::new(LineKind::Spacer, vec![Matcher::Blank], Transform::Clear),
        Rule::new(
            LineKind::Title,
            vec![Matcher::StartsWith("####"), Matcher::Wrapped("***")],
            Transform::StripMarkers,
        ),
        Rule::new(
            LineKind::Heading1,
            vec![Matcher::StartsWith("###"), Matcher::Wrapped("**")],
            Transform::StripMarkers,
        ),
        Rule::new(
            LineKind::Heading2,
            vec![Matcher::StartsWith("##"), Matcher::WrappedOnce('*')],
            Transform::StripMarkers,
        ),
        Rule::new(
            LineKind::Success,
            vec![Matcher::keywords(success)],
            Transform::Keep,
        ),
        Rule::new(
            LineKind::Warning,
            vec![Matcher::keywords(warning)],
            Transform::Keep,
        ),
        Rule::new(
            LineKind::Highlight,
            vec![Matcher::Pattern(percentage)],
            Transform::Prefix(METRIC_MARKER),
        ),
        Rule::new(
            LineKind::Highlight,
            vec![Matcher::LeadingChar(LIST_MARKERS), Matcher::Pattern(ordinal)],
            Transform::Keep,
        ),
        Rule::new(
            LineKind::Quote,
            vec![
                Matcher::LeadingChar(QUOTE_MARKERS),
                Matcher::keywords(["recommend"]),
            ],
            Transform::Keep,
        ),
    ]
}
