//! Typography pipeline for body text.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Typography preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypographyPreset {
    /// Leave text untouched
    Off,
    /// Smart quotes, dashes, ellipses and whitespace cleanup
    #[default]
    Standard,
}

/// Options for body-text typography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Replace straight quotes and apostrophes with curly ones
    pub smart_quotes: bool,

    /// Replace `--` with an em dash
    pub em_dashes: bool,

    /// Replace `...` with an ellipsis
    pub ellipses: bool,

    /// Collapse whitespace runs and fix spacing around punctuation
    pub normalize_whitespace: bool,
}

impl TypographyOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: TypographyPreset) -> Self {
        match preset {
            TypographyPreset::Off => Self::off(),
            TypographyPreset::Standard => Self::standard(),
        }
    }

    /// No typography changes.
    pub fn off() -> Self {
        Self {
            normalize_unicode: false,
            smart_quotes: false,
            em_dashes: false,
            ellipses: false,
            normalize_whitespace: false,
        }
    }

    /// Standard typography options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            smart_quotes: true,
            em_dashes: true,
            ellipses: true,
            normalize_whitespace: true,
        }
    }
}

impl Default for TypographyOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Body-text typography pipeline.
pub struct TypographyPipeline {
    options: TypographyOptions,
    space_before_punct: Regex,
    whitespace_run: Regex,
}

impl TypographyPipeline {
    /// Create a new pipeline with the given options.
    pub fn new(options: TypographyOptions) -> Self {
        Self {
            options,
            space_before_punct: Regex::new(r"\s+([,.!?;:])").unwrap(),
            whitespace_run: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: TypographyPreset) -> Self {
        Self::new(TypographyOptions::from_preset(preset))
    }

    /// The options this pipeline applies.
    pub fn options(&self) -> &TypographyOptions {
        &self.options
    }

    /// Process text through the pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.ellipses {
            result = result.replace("...", "…");
        }

        // Longest first so `---` does not leave a stray hyphen
        if self.options.em_dashes {
            result = result.replace("---", "—").replace("--", "—");
        }

        if self.options.smart_quotes {
            result = smart_quotes(&result);
        }

        if self.options.normalize_whitespace {
            result = self.normalize_whitespace(&result);
        }

        result
    }

    fn normalize_whitespace(&self, text: &str) -> String {
        let text = self.space_before_punct.replace_all(text, "$1");
        let text = space_after_punct(&text);
        let text = self.whitespace_run.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Default for TypographyPipeline {
    fn default() -> Self {
        Self::new(TypographyOptions::default())
    }
}

/// Insert a space where a sentence mark runs straight into a letter.
///
/// Single-letter initials (`U.S.`, `e.g.`) are kept together; digits after
/// a mark (`3.8`, `10:30`) never get a space.
fn space_after_punct(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if !SENTENCE_MARKS.contains(&c) {
            continue;
        }
        let next_is_letter = chars.get(i + 1).is_some_and(|n| n.is_alphabetic());
        if next_is_letter && !(c == '.' && follows_initial(&chars[..i])) {
            out.push(' ');
        }
    }

    out
}

const SENTENCE_MARKS: &[char] = &[',', '.', '!', '?', ';', ':'];

/// Check if `before` ends with a lone letter, as in the `S` of `U.S`.
fn follows_initial(before: &[char]) -> bool {
    match before {
        [] => false,
        [.., prev, last] => last.is_alphabetic() && (prev.is_whitespace() || *prev == '.'),
        [last] => last.is_alphabetic(),
    }
}

/// Replace straight quotes with curly ones based on the preceding character.
fn smart_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for c in text.chars() {
        let replaced = match c {
            '"' => {
                if opens_quote(prev) {
                    '“'
                } else {
                    '”'
                }
            }
            '\'' => match prev {
                Some(p) if p.is_alphanumeric() => '’',
                _ if opens_quote(prev) => '‘',
                _ => '’',
            },
            other => other,
        };
        out.push(replaced);
        prev = Some(replaced);
    }

    out
}

fn opens_quote(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(p) => p.is_whitespace() || matches!(p, '(' | '[' | '{' | '“' | '‘' | '—' | '–' | '-'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_double_quotes() {
        let pipeline = TypographyPipeline::default();
        let result = pipeline.process("He said \"great fit\" twice.");
        assert_eq!(result, "He said “great fit” twice.");
    }

    #[test]
    fn test_apostrophes() {
        let pipeline = TypographyPipeline::default();
        assert_eq!(
            pipeline.process("The candidate's 'core' skills"),
            "The candidate’s ‘core’ skills"
        );
    }

    #[test]
    fn test_dashes_and_ellipsis() {
        let pipeline = TypographyPipeline::default();
        assert_eq!(
            pipeline.process("Python--and Go... maybe"),
            "Python—and Go… maybe"
        );
        assert_eq!(pipeline.process("a---b"), "a—b");
    }

    #[test]
    fn test_whitespace_normalization() {
        let pipeline = TypographyPipeline::default();
        assert_eq!(
            pipeline.process("  Solid   résumé ,  clear   layout .  "),
            "Solid résumé, clear layout."
        );
    }

    #[test]
    fn test_space_after_sentence() {
        let pipeline = TypographyPipeline::default();
        assert_eq!(
            pipeline.process("Good structure.Needs metrics."),
            "Good structure. Needs metrics."
        );
        // Abbreviations and decimals are left alone
        assert_eq!(pipeline.process("Based in the U.S."), "Based in the U.S.");
        assert_eq!(pipeline.process("GPA 3.8"), "GPA 3.8");
    }

    #[test]
    fn test_space_after_every_mark() {
        let pipeline = TypographyPipeline::default();
        assert_eq!(pipeline.process("Skills:Python and Go"), "Skills: Python and Go");
        assert_eq!(pipeline.process("Done.I agree"), "Done. I agree");
        assert_eq!(pipeline.process("Good fit;great culture"), "Good fit; great culture");
        assert_eq!(pipeline.process("Yes,but no"), "Yes, but no");
        assert_eq!(pipeline.process("Wow!Really?Yes"), "Wow! Really? Yes");
        // Already spaced text is unchanged
        assert_eq!(pipeline.process("Skills: Python, Go."), "Skills: Python, Go.");
        assert_eq!(pipeline.process("e.g. Rust at 10:30"), "e.g. Rust at 10:30");
    }

    #[test]
    fn test_off_preset() {
        let pipeline = TypographyPipeline::from_preset(TypographyPreset::Off);
        let text = "  \"as is\" -- ... ";
        assert_eq!(pipeline.process(text), text);
    }
}
