//! Colors, faces and paragraph styles.

use serde::{Deserialize, Serialize};

use crate::classify::LineKind;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Channels scaled to `0.0..=1.0`, as PDF color operators expect.
    pub fn components(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Hex notation, e.g. `#1a365d`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The report palette.
pub mod palette {
    use super::Color;

    /// Navy blue used for titles and section headings
    pub const PRIMARY_DARK: Color = Color::hex(0x1a365d);
    /// Medium blue
    pub const PRIMARY_MEDIUM: Color = Color::hex(0x2d5a87);
    /// Light blue
    pub const PRIMARY_LIGHT: Color = Color::hex(0x4a90b8);
    /// Subsection headings
    pub const SECONDARY: Color = Color::hex(0x2c5aa0);
    /// Red accent
    pub const ACCENT: Color = Color::hex(0xe53e3e);
    /// Positive findings
    pub const SUCCESS: Color = Color::hex(0x38a169);
    /// Gaps and deficiencies
    pub const WARNING: Color = Color::hex(0xd69e2e);
    /// Primary text, dark gray
    pub const TEXT_PRIMARY: Color = Color::hex(0x1a202c);
    /// Secondary text, medium gray
    pub const TEXT_SECONDARY: Color = Color::hex(0x4a5568);
    /// Muted text, light gray
    pub const TEXT_MUTED: Color = Color::hex(0x718096);
    /// Table header background
    pub const BACKGROUND: Color = Color::hex(0xf7fafc);
    /// Borders and rules
    pub const BORDER: Color = Color::hex(0xe2e8f0);
    /// White
    pub const WHITE: Color = Color::hex(0xffffff);
}

/// Font sizes in points.
pub mod sizes {
    /// Report and section titles
    pub const TITLE: f32 = 24.0;
    /// Cover subtitle, titles inside combined sections
    pub const SUBTITLE: f32 = 18.0;
    /// Section headings
    pub const HEADING1: f32 = 16.0;
    /// Subsection headings
    pub const HEADING2: f32 = 14.0;
    /// Body text
    pub const BODY: f32 = 11.0;
    /// Captions and footers
    pub const CAPTION: f32 = 9.0;
    /// Leading as a multiple of the font size
    pub const LINE_HEIGHT: f32 = 1.4;
}

/// Weight and slant of the Helvetica family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    /// Helvetica
    #[default]
    Regular,
    /// Helvetica-Bold
    Bold,
    /// Helvetica-Oblique
    Oblique,
    /// Helvetica-BoldOblique
    BoldOblique,
}

impl FontFace {
    /// Check if the face is bold.
    pub fn is_bold(&self) -> bool {
        matches!(self, FontFace::Bold | FontFace::BoldOblique)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// A box drawn around a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Stroke color
    pub color: Color,
    /// Stroke width in points
    pub width: f32,
    /// Gap between the stroke and the text
    pub padding: f32,
}

/// Paragraph styling properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Style name, for diagnostics and JSON output
    pub name: String,

    /// Font face
    pub face: FontFace,

    /// Font size in points
    pub font_size: f32,

    /// Baseline-to-baseline distance in points
    pub leading: f32,

    /// Text color
    pub color: Color,

    /// Text alignment
    pub alignment: Alignment,

    /// Left indent in points
    pub left_indent: f32,

    /// Right indent in points
    pub right_indent: f32,

    /// Space before paragraph in points
    pub space_before: f32,

    /// Space after paragraph in points
    pub space_after: f32,

    /// Optional border box
    pub border: Option<Border>,

    /// Move to the next page together with the following block
    pub keep_with_next: bool,
}

impl ParagraphStyle {
    /// Create a style with the given name, face, size and color.
    pub fn new(name: impl Into<String>, face: FontFace, font_size: f32, color: Color) -> Self {
        Self {
            name: name.into(),
            face,
            font_size,
            leading: font_size * sizes::LINE_HEIGHT,
            color,
            alignment: Alignment::Left,
            left_indent: 0.0,
            right_indent: 0.0,
            space_before: 0.0,
            space_after: 0.0,
            border: None,
            keep_with_next: false,
        }
    }

    /// Set alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set left and right indents.
    pub fn with_indent(mut self, left: f32, right: f32) -> Self {
        self.left_indent = left;
        self.right_indent = right;
        self
    }

    /// Set space before and after.
    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Set a border box.
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Keep this paragraph on the same page as the next block.
    pub fn keep_with_next(mut self) -> Self {
        self.keep_with_next = true;
        self
    }
}

/// The fixed set of styles a report is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Report title
    pub title: ParagraphStyle,
    /// Cover subtitle; also titles inside combined sections
    pub subtitle: ParagraphStyle,
    /// Section heading
    pub heading1: ParagraphStyle,
    /// Subsection heading
    pub heading2: ParagraphStyle,
    /// Body text
    pub body: ParagraphStyle,
    /// Metrics and list items
    pub highlight: ParagraphStyle,
    /// Positive findings
    pub success: ParagraphStyle,
    /// Gaps
    pub warning: ParagraphStyle,
    /// Footer and captions
    pub caption: ParagraphStyle,
    /// Quotations and recommendations
    pub quote: ParagraphStyle,
}

impl StyleSheet {
    /// The professional report styles.
    pub fn professional() -> Self {
        Self {
            title: ParagraphStyle::new("title", FontFace::Bold, sizes::TITLE, palette::PRIMARY_DARK)
                .with_alignment(Alignment::Center)
                .with_spacing(20.0, 30.0)
                .keep_with_next(),
            subtitle: ParagraphStyle::new(
                "subtitle",
                FontFace::Bold,
                sizes::SUBTITLE,
                palette::PRIMARY_MEDIUM,
            )
            .with_alignment(Alignment::Center)
            .with_spacing(15.0, 20.0)
            .keep_with_next(),
            heading1: ParagraphStyle::new(
                "heading1",
                FontFace::Bold,
                sizes::HEADING1,
                palette::PRIMARY_DARK,
            )
            .with_spacing(25.0, 15.0)
            .keep_with_next(),
            heading2: ParagraphStyle::new(
                "heading2",
                FontFace::Bold,
                sizes::HEADING2,
                palette::SECONDARY,
            )
            .with_spacing(18.0, 12.0)
            .keep_with_next(),
            body: ParagraphStyle::new("body", FontFace::Regular, sizes::BODY, palette::TEXT_PRIMARY)
                .with_alignment(Alignment::Justify)
                .with_spacing(0.0, 12.0),
            highlight: ParagraphStyle::new(
                "highlight",
                FontFace::Regular,
                sizes::BODY,
                palette::PRIMARY_MEDIUM,
            )
            .with_indent(20.0, 0.0)
            .with_spacing(0.0, 10.0),
            success: ParagraphStyle::new("success", FontFace::Bold, sizes::BODY, palette::SUCCESS)
                .with_indent(20.0, 0.0)
                .with_spacing(0.0, 10.0),
            warning: ParagraphStyle::new("warning", FontFace::Bold, sizes::BODY, palette::WARNING)
                .with_indent(20.0, 0.0)
                .with_spacing(0.0, 10.0),
            caption: ParagraphStyle::new(
                "caption",
                FontFace::Regular,
                sizes::CAPTION,
                palette::TEXT_MUTED,
            )
            .with_alignment(Alignment::Center)
            .with_spacing(0.0, 8.0),
            quote: ParagraphStyle::new(
                "quote",
                FontFace::Oblique,
                sizes::BODY,
                palette::TEXT_SECONDARY,
            )
            .with_indent(30.0, 30.0)
            .with_spacing(15.0, 15.0)
            .with_border(Border {
                color: palette::BORDER,
                width: 1.0,
                padding: 10.0,
            }),
        }
    }

    /// Style for a classified line kind. Spacers use the body style.
    pub fn for_kind(&self, kind: LineKind) -> &ParagraphStyle {
        match kind {
            LineKind::Title => &self.title,
            LineKind::Heading1 => &self.heading1,
            LineKind::Heading2 => &self.heading2,
            LineKind::Success => &self.success,
            LineKind::Warning => &self.warning,
            LineKind::Highlight => &self.highlight,
            LineKind::Quote => &self.quote,
            LineKind::Body | LineKind::Spacer => &self.body,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::professional()
    }
}
