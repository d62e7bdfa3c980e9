//! Standard-font metrics and text encoding.
//!
//! Reports use only the PDF standard fonts, so nothing is embedded. Text is
//! encoded to WinAnsi for the Helvetica family. Decorative glyphs outside
//! WinAnsi are drawn from Symbol or ZapfDingbats using the nearest available
//! shape; any other unencodable character becomes `?`.
//!
//! Widths are static tables in 1/1000 em, covering ASCII 0x20..=0x7E.
//! Index = byte - 32. Other WinAnsi bytes use per-face approximations.

use crate::model::FontFace;

/// A standard PDF font used by the report writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PdfFont {
    /// Helvetica
    Helvetica,
    /// Helvetica-Bold
    HelveticaBold,
    /// Helvetica-Oblique
    HelveticaOblique,
    /// Helvetica-BoldOblique
    HelveticaBoldOblique,
    /// Symbol (arrows, math operators)
    Symbol,
    /// ZapfDingbats (check marks, shapes)
    ZapfDingbats,
}

impl PdfFont {
    /// Every font the writer registers, in resource order.
    pub const ALL: [PdfFont; 6] = [
        PdfFont::Helvetica,
        PdfFont::HelveticaBold,
        PdfFont::HelveticaOblique,
        PdfFont::HelveticaBoldOblique,
        PdfFont::Symbol,
        PdfFont::ZapfDingbats,
    ];

    /// Text font for a face.
    pub fn for_face(face: FontFace) -> Self {
        match face {
            FontFace::Regular => PdfFont::Helvetica,
            FontFace::Bold => PdfFont::HelveticaBold,
            FontFace::Oblique => PdfFont::HelveticaOblique,
            FontFace::BoldOblique => PdfFont::HelveticaBoldOblique,
        }
    }

    /// PostScript name of the font.
    pub fn base_font(&self) -> &'static str {
        match self {
            PdfFont::Helvetica => "Helvetica",
            PdfFont::HelveticaBold => "Helvetica-Bold",
            PdfFont::HelveticaOblique => "Helvetica-Oblique",
            PdfFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            PdfFont::Symbol => "Symbol",
            PdfFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            PdfFont::Helvetica => "F1",
            PdfFont::HelveticaBold => "F2",
            PdfFont::HelveticaOblique => "F3",
            PdfFont::HelveticaBoldOblique => "F4",
            PdfFont::Symbol => "F5",
            PdfFont::ZapfDingbats => "F6",
        }
    }

    /// Whether the font uses WinAnsiEncoding (symbolic fonts use their own).
    pub fn is_text_font(&self) -> bool {
        !matches!(self, PdfFont::Symbol | PdfFont::ZapfDingbats)
    }

    /// Width of a byte in this font, in 1/1000 em.
    pub fn glyph_width(&self, code: u8) -> u16 {
        match self {
            PdfFont::Helvetica | PdfFont::HelveticaOblique => {
                text_width(&HELVETICA_WIDTHS, code, false)
            }
            PdfFont::HelveticaBold | PdfFont::HelveticaBoldOblique => {
                text_width(&HELVETICA_BOLD_WIDTHS, code, true)
            }
            PdfFont::Symbol => symbol_width(code),
            PdfFont::ZapfDingbats => dingbat_width(code),
        }
    }
}

/// One encoded glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Font the glyph is drawn from
    pub font: PdfFont,
    /// Byte code in that font's encoding
    pub code: u8,
}

impl Glyph {
    /// Check if the glyph is a word space.
    pub fn is_space(&self) -> bool {
        self.code == b' ' && self.font.is_text_font()
    }

    /// Advance width at the given font size, in points.
    pub fn width(&self, font_size: f32) -> f32 {
        self.font.glyph_width(self.code) as f32 * font_size / 1000.0
    }
}

/// Encode text for a face, substituting symbol fonts where needed.
///
/// Control characters and zero-width code points are dropped; tabs become
/// spaces.
pub fn shape(text: &str, face: FontFace) -> Vec<Glyph> {
    let text_font = PdfFont::for_face(face);
    let mut glyphs = Vec::with_capacity(text.len());

    for c in text.chars() {
        if c == '\t' {
            glyphs.push(Glyph {
                font: text_font,
                code: b' ',
            });
            continue;
        }
        if c.is_control() || is_zero_width(c) {
            continue;
        }
        if let Some(code) = winansi_byte(c) {
            glyphs.push(Glyph {
                font: text_font,
                code,
            });
        } else if let Some((font, code)) = symbol_glyph(c) {
            glyphs.push(Glyph { font, code });
        } else {
            log::debug!("no glyph for {:?} (U+{:04X}), using '?'", c, c as u32);
            glyphs.push(Glyph {
                font: text_font,
                code: b'?',
            });
        }
    }

    glyphs
}

/// Width of text at the given face and size, in points.
pub fn text_width_pt(text: &str, face: FontFace, font_size: f32) -> f32 {
    shape(text, face).iter().map(|g| g.width(font_size)).sum()
}

fn is_zero_width(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}' | '\u{FE00}'..='\u{FE0F}' | '\u{2060}' | '\u{FEFF}'
    )
}

/// Map a char to its WinAnsiEncoding byte.
pub fn winansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

/// Map a decorative or mathematical char to a symbolic font glyph.
pub fn symbol_glyph(c: char) -> Option<(PdfFont, u8)> {
    let glyph = match c {
        '→' | '⟶' | '➔' => (PdfFont::Symbol, 0xAE),
        '←' => (PdfFont::Symbol, 0xAC),
        '↑' => (PdfFont::Symbol, 0xAD),
        '↓' => (PdfFont::Symbol, 0xAF),
        '⇒' => (PdfFont::Symbol, 0xDE),
        '≥' => (PdfFont::Symbol, 0xB3),
        '≤' => (PdfFont::Symbol, 0xA3),
        '≠' => (PdfFont::Symbol, 0xB9),
        '≈' => (PdfFont::Symbol, 0xBB),
        '√' => (PdfFont::Symbol, 0xD6),
        '∞' => (PdfFont::Symbol, 0xA5),
        '✓' => (PdfFont::ZapfDingbats, 0x33),
        '✔' | '✅' => (PdfFont::ZapfDingbats, 0x34),
        '✗' | '✘' | '❌' => (PdfFont::ZapfDingbats, 0x38),
        '●' | '◦' | '○' => (PdfFont::ZapfDingbats, 0x6C),
        '■' | '▪' | '▫' | '□' | '📊' | '📋' => (PdfFont::ZapfDingbats, 0x6E),
        '▲' | '⚠' => (PdfFont::ZapfDingbats, 0x73),
        '▼' => (PdfFont::ZapfDingbats, 0x74),
        '◆' | '◇' | '▸' | '▶' | '►' | '🎯' => (PdfFont::ZapfDingbats, 0x75),
        '★' | '⭐' => (PdfFont::ZapfDingbats, 0x48),
        _ => return None,
    };
    Some(glyph)
}

fn text_width(table: &[u16; 95], code: u8, bold: bool) -> u16 {
    match code {
        0x20..=0x7E => table[(code - 32) as usize],
        0x85 | 0x89 | 0x97 => 1000,
        0x91 | 0x92 => {
            if bold {
                278
            } else {
                222
            }
        }
        0x93 | 0x94 => {
            if bold {
                500
            } else {
                333
            }
        }
        0x95 => 350,
        0x96 => 556,
        0x99 => 1000,
        0xA0 => 278,
        // Latin-1 capitals
        0xC0..=0xDE => 722,
        _ => 556,
    }
}

fn symbol_width(code: u8) -> u16 {
    match code {
        0xAC..=0xAF => 987,
        0xDE => 987,
        0xA5 => 713,
        _ => 549,
    }
}

fn dingbat_width(code: u8) -> u16 {
    match code {
        0x33 => 755,
        0x34 => 846,
        0x38 => 762,
        0x48 => 816,
        0x6C => 791,
        0x6E => 761,
        0x73 | 0x74 => 892,
        0x75 => 759,
        _ => 788,
    }
}

/// Helvetica / Helvetica-Oblique widths for ASCII 0x20..=0x7E.
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Helvetica-Bold / Helvetica-BoldOblique widths for ASCII 0x20..=0x7E.
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];
