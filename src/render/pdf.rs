//! PDF serialization of laid-out pages.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::layout::{DrawOp, LaidOutPage};
use super::metrics::PdfFont;
use crate::error::{Error, Result};
use crate::model::{Color, Metadata, PageSize};

/// PDF version written to the header.
pub const PDF_VERSION: &str = "1.5";

/// Writes pages as a PDF document with the standard Type1 fonts.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    page_size: PageSize,
    compress: bool,
}

impl PdfWriter {
    /// Create a writer for pages of the given size.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            compress: true,
        }
    }

    /// Enable or disable Flate compression of content streams.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Serialize pages and metadata to PDF bytes.
    pub fn write(&self, metadata: &Metadata, pages: &[LaidOutPage]) -> Result<Vec<u8>> {
        if pages.is_empty() {
            return Err(Error::Pdf("document has no pages".to_string()));
        }

        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in PdfFont::ALL {
            let id = doc.add_object(font_dictionary(font));
            fonts.set(font.resource_name(), id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            self.page_size.width.into(),
            self.page_size.height.into(),
        ];

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page in pages {
            let content = Content {
                operations: page_operations(page),
            };
            let encoded = content.encode()?;
            let stream = self.content_stream(encoded)?;
            let content_id = doc.add_object(stream);

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let info_id = add_info(&mut doc, metadata);
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        log::debug!(
            "wrote PDF: {} pages, {} bytes, compressed={}",
            pages.len(),
            bytes.len(),
            self.compress
        );
        Ok(bytes)
    }

    fn content_stream(&self, content: Vec<u8>) -> Result<Stream> {
        if !self.compress {
            return Ok(Stream::new(Dictionary::new(), content));
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content)?;
        let compressed = encoder.finish()?;
        Ok(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            compressed,
        ))
    }
}

fn font_dictionary(font: PdfFont) -> Dictionary {
    let mut dict = dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
    };
    if font.is_text_font() {
        dict.set("Encoding", "WinAnsiEncoding");
    }
    dict
}

fn add_info(doc: &mut Document, metadata: &Metadata) -> ObjectId {
    let mut info = Dictionary::new();
    let fields = [
        ("Title", &metadata.title),
        ("Author", &metadata.author),
        ("Subject", &metadata.subject),
        ("Creator", &metadata.creator),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            info.set(key, text_string(value));
        }
    }
    info.set(
        "Producer",
        text_string(&format!("ats-report {}", crate::VERSION)),
    );
    if let Some(created) = &metadata.created {
        info.set("CreationDate", text_string(&Metadata::pdf_date(created)));
    }
    doc.add_object(info)
}

/// Encode a PDF text string: ASCII as a literal, anything else as UTF-16BE.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn color_operands(color: Color) -> Vec<Object> {
    color.components().iter().map(|c| (*c).into()).collect()
}

fn page_operations(page: &LaidOutPage) -> Vec<Operation> {
    let mut ops = Vec::new();

    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                bytes,
                word_spacing,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![font.resource_name().into(), (*size).into()],
                ));
                ops.push(Operation::new("rg", color_operands(*color)));
                ops.push(Operation::new("Tw", vec![(*word_spacing).into()]));
                ops.push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(bytes.clone(), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new("RG", color_operands(*color)));
                ops.push(Operation::new("w", vec![(*width).into()]));
                ops.push(Operation::new("m", vec![(*x1).into(), (*y1).into()]));
                ops.push(Operation::new("l", vec![(*x2).into(), (*y2).into()]));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let paint = match (fill, stroke) {
                    (Some(_), Some(_)) => "B",
                    (Some(_), None) => "f",
                    (None, Some(_)) => "S",
                    (None, None) => continue,
                };
                ops.push(Operation::new("q", vec![]));
                if let Some(fill) = fill {
                    ops.push(Operation::new("rg", color_operands(*fill)));
                }
                if let Some((color, line_width)) = stroke {
                    ops.push(Operation::new("RG", color_operands(*color)));
                    ops.push(Operation::new("w", vec![(*line_width).into()]));
                }
                ops.push(Operation::new(
                    "re",
                    vec![(*x).into(), (*y).into(), (*width).into(), (*height).into()],
                ));
                ops.push(Operation::new(paint, vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::palette;

    fn sample_pages() -> Vec<LaidOutPage> {
        vec![
            LaidOutPage {
                ops: vec![
                    DrawOp::Text {
                        x: 56.0,
                        y: 700.0,
                        font: PdfFont::Helvetica,
                        size: 11.0,
                        color: palette::TEXT_PRIMARY,
                        bytes: b"Strong Python skills".to_vec(),
                        word_spacing: 0.0,
                    },
                    DrawOp::Line {
                        x1: 56.0,
                        y1: 690.0,
                        x2: 500.0,
                        y2: 690.0,
                        color: palette::BORDER,
                        width: 0.75,
                    },
                ],
            },
            LaidOutPage {
                ops: vec![DrawOp::Rect {
                    x: 80.0,
                    y: 600.0,
                    width: 400.0,
                    height: 40.0,
                    fill: Some(palette::BACKGROUND),
                    stroke: Some((palette::BORDER, 0.5)),
                }],
            },
        ]
    }

    #[test]
    fn test_write_uncompressed() {
        let metadata = Metadata {
            title: Some("ATS Resume Expert - Test".to_string()),
            ..Default::default()
        };
        let bytes = PdfWriter::new(PageSize::A4)
            .with_compression(false)
            .write(&metadata, &sample_pages())
            .unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("(Strong Python skills) Tj"));
        assert!(raw.contains("/WinAnsiEncoding"));
        assert!(raw.contains("/ZapfDingbats"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_write_compressed_is_smaller_and_valid() {
        let metadata = Metadata::default();
        let plain = PdfWriter::new(PageSize::A4)
            .with_compression(false)
            .write(&metadata, &sample_pages())
            .unwrap();
        let packed = PdfWriter::new(PageSize::A4)
            .write(&metadata, &sample_pages())
            .unwrap();

        let raw = String::from_utf8_lossy(&packed);
        assert!(raw.contains("/FlateDecode"));
        assert!(!raw.contains("(Strong Python skills) Tj"));
        assert_ne!(plain, packed);

        let doc = Document::load_mem(&packed).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_no_pages_is_error() {
        let err = PdfWriter::new(PageSize::A4)
            .write(&Metadata::default(), &[])
            .unwrap_err();
        assert!(matches!(err, Error::Pdf(_)));
    }

    #[test]
    fn test_text_string_encoding() {
        match text_string("Fit") {
            Object::String(bytes, StringFormat::Literal) => assert_eq!(bytes, b"Fit"),
            other => panic!("unexpected {:?}", other),
        }
        match text_string("Résumé") {
            Object::String(bytes, StringFormat::Hexadecimal) => {
                assert_eq!(&bytes[..2], &[0xFE, 0xFF]);
                assert_eq!(bytes.len(), 2 + 6 * 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
