//! Pagination and line layout.
//!
//! Turns a block sequence into pages of positioned drawing operations.
//! Coordinates are PDF user space: origin at the bottom-left corner, y grows
//! upwards, units are points.

use crate::error::{Error, Result};
use crate::model::{
    palette, Alignment, Block, Color, FontFace, Margins, PageSize, Paragraph, Table,
};

use super::metrics::{shape, Glyph, PdfFont};

/// Height reserved for a horizontal rule.
const RULE_HEIGHT: f32 = 12.0;

/// Stroke width of horizontal rules.
const RULE_STROKE: f32 = 0.75;

/// Cell leading as a multiple of the font size.
const CELL_LINE_HEIGHT: f32 = 1.2;

/// Font size of the page number footer.
const PAGE_NUMBER_SIZE: f32 = 8.0;

/// A positioned drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A run of glyphs in one font
    Text {
        /// Left edge of the run
        x: f32,
        /// Baseline
        y: f32,
        /// Font of every glyph in the run
        font: PdfFont,
        /// Font size in points
        size: f32,
        /// Fill color
        color: Color,
        /// Encoded glyph bytes
        bytes: Vec<u8>,
        /// Extra space added to each word space (PDF `Tw`)
        word_spacing: f32,
    },
    /// A straight line
    Line {
        /// Start x
        x1: f32,
        /// Start y
        y1: f32,
        /// End x
        x2: f32,
        /// End y
        y2: f32,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// A rectangle, filled and/or stroked
    Rect {
        /// Left edge
        x: f32,
        /// Bottom edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
        /// Fill color
        fill: Option<Color>,
        /// Stroke color and width
        stroke: Option<(Color, f32)>,
    },
}

/// One laid-out page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    /// Drawing operations in paint order
    pub ops: Vec<DrawOp>,
}

impl LaidOutPage {
    /// Check if nothing is drawn on the page.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Concatenated bytes of every text run, for inspection.
    pub fn text_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for op in &self.ops {
            if let DrawOp::Text { bytes, .. } = op {
                out.extend_from_slice(bytes);
                out.push(b'\n');
            }
        }
        out
    }
}

/// A wrapped line of glyphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLine {
    /// Glyphs, with single spaces between words
    pub glyphs: Vec<Glyph>,
    /// Natural width in points
    pub width: f32,
    /// Number of word spaces
    pub spaces: usize,
}

/// Greedy line breaking against `max_width`.
///
/// Runs of spaces collapse to one; leading and trailing spaces are dropped.
/// Words wider than a line are split between glyphs.
pub fn break_lines(glyphs: &[Glyph], font_size: f32, max_width: f32) -> Vec<TextLine> {
    let space = match glyphs.iter().find(|g| g.is_space()) {
        Some(g) => *g,
        None => Glyph {
            font: glyphs.first().map(|g| g.font).unwrap_or(PdfFont::Helvetica),
            code: b' ',
        },
    };
    let space_width = space.width(font_size);

    let mut lines = Vec::new();
    let mut current = TextLine::default();

    for word in glyphs.split(|g| g.is_space()).filter(|w| !w.is_empty()) {
        let word_width: f32 = word.iter().map(|g| g.width(font_size)).sum();

        if !current.glyphs.is_empty() {
            if current.width + space_width + word_width <= max_width {
                current.glyphs.push(space);
                current.glyphs.extend_from_slice(word);
                current.width += space_width + word_width;
                current.spaces += 1;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        if word_width <= max_width {
            current.glyphs.extend_from_slice(word);
            current.width = word_width;
        } else {
            for glyph in word {
                let w = glyph.width(font_size);
                if !current.glyphs.is_empty() && current.width + w > max_width {
                    lines.push(std::mem::take(&mut current));
                }
                current.glyphs.push(*glyph);
                current.width += w;
            }
        }
    }

    if !current.glyphs.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a line into text-run operations, one per font change.
pub fn line_ops(
    line: &TextLine,
    x: f32,
    baseline: f32,
    size: f32,
    color: Color,
    word_spacing: f32,
) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let mut cursor_x = x;
    let mut start = 0;

    while start < line.glyphs.len() {
        let font = line.glyphs[start].font;
        let end = line.glyphs[start..]
            .iter()
            .position(|g| g.font != font)
            .map(|p| start + p)
            .unwrap_or(line.glyphs.len());
        let run = &line.glyphs[start..end];

        let run_width: f32 = run.iter().map(|g| g.width(size)).sum();
        let run_spaces = run.iter().filter(|g| g.is_space()).count() as f32;

        ops.push(DrawOp::Text {
            x: cursor_x,
            y: baseline,
            font,
            size,
            color,
            bytes: run.iter().map(|g| g.code).collect(),
            word_spacing,
        });

        cursor_x += run_width + word_spacing * run_spaces;
        start = end;
    }

    ops
}

/// Distance from the top of a line box to its baseline.
fn baseline_offset(font_size: f32, leading: f32) -> f32 {
    (leading - font_size) / 2.0 + font_size * 0.8
}

/// Lays blocks out onto pages.
pub struct LayoutEngine {
    size: PageSize,
    margins: Margins,
    page_numbers: bool,
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    cursor: f32,
    fresh: bool,
}

impl LayoutEngine {
    /// Create a layout engine for the given page geometry.
    pub fn new(size: PageSize, margins: Margins) -> Result<Self> {
        let engine = Self {
            size,
            margins,
            page_numbers: false,
            pages: Vec::new(),
            current: LaidOutPage::default(),
            cursor: size.height - margins.top,
            fresh: true,
        };
        if engine.content_width() <= 0.0 || engine.top() <= engine.bottom() {
            return Err(Error::Layout(format!(
                "margins {:?} leave no room on a {}x{} page",
                margins, size.width, size.height
            )));
        }
        Ok(engine)
    }

    /// Draw `Page N of M` in the bottom margin.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.page_numbers = enabled;
        self
    }

    /// Lay out every block and return the finished pages.
    pub fn layout(mut self, blocks: &[Block]) -> Result<Vec<LaidOutPage>> {
        for (i, block) in blocks.iter().enumerate() {
            let next = blocks[i + 1..]
                .iter()
                .find(|b| !matches!(b, Block::Spacer { .. }));
            match block {
                Block::Paragraph(p) => self.place_paragraph(p, next)?,
                Block::Table(t) => self.place_table(t)?,
                Block::Rule { color, width } => self.place_rule(*color, *width),
                Block::Spacer { height } => self.place_spacer(*height),
                Block::PageBreak => {
                    if !self.fresh {
                        self.new_page();
                    }
                }
            }
        }

        if !self.current.is_empty() || self.pages.is_empty() {
            let last = std::mem::take(&mut self.current);
            self.pages.push(last);
        }

        if self.page_numbers {
            self.number_pages();
        }

        log::debug!("laid out {} blocks on {} pages", blocks.len(), self.pages.len());
        Ok(self.pages)
    }

    fn top(&self) -> f32 {
        self.size.height - self.margins.top
    }

    fn bottom(&self) -> f32 {
        self.margins.bottom
    }

    fn content_width(&self) -> f32 {
        self.size.width - self.margins.left - self.margins.right
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.bottom()
    }

    fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.cursor = self.top();
        self.fresh = true;
    }

    /// Move to a new page when less than `needed` is left. A page with
    /// nothing drawn on it is reused from the top instead.
    ///
    /// Returns true when the cursor moved.
    fn ensure_room(&mut self, needed: f32) -> bool {
        if needed <= self.remaining() {
            return false;
        }
        if self.fresh {
            let moved = self.cursor < self.top();
            self.cursor = self.top();
            moved
        } else {
            self.new_page();
            true
        }
    }

    /// Smallest height the block needs to start on the current page.
    fn min_height(&self, block: &Block) -> f32 {
        match block {
            Block::Paragraph(p) => {
                let pad = p.style.border.map(|b| b.padding * 2.0).unwrap_or(0.0);
                p.style.space_before + p.style.leading + pad
            }
            Block::Table(t) => t
                .rows
                .first()
                .map(|row| {
                    let size = row
                        .cells
                        .iter()
                        .map(|c| c.style.font_size)
                        .fold(0.0_f32, f32::max);
                    size * CELL_LINE_HEIGHT + t.padding.top + t.padding.bottom
                })
                .unwrap_or(0.0),
            Block::Rule { .. } => RULE_HEIGHT,
            Block::Spacer { .. } | Block::PageBreak => 0.0,
        }
    }

    fn place_paragraph(&mut self, para: &Paragraph, next: Option<&Block>) -> Result<()> {
        let style = &para.style;
        let pad = style.border.map(|b| b.padding).unwrap_or(0.0);
        let available =
            self.content_width() - style.left_indent - style.right_indent - 2.0 * pad;
        if available < style.font_size {
            return Err(Error::Layout(format!(
                "style {} leaves {:.1}pt for text",
                style.name, available
            )));
        }

        let glyphs = shape(&para.text, style.face);
        let lines = break_lines(&glyphs, style.font_size, available);
        let body_height = lines.len() as f32 * style.leading + 2.0 * pad;

        let mut before = if self.fresh { 0.0 } else { style.space_before };
        let needed = if style.keep_with_next {
            before
                + body_height
                + style.space_after
                + next.map(|b| self.min_height(b)).unwrap_or(0.0)
        } else if style.border.is_some() {
            before + body_height
        } else {
            before + body_height.min(style.leading)
        };
        if self.ensure_room(needed) {
            before = 0.0;
        }
        self.cursor -= before;

        if let Some(border) = style.border {
            if body_height <= self.remaining() {
                self.current.ops.push(DrawOp::Rect {
                    x: self.margins.left + style.left_indent,
                    y: self.cursor - body_height,
                    width: self.content_width() - style.left_indent - style.right_indent,
                    height: body_height,
                    fill: None,
                    stroke: Some((border.color, border.width)),
                });
            } else {
                log::debug!("bordered paragraph taller than the page, drawing without border");
            }
        }

        self.cursor -= pad;
        let x0 = self.margins.left + style.left_indent + pad;
        let last = lines.len().saturating_sub(1);

        for (i, line) in lines.iter().enumerate() {
            self.ensure_room(style.leading);

            let slack = (available - line.width).max(0.0);
            let (x, word_spacing) = match style.alignment {
                Alignment::Left => (x0, 0.0),
                Alignment::Center => (x0 + slack / 2.0, 0.0),
                Alignment::Right => (x0 + slack, 0.0),
                Alignment::Justify if i < last && line.spaces > 0 => {
                    (x0, slack / line.spaces as f32)
                }
                Alignment::Justify => (x0, 0.0),
            };

            let baseline = self.cursor - baseline_offset(style.font_size, style.leading);
            self.current.ops.extend(line_ops(
                line,
                x,
                baseline,
                style.font_size,
                style.color,
                word_spacing,
            ));
            self.cursor -= style.leading;
            self.fresh = false;
        }

        self.cursor -= pad + style.space_after;
        self.fresh = false;
        Ok(())
    }

    fn place_table(&mut self, table: &Table) -> Result<()> {
        if table.is_empty() || table.column_widths.is_empty() {
            return Ok(());
        }

        let content_width = self.content_width();
        let natural = table.width();
        let scale = if natural > content_width {
            content_width / natural
        } else {
            1.0
        };
        let widths: Vec<f32> = table.column_widths.iter().map(|w| w * scale).collect();
        let total: f32 = widths.iter().sum();
        let x_start = self.margins.left + (content_width - total) / 2.0;
        let pad = table.padding;

        for (row_index, row) in table.rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.cells.len());
            let mut row_height: f32 = 0.0;

            for (cell, width) in row.cells.iter().zip(&widths) {
                let available = (width - pad.left - pad.right).max(1.0);
                let glyphs = shape(&cell.text, cell.style.face);
                let lines = break_lines(&glyphs, cell.style.font_size, available);
                let leading = cell.style.font_size * CELL_LINE_HEIGHT;
                row_height = row_height.max(lines.len().max(1) as f32 * leading);
                cells.push((cell, lines, available, leading));
            }
            row_height += pad.top + pad.bottom;

            // Rows are never split, so a row must fit on an empty page
            let page_room = self.top() - self.bottom();
            if row_height > page_room {
                return Err(Error::Layout(format!(
                    "table row {} needs {:.1}pt but a page holds {:.1}pt",
                    row_index + 1,
                    row_height,
                    page_room
                )));
            }

            self.ensure_room(row_height);

            let row_top = self.cursor;
            if row_index == 0 {
                if let Some(fill) = table.header_background {
                    self.current.ops.push(DrawOp::Rect {
                        x: x_start,
                        y: row_top - row_height,
                        width: total,
                        height: row_height,
                        fill: Some(fill),
                        stroke: None,
                    });
                }
            }

            let mut cell_x = x_start;
            for ((cell, lines, available, leading), width) in cells.iter().zip(&widths) {
                if let Some(grid) = table.grid {
                    self.current.ops.push(DrawOp::Rect {
                        x: cell_x,
                        y: row_top - row_height,
                        width: *width,
                        height: row_height,
                        fill: None,
                        stroke: Some((grid, 0.5)),
                    });
                }

                let size = cell.style.font_size;
                let mut line_top = row_top - pad.top;
                for line in lines {
                    let slack = (available - line.width).max(0.0);
                    let x = match cell.style.alignment {
                        Alignment::Left | Alignment::Justify => cell_x + pad.left,
                        Alignment::Center => cell_x + pad.left + slack / 2.0,
                        Alignment::Right => cell_x + pad.left + slack,
                    };
                    let baseline = line_top - baseline_offset(size, *leading);
                    self.current
                        .ops
                        .extend(line_ops(line, x, baseline, size, cell.style.color, 0.0));
                    line_top -= leading;
                }
                cell_x += width;
            }

            self.cursor -= row_height;
            self.fresh = false;
        }

        Ok(())
    }

    fn place_rule(&mut self, color: Color, width: f32) {
        self.ensure_room(RULE_HEIGHT);
        let content_width = self.content_width();
        let width = width.min(content_width);
        let x1 = self.margins.left + (content_width - width) / 2.0;
        let y = self.cursor - RULE_HEIGHT / 2.0;
        self.current.ops.push(DrawOp::Line {
            x1,
            y1: y,
            x2: x1 + width,
            y2: y,
            color,
            width: RULE_STROKE,
        });
        self.cursor -= RULE_HEIGHT;
        self.fresh = false;
    }

    /// Spacers never leave content behind on a page, so a page holding only
    /// spacers still counts as fresh.
    fn place_spacer(&mut self, height: f32) {
        if height > self.remaining() && !self.fresh {
            self.new_page();
        } else {
            self.cursor = (self.cursor - height).max(self.bottom());
        }
    }

    fn number_pages(&mut self) {
        let total = self.pages.len();
        let center = self.size.width / 2.0;
        let baseline = self.margins.bottom / 2.0;

        for (i, page) in self.pages.iter_mut().enumerate() {
            let label = format!("Page {} of {}", i + 1, total);
            let glyphs = shape(&label, FontFace::Regular);
            let line = TextLine {
                width: glyphs.iter().map(|g| g.width(PAGE_NUMBER_SIZE)).sum(),
                spaces: 0,
                glyphs,
            };
            page.ops.extend(line_ops(
                &line,
                center - line.width / 2.0,
                baseline,
                PAGE_NUMBER_SIZE,
                palette::TEXT_MUTED,
                0.0,
            ));
        }
    }
}
