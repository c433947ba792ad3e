//! Draws a story onto US Letter pages with the builtin Helvetica faces.

use crate::layout::{Block, Table, TableStyle};

use anyhow::Context;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, path::PaintMode, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Pt, Rect, Rgb,
};
use std::io::{BufWriter, Write};

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;
const FRAME_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const CELL_SIDE_PADDING: f32 = 6.0;

const ACCENT: u32 = 0x0366d6;
const BLACK: u32 = 0x000000;
const WHITE: u32 = 0xffffff;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Face {
    Regular,
    Bold,
}

#[derive(Clone, Copy)]
struct TextStyle {
    face: Face,
    size: f32,
    color: u32,
}

impl TextStyle {
    const fn new(face: Face, size: f32, color: u32) -> Self {
        Self { face, size, color }
    }

    fn leading(&self) -> f32 {
        self.size * 1.2
    }
}

const TITLE: TextStyle = TextStyle::new(Face::Bold, 24.0, ACCENT);
const HEADING: TextStyle = TextStyle::new(Face::Bold, 16.0, ACCENT);
const BODY: TextStyle = TextStyle::new(Face::Regular, 10.0, BLACK);

struct CellStyle {
    text: TextStyle,
    background: u32,
}

struct GridStyle {
    color: u32,
    padding: f32,
}

impl TableStyle {
    fn grid(self) -> GridStyle {
        match self {
            Self::KeyValue => GridStyle {
                color: 0x808080,
                padding: 12.0,
            },
            Self::Listing => GridStyle {
                color: 0xbfdbfe,
                padding: 10.0,
            },
        }
    }

    fn cell(self, row: usize, column: usize) -> CellStyle {
        match self {
            Self::KeyValue if column == 0 => CellStyle {
                text: TextStyle::new(Face::Bold, 10.0, BLACK),
                background: 0xf3f4f6,
            },
            Self::KeyValue => CellStyle {
                text: BODY,
                background: WHITE,
            },
            Self::Listing if row == 0 => CellStyle {
                text: TextStyle::new(Face::Bold, 11.0, 0x1e40af),
                background: 0xdbeafe,
            },
            Self::Listing => CellStyle {
                text: TextStyle::new(Face::Regular, 9.0, BLACK),
                background: if row % 2 == 1 { WHITE } else { 0xf9fafb },
            },
        }
    }
}

/// Renders the story and round-trips it through a transient file, which is
/// removed before returning, whether rendering succeeded or not.
pub fn write_pdf(title: &str, story: &[Block]) -> anyhow::Result<Vec<u8>> {
    let RenderedPdf { doc, .. } = render(title, story)?;

    let mut file = tempfile::Builder::new()
        .prefix("ghprofile-report-")
        .suffix(".pdf")
        .tempfile()
        .context("failed to create transient report file")?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        doc.save(&mut writer).context("failed to write PDF")?;
        writer.flush().context("failed to flush PDF")?;
    }

    let bytes = std::fs::read(file.path()).context("failed to read back PDF")?;
    file.close().context("failed to remove transient report file")?;

    Ok(bytes)
}

pub struct RenderedPdf {
    pub doc: PdfDocumentReference,
    pub pages: usize,
}

pub fn render(title: &str, story: &[Block]) -> anyhow::Result<RenderedPdf> {
    let (doc, page, layer) = PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Page 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("failed to load Helvetica")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("failed to load Helvetica-Bold")?;
    let layer = doc.get_page(page).get_layer(layer);

    let pages = Canvas {
        doc: &doc,
        layer,
        regular,
        bold,
        y: PAGE_HEIGHT - MARGIN,
        pages: 1,
    }
    .draw(story);
    tracing::debug!("rendered report `{title}` on {pages} page(s)");

    Ok(RenderedPdf { doc, pages })
}

struct Canvas<'d> {
    doc: &'d PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Distance of the cursor from the page bottom, in points.
    y: f32,
    pages: usize,
}

impl Canvas<'_> {
    /// Returns the number of pages used.
    fn draw(mut self, story: &[Block]) -> usize {
        for block in story {
            match block {
                Block::Title(text) => {
                    self.paragraph(text, TITLE, true);
                    self.y -= 30.0;
                }
                Block::Heading(text) => {
                    self.paragraph(text, HEADING, false);
                    self.y -= 12.0;
                }
                Block::Paragraph(text) => self.paragraph(text, BODY, false),
                Block::Spacer(height) => self.y -= height,
                Block::Table(table) => self.table(table),
            }
        }
        self.pages
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y - height < MARGIN && self.y < PAGE_HEIGHT - MARGIN {
            self.pages += 1;
            let (page, layer) =
                self.doc
                    .add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), format!("Page {}", self.pages));
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn paragraph(&mut self, text: &str, style: TextStyle, centered: bool) {
        for line in wrap(text, style, FRAME_WIDTH) {
            self.ensure_room(style.leading());
            let x = if centered {
                MARGIN + (FRAME_WIDTH - text_width(&line, style)) / 2.0
            } else {
                MARGIN
            };
            self.y -= style.leading();
            self.text(&line, style, x, self.y + descent(style));
        }
    }

    fn table(&mut self, table: &Table) {
        let grid = table.style.grid();
        let width: f32 = table.column_widths.iter().sum();
        let left = MARGIN + (FRAME_WIDTH - width).max(0.0) / 2.0;

        for (row_index, row) in table.rows.iter().enumerate() {
            let cells: Vec<(CellStyle, Vec<String>)> = row
                .iter()
                .zip(&table.column_widths)
                .enumerate()
                .map(|(column, (text, column_width))| {
                    let style = table.style.cell(row_index, column);
                    let lines = wrap(text, style.text, column_width - 2.0 * CELL_SIDE_PADDING);
                    (style, lines)
                })
                .collect();

            let height = cells
                .iter()
                .map(|(style, lines)| lines.len().max(1) as f32 * style.text.leading())
                .fold(0.0, f32::max)
                + 2.0 * grid.padding;

            self.ensure_room(height);
            let top = self.y;
            let mut x = left;

            for ((style, lines), column_width) in cells.iter().zip(&table.column_widths) {
                self.cell_box(x, top - height, *column_width, height, style.background, grid.color);

                let mut baseline = top - grid.padding;
                for line in lines {
                    baseline -= style.text.leading();
                    self.text(line, style.text, x + CELL_SIDE_PADDING, baseline + descent(style.text));
                }
                x += column_width;
            }

            self.y -= height;
        }
    }

    fn cell_box(&self, x: f32, y: f32, width: f32, height: f32, fill: u32, stroke: u32) {
        self.layer.set_fill_color(rgb(fill));
        self.layer.set_outline_color(rgb(stroke));
        self.layer.set_outline_thickness(1.0);
        self.layer.add_rect(
            Rect::new(mm(x), mm(y), mm(x + width), mm(y + height)).with_mode(PaintMode::FillStroke),
        );
    }

    fn text(&self, text: &str, style: TextStyle, x: f32, y: f32) {
        let font = match style.face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
        };
        self.layer.set_fill_color(rgb(style.color));
        self.layer.use_text(text, style.size, mm(x), mm(y), font);
    }
}

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn rgb(hex: u32) -> Color {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Color::Rgb(Rgb::new(channel(16), channel(8), channel(0), None))
}

/// Room left under the baseline inside one line of leading.
fn descent(style: TextStyle) -> f32 {
    style.leading() - style.size * 0.95
}

/// Greedy word wrap. Words wider than the line are split by character.
/// Characters the builtin fonts cannot encode come out as `?`.
fn wrap(text: &str, style: TextStyle, max_width: f32) -> Vec<String> {
    let text: String = text.chars().map(encodable).collect();
    let mut lines = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, style) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            current.push(ch);
            if text_width(&current, style) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn text_width(text: &str, style: TextStyle) -> f32 {
    let units: u32 = text.chars().map(|ch| glyph_width(ch, style.face)).sum();
    units as f32 * style.size / 1000.0
}

/// The builtin fonts are WinAnsi encoded: ASCII, Latin-1 and a few
/// typographic extras. Anything else would be dropped silently when drawn.
fn encodable(ch: char) -> char {
    match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => ch,
        ch if extra_width(ch, Face::Regular).is_some() => ch,
        ch if ch.is_whitespace() => ' ',
        _ => '?',
    }
}

/// Advance widths of the standard Helvetica metrics, in 1/1000 em.
fn glyph_width(ch: char, face: Face) -> u32 {
    const REGULAR: [u16; 95] = [
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
    ];
    const BOLD: [u16; 95] = [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, //
    ];
    // U+00A0..U+00FF
    const LATIN1_REGULAR: [u16; 96] = [
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, //
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, //
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, //
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, //
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, //
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, //
    ];
    const LATIN1_BOLD: [u16; 96] = [
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, //
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, //
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, //
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, //
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, //
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, //
    ];

    let (ascii, latin1) = match face {
        Face::Regular => (&REGULAR, &LATIN1_REGULAR),
        Face::Bold => (&BOLD, &LATIN1_BOLD),
    };
    let width = match ch {
        ' '..='~' => ascii.get(ch as usize - 0x20).copied(),
        '\u{a0}'..='\u{ff}' => latin1.get(ch as usize - 0xa0).copied(),
        _ => extra_width(ch, face),
    };
    width.map_or(556, u32::from)
}

/// WinAnsi characters outside Latin-1.
fn extra_width(ch: char, face: Face) -> Option<u16> {
    let bold = face == Face::Bold;
    Some(match ch {
        '\u{2018}' | '\u{2019}' | '\u{201a}' => if bold { 278 } else { 222 },
        '\u{201c}' | '\u{201d}' | '\u{201e}' => if bold { 500 } else { 333 },
        '\u{2013}' | '\u{20ac}' => 556,
        '\u{2014}' | '\u{2026}' | '\u{2122}' | '\u{2030}' => 1000,
        '\u{2022}' => 350,
        _ => return None,
    })
}
