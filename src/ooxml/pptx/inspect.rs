//! Reading generated presentations back.
//!
//! Only the shape-level structure is recovered: shape kind, text, solid
//! fill and paragraph alignment, plus cell text and fill for tables. This
//! is enough to check a listing slide without a presentation application.

use crate::common::color::RGBColor;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::format::LINE_BREAK;
use crate::render::canvas::Alignment;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::Serialize;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Shapes of one slide, in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlideSummary {
    pub shapes: Vec<ShapeSummary>,
}

impl SlideSummary {
    pub fn tables(&self) -> impl Iterator<Item = &[Vec<CellSummary>]> {
        self.shapes.iter().filter_map(|shape| match shape {
            ShapeSummary::Table { cells } => Some(cells.as_slice()),
            _ => None,
        })
    }

    /// Text of every non-table shape, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.shapes.iter().filter_map(ShapeSummary::text).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ShapeSummary {
    TextBox {
        text: String,
        align: Option<Alignment>,
    },
    AutoShape {
        text: String,
        fill: Option<RGBColor>,
        align: Option<Alignment>,
    },
    Table {
        cells: Vec<Vec<CellSummary>>,
    },
}

impl ShapeSummary {
    /// Paragraphs joined by newlines, soft breaks as `\u{B}`; `None` for tables.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::TextBox { text, .. } | Self::AutoShape { text, .. } => Some(text),
            Self::Table { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellSummary {
    pub text: String,
    pub fill: Option<RGBColor>,
}

/// Summarize every slide of a .pptx package, ordered by slide number.
pub fn inspect_pptx(bytes: &[u8]) -> Result<Vec<SlideSummary>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    slides.sort();

    let mut summaries = Vec::with_capacity(slides.len());
    for (_, name) in slides {
        let mut file = archive.by_name(&name)?;
        let mut xml = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut xml)?;
        summaries.push(parse_slide(&xml)?);
    }

    Ok(summaries)
}

/// [`inspect_pptx`] on a file.
pub fn inspect_pptx_file<P: AsRef<Path>>(path: P) -> Result<Vec<SlideSummary>> {
    inspect_pptx(&std::fs::read(path)?)
}

fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Summarize a single slide part.
pub fn parse_slide(xml: &[u8]) -> Result<SlideSummary> {
    let mut reader = Reader::from_reader(xml);
    let mut parser = SlideParser::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                parser.open(&e)?;
                parser.stack.push(e.local_name().as_ref().to_vec());
            },
            Event::Empty(e) => parser.open(&e)?,
            Event::End(e) => {
                parser.stack.pop();
                parser.close(e.local_name().as_ref());
            },
            Event::Text(e) => {
                let text = std::str::from_utf8(&e).map_err(|e| OoxmlError::Xml(e.to_string()))?;
                parser.text(text);
            },
            Event::GeneralRef(e) => {
                let name = std::str::from_utf8(&e).map_err(|e| OoxmlError::Xml(e.to_string()))?;
                parser.text(&format!("&{name};"));
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(SlideSummary {
        shapes: parser.shapes,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    TextBox,
    AutoShape,
    Frame,
}

#[derive(Debug, Default)]
struct CellBuilder {
    paragraphs: Vec<String>,
    fill: Option<RGBColor>,
}

#[derive(Debug)]
struct ShapeBuilder {
    kind: ShapeKind,
    paragraphs: Vec<String>,
    fill: Option<RGBColor>,
    align: Option<Alignment>,
    table: Option<Vec<Vec<CellBuilder>>>,
}

impl ShapeBuilder {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            paragraphs: Vec::new(),
            fill: None,
            align: None,
            table: None,
        }
    }

    fn current_cell(&mut self) -> Option<&mut CellBuilder> {
        self.table.as_mut()?.last_mut()?.last_mut()
    }

    fn paragraphs_mut(&mut self) -> &mut Vec<String> {
        match self
            .table
            .as_mut()
            .and_then(|rows| rows.last_mut())
            .and_then(|row| row.last_mut())
        {
            Some(cell) => &mut cell.paragraphs,
            None => &mut self.paragraphs,
        }
    }

    fn finish(self) -> Option<ShapeSummary> {
        let text = self.paragraphs.join("\n");
        match self.kind {
            ShapeKind::TextBox => Some(ShapeSummary::TextBox {
                text,
                align: self.align,
            }),
            ShapeKind::AutoShape => Some(ShapeSummary::AutoShape {
                text,
                fill: self.fill,
                align: self.align,
            }),
            ShapeKind::Frame => self.table.map(|rows| ShapeSummary::Table {
                cells: rows
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|cell| CellSummary {
                                text: cell.paragraphs.join("\n"),
                                fill: cell.fill,
                            })
                            .collect()
                    })
                    .collect(),
            }),
        }
    }
}

#[derive(Debug, Default)]
struct SlideParser {
    stack: Vec<Vec<u8>>,
    shapes: Vec<ShapeSummary>,
    current: Option<ShapeBuilder>,
}

impl SlideParser {
    fn parent_is(&self, name: &[u8]) -> bool {
        self.stack.last().is_some_and(|n| n == name)
    }

    fn within(&self, name: &[u8]) -> bool {
        self.stack.iter().any(|n| n == name)
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let local = e.local_name();
        let name = local.as_ref();

        match name {
            b"sp" => self.current = Some(ShapeBuilder::new(ShapeKind::AutoShape)),
            b"graphicFrame" => self.current = Some(ShapeBuilder::new(ShapeKind::Frame)),
            _ => {},
        }

        let in_cell = self.within(b"tc");
        let in_shape_props = self.within(b"spPr") && !self.within(b"ln");
        let in_cell_props = self.within(b"tcPr");
        let fill_context = self.parent_is(b"solidFill");

        let Some(shape) = self.current.as_mut() else {
            return Ok(());
        };

        match name {
            b"cNvSpPr" => {
                if attr(e, b"txBox")?.as_deref() == Some("1") {
                    shape.kind = ShapeKind::TextBox;
                }
            },
            b"tbl" => shape.table = Some(Vec::new()),
            b"tr" => {
                if let Some(rows) = shape.table.as_mut() {
                    rows.push(Vec::new());
                }
            },
            b"tc" => {
                if let Some(row) = shape.table.as_mut().and_then(|rows| rows.last_mut()) {
                    row.push(CellBuilder::default());
                }
            },
            b"p" => shape.paragraphs_mut().push(String::new()),
            b"br" => {
                if let Some(paragraph) = shape.paragraphs_mut().last_mut() {
                    paragraph.push(LINE_BREAK);
                }
            },
            b"pPr" => {
                if !in_cell && shape.align.is_none() {
                    shape.align = attr(e, b"algn")?.as_deref().and_then(Alignment::from_ooxml);
                }
            },
            b"srgbClr" if fill_context => {
                let color = attr(e, b"val")?.as_deref().and_then(RGBColor::from_hex);
                if in_cell_props {
                    if let Some(cell) = shape.current_cell() {
                        cell.fill = cell.fill.or(color);
                    }
                } else if in_shape_props {
                    shape.fill = shape.fill.or(color);
                }
            },
            _ => {},
        }

        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        if matches!(name, b"sp" | b"graphicFrame") {
            if let Some(summary) = self.current.take().and_then(ShapeBuilder::finish) {
                self.shapes.push(summary);
            }
        }
    }

    fn text(&mut self, raw: &str) {
        if !self.parent_is(b"t") {
            return;
        }
        if let Some(shape) = self.current.as_mut() {
            let paragraphs = shape.paragraphs_mut();
            if paragraphs.is_empty() {
                paragraphs.push(String::new());
            }
            if let Some(last) = paragraphs.last_mut() {
                last.push_str(&unescape_xml(raw));
            }
        }
    }
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == key {
            let value =
                std::str::from_utf8(&attr.value).map_err(|e| OoxmlError::Xml(e.to_string()))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}
