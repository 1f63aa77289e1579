//! Tables rendered as `p:graphicFrame` elements.

use crate::common::color::RGBColor;
use crate::layout::{EmuInsets, EmuRect};
use crate::ooxml::error::{OoxmlError, Result};
use crate::render::canvas::Alignment;
use std::fmt::Write as FmtWrite;

use super::super::format::Paragraph;

const TABLE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

/// A single table cell.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    pub(crate) fill: Option<RGBColor>,
    pub(crate) insets: Option<EmuInsets>,
    pub(crate) paragraph: Option<Paragraph>,
}

impl TableCell {
    pub fn text(&self) -> Option<&str> {
        self.paragraph.as_ref().map(|p| p.text.as_str())
    }

    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    pub fn insets(&self) -> Option<EmuInsets> {
        self.insets
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
        match &self.paragraph {
            Some(paragraph) => paragraph.write_xml(xml)?,
            None => Paragraph::write_empty(xml, Alignment::Left)?,
        }
        xml.push_str("</a:txBody>");

        xml.push_str("<a:tcPr");
        if let Some(insets) = self.insets {
            write!(
                xml,
                r#" marL="{}" marR="{}" marT="{}" marB="{}""#,
                insets.left, insets.right, insets.top, insets.bottom
            )?;
        }
        xml.push_str(r#" anchor="ctr">"#);
        if let Some(fill) = self.fill {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                fill.to_hex()
            )?;
        }
        xml.push_str("</a:tcPr></a:tc>");
        Ok(())
    }
}

/// A table with fixed dimensions.
///
/// Column widths and row heights start as an even split of the frame; the
/// last column and row absorb any rounding remainder.
#[derive(Debug, Clone)]
pub struct MutableTable {
    pub(crate) shape_id: u32,
    rect: EmuRect,
    col_widths: Vec<i64>,
    row_heights: Vec<i64>,
    rows: Vec<Vec<TableCell>>,
}

impl MutableTable {
    pub(crate) fn new(shape_id: u32, rows: usize, cols: usize, rect: EmuRect) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(OoxmlError::InvalidShape(format!(
                "table must have at least one row and column, got {rows}x{cols}"
            )));
        }

        Ok(Self {
            shape_id,
            rect,
            col_widths: split_evenly(rect.cx, cols),
            row_heights: split_evenly(rect.cy, rows),
            rows: vec![vec![TableCell::default(); cols]; rows],
        })
    }

    pub fn rect(&self) -> EmuRect {
        self.rect
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn set_column_width(&mut self, col: usize, width: i64) -> Result<()> {
        let count = self.col_widths.len();
        let slot = self.col_widths.get_mut(col).ok_or_else(|| {
            OoxmlError::InvalidShape(format!("column {col} out of range (0..{count})"))
        })?;
        *slot = width;
        Ok(())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.get(col)
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut TableCell> {
        let (rows, cols) = (self.row_count(), self.column_count());
        self.rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| {
                OoxmlError::InvalidShape(format!("cell ({row}, {col}) outside {rows}x{cols} table"))
            })
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:graphicFrame>");
        xml.push_str("<p:nvGraphicFramePr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="Table {}"/>"#,
            self.shape_id,
            self.shape_id - 1
        )?;
        xml.push_str(
            r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#,
        );
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGraphicFramePr>");

        xml.push_str("<p:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.rect.x, self.rect.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.rect.cx, self.rect.cy)?;
        xml.push_str("</p:xfrm>");

        write!(xml, r#"<a:graphic><a:graphicData uri="{TABLE_URI}"><a:tbl>"#)?;
        xml.push_str(r#"<a:tblPr firstRow="1" bandRow="1"/>"#);
        xml.push_str("<a:tblGrid>");
        for width in &self.col_widths {
            write!(xml, r#"<a:gridCol w="{width}"/>"#)?;
        }
        xml.push_str("</a:tblGrid>");

        for (cells, height) in self.rows.iter().zip(&self.row_heights) {
            write!(xml, r#"<a:tr h="{height}">"#)?;
            for cell in cells {
                cell.to_xml(xml)?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl></a:graphicData></a:graphic>");
        xml.push_str("</p:graphicFrame>");
        Ok(())
    }
}

fn split_evenly(total: i64, parts: usize) -> Vec<i64> {
    let n = parts as i64;
    let each = total / n;
    let mut sizes = vec![each; parts];
    if let Some(last) = sizes.last_mut() {
        *last += total - each * n;
    }
    sizes
}
