/// Shape types and implementation for PPTX presentations.
use crate::common::color::RGBColor;
use crate::layout::EmuRect;
use crate::ooxml::error::Result;
use crate::render::canvas::Alignment;
use std::fmt::Write as FmtWrite;

use super::super::format::Paragraph;

/// A shape on a slide (text box or filled rectangle).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
    /// Alignment used while the shape has no text
    pub(crate) align: Alignment,
    /// Text content, if any
    pub(crate) paragraph: Option<Paragraph>,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        rect: EmuRect,
    },
    Rectangle {
        rect: EmuRect,
        fill: RGBColor,
        line: RGBColor,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(shape_id: u32, rect: EmuRect, align: Alignment) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox { rect },
            align,
            paragraph: None,
        }
    }

    /// Create a new rectangle with a solid fill and outline.
    pub(crate) fn new_rectangle(
        shape_id: u32,
        rect: EmuRect,
        fill: RGBColor,
        line: RGBColor,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Rectangle { rect, fill, line },
            align: Alignment::Center,
            paragraph: None,
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn rect(&self) -> EmuRect {
        match self.shape_type {
            ShapeType::TextBox { rect } | ShapeType::Rectangle { rect, .. } => rect,
        }
    }

    /// Text content, if set.
    pub fn text(&self) -> Option<&str> {
        self.paragraph.as_ref().map(|p| p.text.as_str())
    }

    pub(crate) fn set_paragraph(&mut self, paragraph: Paragraph) {
        self.align = paragraph.align;
        self.paragraph = Some(paragraph);
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox { rect } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
                xml.push_str("<a:lstStyle/>");
                self.write_paragraph(xml)?;
                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Rectangle { rect, fill, line } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    fill.to_hex()
                )?;
                write!(
                    xml,
                    r#"<a:ln><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                    line.to_hex()
                )?;
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
                xml.push_str("<a:lstStyle/>");
                self.write_paragraph(xml)?;
                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }

    fn write_paragraph(&self, xml: &mut String) -> Result<()> {
        match &self.paragraph {
            Some(paragraph) => paragraph.write_xml(xml),
            None => Paragraph::write_empty(xml, self.align),
        }
    }
}

pub(crate) fn write_xfrm(xml: &mut String, rect: &EmuRect) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.x, rect.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.cx, rect.cy)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}
