//! Text formatting for DrawingML paragraphs and runs.

use crate::common::color::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::render::canvas::{Alignment, TextRun};
use std::fmt::Write as FmtWrite;

/// Text formatting properties for a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Latin typeface
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Solid text colour
    pub color: Option<RGBColor>,
}

impl TextFormat {
    /// Write `<a:rPr>`.
    ///
    /// Child order follows CT_TextCharacterProperties: fill before `a:latin`.
    pub(crate) fn write_run_properties(&self, xml: &mut String) -> Result<()> {
        xml.push_str(r#"<a:rPr lang="en-GB" dirty="0""#);

        if let Some(size) = self.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }

        match self.bold {
            Some(true) => xml.push_str(r#" b="1""#),
            Some(false) => xml.push_str(r#" b="0""#),
            None => {},
        }

        if self.color.is_none() && self.font.is_none() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');

        if let Some(color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }

        if let Some(ref font) = self.font {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
        }

        xml.push_str("</a:rPr>");
        Ok(())
    }
}

impl From<&TextRun> for TextFormat {
    fn from(run: &TextRun) -> Self {
        Self {
            font: run.font.clone(),
            size: Some(run.size),
            bold: Some(run.bold),
            color: Some(run.color),
        }
    }
}

/// Soft line break within a paragraph, written as `<a:br>`.
pub const LINE_BREAK: char = '\u{B}';

/// A paragraph of uniformly formatted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub align: Alignment,
    pub format: TextFormat,
}

impl Paragraph {
    pub fn from_run(align: Alignment, run: &TextRun) -> Self {
        Self {
            text: run.text.clone(),
            align,
            format: TextFormat::from(run),
        }
    }

    /// Write `<a:p>`.
    ///
    /// A vertical tab in the text becomes an `<a:br>` soft line break; each
    /// segment between breaks is its own run with the same formatting.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        write!(xml, r#"<a:p><a:pPr algn="{}"/>"#, self.align.as_ooxml())?;

        for (i, segment) in self.text.split(LINE_BREAK).enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                self.format.write_run_properties(xml)?;
                xml.push_str("</a:br>");
            }
            xml.push_str("<a:r>");
            self.format.write_run_properties(xml)?;
            write!(xml, "<a:t>{}</a:t></a:r>", escape_xml(segment))?;
        }

        xml.push_str("</a:p>");
        Ok(())
    }

    /// An empty paragraph, required wherever a text body has no content yet.
    pub(crate) fn write_empty(xml: &mut String, align: Alignment) -> Result<()> {
        write!(
            xml,
            r#"<a:p><a:pPr algn="{}"/><a:endParaRPr lang="en-GB" dirty="0"/></a:p>"#,
            align.as_ooxml()
        )?;
        Ok(())
    }
}
