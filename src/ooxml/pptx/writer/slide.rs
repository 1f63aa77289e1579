/// Slide types and implementation for PPTX presentations.
use crate::common::color::RGBColor;
use crate::common::error::Result as CrateResult;
use crate::layout::{EmuInsets, EmuRect};
use crate::ooxml::error::{OoxmlError, Result};
use crate::render::canvas::{Alignment, ShapeHandle, SlideCanvas, TableHandle, TextRun};

use super::super::format::Paragraph;
use super::shape::MutableShape;
use super::table::MutableTable;

/// Anything placed in a slide's shape tree, in drawing order.
#[derive(Debug, Clone)]
pub enum SlideElement {
    Shape(MutableShape),
    Table(MutableTable),
}

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Shapes and tables on the slide
    pub(crate) elements: Vec<SlideElement>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            elements: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn elements(&self) -> &[SlideElement] {
        &self.elements
    }

    // IDs: 1 = the shape tree itself, 2+ = elements
    fn next_shape_id(&self) -> u32 {
        self.elements.len() as u32 + 2
    }

    fn push(&mut self, element: SlideElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    fn shape_mut(&mut self, handle: ShapeHandle) -> Result<&mut MutableShape> {
        match self.elements.get_mut(handle.0) {
            Some(SlideElement::Shape(shape)) => Ok(shape),
            _ => Err(OoxmlError::InvalidShape(format!(
                "no shape with handle {}",
                handle.0
            ))),
        }
    }

    fn table_mut(&mut self, handle: TableHandle) -> Result<&mut MutableTable> {
        match self.elements.get_mut(handle.0) {
            Some(SlideElement::Table(table)) => Ok(table),
            _ => Err(OoxmlError::InvalidShape(format!(
                "no table with handle {}",
                handle.0
            ))),
        }
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(8192);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for element in &self.elements {
            match element {
                SlideElement::Shape(shape) => shape.to_xml(&mut xml)?,
                SlideElement::Table(table) => table.to_xml(&mut xml)?,
            }
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

impl SlideCanvas for MutableSlide {
    fn add_text_box(&mut self, rect: EmuRect, align: Alignment) -> CrateResult<ShapeHandle> {
        let shape = MutableShape::new_text_box(self.next_shape_id(), rect, align);
        Ok(ShapeHandle(self.push(SlideElement::Shape(shape))))
    }

    fn add_filled_shape(
        &mut self,
        rect: EmuRect,
        fill: RGBColor,
        border: RGBColor,
    ) -> CrateResult<ShapeHandle> {
        let shape = MutableShape::new_rectangle(self.next_shape_id(), rect, fill, border);
        Ok(ShapeHandle(self.push(SlideElement::Shape(shape))))
    }

    fn set_text(&mut self, shape: ShapeHandle, align: Alignment, run: &TextRun) -> CrateResult<()> {
        self.shape_mut(shape)?
            .set_paragraph(Paragraph::from_run(align, run));
        Ok(())
    }

    fn add_table(&mut self, rows: usize, cols: usize, rect: EmuRect) -> CrateResult<TableHandle> {
        let table = MutableTable::new(self.next_shape_id(), rows, cols, rect)?;
        Ok(TableHandle(self.push(SlideElement::Table(table))))
    }

    fn set_column_width(&mut self, table: TableHandle, col: usize, width: i64) -> CrateResult<()> {
        self.table_mut(table)?.set_column_width(col, width)?;
        Ok(())
    }

    fn set_cell_fill(
        &mut self,
        table: TableHandle,
        row: usize,
        col: usize,
        fill: RGBColor,
    ) -> CrateResult<()> {
        self.table_mut(table)?.cell_mut(row, col)?.fill = Some(fill);
        Ok(())
    }

    fn set_cell_insets(
        &mut self,
        table: TableHandle,
        row: usize,
        col: usize,
        insets: EmuInsets,
    ) -> CrateResult<()> {
        self.table_mut(table)?.cell_mut(row, col)?.insets = Some(insets);
        Ok(())
    }

    fn set_cell_text(
        &mut self,
        table: TableHandle,
        row: usize,
        col: usize,
        align: Alignment,
        run: &TextRun,
    ) -> CrateResult<()> {
        self.table_mut(table)?.cell_mut(row, col)?.paragraph =
            Some(Paragraph::from_run(align, run));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;

    const RECT: EmuRect = EmuRect {
        x: 0,
        y: 0,
        cx: 914_400,
        cy: 914_400,
    };

    #[test]
    fn test_handles_and_ids() {
        let mut slide = MutableSlide::new(256);
        let text = slide.add_text_box(RECT, Alignment::Left).unwrap();
        let table = slide.add_table(2, 2, RECT).unwrap();
        assert_eq!(text, ShapeHandle(0));
        assert_eq!(table, TableHandle(1));
        assert_eq!(slide.elements().len(), 2);

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="Table 2"/>"#));
    }

    #[test]
    fn test_wrong_handle_kind_is_rejected() {
        let mut slide = MutableSlide::new(256);
        let table = slide.add_table(1, 1, RECT).unwrap();
        let err = slide
            .set_text(ShapeHandle(table.0), Alignment::Left, &TextRun::new("x", 10.0))
            .unwrap_err();
        assert!(matches!(err, Error::Ooxml(OoxmlError::InvalidShape(_))));
        assert!(slide.set_cell_fill(TableHandle(5), 0, 0, RGBColor::BLACK).is_err());
    }

    #[test]
    fn test_elements_serialize_in_order() {
        let mut slide = MutableSlide::new(256);
        slide.add_filled_shape(RECT, RGBColor::BLACK, RGBColor::BLACK).unwrap();
        slide.add_table(1, 1, RECT).unwrap();
        slide.add_text_box(RECT, Alignment::Center).unwrap();

        let xml = slide.to_xml().unwrap();
        let rect = xml.find("Rectangle").unwrap();
        let table = xml.find("<p:graphicFrame>").unwrap();
        let text = xml.find("TextBox").unwrap();
        assert!(rect < table && table < text);
    }
}
