//! Drawing surface abstraction.

use crate::common::color::RGBColor;
use crate::common::error::Result;
use crate::layout::{EmuInsets, EmuRect};
use serde::Serialize;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

impl Alignment {
    /// Value of the DrawingML `algn` attribute.
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
        }
    }

    pub fn from_ooxml(value: &str) -> Option<Self> {
        match value {
            "l" => Some(Self::Left),
            "ctr" => Some(Self::Center),
            _ => None,
        }
    }
}

/// A single run of styled text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    /// Size in points.
    pub size: f64,
    pub bold: bool,
    pub color: RGBColor,
    /// Latin typeface; `None` inherits the theme font.
    pub font: Option<String>,
}

impl TextRun {
    pub fn new(text: impl Into<String>, size: f64) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            color: RGBColor::BLACK,
            font: None,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}

/// Handle to a shape previously added to a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShapeHandle(pub usize);

/// Handle to a table previously added to a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TableHandle(pub usize);

/// The drawing capabilities the presentation builder needs.
///
/// Geometry is in EMUs. Handles are only valid on the canvas that issued
/// them; passing a foreign or out-of-range handle is an error.
pub trait SlideCanvas {
    /// Add an unfilled text box.
    fn add_text_box(&mut self, rect: EmuRect, align: Alignment) -> Result<ShapeHandle>;

    /// Add a rectangle with a solid fill and outline.
    fn add_filled_shape(
        &mut self,
        rect: EmuRect,
        fill: RGBColor,
        border: RGBColor,
    ) -> Result<ShapeHandle>;

    /// Replace a shape's text with a single paragraph holding `run`.
    fn set_text(&mut self, shape: ShapeHandle, align: Alignment, run: &TextRun) -> Result<()>;

    /// Add an empty `rows` × `cols` table.
    fn add_table(&mut self, rows: usize, cols: usize, rect: EmuRect) -> Result<TableHandle>;

    fn set_column_width(&mut self, table: TableHandle, col: usize, width: i64) -> Result<()>;

    fn set_cell_fill(
        &mut self,
        table: TableHandle,
        row: usize,
        col: usize,
        fill: RGBColor,
    ) -> Result<()>;

    fn set_cell_insets(
        &mut self,
        table: TableHandle,
        row: usize,
        col: usize,
        insets: EmuInsets,
    ) -> Result<()>;

    fn set_cell_text(
        &mut self,
        table: TableHandle,
        row: usize,
        col: usize,
        align: Alignment,
        run: &TextRun,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_round_trip() {
        for align in [Alignment::Left, Alignment::Center] {
            assert_eq!(Alignment::from_ooxml(align.as_ooxml()), Some(align));
        }
        assert_eq!(Alignment::from_ooxml("just"), None);
    }

    #[test]
    fn test_text_run_builder() {
        let run = TextRun::new("Gearbox", 20.0)
            .bold(true)
            .color(RGBColor::WHITE)
            .font("Calibri");
        assert!(run.bold);
        assert_eq!(run.color, RGBColor::WHITE);
        assert_eq!(run.font.as_deref(), Some("Calibri"));
    }
}
