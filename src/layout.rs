//! Fixed slide geometry, palette and typography.
//!
//! Geometry is authored in inches and converted to EMUs once, at the
//! canvas boundary, through [`Rect::to_emu`].

use crate::common::color::RGBColor;
use crate::common::unit::inches_to_emu;
use serde::Serialize;

/// An axis-aligned rectangle in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to English Metric Units.
    pub fn to_emu(self) -> EmuRect {
        EmuRect {
            x: inches_to_emu(self.x),
            y: inches_to_emu(self.y),
            cx: inches_to_emu(self.width),
            cy: inches_to_emu(self.height),
        }
    }
}

/// A rectangle in EMUs, named after DrawingML's `a:off`/`a:ext` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EmuRect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Inner padding of a table cell, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub fn to_emu(self) -> EmuInsets {
        EmuInsets {
            left: inches_to_emu(self.left),
            right: inches_to_emu(self.right),
            top: inches_to_emu(self.top),
            bottom: inches_to_emu(self.bottom),
        }
    }
}

/// Cell padding in EMUs, matching `a:tcPr`'s `marL`/`marR`/`marT`/`marB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EmuInsets {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

pub const SLIDE_WIDTH: f64 = 10.0;
pub const SLIDE_HEIGHT: f64 = 7.5;

pub const DEALER_NAME: Rect = Rect::new(0.5, 0.3, 6.5, 0.8);
pub const PRICE_PILL: Rect = Rect::new(7.5, 0.3, 2.0, 0.8);
pub const VEHICLE_TITLE: Rect = Rect::new(0.5, 1.2, 9.0, 0.7);
pub const TABLE: Rect = Rect::new(0.5, 2.0, 9.0, 6.5);
// Sits below the 7.5in slide edge; kept where existing listings put it.
pub const CONTACT: Rect = Rect::new(0.5, 8.7, 9.0, 0.6);

pub const CELL_INSETS: Insets = Insets {
    left: 0.1,
    right: 0.1,
    top: 0.05,
    bottom: 0.05,
};

pub const TABLE_ROWS: usize = 10;
pub const TABLE_COLS: usize = 2;
/// Label and value column widths; together they span [`TABLE`].
pub const TABLE_COLUMN_WIDTHS: [f64; TABLE_COLS] = [3.2, 5.8];
pub const TABLE_FONT: &str = "Calibri";

/// Palette.
pub mod color {
    use super::RGBColor;

    pub const TEXT: RGBColor = RGBColor::BLACK;
    pub const PRICE_PILL: RGBColor = RGBColor::from_u32(0xF70000);
    pub const PRICE_TEXT: RGBColor = RGBColor::WHITE;
    pub const TABLE_HEADER: RGBColor = RGBColor::from_u32(0x003864);
    pub const TABLE_HEADER_TEXT: RGBColor = RGBColor::WHITE;
    pub const TABLE_VALUE: RGBColor = RGBColor::from_u32(0xECECEC);
    pub const TABLE_VALUE_TEXT: RGBColor = RGBColor::BLACK;
}

/// Font sizes in points.
pub mod font_size {
    pub const DEALER_NAME: f64 = 36.0;
    pub const PRICE: f64 = 32.0;
    pub const VEHICLE_TITLE: f64 = 36.0;
    pub const TABLE: f64 = 20.0;
    pub const CONTACT: f64 = 18.0;
}

/// Display defaults for listing fields missing from the input.
pub mod defaults {
    pub const TITLE: &str = "Vehicle Title";
    pub const PRICE: &str = "Price on enquiry";
    pub const REGISTRATION: &str = "Registration";
    pub const YEAR: &str = "Year";
    pub const ENGINE_SIZE: &str = "2.0 L";
    pub const MILEAGE: &str = "0";
    pub const MOT_EXPIRY: &str = "Unknown";
    pub const OWNERS: &str = "Unknown";

    pub const DEALER_NAME: &str = "Your Dealership";
    pub const DEALER_PHONE: &str = "0000 000 0000";
    pub const DEALER_EMAIL: &str = "sales@example.com";
    pub const DEALER_WEBSITE: &str = "www.example.com";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_to_emu() {
        assert_eq!(
            DEALER_NAME.to_emu(),
            EmuRect {
                x: 457_200,
                y: 274_320,
                cx: 5_943_600,
                cy: 731_520,
            }
        );
        assert_eq!(CONTACT.to_emu().y, 7_955_280);
    }

    #[test]
    fn test_cell_insets_to_emu() {
        let insets = CELL_INSETS.to_emu();
        assert_eq!((insets.left, insets.right), (91_440, 91_440));
        assert_eq!((insets.top, insets.bottom), (45_720, 45_720));
    }

    #[test]
    fn test_columns_span_table() {
        let total: f64 = TABLE_COLUMN_WIDTHS.iter().sum();
        assert!((total - TABLE.width).abs() < 1e-9);
    }

    #[test]
    fn test_title_block_fits_slide_width() {
        for rect in [DEALER_NAME, PRICE_PILL, VEHICLE_TITLE, TABLE, CONTACT] {
            assert!(rect.x + rect.width <= SLIDE_WIDTH);
        }
    }

    #[test]
    fn test_palette() {
        assert_eq!(color::TABLE_HEADER.to_hex(), "003864");
        assert_eq!(color::TABLE_VALUE.to_hex(), "ECECEC");
        assert_eq!(color::PRICE_PILL.to_hex(), "F70000");
    }
}
