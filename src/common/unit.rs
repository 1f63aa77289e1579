//! Unit conversion utilities.
//!
//! Layout is authored in inches and font sizes in points; DrawingML wants
//! English Metric Units for geometry and hundredths of a point for text.

pub const EMUS_PER_INCH: i64 = 914_400;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Font size in the `sz` attribute unit (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}
