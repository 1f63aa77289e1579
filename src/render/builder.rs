//! Lays a vehicle listing out on a single slide.

use crate::common::error::Result;
use crate::layout::{self, color, font_size};
use crate::listing::{Choice, DealerDetails, VehicleListing};
use crate::ooxml::pptx::MutablePresentation;
use crate::render::canvas::{Alignment, SlideCanvas, TextRun};

/// Row labels of the specification table, top to bottom.
pub const TABLE_LABELS: [&str; layout::TABLE_ROWS] = [
    "Registration",
    "Year",
    "Gearbox",
    "Engine Size",
    "Fuel Type",
    "Owners",
    "Mileage",
    "ULEZ",
    "MOT Expiry",
    "Specs",
];

/// Issues the draw calls for a listing slide.
///
/// Drawing happens in three fixed phases: the title block (dealer name,
/// price pill, vehicle title), the specification table, then the contact
/// line. The same listing always produces the same calls in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationBuilder;

impl PresentationBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Draw `listing` onto `canvas`.
    pub fn build<C: SlideCanvas + ?Sized>(
        &self,
        listing: &VehicleListing,
        canvas: &mut C,
    ) -> Result<()> {
        log::debug!("drawing title block");
        self.draw_title_block(listing, canvas)?;
        log::debug!("drawing specification table");
        self.draw_table(listing, canvas)?;
        log::debug!("drawing contact block");
        self.draw_contact(listing.dealer(), canvas)?;
        Ok(())
    }

    fn draw_title_block<C: SlideCanvas + ?Sized>(
        &self,
        listing: &VehicleListing,
        canvas: &mut C,
    ) -> Result<()> {
        let dealer = canvas.add_text_box(layout::DEALER_NAME.to_emu(), Alignment::Left)?;
        canvas.set_text(
            dealer,
            Alignment::Left,
            &TextRun::new(listing.dealer().name(), font_size::DEALER_NAME)
                .bold(true)
                .color(color::TEXT),
        )?;

        let pill = canvas.add_filled_shape(
            layout::PRICE_PILL.to_emu(),
            color::PRICE_PILL,
            color::PRICE_PILL,
        )?;
        canvas.set_text(
            pill,
            Alignment::Center,
            &TextRun::new(listing.price(), font_size::PRICE)
                .bold(true)
                .color(color::PRICE_TEXT),
        )?;

        let title = canvas.add_text_box(layout::VEHICLE_TITLE.to_emu(), Alignment::Left)?;
        canvas.set_text(
            title,
            Alignment::Left,
            &TextRun::new(listing.title(), font_size::VEHICLE_TITLE)
                .bold(true)
                .color(color::TEXT),
        )?;
        Ok(())
    }

    fn draw_table<C: SlideCanvas + ?Sized>(
        &self,
        listing: &VehicleListing,
        canvas: &mut C,
    ) -> Result<()> {
        let table = canvas.add_table(
            layout::TABLE_ROWS,
            layout::TABLE_COLS,
            layout::TABLE.to_emu(),
        )?;
        for (col, width) in layout::TABLE_COLUMN_WIDTHS.iter().enumerate() {
            canvas.set_column_width(table, col, crate::common::unit::inches_to_emu(*width))?;
        }

        let insets = layout::CELL_INSETS.to_emu();
        for (row, (label, value)) in table_rows(listing).into_iter().enumerate() {
            canvas.set_cell_fill(table, row, 0, color::TABLE_HEADER)?;
            canvas.set_cell_insets(table, row, 0, insets)?;
            canvas.set_cell_text(
                table,
                row,
                0,
                Alignment::Left,
                &TextRun::new(label, font_size::TABLE)
                    .bold(true)
                    .color(color::TABLE_HEADER_TEXT)
                    .font(layout::TABLE_FONT),
            )?;

            canvas.set_cell_fill(table, row, 1, color::TABLE_VALUE)?;
            canvas.set_cell_insets(table, row, 1, insets)?;
            canvas.set_cell_text(
                table,
                row,
                1,
                Alignment::Left,
                &TextRun::new(value, font_size::TABLE)
                    .color(color::TABLE_VALUE_TEXT)
                    .font(layout::TABLE_FONT),
            )?;
        }
        Ok(())
    }

    fn draw_contact<C: SlideCanvas + ?Sized>(
        &self,
        dealer: &DealerDetails,
        canvas: &mut C,
    ) -> Result<()> {
        let contact = canvas.add_text_box(layout::CONTACT.to_emu(), Alignment::Center)?;
        canvas.set_text(
            contact,
            Alignment::Center,
            &TextRun::new(contact_line(dealer), font_size::CONTACT).color(color::TEXT),
        )
    }
}

/// Label and value of every specification table row, in display order.
pub fn table_rows(listing: &VehicleListing) -> [(&'static str, String); layout::TABLE_ROWS] {
    let values = [
        listing.registration().to_string(),
        listing.year().to_string(),
        listing.gearbox().display_name().to_string(),
        listing.engine_size().to_string(),
        listing.fuel_type().display_name().to_string(),
        listing.owners().to_string(),
        listing.mileage().to_string(),
        listing.ulez().display_name().to_string(),
        listing.mot_expiry().to_string(),
        listing.specs_joined(),
    ];
    let mut labels = TABLE_LABELS.into_iter();
    values.map(|value| (labels.next().unwrap_or_default(), value))
}

/// The dealer contact line shown at the foot of the slide.
///
/// ```
/// use forecourt::listing::DealerDetails;
/// use forecourt::render::builder::contact_line;
///
/// assert_eq!(
///     contact_line(&DealerDetails::default()),
///     "Call: 0000 000 0000  |  Email: sales@example.com  |  Web: www.example.com"
/// );
/// ```
pub fn contact_line(dealer: &DealerDetails) -> String {
    format!(
        "Call: {}  |  Email: {}  |  Web: {}",
        dealer.phone(),
        dealer.email(),
        dealer.website()
    )
}

/// Render `listing` into a new single-slide presentation.
pub fn render_listing(listing: &VehicleListing) -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    let slide = pres.add_slide()?;
    PresentationBuilder::new().build(listing, slide)?;
    Ok(pres)
}
