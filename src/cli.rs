//! Command-line interface for the `generate-ppt` binary.

use crate::common::error::Result;
use crate::input::load_listing;
use crate::listing::{DealerOverrides, VehicleOverrides, merge};
use crate::render::builder::render_listing;
use clap::Parser;
use std::path::PathBuf;

/// Generate an editable single-slide PowerPoint vehicle listing
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "generate-ppt",
    about = "Generate an editable PowerPoint slide for a vehicle listing",
    long_about = "Builds a single-slide .pptx with the dealer name, price, vehicle title,\n\
                  a specification table and the dealer's contact details.\n\
                  Values come from an optional JSON file; flags override individual fields.",
    version
)]
pub struct Args {
    /// JSON file describing the vehicle
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the presentation
    #[arg(short, long, value_name = "PATH", default_value = "vehicle.pptx")]
    pub output: PathBuf,

    /// Vehicle title, e.g. "2019 Ford Focus 1.0 EcoBoost"
    #[arg(long)]
    pub title: Option<String>,

    /// Price as displayed, e.g. "£9,995"
    #[arg(long)]
    pub price: Option<String>,

    #[arg(long)]
    pub registration: Option<String>,

    #[arg(long)]
    pub year: Option<String>,

    /// Gearbox: Automatic or Manual
    #[arg(long)]
    pub gearbox: Option<String>,

    /// Engine size, e.g. "1.6 L"
    #[arg(long)]
    pub engine_size: Option<String>,

    /// Fuel type: Petrol, Diesel, Hybrid or Electric
    #[arg(long)]
    pub fuel_type: Option<String>,

    #[arg(long)]
    pub mileage: Option<String>,

    /// ULEZ compliance: Yes, No or Unknown
    #[arg(long)]
    pub ulez: Option<String>,

    /// MOT expiry date
    #[arg(long)]
    pub mot_expiry: Option<String>,

    /// Number of previous owners
    #[arg(long)]
    pub owners: Option<String>,

    /// Feature bullet points; replaces the input file's list when non-empty
    #[arg(long, num_args = 0..)]
    pub specs: Vec<String>,

    #[arg(long)]
    pub dealer_name: Option<String>,

    #[arg(long)]
    pub dealer_phone: Option<String>,

    #[arg(long)]
    pub dealer_email: Option<String>,

    #[arg(long)]
    pub dealer_website: Option<String>,

    /// Log each drawing and packaging step
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The field overrides carried by these arguments.
    pub fn to_overrides(&self) -> VehicleOverrides {
        VehicleOverrides {
            title: self.title.clone(),
            price: self.price.clone(),
            registration: self.registration.clone(),
            year: self.year.clone(),
            gearbox: self.gearbox.clone(),
            engine_size: self.engine_size.clone(),
            fuel_type: self.fuel_type.clone(),
            mileage: self.mileage.clone(),
            ulez: self.ulez.clone(),
            mot_expiry: self.mot_expiry.clone(),
            owners: self.owners.clone(),
            specs: (!self.specs.is_empty()).then(|| self.specs.clone()),
            dealer: DealerOverrides {
                name: self.dealer_name.clone(),
                phone: self.dealer_phone.clone(),
                email: self.dealer_email.clone(),
                website: self.dealer_website.clone(),
            },
        }
    }
}

/// Load, merge, render and save. Returns the path written.
pub fn run(args: &Args) -> Result<PathBuf> {
    let base = load_listing(args.input.as_deref())?;
    let listing = merge(&base, &args.to_overrides())?;

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("effective listing: {}", serde_json::to_string(&listing)?);
    }

    if listing.dealer().is_default() {
        log::info!("no dealer details given, using placeholder dealer");
    }

    let mut pres = render_listing(&listing)?;
    pres.set_title(listing.title());
    pres.save(&args.output)?;

    log::info!("saved {}", args.output.display());
    Ok(args.output.clone())
}
