//! Field-by-field overrides applied on top of a loaded listing.

use crate::common::error::Result;
use crate::listing::dealer::DealerDetails;
use crate::listing::vehicle::VehicleListing;

/// Optional replacements for the dealer's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerOverrides {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

impl DealerOverrides {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.website.is_none()
    }
}

/// Optional replacements for a [`VehicleListing`].
///
/// `None` keeps the base value. The enumerated fields are carried as raw
/// strings and validated during [`merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleOverrides {
    pub title: Option<String>,
    pub price: Option<String>,
    pub registration: Option<String>,
    pub year: Option<String>,
    pub gearbox: Option<String>,
    pub engine_size: Option<String>,
    pub fuel_type: Option<String>,
    pub mileage: Option<String>,
    pub ulez: Option<String>,
    pub mot_expiry: Option<String>,
    pub owners: Option<String>,
    pub specs: Option<Vec<String>>,
    pub dealer: DealerOverrides,
}

/// Apply `overrides` to `base`, returning a new listing.
///
/// Override values win wherever present. Dealer fields merge one by one,
/// so an unset or blank dealer override keeps the base dealer's value.
/// Enumerated overrides must name a variant.
///
/// # Examples
///
/// ```
/// use forecourt::listing::{merge, DealerOverrides, Gearbox, VehicleListing, VehicleOverrides};
///
/// let base = VehicleListing::with_defaults();
/// let overrides = VehicleOverrides {
///     gearbox: Some("manual".into()),
///     dealer: DealerOverrides { name: Some("Acme Motors".into()), ..Default::default() },
///     ..Default::default()
/// };
/// let merged = merge(&base, &overrides)?;
/// assert_eq!(merged.gearbox(), Gearbox::Manual);
/// assert_eq!(merged.dealer().name(), "Acme Motors");
/// assert_eq!(merged.dealer().phone(), base.dealer().phone());
/// # Ok::<(), forecourt::Error>(())
/// ```
pub fn merge(base: &VehicleListing, overrides: &VehicleOverrides) -> Result<VehicleListing> {
    let mut merged = base.clone();

    if let Some(title) = &overrides.title {
        merged.set_title(title.as_str());
    }
    if let Some(price) = &overrides.price {
        merged.set_price(price.as_str());
    }
    if let Some(registration) = &overrides.registration {
        merged.set_registration(registration.as_str());
    }
    if let Some(year) = &overrides.year {
        merged.set_year(year.as_str());
    }
    if let Some(gearbox) = &overrides.gearbox {
        merged.set_gearbox_str(gearbox)?;
    }
    if let Some(engine_size) = &overrides.engine_size {
        merged.set_engine_size(engine_size.as_str());
    }
    if let Some(fuel_type) = &overrides.fuel_type {
        merged.set_fuel_type_str(fuel_type)?;
    }
    if let Some(mileage) = &overrides.mileage {
        merged.set_mileage(mileage.as_str());
    }
    if let Some(ulez) = &overrides.ulez {
        merged.set_ulez_str(ulez)?;
    }
    if let Some(mot_expiry) = &overrides.mot_expiry {
        merged.set_mot_expiry(mot_expiry.as_str());
    }
    if let Some(owners) = &overrides.owners {
        merged.set_owners(owners.as_str());
    }
    if let Some(specs) = &overrides.specs {
        merged.set_specs(specs);
    }

    if !overrides.dealer.is_empty() {
        let current = base.dealer();
        let dealer = &overrides.dealer;
        merged.set_dealer(DealerDetails::new(
            non_blank(dealer.name.as_deref()).unwrap_or(current.name()),
            non_blank(dealer.phone.as_deref()).unwrap_or(current.phone()),
            non_blank(dealer.email.as_deref()).unwrap_or(current.email()),
            non_blank(dealer.website.as_deref()).unwrap_or(current.website()),
        )?);
    }

    Ok(merged)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
