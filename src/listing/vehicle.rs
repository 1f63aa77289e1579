//! The vehicle listing aggregate rendered onto the slide.

use crate::common::error::{Error, Result};
use crate::layout::defaults;
use crate::listing::choice::{Choice, FuelType, Gearbox, UlezStatus};
use crate::listing::dealer::DealerDetails;
use crate::listing::value::{get_string, string_list, string_or};
use serde::Serialize;
use serde_json::{Map, Value};

/// A vehicle listing with its dealer.
///
/// [`Default`] leaves every scalar empty, with enumerations at their default
/// variant and the placeholder dealer; [`VehicleListing::with_defaults`] fills
/// the scalars with their display defaults as well.
///
/// Scalar fields are free-form display strings and are printed as given.
/// `gearbox`, `fuel_type` and `ulez` are always one of their closed sets,
/// `specs` is always present (possibly empty) and `dealer` is always a
/// complete [`DealerDetails`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VehicleListing {
    title: String,
    price: String,
    registration: String,
    year: String,
    gearbox: Gearbox,
    engine_size: String,
    fuel_type: FuelType,
    mileage: String,
    ulez: UlezStatus,
    mot_expiry: String,
    owners: String,
    specs: Vec<String>,
    dealer: DealerDetails,
}

impl VehicleListing {
    /// Build a listing from already-typed values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        registration: impl Into<String>,
        year: impl Into<String>,
        gearbox: Gearbox,
        engine_size: impl Into<String>,
        fuel_type: FuelType,
        mileage: impl Into<String>,
        ulez: UlezStatus,
        mot_expiry: impl Into<String>,
        owners: impl Into<String>,
        specs: &[String],
        dealer: DealerDetails,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            registration: registration.into(),
            year: year.into(),
            gearbox,
            engine_size: engine_size.into(),
            fuel_type,
            mileage: mileage.into(),
            ulez,
            mot_expiry: mot_expiry.into(),
            owners: owners.into(),
            specs: specs.to_vec(),
            dealer,
        }
    }

    /// Decode a listing from the untyped top-level input object.
    ///
    /// `None` yields [`VehicleListing::with_defaults`]. Missing or `null`
    /// scalar fields take their documented defaults; an enumerated field
    /// that is present and non-blank but matches no variant is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use forecourt::listing::{Gearbox, VehicleListing};
    /// use serde_json::json;
    ///
    /// let data = json!({"gearbox": "manual", "specs": ["Sat Nav", "Heated Seats"]});
    /// let listing = VehicleListing::from_map(data.as_object())?;
    /// assert_eq!(listing.gearbox(), Gearbox::Manual);
    /// assert_eq!(listing.specs_joined(), "Sat Nav, Heated Seats");
    ///
    /// let bad = json!({"gearbox": "CVT"});
    /// assert!(VehicleListing::from_map(bad.as_object()).is_err());
    /// # Ok::<(), forecourt::Error>(())
    /// ```
    pub fn from_map(data: Option<&Map<String, Value>>) -> Result<Self> {
        let Some(data) = data else {
            return Ok(Self::with_defaults());
        };

        let specs = match data.get("specs") {
            None | Some(Value::Null) => Vec::new(),
            Some(_) => string_list(data, "specs").unwrap_or_else(|| {
                log::warn!("ignoring 'specs': expected an array");
                Vec::new()
            }),
        };

        let dealer = match data.get("dealer") {
            None | Some(Value::Null) => DealerDetails::default(),
            Some(Value::Object(map)) => DealerDetails::from_map(Some(map)),
            Some(_) => {
                log::warn!("ignoring 'dealer': expected an object");
                DealerDetails::default()
            },
        };

        Ok(Self {
            title: string_or(data, "title", defaults::TITLE),
            price: string_or(data, "price", defaults::PRICE),
            registration: string_or(data, "registration", defaults::REGISTRATION),
            year: string_or(data, "year", defaults::YEAR),
            gearbox: choice_field(data, "gearbox")?,
            engine_size: string_or(data, "engine_size", defaults::ENGINE_SIZE),
            fuel_type: choice_field(data, "fuel_type")?,
            mileage: string_or(data, "mileage", defaults::MILEAGE),
            ulez: choice_field(data, "ulez")?,
            mot_expiry: string_or(data, "mot_expiry", defaults::MOT_EXPIRY),
            owners: string_or(data, "owners", defaults::OWNERS),
            specs,
            dealer,
        })
    }

    /// The listing used when no input is supplied: every field at its documented default.
    pub fn with_defaults() -> Self {
        Self {
            title: defaults::TITLE.to_string(),
            price: defaults::PRICE.to_string(),
            registration: defaults::REGISTRATION.to_string(),
            year: defaults::YEAR.to_string(),
            gearbox: Gearbox::default(),
            engine_size: defaults::ENGINE_SIZE.to_string(),
            fuel_type: FuelType::default(),
            mileage: defaults::MILEAGE.to_string(),
            ulez: UlezStatus::default(),
            mot_expiry: defaults::MOT_EXPIRY.to_string(),
            owners: defaults::OWNERS.to_string(),
            specs: Vec::new(),
            dealer: DealerDetails::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn set_registration(&mut self, registration: impl Into<String>) {
        self.registration = registration.into();
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.year = year.into();
    }

    pub fn gearbox(&self) -> Gearbox {
        self.gearbox
    }

    pub fn set_gearbox(&mut self, gearbox: Gearbox) {
        self.gearbox = gearbox;
    }

    /// Set the gearbox from free text, failing if it names no variant.
    pub fn set_gearbox_str(&mut self, raw: &str) -> Result<()> {
        self.gearbox = Gearbox::parse_strict(raw)?;
        Ok(())
    }

    pub fn engine_size(&self) -> &str {
        &self.engine_size
    }

    pub fn set_engine_size(&mut self, engine_size: impl Into<String>) {
        self.engine_size = engine_size.into();
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    pub fn set_fuel_type(&mut self, fuel_type: FuelType) {
        self.fuel_type = fuel_type;
    }

    /// Set the fuel type from free text, failing if it names no variant.
    pub fn set_fuel_type_str(&mut self, raw: &str) -> Result<()> {
        self.fuel_type = FuelType::parse_strict(raw)?;
        Ok(())
    }

    pub fn mileage(&self) -> &str {
        &self.mileage
    }

    pub fn set_mileage(&mut self, mileage: impl Into<String>) {
        self.mileage = mileage.into();
    }

    pub fn ulez(&self) -> UlezStatus {
        self.ulez
    }

    pub fn set_ulez(&mut self, ulez: UlezStatus) {
        self.ulez = ulez;
    }

    /// Set the ULEZ status from free text, failing if it names no variant.
    pub fn set_ulez_str(&mut self, raw: &str) -> Result<()> {
        self.ulez = UlezStatus::parse_strict(raw)?;
        Ok(())
    }

    pub fn mot_expiry(&self) -> &str {
        &self.mot_expiry
    }

    pub fn set_mot_expiry(&mut self, mot_expiry: impl Into<String>) {
        self.mot_expiry = mot_expiry.into();
    }

    pub fn owners(&self) -> &str {
        &self.owners
    }

    pub fn set_owners(&mut self, owners: impl Into<String>) {
        self.owners = owners.into();
    }

    /// Feature bullet points, in input order.
    pub fn specs(&self) -> &[String] {
        &self.specs
    }

    /// Replace the feature list with a copy of `specs`.
    pub fn set_specs(&mut self, specs: &[String]) {
        self.specs = specs.to_vec();
    }

    /// Feature list as printed in the specification table.
    pub fn specs_joined(&self) -> String {
        self.specs.join(", ")
    }

    pub fn dealer(&self) -> &DealerDetails {
        &self.dealer
    }

    pub fn set_dealer(&mut self, dealer: DealerDetails) {
        self.dealer = dealer;
    }
}

/// Read an enumerated field: absent or blank takes the variant's default,
/// anything else must parse.
fn choice_field<C: Choice + Default>(data: &Map<String, Value>, key: &str) -> Result<C> {
    match get_string(data, key) {
        Some(raw) if !raw.trim().is_empty() => C::parse(&raw).ok_or_else(|| Error::InvalidChoice {
            field: C::FIELD,
            value: raw,
            accepted: C::accepted(),
        }),
        _ => Ok(C::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(value: Value) -> Result<VehicleListing> {
        VehicleListing::from_map(value.as_object())
    }

    #[test]
    fn test_from_none_uses_defaults() {
        let listing = VehicleListing::from_map(None).unwrap();
        assert_eq!(listing.title(), "Vehicle Title");
        assert_eq!(listing.price(), "Price on enquiry");
        assert_eq!(listing.registration(), "Registration");
        assert_eq!(listing.year(), "Year");
        assert_eq!(listing.engine_size(), "2.0 L");
        assert_eq!(listing.mileage(), "0");
        assert_eq!(listing.mot_expiry(), "Unknown");
        assert_eq!(listing.owners(), "Unknown");
        assert_eq!(listing.gearbox(), Gearbox::Automatic);
        assert_eq!(listing.fuel_type(), FuelType::Diesel);
        assert_eq!(listing.ulez(), UlezStatus::Unknown);
        assert!(listing.specs().is_empty());
        assert!(listing.dealer().is_default());
    }

    #[test]
    fn test_default_leaves_scalars_empty() {
        let listing = VehicleListing::default();
        assert_eq!(listing.title(), "");
        assert_eq!(listing.mileage(), "");
        assert_eq!(listing.gearbox(), Gearbox::Automatic);
        assert!(listing.dealer().is_default());
    }

    #[test]
    fn test_empty_object_matches_none() {
        assert_eq!(listing(json!({})).unwrap(), VehicleListing::with_defaults());
    }

    #[test]
    fn test_gearbox_case_insensitive() {
        let listing = listing(json!({"gearbox": "manual"})).unwrap();
        assert_eq!(listing.gearbox(), Gearbox::Manual);
    }

    #[test]
    fn test_invalid_gearbox_fails() {
        let err = listing(json!({"gearbox": "CVT"})).unwrap_err();
        match err {
            Error::InvalidChoice {
                field,
                value,
                accepted,
            } => {
                assert_eq!(field, "Gearbox");
                assert_eq!(value, "CVT");
                assert_eq!(accepted, vec!["Automatic", "Manual"]);
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_fuel_and_ulez_fail() {
        let err = listing(json!({"fuel_type": "LPG"})).unwrap_err();
        assert!(err.to_string().contains("Fuel type"));
        assert!(err.to_string().contains("Petrol, Diesel, Hybrid, Electric"));

        let err = listing(json!({"ulez": "maybe"})).unwrap_err();
        assert!(err.to_string().contains("ULEZ"));
    }

    #[test]
    fn test_blank_choice_takes_default() {
        let listing = listing(json!({"fuel_type": "  ", "ulez": null})).unwrap();
        assert_eq!(listing.fuel_type(), FuelType::Diesel);
        assert_eq!(listing.ulez(), UlezStatus::Unknown);
    }

    #[test]
    fn test_specs_preserve_order() {
        let listing = listing(json!({"specs": ["Sat Nav", "Heated Seats"]})).unwrap();
        assert_eq!(listing.specs(), ["Sat Nav", "Heated Seats"]);
        assert_eq!(listing.specs_joined(), "Sat Nav, Heated Seats");
    }

    #[test]
    fn test_non_array_specs_ignored() {
        let listing = listing(json!({"specs": "Sat Nav"})).unwrap();
        assert!(listing.specs().is_empty());
        assert_eq!(listing.specs_joined(), "");
    }

    #[test]
    fn test_unknown_keys_ignored_and_scalars_stringified() {
        let listing = listing(json!({"year": 2019, "mileage": 42000, "colour": "Red"})).unwrap();
        assert_eq!(listing.year(), "2019");
        assert_eq!(listing.mileage(), "42000");
    }

    #[test]
    fn test_nested_dealer() {
        let listing = listing(json!({"dealer": {"name": "Acme Motors"}})).unwrap();
        assert_eq!(listing.dealer().name(), "Acme Motors");
        assert_eq!(listing.dealer().phone(), "0000 000 0000");

        let listing =
            super::VehicleListing::from_map(json!({"dealer": "Acme"}).as_object()).unwrap();
        assert!(listing.dealer().is_default());
    }

    #[test]
    fn test_string_setters_validate() {
        let mut listing = VehicleListing::with_defaults();
        listing.set_gearbox_str("MANUAL").unwrap();
        listing.set_fuel_type_str(" electric ").unwrap();
        listing.set_ulez_str("yes").unwrap();
        assert_eq!(listing.gearbox(), Gearbox::Manual);
        assert_eq!(listing.fuel_type(), FuelType::Electric);
        assert_eq!(listing.ulez(), UlezStatus::Yes);

        let err = listing.set_ulez_str("sometimes").unwrap_err();
        assert!(err.to_string().contains("Yes, No, Unknown"));
        assert_eq!(listing.ulez(), UlezStatus::Yes);
    }

    #[test]
    fn test_set_specs_copies() {
        let mut specs = vec!["Bluetooth".to_string()];
        let mut listing = VehicleListing::with_defaults();
        listing.set_specs(&specs);
        specs.push("Towbar".to_string());
        assert_eq!(listing.specs(), ["Bluetooth"]);
    }

    #[test]
    fn test_serializes_labels() {
        let json = serde_json::to_value(VehicleListing::with_defaults()).unwrap();
        assert_eq!(json["gearbox"], "Automatic");
        assert_eq!(json["fuel_type"], "Diesel");
        assert_eq!(json["dealer"]["name"], "Your Dealership");
    }
}
