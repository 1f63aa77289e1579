//! Dealer contact details printed in the title and contact blocks.

use crate::common::error::{Error, Result};
use crate::layout::defaults;
use crate::listing::value::non_blank_or;
use serde::Serialize;
use serde_json::{Map, Value};

/// Dealer contact information.
///
/// Every field is a non-blank display string. Instances are immutable;
/// "updating" a dealer builds a new value (see [`crate::listing::merge`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DealerDetails {
    name: String,
    phone: String,
    email: String,
    website: String,
}

impl DealerDetails {
    /// Build a dealer from explicit values, rejecting blank fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use forecourt::listing::DealerDetails;
    ///
    /// let dealer =
    ///     DealerDetails::new("Acme Motors", "01632 960000", "hi@acme.test", "acme.test")?;
    /// assert_eq!(dealer.name(), "Acme Motors");
    /// assert!(DealerDetails::new("", "1", "e", "w").is_err());
    /// # Ok::<(), forecourt::Error>(())
    /// ```
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        website: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: require_non_blank("Dealer name", name.into())?,
            phone: require_non_blank("Dealer phone", phone.into())?,
            email: require_non_blank("Dealer email", email.into())?,
            website: require_non_blank("Dealer website", website.into())?,
        })
    }

    /// Decode a dealer from the untyped `dealer` object of the input.
    ///
    /// `None` or an empty object yields the default dealer. Otherwise each
    /// missing, `null` or blank field falls back to the default's value.
    pub fn from_map(data: Option<&Map<String, Value>>) -> Self {
        let Some(data) = data.filter(|m| !m.is_empty()) else {
            return Self::default();
        };

        Self {
            name: non_blank_or(data, "name", defaults::DEALER_NAME),
            phone: non_blank_or(data, "phone", defaults::DEALER_PHONE),
            email: non_blank_or(data, "email", defaults::DEALER_EMAIL),
            website: non_blank_or(data, "website", defaults::DEALER_WEBSITE),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Whether every field equals the placeholder dealer's.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for DealerDetails {
    /// Placeholder dealer used when the input names none.
    fn default() -> Self {
        Self {
            name: defaults::DEALER_NAME.to_string(),
            phone: defaults::DEALER_PHONE.to_string(),
            email: defaults::DEALER_EMAIL.to_string(),
            website: defaults::DEALER_WEBSITE.to_string(),
        }
    }
}

fn require_non_blank(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        Err(Error::BlankField { field })
    } else {
        Ok(value)
    }
}
