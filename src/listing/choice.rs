//! Closed enumerations with lenient, case-insensitive parsing.
//!
//! Each variant has a stable identifier (`AUTOMATIC`) and a display label
//! (`Automatic`). Parsing trims the input and matches either form ignoring
//! ASCII case; there is no prefix matching.

use crate::common::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Behaviour shared by the listing's enumerated fields.
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// Field name used in validation errors.
    const FIELD: &'static str;

    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// Stable upper-case identifier.
    fn identifier(self) -> &'static str;

    /// Human-facing label, as printed on the slide.
    fn display_name(self) -> &'static str;

    /// Match `raw` against every variant's display label and identifier.
    ///
    /// Returns `None` for blank input or when nothing matches.
    fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim();
        if normalized.is_empty() {
            return None;
        }
        Self::VARIANTS.iter().copied().find(|variant| {
            variant.display_name().eq_ignore_ascii_case(normalized)
                || variant.identifier().eq_ignore_ascii_case(normalized)
        })
    }

    /// [`Choice::parse`], falling back to `fallback` for absent, blank or unknown input.
    fn parse_or_default(raw: Option<&str>, fallback: Self) -> Self {
        raw.and_then(Self::parse).unwrap_or(fallback)
    }

    /// Display labels of every variant, in declaration order.
    fn accepted() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.display_name()).collect()
    }

    /// Parse or fail with an error naming the field, the value and the accepted labels.
    fn parse_strict(raw: &str) -> Result<Self> {
        Self::parse(raw).ok_or_else(|| Error::InvalidChoice {
            field: Self::FIELD,
            value: raw.to_string(),
            accepted: Self::accepted(),
        })
    }
}

macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, default = $default:ident,
        { $($variant:ident => ($ident:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Choice for $name {
            const FIELD: &'static str = $field;
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn identifier(self) -> &'static str {
                match self {
                    $(Self::$variant => $ident,)+
                }
            }

            #[inline]
            fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.display_name())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_strict(s)
            }
        }
    };
}

define_choice! {
    /// Transmission type.
    Gearbox, field = "Gearbox", default = Automatic,
    {
        Automatic => ("AUTOMATIC", "Automatic"),
        Manual => ("MANUAL", "Manual"),
    }
}

define_choice! {
    /// Fuel type.
    FuelType, field = "Fuel type", default = Diesel,
    {
        Petrol => ("PETROL", "Petrol"),
        Diesel => ("DIESEL", "Diesel"),
        Hybrid => ("HYBRID", "Hybrid"),
        Electric => ("ELECTRIC", "Electric"),
    }
}

define_choice! {
    /// Ultra Low Emission Zone compliance.
    UlezStatus, field = "ULEZ status", default = Unknown,
    {
        Yes => ("YES", "Yes"),
        No => ("NO", "No"),
        Unknown => ("UNKNOWN", "Unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn assert_labels_unique<C: Choice>() {
        let labels: HashSet<_> = C::VARIANTS.iter().map(|v| v.display_name()).collect();
        assert_eq!(labels.len(), C::VARIANTS.len());
    }

    #[test]
    fn test_display_labels_unique() {
        assert_labels_unique::<Gearbox>();
        assert_labels_unique::<FuelType>();
        assert_labels_unique::<UlezStatus>();
    }

    #[test]
    fn test_parse_accepts_label_and_identifier() {
        assert_eq!(Gearbox::parse("Manual"), Some(Gearbox::Manual));
        assert_eq!(Gearbox::parse("MANUAL"), Some(Gearbox::Manual));
        assert_eq!(FuelType::parse("  electric \t"), Some(FuelType::Electric));
        assert_eq!(UlezStatus::parse("unknown"), Some(UlezStatus::Unknown));
    }

    #[test]
    fn test_parse_rejects_blank_and_unknown() {
        assert_eq!(Gearbox::parse(""), None);
        assert_eq!(Gearbox::parse("   "), None);
        assert_eq!(Gearbox::parse("not-a-value"), None);
        assert_eq!(FuelType::parse("Pet"), None);
        assert_eq!(UlezStatus::parse("Y"), None);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(Gearbox::parse_or_default(None, Gearbox::Automatic), Gearbox::Automatic);
        assert_eq!(Gearbox::parse_or_default(Some(""), Gearbox::Manual), Gearbox::Manual);
        assert_eq!(
            FuelType::parse_or_default(Some("hybrid"), FuelType::Diesel),
            FuelType::Hybrid
        );
        assert_eq!(
            FuelType::parse_or_default(Some("steam"), FuelType::Diesel),
            FuelType::Diesel
        );
    }

    #[test]
    fn test_parse_strict_error_shape() {
        let err = Gearbox::parse_strict("CVT").unwrap_err();
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
    fn test_from_str_and_display() {
        let fuel: FuelType = "petrol".parse().unwrap();
        assert_eq!(fuel.to_string(), "Petrol");
        assert!("LPG".parse::<FuelType>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Gearbox::default(), Gearbox::Automatic);
        assert_eq!(FuelType::default(), FuelType::Diesel);
        assert_eq!(UlezStatus::default(), UlezStatus::Unknown);
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&UlezStatus::Yes).unwrap(), "\"Yes\"");
    }

    fn flip_case(s: &str, mask: &[bool]) -> String {
        s.chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| {
                if *upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_label_and_identifier_agree(
            idx in 0usize..4,
            mask in proptest::collection::vec(any::<bool>(), 1..12),
            lead in "[ \t]{0,3}",
            trail in "[ \t]{0,3}",
        ) {
            let fuel = FuelType::VARIANTS[idx];
            let by_label = format!("{lead}{}{trail}", flip_case(fuel.display_name(), &mask));
            let by_ident = format!("{lead}{}{trail}", flip_case(fuel.identifier(), &mask));
            prop_assert_eq!(FuelType::parse(&by_label), Some(fuel));
            prop_assert_eq!(FuelType::parse(&by_ident), Some(fuel));
        }

        #[test]
        fn prop_parse_never_matches_foreign_words(raw in "[a-z]{1,10}") {
            let known = ["automatic", "manual"];
            prop_assume!(!known.contains(&raw.as_str()));
            prop_assert_eq!(Gearbox::parse(&raw), None);
        }
    }
}
