//! Loading listing input from JSON.

use crate::common::error::{Error, Result};
use crate::listing::VehicleListing;
use serde_json::Value;
use std::path::Path;

/// Load a listing from an optional JSON file.
///
/// `None` yields [`VehicleListing::with_defaults`]. The file must hold a
/// single JSON object; unknown keys are ignored.
pub fn load_listing(path: Option<&Path>) -> Result<VehicleListing> {
    let Some(path) = path else {
        return Ok(VehicleListing::with_defaults());
    };

    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    log::debug!("reading listing from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_listing(&content)
}

/// Decode a listing from JSON text.
pub fn parse_listing(content: &str) -> Result<VehicleListing> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => VehicleListing::from_map(Some(&map)),
        _ => Err(Error::InvalidInput(
            "Input JSON must describe a single vehicle object.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Gearbox;
    use std::io::Write;

    #[test]
    fn test_no_path_uses_defaults() {
        assert_eq!(load_listing(None).unwrap(), VehicleListing::with_defaults());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_listing(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(p) if p == path));
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "2019 Ford Focus", "gearbox": "manual"}}"#).unwrap();
        let listing = load_listing(Some(file.path())).unwrap();
        assert_eq!(listing.title(), "2019 Ford Focus");
        assert_eq!(listing.gearbox(), Gearbox::Manual);
    }

    #[test]
    fn test_rejects_non_object() {
        let err = parse_listing("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_listing("{\"title\": ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
