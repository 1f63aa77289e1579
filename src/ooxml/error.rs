//! Error types for OOXML package writing and reading.

use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Malformed part name
    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    /// A canvas handle or table cell reference that does not exist on the slide
    #[error("Invalid shape reference: {0}")]
    InvalidShape(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
