//! Unified error type for forecourt.
//!
//! Errors raised while decoding listing input, validating enumerated choices,
//! drawing on the slide canvas or writing the package all surface through
//! [`Error`], so the binary can map them onto exit codes in one place.
use std::path::PathBuf;
use thiserror::Error;

use crate::ooxml::error::OoxmlError;

/// Main error type for forecourt operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A gearbox, fuel type or ULEZ value did not match any accepted variant
    #[error("Invalid {field} value: '{value}'. Must be one of: {}", .accepted.join(", "))]
    InvalidChoice {
        field: &'static str,
        value: String,
        accepted: Vec<&'static str>,
    },

    /// A directly constructed record carried an empty or whitespace-only field
    #[error("{field} cannot be blank")]
    BlankField { field: &'static str },

    /// The input file does not exist
    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input was readable but does not describe a vehicle
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the presentation writer
    #[error(transparent)]
    Ooxml(#[from] OoxmlError),
}

impl Error {
    /// Whether this error was caused by user-supplied data rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidChoice { .. }
                | Self::BlankField { .. }
                | Self::InputNotFound(_)
                | Self::InvalidInput(_)
        )
    }
}

/// Result type for forecourt operations.
pub type Result<T> = std::result::Result<T, Error>;
