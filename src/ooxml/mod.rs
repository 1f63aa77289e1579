//! Office Open XML support.
//!
//! Only the pieces needed to emit (and read back) a PresentationML package:
//!
//! - [`opc`]: Open Packaging Conventions container writing
//! - [`pptx`]: presentation, slide and shape writers plus a slide inspector

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
