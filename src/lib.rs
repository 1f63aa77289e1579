//! Forecourt - editable PowerPoint slides for vehicle listings
//!
//! Turns a vehicle listing (from JSON and/or command-line overrides) into a
//! single-slide `.pptx` with the dealer name, a price pill, the vehicle
//! title, a ten-row specification table and a contact line.
//!
//! # Architecture
//!
//! - [`listing`]: the validated domain model and the explicit override merge
//! - [`input`]: JSON loading
//! - [`layout`]: fixed geometry, palette and font sizes
//! - [`render`]: the [`render::SlideCanvas`] abstraction and the builder that draws on it
//! - [`ooxml`]: the PresentationML writer (a slide is a canvas) and a reader for checks
//! - [`cli`]: argument parsing and the end-to-end run used by `generate-ppt`
//!
//! # Example
//!
//! ```no_run
//! use forecourt::input::parse_listing;
//! use forecourt::render::builder::render_listing;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let listing = parse_listing(r#"{"title": "2019 Ford Focus", "price": "£9,995"}"#)?;
//! let pres = render_listing(&listing)?;
//! pres.save("focus.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod common;
pub mod input;
pub mod layout;
pub mod listing;
pub mod ooxml;
pub mod render;

pub use common::{Error, Result};
