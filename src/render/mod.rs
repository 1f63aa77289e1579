//! Turning a validated listing into draw operations.
//!
//! [`builder::PresentationBuilder`] knows the slide layout; [`canvas::SlideCanvas`]
//! is the only thing it talks to, so the layout can be exercised without
//! producing a document.

pub mod builder;
pub mod canvas;

pub use builder::PresentationBuilder;
pub use canvas::{Alignment, ShapeHandle, SlideCanvas, TableHandle, TextRun};
