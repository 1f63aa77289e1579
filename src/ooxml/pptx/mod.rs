//! PowerPoint (.pptx) presentation writing.
//!
//! [`MutablePresentation`] holds slides in memory; each [`MutableSlide`]
//! implements [`crate::render::SlideCanvas`], so the listing builder draws
//! directly onto it. [`inspect`] reads a written package back for checks.
//!
//! ```rust
//! use forecourt::ooxml::pptx::{MutablePresentation, inspect::inspect_pptx};
//! use forecourt::layout::Rect;
//! use forecourt::render::{Alignment, SlideCanvas, TextRun};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide()?;
//! let shape = slide.add_text_box(Rect::new(0.5, 0.5, 4.0, 1.0).to_emu(), Alignment::Left)?;
//! slide.set_text(shape, Alignment::Left, &TextRun::new("Hello", 24.0))?;
//!
//! let slides = inspect_pptx(&pres.to_bytes()?)?;
//! assert_eq!(slides[0].texts(), vec!["Hello"]);
//! # Ok::<(), forecourt::Error>(())
//! ```

pub mod format;
pub mod inspect;
pub mod template;
pub mod writer;

pub use format::{Paragraph, TextFormat};
pub use inspect::{CellSummary, ShapeSummary, SlideSummary, inspect_pptx, inspect_pptx_file};
pub use writer::{
    MutablePresentation, MutableShape, MutableSlide, MutableTable, SlideElement, TableCell,
};
