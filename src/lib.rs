//! Deterministic auto-sizing of text into PDF form (AcroForm) text fields.
//!
//! Given the box a field occupies and the value to put in it, [`layout::Fitter`]
//! picks the largest font size at which the value fits, wrapping it at word
//! boundaries if the field allows it, and produces a [`layout::RenderPlan`]. The
//! plan can then be drawn into the field's appearance stream with the
//! [`appearance`] module, or many fields can be resolved at once with [`batch`].

mod colour;
pub use colour::*;

/// Drawing render plans into field appearance streams
pub mod appearance;

/// Resolving many (row, field) pairs at once
pub mod batch;

mod error;
pub use error::*;

mod field;
pub use field::*;

mod font;
pub use font::*;

/// Utility functions and structures to fit text into field boxes
pub mod layout;

mod metrics;
pub use metrics::*;

mod rect;
pub use rect::*;

/// Metrics for the standard PDF fonts
pub mod standard_fonts;

mod units;
pub use units::*;

mod visibility;
pub use visibility::*;

/// Re-export PDF-writer functionality, for writing appearance streams into documents
pub use pdf_writer;
