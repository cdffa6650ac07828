//! Fitting text into form field boxes.
//!
//! The entry point is [`Fitter`](crate::layout::Fitter), which searches for the
//! largest font size at which a value fits inside a field, wrapping it at word
//! boundaries when the field allows it. The lower-level pieces it is built from,
//! [`wrap_text`](crate::layout::wrap_text) and
//! [`clip_to_width`](crate::layout::clip_to_width), are exposed as well.
//!
//! # Example
//!
//! ```
//! use form_fit::{FieldBox, FontLibrary, Pt, TextSpec};
//! use form_fit::layout::{Fitter, Padding};
//!
//! let fonts = FontLibrary::new();
//! let fitter = Fitter::new(&fonts);
//!
//! let field = FieldBox::new(Pt(72.0), Pt(600.0), Pt(144.0), Pt(18.0))
//!     .with_padding(Padding::all(Pt(2.0)));
//! let spec = TextSpec::new("Jane Q. Public", "Helv");
//!
//! let plan = fitter.resolve(&field, &spec).expect("field has room");
//! assert!(!plan.truncated);
//! assert!(plan.size <= Pt(24.0));
//! ```

mod fit;
mod options;
mod padding;
mod text;

pub use fit::*;
pub use options::*;
pub use padding::*;
pub use text::*;
