use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
///
/// Text that is too long for its field is _not_ an error: the resolver always
/// produces a plan, flagging it as truncated instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// The field box has no usable area once its padding is removed
    #[error("field box is degenerate ({width} x {height} after padding)")]
    DegenerateBox { width: Pt, height: Pt },

    /// The metrics provider does not know the requested font family
    #[error("no font metrics available for font family `{0}`")]
    FontMetricsUnavailable(String),

    /// A [`TextSpec`](crate::TextSpec) was built with a size range that is empty, non-positive, or larger than [`TextSpec::LARGEST_SIZE`](crate::TextSpec::LARGEST_SIZE)
    #[error("invalid font size range {min}..={max}")]
    InvalidSizeRange { min: Pt, max: Pt },

    /// [owned_ttf_parser] failed to parse the font
    #[error("failed to parse font face: {0}")]
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    /// A loaded font face has no family name to register it under
    #[error("font face does not declare a family name")]
    MissingFamilyName,
}

impl FitError {
    /// Whether this error came from an unknown font, and so may succeed with a
    /// substitute font family
    pub fn is_font_unavailable(&self) -> bool {
        matches!(self, FitError::FontMetricsUnavailable(_))
    }
}
