//! The inputs of a single fit: where the text goes, and what the text is.

use crate::error::FitError;
use crate::layout::Padding;
use crate::rect::Rect;
use crate::units::Pt;

/// The rectangle a single form field widget occupies on its page, in PDF page
/// coordinates, along with the padding kept clear inside its border.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldBox {
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
    pub padding: Padding,
}

impl FieldBox {
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> FieldBox {
        FieldBox {
            x,
            y,
            width,
            height,
            padding: Padding::empty(),
        }
    }

    /// Build a box from a widget's `/Rect` array
    pub fn from_rect(rect: Rect) -> FieldBox {
        FieldBox::new(rect.x1, rect.y1, rect.width(), rect.height())
    }

    pub fn with_padding(mut self, padding: Padding) -> FieldBox {
        self.padding = padding;
        self
    }

    /// The outer rectangle in page coordinates
    pub fn rect(&self) -> Rect {
        Rect {
            x1: self.x,
            y1: self.y,
            x2: self.x + self.width,
            y2: self.y + self.height,
        }
    }

    /// The area left for text once padding is removed, relative to the box's own
    /// lower-left corner (the coordinate space of its appearance stream).
    ///
    /// Fails if that area is empty, negative, or not finite.
    pub fn content_area(&self) -> Result<Rect, FitError> {
        let width = self.width - self.padding.horizontal();
        let height = self.height - self.padding.vertical();
        // written so that NaN falls through to the error as well
        if !(width.0 > 0.0 && height.0 > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(FitError::DegenerateBox { width, height });
        }

        Ok(Rect {
            x1: self.padding.left,
            y1: self.padding.bottom,
            x2: self.padding.left + width,
            y2: self.padding.bottom + height,
        })
    }
}

/// What to render into a field, and the constraints on how to render it
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub value: String,
    pub family: String,
    pub wrap: bool,
    min_size: Pt,
    max_size: Pt,
}

impl TextSpec {
    pub const DEFAULT_MIN_SIZE: Pt = Pt(6.0);
    pub const DEFAULT_MAX_SIZE: Pt = Pt(24.0);
    /// The largest size a range may reach. No field on a real page is this tall,
    /// and it bounds the number of sizes a resolve can try.
    pub const LARGEST_SIZE: Pt = Pt(1000.0);

    /// Single-line text using the default 6..=24pt size range
    pub fn new<V: Into<String>, F: Into<String>>(value: V, family: F) -> TextSpec {
        TextSpec {
            value: value.into(),
            family: family.into(),
            wrap: false,
            min_size: TextSpec::DEFAULT_MIN_SIZE,
            max_size: TextSpec::DEFAULT_MAX_SIZE,
        }
    }

    /// Allow (or forbid) wrapping the value over multiple lines
    pub fn wrapped(mut self, wrap: bool) -> TextSpec {
        self.wrap = wrap;
        self
    }

    /// Restrict the font sizes the resolver may choose from. Both ends are
    /// inclusive; a range that is empty, non-positive, or reaches past
    /// [`LARGEST_SIZE`](Self::LARGEST_SIZE) is rejected.
    pub fn with_size_range<A: Into<Pt>, B: Into<Pt>>(
        mut self,
        min: A,
        max: B,
    ) -> Result<TextSpec, FitError> {
        let (min, max) = (min.into(), max.into());
        if !(min.0 > 0.0 && min <= max && max <= TextSpec::LARGEST_SIZE) {
            return Err(FitError::InvalidSizeRange { min, max });
        }
        self.min_size = min;
        self.max_size = max;
        Ok(self)
    }

    pub fn min_size(&self) -> Pt {
        self.min_size
    }

    pub fn max_size(&self) -> Pt {
        self.max_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_shrinks_the_content_area() {
        let field = FieldBox::new(Pt(100.0), Pt(700.0), Pt(200.0), Pt(20.0))
            .with_padding(Padding::symmetric(Pt(1.0), Pt(2.0)));
        let area = field.content_area().expect("box has room");
        assert_eq!(area.x1, Pt(2.0));
        assert_eq!(area.y1, Pt(1.0));
        assert_eq!(area.width(), Pt(196.0));
        assert_eq!(area.height(), Pt(18.0));
    }

    #[test]
    fn padding_can_eat_the_whole_box() {
        let field =
            FieldBox::new(Pt(0.0), Pt(0.0), Pt(10.0), Pt(4.0)).with_padding(Padding::all(Pt(2.0)));
        assert_eq!(
            field.content_area(),
            Err(FitError::DegenerateBox {
                width: Pt(6.0),
                height: Pt(0.0)
            })
        );
    }

    #[test]
    fn nan_boxes_are_degenerate() {
        let field = FieldBox::new(Pt(0.0), Pt(0.0), Pt(f32::NAN), Pt(10.0));
        assert!(matches!(
            field.content_area(),
            Err(FitError::DegenerateBox { .. })
        ));
    }

    #[test]
    fn size_range_is_validated() {
        assert!(TextSpec::new("x", "Helv")
            .with_size_range(Pt(12.0), Pt(8.0))
            .is_err());
        assert!(TextSpec::new("x", "Helv")
            .with_size_range(Pt(0.0), Pt(8.0))
            .is_err());
        assert!(TextSpec::new("x", "Helv")
            .with_size_range(Pt(4.0), Pt(f32::INFINITY))
            .is_err());
        assert_eq!(
            TextSpec::new("x", "Helv").with_size_range(Pt(1.0), Pt(1.0e12)),
            Err(FitError::InvalidSizeRange {
                min: Pt(1.0),
                max: Pt(1.0e12)
            })
        );
        assert!(TextSpec::new("x", "Helv")
            .with_size_range(Pt(1.0), TextSpec::LARGEST_SIZE)
            .is_ok());

        let spec = TextSpec::new("x", "Helv")
            .with_size_range(Pt(8.0), Pt(8.0))
            .expect("a single size is a valid range");
        assert_eq!(spec.min_size(), Pt(8.0));
        assert_eq!(spec.max_size(), Pt(8.0));
    }
}
