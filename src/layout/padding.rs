use crate::units::Pt;

/// Insets applied to the inside of a field box before any text is fitted.
/// Most PDF viewers keep a small gap between a text field's border and its
/// text; padding is how that gap is expressed here.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Padding {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Padding {
    /// Create padding by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS padding)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Padding {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create padding where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Padding {
        let value: Pt = value.into();
        Padding {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create padding by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) insets
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Padding {
        Padding::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create padding where all values are 0.0
    pub fn empty() -> Padding {
        Padding::all(Pt::ZERO)
    }

    /// Total horizontal inset
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Total vertical inset
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }
}
