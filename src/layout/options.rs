use crate::units::Pt;

/// How far apart successive candidate font sizes are
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SizeStep {
    /// Try every half point
    #[default]
    Half,
    /// Try every whole point
    Whole,
}

impl SizeStep {
    pub fn points(self) -> Pt {
        match self {
            SizeStep::Half => Pt(0.5),
            SizeStep::Whole => Pt(1.0),
        }
    }
}

/// Horizontal placement of each line within the field
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// What happens to text that still doesn't fit at the minimum font size
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Overflow {
    /// Cut the text off at the last character that fits
    #[default]
    Clip,
    /// Cut the text off and end the last visible line with `…`
    Ellipsis,
}

impl Overflow {
    /// The marker appended where text was cut off, if any
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Overflow::Clip => None,
            Overflow::Ellipsis => Some("\u{2026}"),
        }
    }
}

/// Tunables for the fitter that are shared by every field it resolves
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FitOptions {
    pub step: SizeStep,
    /// Extra space added between wrapped lines, on top of the font's line height
    pub line_spacing: Pt,
    pub align: Align,
    pub overflow: Overflow,
}

impl FitOptions {
    pub fn with_step(mut self, step: SizeStep) -> FitOptions {
        self.step = step;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: Pt) -> FitOptions {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_align(mut self, align: Align) -> FitOptions {
        self.align = align;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> FitOptions {
        self.overflow = overflow;
        self
    }
}
