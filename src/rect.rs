use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// Build a rectangle from a PDF `/Rect` array. Form widgets are not required
    /// to list their corners in lower-left, upper-right order, so the corners are
    /// normalized here.
    pub fn from_corners(corners: [f32; 4]) -> Rect {
        let [ax, ay, bx, by] = corners;
        Rect {
            x1: Pt(ax.min(bx)),
            y1: Pt(ay.min(by)),
            x2: Pt(ax.max(bx)),
            y2: Pt(ay.max(by)),
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

impl From<pdf_writer::Rect> for Rect {
    fn from(r: pdf_writer::Rect) -> Self {
        Rect::from_corners([r.x1, r.y1, r.x2, r.y2])
    }
}
