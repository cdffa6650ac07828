#![allow(dead_code)]

use form_fit::{FieldBox, FitError, FontMetrics, Pt};

pub const FAMILY: &str = "Fixture";

/// Every character is `advance` em wide, so widths are easy to work out by hand
pub struct UniformMetrics {
    pub advance: f32,
    pub line_height: f32,
    pub ascent: f32,
}

impl Default for UniformMetrics {
    fn default() -> Self {
        UniformMetrics {
            advance: 0.5,
            line_height: 1.0,
            ascent: 0.75,
        }
    }
}

impl UniformMetrics {
    fn check(&self, family: &str) -> Result<(), FitError> {
        if family == FAMILY {
            Ok(())
        } else {
            Err(FitError::FontMetricsUnavailable(family.to_string()))
        }
    }
}

impl FontMetrics for UniformMetrics {
    fn measure(&self, family: &str, size: Pt, text: &str) -> Result<Pt, FitError> {
        self.check(family)?;
        Ok(Pt(text.chars().count() as f32 * self.advance * size.0))
    }

    fn line_height(&self, family: &str, size: Pt) -> Result<Pt, FitError> {
        self.check(family)?;
        Ok(Pt(self.line_height * size.0))
    }

    fn ascent(&self, family: &str, size: Pt) -> Result<Pt, FitError> {
        self.check(family)?;
        Ok(Pt(self.ascent * size.0))
    }
}

pub fn field(width: f32, height: f32) -> FieldBox {
    FieldBox::new(Pt(50.0), Pt(500.0), Pt(width), Pt(height))
}
