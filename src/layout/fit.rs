use super::options::{Align, FitOptions};
use super::text::{clip_to_width, wrap_text, MeasuredLine};
use crate::field::{FieldBox, TextSpec};
use crate::metrics::FontMetrics;
use crate::rect::Rect;
use crate::units::Pt;
use crate::FitError;

use super::Overflow;

/// A line of text positioned within its field
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedLine {
    pub text: String,
    pub width: Pt,
    /// Offset of the start of the line from the left edge of the field box
    pub x: Pt,
}

/// Everything needed to draw a value into a field: the chosen size, the lines,
/// and where they go.
///
/// Offsets are relative to the lower-left corner of the field box (padding
/// included), which is the origin of the field's appearance stream.
///
/// When `truncated` is false, every line fits within the field's content area at
/// `size`. When it is true the text was cut at the minimum size; `overflow` says
/// whether the cut was marked with an ellipsis or is a hard clip.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub size: Pt,
    pub lines: Vec<PlannedLine>,
    /// Height of the first line's baseline above the bottom edge of the field box
    pub baseline: Pt,
    /// Distance between successive baselines
    pub line_advance: Pt,
    pub truncated: bool,
    pub overflow: Overflow,
}

impl RenderPlan {
    /// The text of each line, top to bottom
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// The baseline start point of each line, top to bottom
    pub fn origins(&self) -> impl Iterator<Item = (Pt, Pt)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (line.x, self.baseline - self.line_advance * i as f32))
    }
}

/// Resolves the largest font size at which a value fits in its field.
///
/// Candidate sizes run from the text's maximum size down to its minimum in steps of
/// [`FitOptions::step`]; the first size at which the text fits is chosen. Text
/// that doesn't fit even at the minimum size is cut down and the plan is marked
/// as truncated: "doesn't fit" is never an error.
///
/// The fitter holds no mutable state, so one fitter can serve any number of
/// threads as long as its metrics provider can.
#[derive(Debug, Clone)]
pub struct Fitter<M> {
    metrics: M,
    options: FitOptions,
}

impl<M: FontMetrics> Fitter<M> {
    pub fn new(metrics: M) -> Fitter<M> {
        Fitter::with_options(metrics, FitOptions::default())
    }

    pub fn with_options(metrics: M, options: FitOptions) -> Fitter<M> {
        Fitter { metrics, options }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// Fit `spec` into `field`.
    ///
    /// Fails only if the field has no room once its padding is removed, or if the
    /// metrics provider doesn't know the text's font family.
    pub fn resolve(&self, field: &FieldBox, spec: &TextSpec) -> Result<RenderPlan, FitError> {
        let area = field.content_area()?;
        let family = spec.family.as_str();

        // unknown fonts fail up front, even for empty values
        self.metrics.line_height(family, spec.max_size())?;

        if spec.value.is_empty() {
            let empty = MeasuredLine {
                text: String::new(),
                width: Pt::ZERO,
            };
            return self.plan(area, family, spec.max_size(), vec![empty], false);
        }

        for size in candidate_sizes(spec.min_size(), spec.max_size(), self.options.step.points()) {
            if let Some(lines) = self.fit_at(spec, size, area)? {
                log::debug!(
                    "`{}` fits at {size}pt on {} line(s)",
                    spec.family,
                    lines.len()
                );
                return self.plan(area, family, size, lines, false);
            }
            log::trace!("`{}` overflows at {size}pt", spec.family);
        }

        let size = spec.min_size();
        let lines = self.cut_to_fit(spec, size, area)?;
        log::warn!(
            "text truncated to {} line(s) at the minimum size of {size}pt",
            lines.len()
        );
        self.plan(area, family, size, lines, true)
    }

    fn block_height(&self, line_height: Pt, lines: usize) -> Pt {
        if lines == 0 {
            return Pt::ZERO;
        }
        line_height * lines as f32 + self.options.line_spacing * (lines - 1) as f32
    }

    /// The lines the text breaks into at `size`, if they fit in `area`
    fn fit_at(
        &self,
        spec: &TextSpec,
        size: Pt,
        area: Rect,
    ) -> Result<Option<Vec<MeasuredLine>>, FitError> {
        let family = spec.family.as_str();
        let line_height = self.metrics.line_height(family, size)?;

        let lines = if spec.wrap {
            wrap_text(&self.metrics, family, size, &spec.value, area.width())?
        } else {
            let width = self.metrics.measure(family, size, &spec.value)?;
            vec![MeasuredLine {
                text: spec.value.clone(),
                width,
            }]
        };

        let fits = lines.iter().all(|line| line.width <= area.width())
            && self.block_height(line_height, lines.len()) <= area.height();
        Ok(fits.then_some(lines))
    }

    /// Lays the text out at `size`, keeping only the lines that fit vertically and
    /// clipping any line that is too wide
    fn cut_to_fit(
        &self,
        spec: &TextSpec,
        size: Pt,
        area: Rect,
    ) -> Result<Vec<MeasuredLine>, FitError> {
        let family = spec.family.as_str();
        let line_height = self.metrics.line_height(family, size)?;
        let marker = self.options.overflow.marker().unwrap_or("");

        let mut max_lines = 0usize;
        while self.block_height(line_height, max_lines + 1) <= area.height() {
            max_lines += 1;
        }

        let mut lines = if spec.wrap {
            wrap_text(&self.metrics, family, size, &spec.value, area.width())?
        } else {
            vec![MeasuredLine {
                width: self.metrics.measure(family, size, &spec.value)?,
                text: spec.value.clone(),
            }]
        };

        let dropped = lines.len() > max_lines;
        lines.truncate(max_lines);

        let last = lines.len().saturating_sub(1);
        let mut kept = Vec::with_capacity(lines.len());
        for (i, line) in lines.into_iter().enumerate() {
            let cut_below = dropped && i == last;
            if line.width <= area.width() && (!cut_below || marker.is_empty()) {
                kept.push(line);
                continue;
            }

            // the marker goes on clipped lines and on the last line when later
            // lines were dropped; a marker that doesn't fit falls back to a clip
            let clipped = match clip_to_width(
                &self.metrics,
                family,
                size,
                &line.text,
                marker,
                area.width(),
            )? {
                Some(clipped) => clipped,
                None => clip_to_width(&self.metrics, family, size, &line.text, "", area.width())?
                    .unwrap_or(MeasuredLine {
                        text: String::new(),
                        width: Pt::ZERO,
                    }),
            };
            kept.push(clipped);
        }

        Ok(kept)
    }

    fn plan(
        &self,
        area: Rect,
        family: &str,
        size: Pt,
        lines: Vec<MeasuredLine>,
        truncated: bool,
    ) -> Result<RenderPlan, FitError> {
        let line_height = self.metrics.line_height(family, size)?;
        let ascent = self.metrics.ascent(family, size)?;

        // center the block vertically
        let block = self.block_height(line_height, lines.len());
        let top = area.y1 + (area.height() + block) / 2.0;

        let lines = lines
            .into_iter()
            .map(|line| {
                let x = match self.options.align {
                    Align::Left => area.x1,
                    Align::Center => area.x1 + (area.width() - line.width) / 2.0,
                    Align::Right => area.x2 - line.width,
                };
                PlannedLine {
                    text: line.text,
                    width: line.width,
                    x,
                }
            })
            .collect();

        Ok(RenderPlan {
            size,
            lines,
            baseline: top - ascent,
            line_advance: line_height + self.options.line_spacing,
            truncated,
            overflow: self.options.overflow,
        })
    }
}

/// Candidate sizes from `max` down to `min`, largest first. Each candidate is
/// computed from `max` directly so rounding never accumulates, sizes that round
/// to the previous candidate are skipped, and `min` is always the last candidate.
///
/// Candidates are produced lazily; the search usually stops long before `min`.
pub fn candidate_sizes(min: Pt, max: Pt, step: Pt) -> impl Iterator<Item = Pt> {
    let mut i = 0u64;
    let mut previous: Option<Pt> = None;
    std::iter::from_fn(move || loop {
        if previous == Some(min) {
            return None;
        }
        let size = max - step * i as f32;
        i += 1;
        if !(size > min) {
            previous = Some(min);
            return Some(min);
        }
        if previous == Some(size) {
            continue;
        }
        previous = Some(size);
        return Some(size);
    })
}
