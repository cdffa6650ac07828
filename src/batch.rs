//! Resolving many fields at once, e.g. every mapped field of every spreadsheet row.
//!
//! A failure only ever affects the field it happened on: a field whose box is
//! unusable is skipped, and a field whose font is unknown is retried once with a
//! fallback font before being skipped. Everything else is resolved normally.

use crate::field::{FieldBox, TextSpec};
use crate::layout::{Fitter, RenderPlan};
use crate::metrics::FontMetrics;
use crate::FitError;
use rayon::prelude::*;
use std::fmt;

/// A single value to fit into a single field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldJob {
    /// Index of the source row
    pub row: usize,
    /// Fully qualified name of the form field
    pub field: String,
    pub field_box: FieldBox,
    pub text: TextSpec,
}

impl FieldJob {
    pub fn new<S: Into<String>>(row: usize, field: S, field_box: FieldBox, text: TextSpec) -> FieldJob {
        FieldJob {
            row,
            field: field.into(),
            field_box,
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    Rendered(RenderPlan),
    Skipped(FitError),
}

/// What happened to one [`FieldJob`]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResult {
    pub row: usize,
    pub field: String,
    pub outcome: FieldOutcome,
    /// The font family actually used, if the requested one had to be replaced
    pub substituted_family: Option<String>,
}

impl FieldResult {
    pub fn plan(&self) -> Option<&RenderPlan> {
        match &self.outcome {
            FieldOutcome::Rendered(plan) => Some(plan),
            FieldOutcome::Skipped(_) => None,
        }
    }

    pub fn error(&self) -> Option<&FitError> {
        match &self.outcome {
            FieldOutcome::Rendered(_) => None,
            FieldOutcome::Skipped(err) => Some(err),
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.plan().is_some_and(|plan| plan.truncated)
    }
}

/// The results of a batch, in the same order as its jobs
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    pub results: Vec<FieldResult>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Fields that were rendered, truncated or not
    pub fn rendered(&self) -> impl Iterator<Item = &FieldResult> + '_ {
        self.results.iter().filter(|r| r.plan().is_some())
    }

    /// Fields whose text had to be cut, so that someone can widen the field or
    /// shorten the source value
    pub fn truncated(&self) -> impl Iterator<Item = &FieldResult> + '_ {
        self.results.iter().filter(|r| r.is_truncated())
    }

    /// Fields that could not be rendered at all
    pub fn skipped(&self) -> impl Iterator<Item = &FieldResult> + '_ {
        self.results.iter().filter(|r| r.error().is_some())
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} field(s) rendered, {} truncated, {} skipped",
            self.rendered().count(),
            self.truncated().count(),
            self.skipped().count()
        )?;
        for result in self.truncated() {
            write!(f, "\n  truncated: row {} field `{}`", result.row, result.field)?;
        }
        for result in self.skipped() {
            if let FieldOutcome::Skipped(err) = &result.outcome {
                write!(
                    f,
                    "\n  skipped: row {} field `{}`: {err}",
                    result.row, result.field
                )?;
            }
        }
        Ok(())
    }
}

/// Resolve a single job, substituting `fallback_family` once if the job's font
/// has no metrics
pub fn resolve_job<M: FontMetrics>(
    fitter: &Fitter<M>,
    job: &FieldJob,
    fallback_family: Option<&str>,
) -> FieldResult {
    let mut substituted_family = None;
    let outcome = match fitter.resolve(&job.field_box, &job.text) {
        Ok(plan) => FieldOutcome::Rendered(plan),
        Err(err) => match fallback_family {
            Some(fallback) if err.is_font_unavailable() && fallback != job.text.family => {
                log::warn!(
                    "row {} field `{}`: {err}; substituting `{fallback}`",
                    job.row,
                    job.field
                );
                let mut text = job.text.clone();
                text.family = fallback.to_string();
                substituted_family = Some(text.family.clone());
                match fitter.resolve(&job.field_box, &text) {
                    Ok(plan) => FieldOutcome::Rendered(plan),
                    Err(err) => FieldOutcome::Skipped(err),
                }
            }
            _ => FieldOutcome::Skipped(err),
        },
    };

    if let FieldOutcome::Skipped(err) = &outcome {
        log::warn!("row {} field `{}` skipped: {err}", job.row, job.field);
    }

    FieldResult {
        row: job.row,
        field: job.field.clone(),
        outcome,
        substituted_family,
    }
}

/// Resolve every job in turn
pub fn resolve_batch<M: FontMetrics>(
    fitter: &Fitter<M>,
    jobs: &[FieldJob],
    fallback_family: Option<&str>,
) -> BatchReport {
    let results = jobs
        .iter()
        .map(|job| resolve_job(fitter, job, fallback_family))
        .collect();
    BatchReport { results }
}

/// Resolve every job on the rayon thread pool. The report is identical to the one
/// [`resolve_batch`] produces for the same jobs.
pub fn resolve_batch_parallel<M: FontMetrics + Sync>(
    fitter: &Fitter<M>,
    jobs: &[FieldJob],
    fallback_family: Option<&str>,
) -> BatchReport {
    let results = jobs
        .par_iter()
        .map(|job| resolve_job(fitter, job, fallback_family))
        .collect();
    BatchReport { results }
}
