mod common;

use common::{UniformMetrics, FAMILY};
use form_fit::batch::{resolve_batch, resolve_batch_parallel, FieldJob};
use form_fit::layout::{FitOptions, Fitter, Overflow};
use form_fit::{FieldBox, FitError, FontLibrary, Pt, TextSpec};

fn jobs(count: usize, family: &str) -> Vec<FieldJob> {
    let source = lipsum::lipsum(64);
    let words: Vec<&str> = source.split(' ').collect();
    (0..count)
        .map(|i| {
            let width = 20.0 + (i % 37) as f32 * 7.5;
            let height = 8.0 + (i % 11) as f32 * 4.0;
            let take = 1 + i % words.len();
            let value = words[..take].join(" ");
            let text = TextSpec::new(value, family).wrapped(i % 3 != 0);
            FieldJob::new(
                i / 4,
                format!("field_{}", i % 4),
                FieldBox::new(Pt(10.0), Pt(700.0 - (i % 4) as f32 * 40.0), Pt(width), Pt(height)),
                text,
            )
        })
        .collect()
}

#[test]
fn parallel_and_sequential_batches_agree() {
    let library = FontLibrary::new();
    let fitter = Fitter::with_options(
        &library,
        FitOptions::default().with_overflow(Overflow::Ellipsis),
    );
    let jobs = jobs(1000, "Helv");

    let sequential = resolve_batch(&fitter, &jobs, None);
    let parallel = resolve_batch_parallel(&fitter, &jobs, None);

    assert_eq!(sequential.len(), 1000);
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.skipped().count(), 0);
    for (job, result) in jobs.iter().zip(&sequential.results) {
        assert_eq!(job.row, result.row);
        assert_eq!(job.field, result.field);
    }
}

#[test]
fn parallel_batches_match_individual_resolves() {
    let fitter = Fitter::new(UniformMetrics::default());
    let jobs = jobs(250, FAMILY);

    let report = resolve_batch_parallel(&fitter, &jobs, None);
    for (job, result) in jobs.iter().zip(&report.results) {
        let expected = fitter
            .resolve(&job.field_box, &job.text)
            .expect("fixture font always resolves");
        assert_eq!(result.plan(), Some(&expected));
    }
}

#[test]
fn failures_stay_with_their_field() {
    let library = FontLibrary::new();
    let fitter = Fitter::new(&library);
    let mut jobs = jobs(40, "Helv");
    jobs[3].field_box = FieldBox::new(Pt(0.0), Pt(0.0), Pt(50.0), Pt(-1.0));
    jobs[7].text.family = "Comic Sans".to_string();
    jobs[9].text.family = "Comic Sans".to_string();

    let without_fallback = resolve_batch_parallel(&fitter, &jobs, None);
    let skipped: Vec<usize> = without_fallback
        .results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.error().is_some())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(skipped, vec![3, 7, 9]);
    assert!(matches!(
        without_fallback.results[3].error(),
        Some(FitError::DegenerateBox { .. })
    ));

    let with_fallback = resolve_batch(&fitter, &jobs, Some("Cour"));
    assert_eq!(with_fallback.skipped().count(), 1);
    assert_eq!(
        with_fallback.results[7].substituted_family.as_deref(),
        Some("Cour")
    );
    assert!(with_fallback.results[9].plan().is_some());
    // fields that never failed are untouched by the fallback
    assert_eq!(without_fallback.results[0], with_fallback.results[0]);
}
