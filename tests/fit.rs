mod common;

use common::{field, UniformMetrics, FAMILY};
use form_fit::layout::{FitOptions, Fitter, Overflow, Padding, SizeStep};
use form_fit::{FieldBox, FitError, FontLibrary, FontMetrics, Pt, TextSpec};
use proptest::prelude::*;

fn spec(value: &str, min: f32, max: f32) -> TextSpec {
    TextSpec::new(value, FAMILY)
        .with_size_range(Pt(min), Pt(max))
        .expect("valid range")
}

#[test]
fn empty_values_use_the_maximum_size() {
    let fitter = Fitter::new(UniformMetrics::default());
    let plan = fitter
        .resolve(&field(100.0, 10.0), &spec("", 6.0, 24.0))
        .expect("resolves");
    assert_eq!(plan.size, Pt(24.0));
    assert_eq!(plan.texts().collect::<Vec<_>>(), vec![""]);
    assert!(!plan.truncated);
}

#[test]
fn zero_width_boxes_are_degenerate() {
    let fitter = Fitter::new(UniformMetrics::default());
    let result = fitter.resolve(&field(0.0, 10.0), &spec("abc", 6.0, 24.0));
    assert!(matches!(result, Err(FitError::DegenerateBox { .. })));
}

#[test]
fn padding_is_respected() {
    let fitter = Fitter::new(UniformMetrics::default());
    let padded = field(100.0, 30.0).with_padding(Padding::all(Pt(5.0)));
    // 10 characters at 0.5em: fits 90pt wide at 18pt
    let plan = fitter
        .resolve(&padded, &spec("abcdefghij", 6.0, 24.0))
        .expect("resolves");
    assert_eq!(plan.size, Pt(18.0));
    assert_eq!(plan.lines[0].x, Pt(5.0));
    // centered in the 20pt of content height: top at 5 + (20 + 18) / 2
    assert_eq!(plan.baseline, Pt(24.0) - Pt(13.5));
}

#[test]
fn unknown_fonts_are_reported() {
    let fitter = Fitter::new(UniformMetrics::default());
    let spec = TextSpec::new("abc", "Unknown");
    assert_eq!(
        fitter.resolve(&field(100.0, 10.0), &spec),
        Err(FitError::FontMetricsUnavailable("Unknown".into()))
    );
}

#[test]
fn nine_words_wrap_three_to_a_line() {
    let fitter = Fitter::new(UniformMetrics::default());
    let words = vec!["abcd"; 9].join(" ");
    let spec = spec(&words, 6.0, 12.0).wrapped(true);
    // three words and two spaces are 84pt at 12pt, four are 114pt
    let plan = fitter.resolve(&field(90.0, 40.0), &spec).expect("resolves");

    assert_eq!(plan.size, Pt(12.0));
    assert!(!plan.truncated);
    assert_eq!(
        plan.texts().collect::<Vec<_>>(),
        vec!["abcd abcd abcd", "abcd abcd abcd", "abcd abcd abcd"]
    );
}

#[test]
fn wrapping_prefers_the_largest_size_that_fits() {
    let fitter = Fitter::new(UniformMetrics::default());
    let spec = spec("aaaa bbbb cccc dddd", 6.0, 24.0).wrapped(true);
    let plan = fitter.resolve(&field(100.0, 40.0), &spec).expect("resolves");

    // at 20pt: "aaaa bbbb" is 90pt, two lines are 40pt tall
    assert_eq!(plan.size, Pt(20.0));
    assert_eq!(
        plan.texts().collect::<Vec<_>>(),
        vec!["aaaa bbbb", "cccc dddd"]
    );
}

#[test]
fn oversized_words_truncate_at_the_minimum() {
    let fitter = Fitter::new(UniformMetrics::default());
    let spec = spec("tiny supercalifragilisticexpialidocious tiny", 6.0, 24.0).wrapped(true);
    let plan = fitter.resolve(&field(40.0, 100.0), &spec).expect("resolves");

    assert!(plan.truncated);
    assert_eq!(plan.size, Pt(6.0));
    for line in &plan.lines {
        assert!(line.width <= Pt(40.0), "{line:?} is too wide");
    }
    assert_eq!(
        plan.texts().collect::<Vec<_>>(),
        vec!["tiny", "supercalifrag", "tiny"]
    );
}

#[test]
fn overflowing_lines_are_dropped() {
    let fitter = Fitter::with_options(
        UniformMetrics::default(),
        FitOptions::default().with_overflow(Overflow::Ellipsis),
    );
    let words = vec!["abcd"; 12].join(" ");
    let spec = spec(&words, 10.0, 10.0).wrapped(true);
    // 10pt lines: two fit in 25pt, three words per 70pt line, and the marker
    // takes the place of the last character
    let plan = fitter.resolve(&field(70.0, 25.0), &spec).expect("resolves");

    assert!(plan.truncated);
    assert_eq!(plan.overflow, Overflow::Ellipsis);
    assert_eq!(
        plan.texts().collect::<Vec<_>>(),
        vec!["abcd abcd abcd", "abcd abcd abc\u{2026}"]
    );
}

#[test]
fn whole_point_steps() {
    let fitter = Fitter::with_options(
        UniformMetrics::default(),
        FitOptions::default().with_step(SizeStep::Whole),
    );
    // 8 characters need size <= 12.5 to fit in 50pt
    let plan = fitter
        .resolve(&field(50.0, 40.0), &spec("abcdefgh", 6.0, 24.0))
        .expect("resolves");
    assert_eq!(plan.size, Pt(12.0));

    let fitter = Fitter::new(UniformMetrics::default());
    let plan = fitter
        .resolve(&field(50.0, 40.0), &spec("abcdefgh", 6.0, 24.0))
        .expect("resolves");
    assert_eq!(plan.size, Pt(12.5));
}

#[test]
fn resolving_is_deterministic() {
    let library = FontLibrary::new();
    let fitter = Fitter::new(&library);
    let spec = TextSpec::new(lipsum::lipsum(40), "Helv")
        .wrapped(true)
        .with_size_range(Pt(4.0), Pt(14.0))
        .expect("valid range");
    let field = FieldBox::new(Pt(36.0), Pt(200.0), Pt(220.0), Pt(90.0));

    let first = fitter.resolve(&field, &spec).expect("resolves");
    let second = fitter.resolve(&field, &spec).expect("resolves");
    assert_eq!(first, second);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn long_text_never_overflows_the_box() {
    let library = FontLibrary::new();
    let fitter = Fitter::new(&library);
    let field = FieldBox::new(Pt(0.0), Pt(0.0), Pt(180.0), Pt(48.0));
    for words in [5, 20, 80, 400] {
        let spec = TextSpec::new(lipsum::lipsum(words), "TiRo")
            .wrapped(true)
            .with_size_range(Pt(6.0), Pt(12.0))
            .expect("valid range");
        let plan = fitter.resolve(&field, &spec).expect("resolves");

        let line_height = library
            .line_height("TiRo", plan.size)
            .expect("built in font");
        assert!(line_height * plan.lines.len() as f32 <= Pt(48.0));
        for line in &plan.lines {
            assert!(line.width <= Pt(180.0));
        }
    }
}

proptest! {
    #[test]
    fn untruncated_single_lines_fit(
        value in "[A-Za-z0-9 ,.]{1,60}",
        width in 1.0f32..400.0,
        height in 1.0f32..60.0,
    ) {
        let library = FontLibrary::new();
        let fitter = Fitter::new(&library);
        let spec = TextSpec::new(value.as_str(), "Helv");
        let plan = fitter
            .resolve(&FieldBox::new(Pt(0.0), Pt(0.0), Pt(width), Pt(height)), &spec)
            .expect("valid box");

        prop_assert!(plan.size >= spec.min_size() && plan.size <= spec.max_size());
        if !plan.truncated {
            prop_assert!(library.measure("Helv", plan.size, &value).unwrap() <= Pt(width));
            prop_assert!(library.line_height("Helv", plan.size).unwrap() <= Pt(height));
        } else {
            prop_assert_eq!(plan.size, spec.min_size());
        }
    }

    #[test]
    fn shrinking_the_box_never_grows_the_text(
        value in "[a-z]{1,8}( [a-z]{1,8}){0,12}",
        wrap in any::<bool>(),
        width in 10.0f32..300.0,
        height in 5.0f32..80.0,
        width_factor in 0.1f32..1.0,
        height_factor in 0.1f32..1.0,
    ) {
        let library = FontLibrary::new();
        let fitter = Fitter::new(&library);
        let spec = TextSpec::new(value.as_str(), "Helv").wrapped(wrap);

        let big = FieldBox::new(Pt(0.0), Pt(0.0), Pt(width), Pt(height));
        let small = FieldBox::new(
            Pt(0.0),
            Pt(0.0),
            Pt(width * width_factor),
            Pt(height * height_factor),
        );

        let big = fitter.resolve(&big, &spec).expect("valid box");
        let small = fitter.resolve(&small, &spec).expect("valid box");
        prop_assert!(small.size <= big.size);
    }
}
