use crate::metrics::FontMetrics;
use crate::units::Pt;
use crate::FitError;

/// A single line of text along with its measured width
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLine {
    pub text: String,
    pub width: Pt,
}

/// Normalize the line endings of a value so that `\n` is the only hard break
pub(crate) fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Greedily wraps text into lines no wider than `max_width`, breaking only at
/// whitespace. Words within a line are joined by a single space, and newlines in
/// the input always start a new line (blank input lines are kept as empty lines).
///
/// Words are never split: a word that is wider than `max_width` on its own ends up
/// on a line of its own that is wider than `max_width`. Callers are expected to
/// check the returned widths.
pub fn wrap_text<M: FontMetrics + ?Sized>(
    metrics: &M,
    family: &str,
    size: Pt,
    text: &str,
    max_width: Pt,
) -> Result<Vec<MeasuredLine>, FitError> {
    let text = normalize_newlines(text);
    let mut lines: Vec<MeasuredLine> = Vec::new();

    for paragraph in text.split('\n') {
        let mut words = paragraph.split_whitespace();
        let Some(first) = words.next() else {
            lines.push(MeasuredLine {
                text: String::new(),
                width: Pt::ZERO,
            });
            continue;
        };

        let mut current = MeasuredLine {
            text: first.to_string(),
            width: metrics.measure(family, size, first)?,
        };

        for word in words {
            // try adding the word to the line
            let candidate = format!("{} {}", current.text, word);
            let candidate_width = metrics.measure(family, size, &candidate)?;
            if candidate_width <= max_width {
                current.text = candidate;
                current.width = candidate_width;
            } else {
                // overflowing! start a new line with this word
                let next = MeasuredLine {
                    text: word.to_string(),
                    width: metrics.measure(family, size, word)?,
                };
                lines.push(std::mem::replace(&mut current, next));
            }
        }

        lines.push(current);
    }

    Ok(lines)
}

/// Cuts `text` down to its longest prefix that, followed by `marker`, is no wider
/// than `max_width`. Whitespace right before the marker is dropped.
///
/// Returns `None` if not even the marker on its own fits.
pub fn clip_to_width<M: FontMetrics + ?Sized>(
    metrics: &M,
    family: &str,
    size: Pt,
    text: &str,
    marker: &str,
    max_width: Pt,
) -> Result<Option<MeasuredLine>, FitError> {
    let with_marker = |end: usize| -> Result<MeasuredLine, FitError> {
        let prefix = if marker.is_empty() {
            &text[..end]
        } else {
            text[..end].trim_end()
        };
        let line = format!("{prefix}{marker}");
        let width = metrics.measure(family, size, &line)?;
        Ok(MeasuredLine { text: line, width })
    };

    // every char boundary, including the end of the string
    let ends: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(text.len()))
        .filter(|&end| end > 0)
        .collect();

    let shortest = with_marker(0)?;
    if shortest.width > max_width {
        return Ok(None);
    }

    // widths only grow as the prefix does, so binary search for the last prefix
    // that still fits
    let (mut lo, mut hi) = (0usize, ends.len());
    let mut best = shortest;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let line = with_marker(ends[mid])?;
        if line.width <= max_width {
            best = line;
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    Ok(Some(best))
}
