//! Word-bounded label fitting.
//!
//! Fits a variable-length line into a fixed width budget by cutting on
//! whitespace and appending an ellipsis. Measurement is injected behind
//! [`TextMeasure`] so the routine is pure and testable without a rendering
//! surface; the TUI measures in terminal cells, a pixel surface would
//! measure in pixels.

/// Injected text-measurement capability.
pub trait TextMeasure {
    /// Width of `text` in the surface's units (cells, pixels, ...).
    fn width(&self, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Marker appended to a truncated label.
pub const ELLIPSIS: &str = "…";

/// Longest word-bounded prefix of `full_text` that measures within
/// `max_width`, with [`ELLIPSIS`] appended when anything was cut.
///
/// Returns `full_text` unchanged when it already fits, or when `max_width`
/// is non-positive (fitting is skipped entirely in that case). When not even
/// the ellipsis alone fits, the ellipsis alone is returned. Converges in
/// O(log n) measurement calls via binary search over candidate cut lengths.
///
/// The result is idempotent: fitting an already-fitted label returns it
/// unchanged.
pub fn fit(full_text: &str, measure: &dyn TextMeasure, max_width: f64) -> String {
    if max_width <= 0.0 || measure.width(full_text) <= max_width {
        return full_text.to_string();
    }

    // Candidate cuts are char boundaries, searched by index.
    let mut boundaries: Vec<usize> = full_text.char_indices().map(|(i, _)| i).collect();
    boundaries.push(full_text.len());

    let mut lo = 0usize;
    let mut hi = boundaries.len() - 1;
    let mut best: Option<String> = None;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let prefix = &full_text[..boundaries[mid]];
        // Cut back to the last whitespace inside the candidate; a candidate
        // with no whitespace is used whole.
        let cut = match prefix.rfind(char::is_whitespace) {
            Some(ws) => &prefix[..ws],
            None => prefix,
        };
        let candidate = format!("{}{ELLIPSIS}", cut.trim_end());

        if measure.width(&candidate) <= max_width {
            best = Some(candidate);
            lo = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            hi = mid - 1;
        }
    }

    best.unwrap_or_else(|| ELLIPSIS.to_string())
}
