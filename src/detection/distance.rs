//! Distance engine
//!
//! Squared Euclidean distance between signals and brute-force
//! nearest-subsequence matching against longer references.

/// Sum of squared elementwise differences between two signals.
///
/// Signals of different length cannot be compared and return
/// `f64::INFINITY`, i.e. maximally dissimilar.
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }

    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Minimum distance between `window` and every same-length slice of `reference`.
///
/// Scans every offset `0..=reference.len() - window.len()`. A reference
/// shorter than the window has no valid offset and returns `f64::INFINITY`.
///
/// Inputs are expected to be finite. An offset whose distance is NaN is
/// skipped rather than propagated, so a reference that is NaN at every
/// offset also returns `f64::INFINITY`.
pub fn distance_to_reference(window: &[f64], reference: &[f64]) -> f64 {
    if reference.len() < window.len() {
        return f64::INFINITY;
    }
    if window.is_empty() {
        return 0.0;
    }

    reference
        .windows(window.len())
        .map(|slice| distance(window, slice))
        .fold(f64::INFINITY, f64::min)
}
