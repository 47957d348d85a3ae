//! Class scorer

/// Exponential-kernel affinity of a window to one class.
///
/// Sums `exp(-gamma * d)` over the per-reference minimum distances. The
/// result is proportional to, but not, a probability. An empty class
/// scores `0.0`.
pub fn class_score(distances: &[f64], gamma: f64) -> f64 {
    distances.iter().map(|d| (-gamma * d).exp()).sum()
}
