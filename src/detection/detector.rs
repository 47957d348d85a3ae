//! Trend detector
//!
//! Single-window likelihood-ratio test. A window is compared against every
//! positive and negative reference, each class is reduced to a kernel score,
//! and the window tests positive when `positive / negative > theta`.
//!
//! The test is stateless. Confirming a trend across consecutive windows is
//! the job of [`HitTracker`](super::HitTracker), owned by the calling loop.

use super::distance::distance_to_reference;
use super::score::class_score;
use super::types::{DetectionParams, Evaluation, ReferenceSet};

/// Run the ratio test and return every intermediate value.
///
/// Floating-point edge cases are values, not errors: an empty negative class
/// makes the ratio `+inf` (detected) and two zero scores make it NaN (never
/// detected). The positive score is also zero when every `exp(-gamma * d)`
/// underflows, so a window far from all positive references is not detected
/// even with an empty negative class.
pub fn evaluate<R: AsRef<[f64]>>(
    window: &[f64],
    positive_references: &[R],
    negative_references: &[R],
    gamma: f64,
    theta: f64,
) -> Evaluation {
    let positive_distances: Vec<f64> = positive_references
        .iter()
        .map(|reference| distance_to_reference(window, reference.as_ref()))
        .collect();
    let negative_distances: Vec<f64> = negative_references
        .iter()
        .map(|reference| distance_to_reference(window, reference.as_ref()))
        .collect();

    let positive_score = class_score(&positive_distances, gamma);
    let negative_score = class_score(&negative_distances, gamma);
    let ratio = positive_score / negative_score;

    Evaluation {
        positive_score,
        negative_score,
        ratio,
        detected: ratio > theta,
    }
}

/// Whether `window` resembles the positive class more than the negative one
pub fn detect<R: AsRef<[f64]>>(
    window: &[f64],
    positive_references: &[R],
    negative_references: &[R],
    gamma: f64,
    theta: f64,
) -> bool {
    evaluate(window, positive_references, negative_references, gamma, theta).detected
}

/// Detector bound to a parameter set and a pair of reference classes
#[derive(Debug, Clone)]
pub struct TrendDetector {
    params: DetectionParams,
    positive: ReferenceSet,
    negative: ReferenceSet,
}

impl TrendDetector {
    pub fn new(params: DetectionParams, positive: ReferenceSet, negative: ReferenceSet) -> Self {
        Self {
            params,
            positive,
            negative,
        }
    }

    pub fn params(&self) -> &DetectionParams {
        &self.params
    }

    pub fn positive(&self) -> &ReferenceSet {
        &self.positive
    }

    pub fn negative(&self) -> &ReferenceSet {
        &self.negative
    }

    /// Evaluate one window with the bound parameters
    pub fn evaluate(&self, window: &[f64]) -> Evaluation {
        evaluate(
            window,
            &self.positive.signals,
            &self.negative.signals,
            self.params.gamma,
            self.params.theta,
        )
    }

    pub fn detect(&self, window: &[f64]) -> bool {
        self.evaluate(window).detected
    }
}
