//! Detection types
//!
//! Parameters, reference sets and per-window evaluation results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default kernel sharpness
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Default likelihood-ratio threshold
pub const DEFAULT_THETA: f64 = 1.0;

/// Default number of consecutive hits needed to confirm a trend
pub const DEFAULT_DETECTION_REQUIREMENT: usize = 3;

/// Default window length
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Detection errors
#[derive(Debug, Error, PartialEq)]
pub enum DetectionError {
    /// Gamma must be a non-negative finite number
    #[error("Invalid gamma: {0}")]
    InvalidGamma(f64),
    /// Theta must not be NaN
    #[error("Invalid theta: {0}")]
    InvalidTheta(f64),
}

/// Which class a reference signal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceClass {
    /// Examples of the trend being looked for
    Positive,
    /// Examples of everything else
    Negative,
}

/// A labeled collection of reference signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSet {
    pub class: ReferenceClass,
    pub signals: Vec<Vec<f64>>,
}

impl ReferenceSet {
    pub fn new(class: ReferenceClass, signals: Vec<Vec<f64>>) -> Self {
        Self { class, signals }
    }

    pub fn positive(signals: Vec<Vec<f64>>) -> Self {
        Self::new(ReferenceClass::Positive, signals)
    }

    pub fn negative(signals: Vec<Vec<f64>>) -> Self {
        Self::new(ReferenceClass::Negative, signals)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Indices of signals shorter than `window_size`.
    ///
    /// Such signals can never be aligned with a window and always score as
    /// an infinite distance.
    pub fn short_signals(&self, window_size: usize) -> Vec<usize> {
        self.signals
            .iter()
            .enumerate()
            .filter(|(_, s)| s.len() < window_size)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Tuning knobs for the trend detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionParams {
    /// Sharpness of the exponential kernel
    pub gamma: f64,
    /// Likelihood-ratio threshold; a window is positive when the ratio is strictly greater
    pub theta: f64,
    /// Consecutive hits needed to confirm a trend
    pub detection_requirement: usize,
    /// Window length in observations
    pub window_size: usize,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            theta: DEFAULT_THETA,
            detection_requirement: DEFAULT_DETECTION_REQUIREMENT,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl DetectionParams {
    /// Build parameters from raw, possibly out-of-range, values.
    ///
    /// A detection requirement or window size below 1 is replaced by its
    /// default rather than rejected.
    pub fn new(gamma: f64, theta: f64, detection_requirement: i64, window_size: i64) -> Self {
        Self {
            gamma,
            theta,
            detection_requirement: at_least_one(detection_requirement)
                .unwrap_or(DEFAULT_DETECTION_REQUIREMENT),
            window_size: at_least_one(window_size).unwrap_or(DEFAULT_WINDOW_SIZE),
        }
    }

    /// Reject parameters that cannot produce a meaningful ratio test
    pub fn validate(&self) -> Result<(), DetectionError> {
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err(DetectionError::InvalidGamma(self.gamma));
        }
        if self.theta.is_nan() {
            return Err(DetectionError::InvalidTheta(self.theta));
        }
        Ok(())
    }
}

fn at_least_one(value: i64) -> Option<usize> {
    if value < 1 {
        None
    } else {
        usize::try_from(value).ok()
    }
}

/// Outcome of the ratio test for a single window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Kernel score against the positive references
    pub positive_score: f64,
    /// Kernel score against the negative references
    pub negative_score: f64,
    /// `positive_score / negative_score`; may be infinite or NaN
    pub ratio: f64,
    /// Whether `ratio > theta`
    pub detected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = DetectionParams::default();
        assert_eq!(params.gamma, 1.0);
        assert_eq!(params.theta, 1.0);
        assert_eq!(params.detection_requirement, 3);
        assert_eq!(params.window_size, 5);
    }

    #[test]
    fn test_params_out_of_range_use_defaults() {
        let params = DetectionParams::new(2.0, 0.5, 0, -4);
        assert_eq!(params.gamma, 2.0);
        assert_eq!(params.theta, 0.5);
        assert_eq!(params.detection_requirement, DEFAULT_DETECTION_REQUIREMENT);
        assert_eq!(params.window_size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_params_in_range_kept() {
        let params = DetectionParams::new(1.0, 1.0, 1, 12);
        assert_eq!(params.detection_requirement, 1);
        assert_eq!(params.window_size, 12);
    }

    #[test]
    fn test_params_validate() {
        assert!(DetectionParams::default().validate().is_ok());

        let params = DetectionParams {
            gamma: -1.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(DetectionError::InvalidGamma(-1.0)));

        let params = DetectionParams {
            theta: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(DetectionError::InvalidTheta(_))
        ));
    }

    #[test]
    fn test_short_signals() {
        let set = ReferenceSet::positive(vec![vec![1.0; 5], vec![1.0; 3], vec![1.0; 8]]);
        assert_eq!(set.short_signals(5), vec![1]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_reference_class_serde() {
        let json = serde_json::to_string(&ReferenceClass::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }
}
