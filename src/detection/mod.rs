//! Trend detection module
//!
//! Sliding-window classification of a one-dimensional signal against
//! labeled reference signals:
//!
//! 1. Distance engine: squared Euclidean distance and best-offset matching
//! 2. Class scorer: exponential kernel over the per-reference distances
//! 3. Trend detector: likelihood-ratio test for a single window
//! 4. Hit tracker: consecutive-hit hysteresis that confirms a trend

mod detector;
mod distance;
mod score;
mod tracker;
mod types;

pub use detector::{detect, evaluate, TrendDetector};
pub use distance::{distance, distance_to_reference};
pub use score::class_score;
pub use tracker::HitTracker;
pub use types::{
    DetectionError, DetectionParams, Evaluation, ReferenceClass, ReferenceSet,
    DEFAULT_DETECTION_REQUIREMENT, DEFAULT_GAMMA, DEFAULT_THETA, DEFAULT_WINDOW_SIZE,
};
