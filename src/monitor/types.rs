//! Monitoring types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::detection::Evaluation;

/// Ratio-test outcome for the window starting at `offset`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowDecision {
    pub offset: usize,
    pub evaluation: Evaluation,
}

impl WindowDecision {
    pub fn detected(&self) -> bool {
        self.evaluation.detected
    }
}

/// A confirmed trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEvent {
    /// Starting offset of the window that confirmed the trend
    pub offset: usize,

    /// Window length in effect
    pub window_size: usize,

    /// Consecutive hits that were required
    pub detection_requirement: usize,

    /// Likelihood ratio of the confirming window
    pub ratio: f64,

    /// Timestamp when the trend was confirmed
    pub detected_at: DateTime<Utc>,
}

impl TrendEvent {
    pub fn new(offset: usize, window_size: usize, detection_requirement: usize, ratio: f64) -> Self {
        Self {
            offset,
            window_size,
            detection_requirement,
            ratio,
            detected_at: Utc::now(),
        }
    }
}

/// Result of scanning a finite source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// One decision per evaluated window, in source order
    pub decisions: Vec<WindowDecision>,

    /// Trends confirmed during the scan
    pub trends: Vec<TrendEvent>,
}

impl ScanReport {
    /// Per-window booleans, in source order
    pub fn detections(&self) -> Vec<bool> {
        self.decisions.iter().map(WindowDecision::detected).collect()
    }

    /// Offsets at which a trend was confirmed
    pub fn trend_offsets(&self) -> Vec<usize> {
        self.trends.iter().map(|t| t.offset).collect()
    }

    pub fn windows_evaluated(&self) -> usize {
        self.decisions.len()
    }

    pub fn positive_windows(&self) -> usize {
        self.decisions.iter().filter(|d| d.detected()).count()
    }
}
