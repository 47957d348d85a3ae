//! JSON sample files
//!
//! ```json
//! {
//!   "source": [0, 0, 1, 1],
//!   "positiveReferences": [[1, 1, 1]],
//!   "negativeReferences": [[0, 0, 0]]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::types::SampleError;
use crate::detection::{DetectionParams, ReferenceSet, TrendDetector};

/// A source signal with its positive and negative reference signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    #[serde(default)]
    pub source: Vec<f64>,
    #[serde(default)]
    pub positive_references: Vec<Vec<f64>>,
    #[serde(default)]
    pub negative_references: Vec<Vec<f64>>,
}

impl Sample {
    /// Load a sample from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SampleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SampleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let sample = Self::from_json(&content)?;

        tracing::debug!(
            path = %path.display(),
            source_len = sample.source.len(),
            positive = sample.positive_references.len(),
            negative = sample.negative_references.len(),
            "Sample loaded"
        );

        Ok(sample)
    }

    pub fn from_json(content: &str) -> Result<Self, SampleError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn positive(&self) -> ReferenceSet {
        ReferenceSet::positive(self.positive_references.clone())
    }

    pub fn negative(&self) -> ReferenceSet {
        ReferenceSet::negative(self.negative_references.clone())
    }

    /// Check the sample against the window size before detection.
    ///
    /// An empty negative class is rejected unless `allow_empty_negative` is
    /// set. Anything else that can only degrade detection (short references,
    /// a source no longer than the window, no positive references) is logged
    /// and accepted.
    pub fn validate(
        &self,
        window_size: usize,
        allow_empty_negative: bool,
    ) -> Result<(), SampleError> {
        if self.negative_references.is_empty() {
            if !allow_empty_negative {
                return Err(SampleError::EmptyNegativeReferences);
            }
            tracing::warn!("No negative references, every window will test positive");
        }

        if self.positive_references.is_empty() {
            tracing::warn!("No positive references, no window can test positive");
        }

        for set in [self.positive(), self.negative()] {
            for index in set.short_signals(window_size) {
                tracing::warn!(
                    class = ?set.class,
                    index,
                    len = set.signals[index].len(),
                    window_size,
                    "Reference shorter than window, it will never match"
                );
            }
        }

        if self.source.len() <= window_size {
            tracing::warn!(
                source_len = self.source.len(),
                window_size,
                "Source is not longer than the window, nothing to scan"
            );
        }

        Ok(())
    }

    /// Validate the parameters and the sample, then build a detector for
    /// this sample's references
    pub fn detector(
        &self,
        params: DetectionParams,
        allow_empty_negative: bool,
    ) -> Result<TrendDetector, SampleError> {
        params.validate()?;
        self.validate(params.window_size, allow_empty_negative)?;
        Ok(TrendDetector::new(params, self.positive(), self.negative()))
    }
}
