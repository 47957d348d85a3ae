//! Sample errors

use std::path::PathBuf;
use thiserror::Error;

use crate::detection::DetectionError;

/// Sample loading and validation errors
#[derive(Debug, Error)]
pub enum SampleError {
    /// The sample file could not be read
    #[error("Failed to read sample file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The sample file is not valid sample JSON
    #[error("Failed to parse sample: {0}")]
    Parse(#[from] serde_json::Error),
    /// No negative references, every window would test positive
    #[error("Sample has no negative references")]
    EmptyNegativeReferences,
    /// Detection parameters cannot be used with this sample
    #[error(transparent)]
    Detection(#[from] DetectionError),
}
