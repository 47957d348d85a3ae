//! Sample loading module
//!
//! Reads a source signal and its reference sets from a JSON sample file and
//! validates them before detection.

mod loader;
mod types;

pub use loader::Sample;
pub use types::SampleError;
