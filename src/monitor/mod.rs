//! Monitoring module
//!
//! Feeds windows of a source signal into the trend detector in strict
//! source order and carries the hit-tracking state between windows.
//! `scan` handles a finite source, `StreamMonitor` an unbounded one.

mod scan;
mod stream;
mod types;

pub use scan::scan;
pub use stream::{MonitorStats, StepOutcome, StreamMonitor};
pub use types::{ScanReport, TrendEvent, WindowDecision};
