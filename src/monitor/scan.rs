//! Batch scan over a finite source

use crate::detection::{HitTracker, TrendDetector};
use crate::telemetry::{increment_counter, set_gauge, CounterMetric, GaugeMetric};

use super::types::{ScanReport, TrendEvent, WindowDecision};

/// Slide a window over `source` with step 1 and confirm trends.
///
/// Windows start at offsets `0..source.len() - window_size`; the final full
/// window is not evaluated. A source no longer than the window produces an
/// empty report.
pub fn scan(source: &[f64], detector: &TrendDetector) -> ScanReport {
    let params = detector.params();
    let window_size = params.window_size;
    let mut tracker = HitTracker::new(params.detection_requirement);
    let mut report = ScanReport::default();

    let end = source.len().saturating_sub(window_size);
    for from in 0..end {
        let window = &source[from..from + window_size];
        let evaluation = detector.evaluate(window);
        let decision = WindowDecision {
            offset: from,
            evaluation,
        };
        report.decisions.push(decision);

        increment_counter(CounterMetric::WindowsEvaluated, 1);
        if evaluation.detected {
            increment_counter(CounterMetric::PositiveWindows, 1);
        }
        set_gauge(GaugeMetric::LikelihoodRatio, evaluation.ratio);

        tracing::trace!(
            offset = from,
            ratio = evaluation.ratio,
            detected = evaluation.detected,
            "Window evaluated"
        );

        if tracker.step(evaluation.detected) {
            tracing::info!(
                offset = from,
                window_size,
                detection_requirement = tracker.requirement(),
                "Trend detected"
            );
            increment_counter(CounterMetric::TrendsConfirmed, 1);
            report.trends.push(TrendEvent::new(
                from,
                window_size,
                tracker.requirement(),
                evaluation.ratio,
            ));
        }
        set_gauge(GaugeMetric::HitCount, tracker.count() as f64);
    }

    tracing::info!(
        windows = report.windows_evaluated(),
        positive = report.positive_windows(),
        trends = report.trends.len(),
        "Detection completed"
    );

    report
}
