//! Streaming monitor
//!
//! Consumes observations one at a time, keeps a rolling window, and runs the
//! ratio test on every full window as it arrives.

use std::collections::VecDeque;
use tokio::sync::{mpsc, watch};

use crate::detection::{HitTracker, TrendDetector};
use crate::telemetry::{increment_counter, set_gauge, CounterMetric, GaugeMetric};

use super::types::{TrendEvent, WindowDecision};

/// Outcome of pushing one observation
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub decision: WindowDecision,
    pub trend: Option<TrendEvent>,
}

/// Counters for a monitoring run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorStats {
    pub observations: u64,
    pub windows_evaluated: u64,
    pub positive_windows: u64,
    pub trends_confirmed: u64,
}

/// Rolling-window trend monitor over an unbounded stream
pub struct StreamMonitor {
    detector: TrendDetector,
    window: VecDeque<f64>,
    tracker: HitTracker,
    /// Stream index of the first observation in `window`
    offset: usize,
    stats: MonitorStats,
}

impl StreamMonitor {
    pub fn new(detector: TrendDetector) -> Self {
        let params = *detector.params();
        Self {
            window: VecDeque::with_capacity(params.window_size),
            tracker: HitTracker::new(params.detection_requirement),
            offset: 0,
            stats: MonitorStats::default(),
            detector,
        }
    }

    /// Add one observation.
    ///
    /// Returns `None` until the window is full, then one outcome per
    /// observation.
    pub fn push(&mut self, value: f64) -> Option<StepOutcome> {
        let window_size = self.detector.params().window_size;
        self.stats.observations += 1;
        increment_counter(CounterMetric::ObservationsReceived, 1);

        self.window.push_back(value);
        if self.window.len() > window_size {
            self.window.pop_front();
            self.offset += 1;
        }
        if self.window.len() < window_size {
            return None;
        }

        let evaluation = self.detector.evaluate(self.window.make_contiguous());
        let decision = WindowDecision {
            offset: self.offset,
            evaluation,
        };

        self.stats.windows_evaluated += 1;
        increment_counter(CounterMetric::WindowsEvaluated, 1);
        if evaluation.detected {
            self.stats.positive_windows += 1;
            increment_counter(CounterMetric::PositiveWindows, 1);
        }
        set_gauge(GaugeMetric::LikelihoodRatio, evaluation.ratio);

        let trend = self.tracker.step(evaluation.detected).then(|| {
            self.stats.trends_confirmed += 1;
            increment_counter(CounterMetric::TrendsConfirmed, 1);
            tracing::info!(
                offset = self.offset,
                window_size,
                detection_requirement = self.tracker.requirement(),
                "Trend detected"
            );
            TrendEvent::new(
                self.offset,
                window_size,
                self.tracker.requirement(),
                evaluation.ratio,
            )
        });
        set_gauge(GaugeMetric::HitCount, self.tracker.count() as f64);

        Some(StepOutcome { decision, trend })
    }

    pub fn stats(&self) -> MonitorStats {
        self.stats
    }

    pub fn tracker(&self) -> &HitTracker {
        &self.tracker
    }

    /// Drop the buffered window and hysteresis state
    pub fn clear(&mut self) {
        self.window.clear();
        self.tracker.reset();
        self.offset = 0;
    }

    /// Drive the monitor until the input closes or shutdown is signalled.
    ///
    /// Confirmed trends are sent on `events`. Shutdown is checked between
    /// observations; setting the flag to `true` or dropping its sender stops
    /// the loop.
    pub async fn run(
        mut self,
        mut input: mpsc::Receiver<f64>,
        events: mpsc::Sender<TrendEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) -> MonitorStats {
        tracing::info!(
            window_size = self.detector.params().window_size,
            detection_requirement = self.tracker.requirement(),
            "Stream monitor started"
        );

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Shutdown requested, stopping stream monitor");
                        break;
                    }
                }
                value = input.recv() => {
                    let Some(value) = value else {
                        tracing::debug!("Input closed");
                        break;
                    };

                    let Some(outcome) = self.push(value) else {
                        continue;
                    };
                    if let Some(trend) = outcome.trend {
                        if events.send(trend).await.is_err() {
                            tracing::warn!("Trend receiver dropped, stopping stream monitor");
                            break;
                        }
                    }
                }
            }
        }

        tracing::info!(
            observations = self.stats.observations,
            windows = self.stats.windows_evaluated,
            trends = self.stats.trends_confirmed,
            "Stream monitor stopped"
        );

        self.stats
    }
}
