//! Prometheus metrics

use std::net::{Ipv4Addr, SocketAddr};

use metrics_exporter_prometheus::PrometheusBuilder;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Observations pushed into a stream monitor
    ObservationsReceived,
    /// Windows run through the ratio test
    WindowsEvaluated,
    /// Windows whose ratio exceeded theta
    PositiveWindows,
    /// Trends confirmed by the hit tracker
    TrendsConfirmed,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Likelihood ratio of the latest window
    LikelihoodRatio,
    /// Current consecutive-hit count
    HitCount,
}

impl CounterMetric {
    pub fn name(self) -> &'static str {
        match self {
            CounterMetric::ObservationsReceived => "snitrend_observations_total",
            CounterMetric::WindowsEvaluated => "snitrend_windows_evaluated_total",
            CounterMetric::PositiveWindows => "snitrend_positive_windows_total",
            CounterMetric::TrendsConfirmed => "snitrend_trends_confirmed_total",
        }
    }
}

impl GaugeMetric {
    pub fn name(self) -> &'static str {
        match self {
            GaugeMetric::LikelihoodRatio => "snitrend_likelihood_ratio",
            GaugeMetric::HitCount => "snitrend_hit_count",
        }
    }
}

/// Increment a counter
pub fn increment_counter(metric: CounterMetric, value: u64) {
    ::metrics::counter!(metric.name()).increment(value);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    ::metrics::gauge!(metric.name()).set(value);
}

/// Serve metrics on `0.0.0.0:port`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}
