//! Watch command implementation

use anyhow::Context;
use clap::Args;
use std::io::BufRead;
use std::thread::JoinHandle;
use tokio::sync::{mpsc, watch};

use super::{DetectionArgs, OutputFormat};
use crate::config::Config;
use crate::monitor::StreamMonitor;
use crate::sample::Sample;

#[derive(Args, Debug)]
pub struct WatchArgs {
    // References come from the sample file; its source is ignored
    #[command(flatten)]
    pub detection: DetectionArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl WatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let detection = self.detection.apply(&config.detection);
        let params = detection.params();

        let path = self
            .detection
            .sample
            .clone()
            .unwrap_or_else(|| config.sample.path.clone());
        let sample = Sample::load(&path)
            .with_context(|| format!("Failed to load references from {}", path.display()))?;
        let detector = sample.detector(params, detection.allow_empty_negative)?;

        let (input_tx, input_rx) = mpsc::channel(1024);
        let (events_tx, mut events_rx) = mpsc::channel(64);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        // Never joined: a read blocked on stdin must not hold up exit
        spawn_line_reader(std::io::BufReader::new(std::io::stdin()), input_tx)
            .context("Failed to start stdin reader")?;

        let monitor =
            tokio::spawn(StreamMonitor::new(detector).run(input_rx, events_tx, shutdown_rx));

        let interrupt = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Interrupted");
                    let _ = shutdown_tx.send(true);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ctrl-C handler unavailable");
                    // Dropping the sender would stop the monitor
                    std::future::pending::<()>().await;
                }
            }
        });

        let format = self.format;
        let printer = tokio::spawn(async move {
            while let Some(trend) = events_rx.recv().await {
                match format {
                    OutputFormat::Json => match serde_json::to_string(&trend) {
                        Ok(line) => println!("{}", line),
                        Err(e) => tracing::error!(error = %e, "Failed to encode trend"),
                    },
                    OutputFormat::Table => println!(
                        "Trend detected at index {} with window size {} and detection requirement {}",
                        trend.offset, trend.window_size, trend.detection_requirement
                    ),
                }
            }
        });

        let stats = monitor.await?;
        interrupt.abort();
        printer.await?;

        tracing::info!(
            observations = stats.observations,
            windows = stats.windows_evaluated,
            positive = stats.positive_windows,
            trends = stats.trends_confirmed,
            "Detection completed"
        );

        Ok(())
    }
}

/// Forward one observation per line from `reader` on a dedicated thread.
///
/// Blank lines are ignored and unparseable lines are logged and skipped. The
/// thread stops at end of input, on a read error, or once `input` is closed.
pub(crate) fn spawn_line_reader<R>(
    reader: R,
    input: mpsc::Sender<f64>,
) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("observation-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read observation");
                        break;
                    }
                };
                let Some(value) = parse_observation(&line) else {
                    continue;
                };
                if input.blocking_send(value).is_err() {
                    break;
                }
            }
            tracing::debug!("Observation reader finished");
        })
}

fn parse_observation(line: &str) -> Option<f64> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.parse::<f64>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(line, error = %e, "Skipping unparseable observation");
            None
        }
    }
}
