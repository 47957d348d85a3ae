//! Detect command implementation

use anyhow::Context;
use clap::Args;

use super::{DetectionArgs, OutputFormat};
use crate::config::Config;
use crate::monitor::{scan, ScanReport};
use crate::sample::Sample;

#[derive(Args, Debug)]
pub struct DetectArgs {
    #[command(flatten)]
    pub detection: DetectionArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Include every window decision in the output, not only confirmed trends
    #[arg(short, long)]
    pub verbose: bool,
}

impl DetectArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let detection = self.detection.apply(&config.detection);
        let params = detection.params();

        let path = self
            .detection
            .sample
            .clone()
            .unwrap_or_else(|| config.sample.path.clone());
        let sample = Sample::load(&path)
            .with_context(|| format!("Failed to load sample {}", path.display()))?;
        let detector = sample.detector(params, detection.allow_empty_negative)?;

        tracing::info!(
            gamma = params.gamma,
            theta = params.theta,
            window_size = params.window_size,
            detection_requirement = params.detection_requirement,
            "Scanning {:?}",
            path
        );
        let report = scan(&sample.source, &detector);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Table => print_table(&report, self.verbose),
        }

        Ok(())
    }
}

fn print_table(report: &ScanReport, verbose: bool) {
    if verbose {
        println!(
            "{:>8}  {:>14}  {:>14}  {:>14}  DETECTED",
            "OFFSET", "POSITIVE", "NEGATIVE", "RATIO"
        );
        for decision in &report.decisions {
            let e = &decision.evaluation;
            println!(
                "{:>8}  {:>14.6e}  {:>14.6e}  {:>14.6e}  {}",
                decision.offset, e.positive_score, e.negative_score, e.ratio, e.detected
            );
        }
        println!();
    }

    for trend in &report.trends {
        println!(
            "Trend detected at index {} with window size {} and detection requirement {}",
            trend.offset, trend.window_size, trend.detection_requirement
        );
    }
    println!(
        "Windows: {}  Positive: {}  Trends: {}",
        report.windows_evaluated(),
        report.positive_windows(),
        report.trends.len()
    );
}
