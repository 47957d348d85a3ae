//! CLI interface for snitrend
//!
//! Provides subcommands for:
//! - `detect`: Scan a sample file for trends
//! - `watch`: Detect trends in observations streamed on stdin
//! - `config`: Show the effective configuration

mod detect;
mod watch;

pub use detect::DetectArgs;
pub use watch::WatchArgs;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DetectionConfig;

#[derive(Parser, Debug)]
#[command(name = "snitrend")]
#[command(about = "Sliding-window trend detection against labeled reference signals")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a sample file for trends
    Detect(DetectArgs),
    /// Detect trends in observations read from stdin, one per line
    Watch(WatchArgs),
    /// Show the effective configuration
    Config,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Detection overrides shared by commands
#[derive(Args, Debug, Clone, Default)]
pub struct DetectionArgs {
    /// Path to sample file in JSON format
    #[arg(long)]
    pub sample: Option<PathBuf>,

    /// Detection requirement; values below 1 fall back to 3
    #[arg(long, allow_negative_numbers = true)]
    pub req: Option<i64>,

    /// Source window size; values below 1 fall back to 5
    #[arg(long, allow_negative_numbers = true)]
    pub window: Option<i64>,

    /// Kernel sharpness
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Likelihood-ratio threshold
    #[arg(long, allow_negative_numbers = true)]
    pub theta: Option<f64>,

    /// Accept a sample with no negative references
    #[arg(long)]
    pub allow_empty_negative: bool,
}

impl DetectionArgs {
    /// Apply command-line overrides on top of file configuration
    pub fn apply(&self, config: &DetectionConfig) -> DetectionConfig {
        DetectionConfig {
            gamma: self.gamma.unwrap_or(config.gamma),
            theta: self.theta.unwrap_or(config.theta),
            detection_requirement: self.req.unwrap_or(config.detection_requirement),
            window_size: self.window.unwrap_or(config.window_size),
            allow_empty_negative: self.allow_empty_negative || config.allow_empty_negative,
        }
    }
}
