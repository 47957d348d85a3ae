//! Configuration types for snitrend

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::detection::{
    DetectionParams, DEFAULT_DETECTION_REQUIREMENT, DEFAULT_GAMMA, DEFAULT_THETA,
    DEFAULT_WINDOW_SIZE,
};
use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub sample: SampleConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Detection parameters as written by the user
///
/// Integers are signed so that out-of-range values can be supplied and
/// replaced by their defaults in [`DetectionConfig::params`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Sharpness of the exponential kernel
    #[serde(default = "default_gamma")]
    pub gamma: f64,

    /// Likelihood-ratio threshold
    #[serde(default = "default_theta")]
    pub theta: f64,

    /// Consecutive hits needed to confirm a trend (< 1 means default)
    #[serde(default = "default_detection_requirement")]
    pub detection_requirement: i64,

    /// Window length (< 1 means default)
    #[serde(default = "default_window_size")]
    pub window_size: i64,

    /// Accept samples with no negative references (every window then tests positive)
    #[serde(default)]
    pub allow_empty_negative: bool,
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}
fn default_theta() -> f64 {
    DEFAULT_THETA
}
fn default_detection_requirement() -> i64 {
    DEFAULT_DETECTION_REQUIREMENT as i64
}
fn default_window_size() -> i64 {
    DEFAULT_WINDOW_SIZE as i64
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            theta: DEFAULT_THETA,
            detection_requirement: DEFAULT_DETECTION_REQUIREMENT as i64,
            window_size: DEFAULT_WINDOW_SIZE as i64,
            allow_empty_negative: false,
        }
    }
}

impl DetectionConfig {
    /// Normalized detection parameters
    pub fn params(&self) -> DetectionParams {
        DetectionParams::new(
            self.gamma,
            self.theta,
            self.detection_requirement,
            self.window_size,
        )
    }
}

/// Sample input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    #[serde(default = "default_sample_path")]
    pub path: PathBuf,
}

fn default_sample_path() -> PathBuf {
    PathBuf::from("./sample.json")
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            path: default_sample_path(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Serve Prometheus metrics on this port when set
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
