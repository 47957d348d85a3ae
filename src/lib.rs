//! snitrend: sliding-window trend detection for one-dimensional signals
//!
//! A window of recent observations is compared against labeled positive and
//! negative reference signals. A likelihood-ratio test decides whether the
//! window resembles the positive class, and a trend is confirmed once the
//! test keeps succeeding over consecutive windows.
//!
//! This library provides:
//! - The detection core: distances, class scores, ratio test, hit tracking
//! - Batch and streaming monitors that feed windows through the core
//! - JSON sample loading and validation
//! - TOML configuration, CLI, logging and metrics

pub mod cli;
pub mod config;
pub mod detection;
pub mod monitor;
pub mod sample;
pub mod telemetry;
