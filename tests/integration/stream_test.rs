//! Integration tests for the streaming monitor

use snitrend::detection::{DetectionParams, ReferenceSet, TrendDetector};
use snitrend::monitor::{scan, StreamMonitor};
use tokio::sync::{mpsc, watch};

fn detector() -> TrendDetector {
    TrendDetector::new(
        DetectionParams::new(1.0, 1.0, 2, 4),
        ReferenceSet::positive(vec![vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]]),
        ReferenceSet::negative(vec![vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0]]),
    )
}

fn ramp_source() -> Vec<f64> {
    let mut source: Vec<f64> = (0..8).map(|i| 8.0 - i as f64).collect();
    source.extend((0..8).map(|i| i as f64));
    source.extend((0..8).map(|i| 8.0 - i as f64));
    source
}

#[tokio::test]
async fn test_stream_agrees_with_scan() {
    let source = ramp_source();
    let batch = scan(&source, &detector());

    let (input_tx, input_rx) = mpsc::channel(source.len());
    let (events_tx, mut events_rx) = mpsc::channel(source.len());
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(StreamMonitor::new(detector()).run(input_rx, events_tx, shutdown_rx));

    // The stream also evaluates the final window, which the batch scan skips
    for &value in &source[..source.len() - 1] {
        input_tx.send(value).await.unwrap();
    }
    drop(input_tx);

    let stats = handle.await.unwrap();
    assert_eq!(stats.windows_evaluated as usize, batch.windows_evaluated());
    assert_eq!(stats.positive_windows as usize, batch.positive_windows());

    let mut offsets = Vec::new();
    while let Some(trend) = events_rx.recv().await {
        offsets.push(trend.offset);
    }
    assert_eq!(offsets, batch.trend_offsets());
    assert!(!offsets.is_empty());
}

#[tokio::test]
async fn test_stream_stops_when_events_dropped() {
    let (input_tx, input_rx) = mpsc::channel(64);
    let (events_tx, events_rx) = mpsc::channel(1);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    drop(events_rx);

    let handle = tokio::spawn(StreamMonitor::new(detector()).run(input_rx, events_tx, shutdown_rx));
    for value in ramp_source() {
        if input_tx.send(value).await.is_err() {
            break;
        }
    }

    let stats = handle.await.unwrap();
    assert_eq!(stats.trends_confirmed, 1);
}
