//! End-to-end integration tests

use snitrend::config::Config;
use snitrend::detection::{detect, DetectionParams};
use snitrend::monitor::scan;
use snitrend::sample::{Sample, SampleError};
use std::io::Write;

const STEP_SAMPLE: &str = r#"{
    "source": [0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    "positiveReferences": [[1, 1, 1, 1, 1]],
    "negativeReferences": [[0, 0, 0, 0, 0]]
}"#;

fn write_sample(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_and_sample_from_files() {
    let sample_file = write_sample(STEP_SAMPLE);
    let config_toml = format!(
        r#"
        [detection]
        gamma = 1.0
        theta = 1.0
        detection_requirement = 3
        window_size = 5

        [sample]
        path = {:?}
        "#,
        sample_file.path().display().to_string()
    );
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file.write_all(config_toml.as_bytes()).unwrap();

    let config = Config::load(config_file.path()).unwrap();
    let sample = Sample::load(&config.sample.path).unwrap();
    let detector = sample
        .detector(config.detection.params(), config.detection.allow_empty_negative)
        .unwrap();

    let report = scan(&sample.source, &detector);
    assert_eq!(report.windows_evaluated(), 10);
    assert_eq!(report.trend_offsets(), vec![6]);
}

#[test]
fn test_step_signal_off_by_one_edge() {
    let sample = Sample::from_json(STEP_SAMPLE).unwrap();

    // Windows 3..=7 test positive: a streak of five
    let confirmations = |requirement: i64| {
        let params = DetectionParams::new(1.0, 1.0, requirement, 5);
        let detector = sample.detector(params, false).unwrap();
        scan(&sample.source, &detector).trend_offsets()
    };

    assert_eq!(confirmations(1), vec![4, 5, 6, 7]);
    assert_eq!(confirmations(2), vec![5, 7]);
    assert_eq!(confirmations(4), vec![7]);
    assert!(confirmations(5).is_empty());
}

#[test]
fn test_only_full_alignment_is_a_single_window() {
    let sample = Sample::from_json(STEP_SAMPLE).unwrap();
    let params = DetectionParams::new(1.0, 1.0, 1, 5);
    let detector = sample.detector(params, false).unwrap();
    let report = scan(&sample.source, &detector);

    let exact: Vec<usize> = report
        .decisions
        .iter()
        .filter(|d| d.evaluation.positive_score == 1.0)
        .map(|d| d.offset)
        .collect();
    assert_eq!(exact, vec![5]);
}

#[test]
fn test_empty_negative_rejected_at_boundary_but_detect_is_raw() {
    let sample = Sample::from_json(
        r#"{"source": [0, 0, 0, 0, 0, 0, 0], "positiveReferences": [[9, 9, 9, 9, 9]]}"#,
    )
    .unwrap();

    let result = sample.detector(DetectionParams::default(), false);
    assert!(matches!(result, Err(SampleError::EmptyNegativeReferences)));

    // The pure test itself still treats the ratio as +inf
    let window = &sample.source[..5];
    assert!(detect(window, &sample.positive_references, &sample.negative_references, 1.0, 1.0));

    let detector = sample.detector(DetectionParams::new(1.0, 1.0, 1, 5), true).unwrap();
    let report = scan(&sample.source, &detector);
    assert_eq!(report.detections(), vec![true, true]);
    assert_eq!(report.trend_offsets(), vec![1]);
}

#[test]
fn test_short_references_never_match() {
    let sample = Sample::from_json(
        r#"{
            "source": [1, 1, 1, 1, 1, 1, 1, 1],
            "positiveReferences": [[1, 1, 1]],
            "negativeReferences": [[0, 0, 0, 0, 0]]
        }"#,
    )
    .unwrap();

    let detector = sample.detector(DetectionParams::default(), false).unwrap();
    let report = scan(&sample.source, &detector);
    assert_eq!(report.windows_evaluated(), 3);
    assert_eq!(report.positive_windows(), 0);
    assert!(report
        .decisions
        .iter()
        .all(|d| d.evaluation.positive_score == 0.0));
}

#[test]
fn test_report_serializes_to_json() {
    let sample = Sample::from_json(STEP_SAMPLE).unwrap();
    let detector = sample.detector(DetectionParams::default(), false).unwrap();
    let report = scan(&sample.source, &detector);

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["decisions"].as_array().unwrap().len(), 10);
    assert_eq!(json["trends"][0]["offset"], 6);
    assert_eq!(json["decisions"][5]["evaluation"]["detected"], true);
}
