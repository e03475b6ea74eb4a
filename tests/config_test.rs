//! Configuration loading, saving and validation.

use posture_watch::config::{Config, EXAMPLE_CONFIG};

#[test]
fn yaml_round_trip_preserves_values() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    config.thresholds.eye_height = 40.0;
    config.thresholds.eye_distance_ratio = 0.35;
    config.pipeline.max_frames = Some(500);

    config.to_file(&path).expect("save");
    let loaded = Config::from_file(&path).expect("load");

    assert_eq!(loaded.thresholds.eye_height, 40.0);
    assert_eq!(loaded.thresholds.eye_distance_ratio, 0.35);
    assert_eq!(loaded.pipeline.max_frames, Some(500));
    assert!(loaded.validate().is_ok());
}

#[test]
fn example_config_matches_defaults() {
    let example: Config = serde_yaml::from_str(EXAMPLE_CONFIG).expect("example parses");
    let defaults = Config::default();

    assert_eq!(example.extraction.keypoint_confidence, defaults.extraction.keypoint_confidence);
    assert_eq!(example.thresholds.eye_height, defaults.thresholds.eye_height);
    assert_eq!(example.thresholds.shoulder_height, defaults.thresholds.shoulder_height);
    assert_eq!(example.thresholds.eye_distance_ratio, defaults.thresholds.eye_distance_ratio);
    assert_eq!(example.pipeline.status_interval, defaults.pipeline.status_interval);
}

#[test]
fn unreadable_config_is_an_error() {
    assert!(Config::from_file("/nonexistent/config.yaml").is_err());
}

#[test]
fn invalid_yaml_is_a_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "thresholds: [this, is, not, a, map]").expect("write");

    let err = Config::from_file(&path).expect_err("parse fails");
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn validation_catches_out_of_range_values() {
    let mut config = Config::default();
    config.extraction.keypoint_confidence = 2.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.thresholds.shoulder_height = -5.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.pipeline.status_interval = 0;
    assert!(config.validate().is_err());
}
