//! Configuration management for the posture engine

use crate::classifier::ClassifierThresholds;
use crate::constants::{
    DEFAULT_EYE_DISTANCE_RATIO, DEFAULT_EYE_HEIGHT_THRESHOLD, DEFAULT_KEYPOINT_CONFIDENCE,
    DEFAULT_SHOULDER_HEIGHT_THRESHOLD, DEFAULT_STATUS_INTERVAL,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keypoint extraction configuration
    pub extraction: ExtractionConfig,

    /// Deviation threshold configuration
    pub thresholds: ThresholdConfig,

    /// Pipeline driver configuration
    pub pipeline: PipelineConfig,
}

/// Keypoint extraction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Confidence below which a landmark counts as undetected (0.0-1.0)
    pub keypoint_confidence: f32,
}

/// Deviation thresholds, one explicit policy per metric
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Absolute eye-height deviation in pixels for the slouch condition
    pub eye_height: f32,

    /// Absolute shoulder-height deviation in pixels for the shrug condition
    pub shoulder_height: f32,

    /// Eye-distance deviation as a fraction of the baseline for too-close
    pub eye_distance_ratio: f32,
}

/// Frame pipeline parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stop after this many estimation requests (None = run until exhausted)
    pub max_frames: Option<usize>,

    /// Frames between posture status log lines
    pub status_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            thresholds: ThresholdConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            keypoint_confidence: DEFAULT_KEYPOINT_CONFIDENCE,
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            eye_height: DEFAULT_EYE_HEIGHT_THRESHOLD,
            shoulder_height: DEFAULT_SHOULDER_HEIGHT_THRESHOLD,
            eye_distance_ratio: DEFAULT_EYE_DISTANCE_RATIO,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_frames: None,
            status_interval: DEFAULT_STATUS_INTERVAL,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Classifier thresholds derived from this configuration
    #[must_use]
    pub fn classifier_thresholds(&self) -> ClassifierThresholds {
        ClassifierThresholds {
            eye_height: self.thresholds.eye_height,
            shoulder_height: self.thresholds.shoulder_height,
            eye_distance_ratio: self.thresholds.eye_distance_ratio,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.extraction.keypoint_confidence) {
            return Err(Error::Config(
                "Keypoint confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.thresholds.eye_height <= 0.0 {
            return Err(Error::Config("Eye height threshold must be positive".to_string()));
        }
        if self.thresholds.shoulder_height <= 0.0 {
            return Err(Error::Config("Shoulder height threshold must be positive".to_string()));
        }
        if !(self.thresholds.eye_distance_ratio > 0.0 && self.thresholds.eye_distance_ratio <= 1.0) {
            return Err(Error::Config(
                "Eye distance ratio must be in (0.0, 1.0]".to_string(),
            ));
        }
        if self.pipeline.status_interval == 0 {
            return Err(Error::Config("Status interval must be greater than 0".to_string()));
        }
        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Posture Watch Configuration

# Keypoint extraction
extraction:
  keypoint_confidence: 0.3

# Deviation thresholds
thresholds:
  eye_height: 25.0
  shoulder_height: 25.0
  eye_distance_ratio: 0.2

# Pipeline driver
pipeline:
  max_frames: null
  status_interval: 30
"#;
