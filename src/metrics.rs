//! Posture metric extraction.
//!
//! Derives the three scalar posture metrics from a [`KeypointFrame`]:
//! mean eye height, eye distance, and mean shoulder height. Extraction is
//! a pure function of the frame; a metric whose landmarks are absent or
//! below the confidence threshold is simply reported as unavailable.

use crate::keypoints::{KeypointFrame, KeypointName};
use serde::{Deserialize, Serialize};

/// Per-frame posture metrics; any individual metric may be unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PostureMetrics {
    /// Mean of left/right eye y-coordinates, pixels
    pub eye_height: Option<f32>,
    /// Euclidean distance between the eyes, pixels
    pub eye_distance: Option<f32>,
    /// Mean of left/right shoulder y-coordinates, pixels
    pub shoulder_height: Option<f32>,
}

impl PostureMetrics {
    /// Whether all three metrics were extractable from the frame.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.eye_height.is_some() && self.eye_distance.is_some() && self.shoulder_height.is_some()
    }

    /// The complete form, if all three metrics are present.
    #[must_use]
    pub fn complete(&self) -> Option<MetricSnapshot> {
        Some(MetricSnapshot {
            eye_height: self.eye_height?,
            eye_distance: self.eye_distance?,
            shoulder_height: self.shoulder_height?,
        })
    }
}

impl From<MetricSnapshot> for PostureMetrics {
    fn from(snapshot: MetricSnapshot) -> Self {
        Self {
            eye_height: Some(snapshot.eye_height),
            eye_distance: Some(snapshot.eye_distance),
            shoulder_height: Some(snapshot.shoulder_height),
        }
    }
}

/// A complete set of the three posture metrics.
///
/// Used both as the calibrated baseline and as the current-frame input to
/// the deviation classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Mean eye y-coordinate, pixels
    pub eye_height: f32,
    /// Distance between the eyes, pixels
    pub eye_distance: f32,
    /// Mean shoulder y-coordinate, pixels
    pub shoulder_height: f32,
}

/// Extract posture metrics from a keypoint frame.
///
/// `min_score` is the confidence threshold below which a landmark counts
/// as undetected. Eye height and eye distance both require both eyes;
/// shoulder height requires both shoulders. Each metric degrades to
/// `None` independently.
#[must_use]
pub fn extract_metrics(frame: &KeypointFrame, min_score: f32) -> PostureMetrics {
    let left_eye = frame.usable(KeypointName::LeftEye, min_score);
    let right_eye = frame.usable(KeypointName::RightEye, min_score);
    let left_shoulder = frame.usable(KeypointName::LeftShoulder, min_score);
    let right_shoulder = frame.usable(KeypointName::RightShoulder, min_score);

    let (eye_height, eye_distance) = match (left_eye, right_eye) {
        (Some(l), Some(r)) => (Some((l.y + r.y) / 2.0), Some(l.distance_to(r))),
        _ => (None, None),
    };

    let shoulder_height = match (left_shoulder, right_shoulder) {
        (Some(l), Some(r)) => Some((l.y + r.y) / 2.0),
        _ => None,
    };

    PostureMetrics {
        eye_height,
        eye_distance,
        shoulder_height,
    }
}
