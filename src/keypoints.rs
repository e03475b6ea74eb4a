//! Body keypoint data model.
//!
//! A [`KeypointFrame`] is the normalized per-frame snapshot produced by one
//! pose-estimation pass. Frames may be incomplete: any landmark can be
//! absent or carry a sub-threshold confidence score, and consumers must
//! treat that as "unavailable for this frame" rather than an error.

use serde::{Deserialize, Serialize};

/// Semantic names of the 17 MoveNet/COCO body landmarks.
///
/// The deviation engine only reads eyes and shoulders, but the full set is
/// carried so frames round-trip losslessly to the renderer and to replay
/// recordings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeypointName {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl KeypointName {
    /// All landmark names in MoveNet output order.
    pub const ALL: [KeypointName; 17] = [
        KeypointName::Nose,
        KeypointName::LeftEye,
        KeypointName::RightEye,
        KeypointName::LeftEar,
        KeypointName::RightEar,
        KeypointName::LeftShoulder,
        KeypointName::RightShoulder,
        KeypointName::LeftElbow,
        KeypointName::RightElbow,
        KeypointName::LeftWrist,
        KeypointName::RightWrist,
        KeypointName::LeftHip,
        KeypointName::RightHip,
        KeypointName::LeftKnee,
        KeypointName::RightKnee,
        KeypointName::LeftAnkle,
        KeypointName::RightAnkle,
    ];

    /// Canonical snake_case label used by the pose model and replay files.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            KeypointName::Nose => "nose",
            KeypointName::LeftEye => "left_eye",
            KeypointName::RightEye => "right_eye",
            KeypointName::LeftEar => "left_ear",
            KeypointName::RightEar => "right_ear",
            KeypointName::LeftShoulder => "left_shoulder",
            KeypointName::RightShoulder => "right_shoulder",
            KeypointName::LeftElbow => "left_elbow",
            KeypointName::RightElbow => "right_elbow",
            KeypointName::LeftWrist => "left_wrist",
            KeypointName::RightWrist => "right_wrist",
            KeypointName::LeftHip => "left_hip",
            KeypointName::RightHip => "right_hip",
            KeypointName::LeftKnee => "left_knee",
            KeypointName::RightKnee => "right_knee",
            KeypointName::LeftAnkle => "left_ankle",
            KeypointName::RightAnkle => "right_ankle",
        }
    }
}

/// A single named 2D body landmark with its detection confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Semantic landmark name
    pub name: KeypointName,
    /// X coordinate in image space (pixels)
    pub x: f32,
    /// Y coordinate in image space (pixels)
    pub y: f32,
    /// Detection confidence in [0, 1]
    pub score: f32,
}

impl Keypoint {
    /// Create a new keypoint.
    #[must_use]
    pub fn new(name: KeypointName, x: f32, y: f32, score: f32) -> Self {
        Self { name, x, y, score }
    }

    /// Whether the landmark's confidence clears the given threshold.
    #[must_use]
    pub fn is_usable(&self, min_score: f32) -> bool {
        self.score >= min_score
    }

    /// Euclidean distance to another keypoint, in pixels.
    #[must_use]
    pub fn distance_to(&self, other: &Keypoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One pose-estimation pass worth of landmarks, indexed by semantic name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeypointFrame {
    keypoints: Vec<Keypoint>,
}

impl KeypointFrame {
    /// Build a frame from the model's raw landmark list.
    ///
    /// Duplicate names keep the first occurrence; order is otherwise
    /// irrelevant since lookups go by name.
    #[must_use]
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints }
    }

    /// Look up a landmark by name, regardless of confidence.
    #[must_use]
    pub fn get(&self, name: KeypointName) -> Option<&Keypoint> {
        self.keypoints.iter().find(|k| k.name == name)
    }

    /// Look up a landmark by name, gated on the confidence threshold.
    ///
    /// Returns `None` both when the landmark is absent and when its score
    /// falls below `min_score`; callers treat the two identically.
    #[must_use]
    pub fn usable(&self, name: KeypointName, min_score: f32) -> Option<&Keypoint> {
        self.get(name).filter(|k| k.is_usable(min_score))
    }

    /// All landmarks in the frame, in received order.
    #[must_use]
    pub fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }

    /// Number of landmarks present in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// Whether the frame carries no landmarks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let frame = KeypointFrame::new(vec![
            Keypoint::new(KeypointName::LeftEye, 100.0, 50.0, 0.9),
            Keypoint::new(KeypointName::RightEye, 140.0, 52.0, 0.8),
        ]);

        assert!(frame.get(KeypointName::LeftEye).is_some());
        assert!(frame.get(KeypointName::LeftShoulder).is_none());
        assert_eq!(frame.len(), 2);
    }

    #[test]
    fn test_confidence_gate() {
        let frame = KeypointFrame::new(vec![
            Keypoint::new(KeypointName::LeftEye, 100.0, 50.0, 0.9),
            Keypoint::new(KeypointName::RightEye, 140.0, 52.0, 0.1),
        ]);

        assert!(frame.usable(KeypointName::LeftEye, 0.3).is_some());
        // Present but below threshold behaves exactly like absent.
        assert!(frame.usable(KeypointName::RightEye, 0.3).is_none());
        assert!(frame.usable(KeypointName::Nose, 0.3).is_none());
    }

    #[test]
    fn test_distance() {
        let a = Keypoint::new(KeypointName::LeftEye, 0.0, 0.0, 1.0);
        let b = Keypoint::new(KeypointName::RightEye, 3.0, 4.0, 1.0);
        assert!((a.distance_to(&b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_serde_round_trip() {
        let frame = KeypointFrame::new(vec![Keypoint::new(KeypointName::LeftShoulder, 200.0, 300.0, 0.75)]);
        let json = serde_json::to_string(&frame).expect("serialize");
        assert!(json.contains("left_shoulder"));
        let back: KeypointFrame = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, frame);
    }
}
