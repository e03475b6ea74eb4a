//! Deviation classification against the calibrated baseline.
//!
//! Compares the current frame's metrics to the baseline and applies one
//! explicit threshold policy per metric: absolute pixel thresholds for eye
//! and shoulder height, a baseline-relative ratio for eye distance. The
//! three checks are independent; any combination of conditions can be
//! active in the same frame.

use crate::calibration::Baseline;
use crate::constants::{
    DEFAULT_EYE_DISTANCE_RATIO, DEFAULT_EYE_HEIGHT_THRESHOLD, DEFAULT_SHOULDER_HEIGHT_THRESHOLD,
};
use crate::metrics::MetricSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Set of concurrently active posture conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureState {
    /// Eye height deviated beyond the slouch threshold
    pub slouching: bool,
    /// Shoulder height deviated beyond the shrug threshold
    pub shoulder_shrug: bool,
    /// Eye distance deviated beyond the baseline-relative ratio
    pub too_close: bool,
}

impl PostureState {
    /// True when no condition is active.
    #[must_use]
    pub fn is_good(&self) -> bool {
        !self.slouching && !self.shoulder_shrug && !self.too_close
    }
}

impl fmt::Display for PostureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_good() {
            return write!(f, "good");
        }
        let mut conditions = Vec::new();
        if self.slouching {
            conditions.push("slouching");
        }
        if self.shoulder_shrug {
            conditions.push("shoulder_shrug");
        }
        if self.too_close {
            conditions.push("too_close");
        }
        write!(f, "{}", conditions.join("+"))
    }
}

/// Per-frame deviation measurement: signed deltas plus the classified state.
///
/// Deltas are exact `current - baseline` differences so the renderer can
/// draw magnitude, not just a boolean condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationResult {
    /// Current eye height minus baseline eye height, pixels
    pub eye_height_delta: f32,
    /// Current eye distance minus baseline eye distance, pixels
    pub eye_distance_delta: f32,
    /// Current shoulder height minus baseline shoulder height, pixels
    pub shoulder_height_delta: f32,
    /// Conditions triggered by the deltas
    pub state: PostureState,
}

/// Outcome of classifying one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Classification {
    /// No baseline yet; no threshold math was performed
    Uncalibrated,
    /// Baseline present; deltas and conditions computed
    Classified(DeviationResult),
}

impl Classification {
    /// The deviation result, if the frame was classified.
    #[must_use]
    pub fn result(&self) -> Option<&DeviationResult> {
        match self {
            Classification::Uncalibrated => None,
            Classification::Classified(result) => Some(result),
        }
    }
}

/// Threshold configuration for the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// Absolute eye-height deviation, pixels, beyond which slouching fires
    pub eye_height: f32,
    /// Absolute shoulder-height deviation, pixels, beyond which shrug fires
    pub shoulder_height: f32,
    /// Fraction of the baseline eye distance beyond which too-close fires
    pub eye_distance_ratio: f32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            eye_height: DEFAULT_EYE_HEIGHT_THRESHOLD,
            shoulder_height: DEFAULT_SHOULDER_HEIGHT_THRESHOLD,
            eye_distance_ratio: DEFAULT_EYE_DISTANCE_RATIO,
        }
    }
}

/// Compares current metrics against the baseline.
#[derive(Debug, Clone, Default)]
pub struct DeviationClassifier {
    thresholds: ClassifierThresholds,
}

impl DeviationClassifier {
    /// Create a classifier with the given thresholds.
    #[must_use]
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    /// The active thresholds.
    #[must_use]
    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    /// Classify one frame's complete metrics against the baseline.
    ///
    /// While the baseline is unset this returns
    /// [`Classification::Uncalibrated`] without computing any deltas.
    /// Deltas are unbounded; classification is pure threshold comparison
    /// with no rounding.
    #[must_use]
    pub fn classify(&self, current: &MetricSnapshot, baseline: &Baseline) -> Classification {
        let Some(reference) = baseline.snapshot() else {
            return Classification::Uncalibrated;
        };

        let eye_height_delta = current.eye_height - reference.eye_height;
        let eye_distance_delta = current.eye_distance - reference.eye_distance;
        let shoulder_height_delta = current.shoulder_height - reference.shoulder_height;

        let state = PostureState {
            slouching: eye_height_delta.abs() > self.thresholds.eye_height,
            shoulder_shrug: shoulder_height_delta.abs() > self.thresholds.shoulder_height,
            too_close: eye_distance_delta.abs() > reference.eye_distance * self.thresholds.eye_distance_ratio,
        };

        Classification::Classified(DeviationResult {
            eye_height_delta,
            eye_distance_delta,
            shoulder_height_delta,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::CalibrationController;
    use crate::metrics::PostureMetrics;

    fn calibrated(eye_height: f32, eye_distance: f32, shoulder_height: f32) -> CalibrationController {
        let mut controller = CalibrationController::new();
        controller.observe(&PostureMetrics {
            eye_height: Some(eye_height),
            eye_distance: Some(eye_distance),
            shoulder_height: Some(shoulder_height),
        });
        controller
    }

    fn snapshot(eye_height: f32, eye_distance: f32, shoulder_height: f32) -> MetricSnapshot {
        MetricSnapshot {
            eye_height,
            eye_distance,
            shoulder_height,
        }
    }

    #[test]
    fn test_uncalibrated_baseline() {
        let classifier = DeviationClassifier::default();
        let baseline = Baseline::default();

        let classification = classifier.classify(&snapshot(100.0, 50.0, 150.0), &baseline);
        assert_eq!(classification, Classification::Uncalibrated);
        assert!(classification.result().is_none());
    }

    #[test]
    fn test_good_posture_within_thresholds() {
        let classifier = DeviationClassifier::default();
        let controller = calibrated(100.0, 50.0, 150.0);

        let classification = classifier.classify(&snapshot(115.0, 52.0, 160.0), controller.baseline());
        let result = classification.result().expect("classified");
        assert!(result.state.is_good());
        assert_eq!(result.eye_height_delta, 15.0);
        assert_eq!(result.eye_distance_delta, 2.0);
        assert_eq!(result.shoulder_height_delta, 10.0);
    }

    #[test]
    fn test_slouching_threshold() {
        let classifier = DeviationClassifier::default();
        let controller = calibrated(100.0, 50.0, 150.0);

        // delta = 30 > 25
        let result = classifier
            .classify(&snapshot(130.0, 50.0, 150.0), controller.baseline())
            .result()
            .copied()
            .expect("classified");
        assert!(result.state.slouching);
        assert!(!result.state.shoulder_shrug);
        assert!(!result.state.too_close);

        // delta = 15 <= 25
        let result = classifier
            .classify(&snapshot(115.0, 50.0, 150.0), controller.baseline())
            .result()
            .copied()
            .expect("classified");
        assert!(!result.state.slouching);

        // Negative deviation fires the same check.
        let result = classifier
            .classify(&snapshot(70.0, 50.0, 150.0), controller.baseline())
            .result()
            .copied()
            .expect("classified");
        assert!(result.state.slouching);
        assert_eq!(result.eye_height_delta, -30.0);
    }

    #[test]
    fn test_too_close_ratio_threshold() {
        let classifier = DeviationClassifier::default();
        let controller = calibrated(100.0, 50.0, 150.0);

        // Ratio 0.2 of baseline 50 triggers past |delta| = 10; delta = 15.
        let result = classifier
            .classify(&snapshot(100.0, 65.0, 150.0), controller.baseline())
            .result()
            .copied()
            .expect("classified");
        assert!(result.state.too_close);
        assert_eq!(result.eye_distance_delta, 15.0);

        // delta = 9 stays inside the band.
        let result = classifier
            .classify(&snapshot(100.0, 59.0, 150.0), controller.baseline())
            .result()
            .copied()
            .expect("classified");
        assert!(!result.state.too_close);
    }

    #[test]
    fn test_shoulder_shrug_threshold() {
        let classifier = DeviationClassifier::default();
        let controller = calibrated(100.0, 50.0, 150.0);

        let result = classifier
            .classify(&snapshot(100.0, 50.0, 120.0), controller.baseline())
            .result()
            .copied()
            .expect("classified");
        assert!(result.state.shoulder_shrug);
        assert_eq!(result.shoulder_height_delta, -30.0);
    }

    #[test]
    fn test_multiple_conditions_fire_together() {
        let classifier = DeviationClassifier::default();
        let controller = calibrated(100.0, 50.0, 150.0);

        let result = classifier
            .classify(&snapshot(130.0, 65.0, 180.0), controller.baseline())
            .result()
            .copied()
            .expect("classified");
        assert!(result.state.slouching);
        assert!(result.state.shoulder_shrug);
        assert!(result.state.too_close);
        assert!(!result.state.is_good());
        assert_eq!(result.state.to_string(), "slouching+shoulder_shrug+too_close");
    }

    #[test]
    fn test_deltas_are_exact_differences() {
        let classifier = DeviationClassifier::default();
        let controller = calibrated(100.25, 50.5, 150.75);
        let current = snapshot(103.5, 48.25, 149.0);

        let a = classifier.classify(&current, controller.baseline());
        let b = classifier.classify(&current, controller.baseline());
        assert_eq!(a, b);

        let result = a.result().expect("classified");
        assert_eq!(result.eye_height_delta, 103.5 - 100.25);
        assert_eq!(result.eye_distance_delta, 48.25 - 50.5);
        assert_eq!(result.shoulder_height_delta, 149.0 - 150.75);
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = DeviationClassifier::new(ClassifierThresholds {
            eye_height: 5.0,
            shoulder_height: 100.0,
            eye_distance_ratio: 0.5,
        });
        let controller = calibrated(100.0, 50.0, 150.0);

        let result = classifier
            .classify(&snapshot(110.0, 70.0, 190.0), controller.baseline())
            .result()
            .copied()
            .expect("classified");
        assert!(result.state.slouching); // 10 > 5
        assert!(!result.state.shoulder_shrug); // 40 <= 100
        assert!(!result.state.too_close); // 20 <= 25
    }
}
