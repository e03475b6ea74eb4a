//! Baseline storage and calibration control.
//!
//! One [`Baseline`] exists per monitoring session. It starts unset, is
//! seeded automatically by the first frame with complete metrics, and can
//! be recalibrated at any time by an explicit user reset. There is no
//! transition back to the uncalibrated state within a session.

use crate::metrics::{MetricSnapshot, PostureMetrics};
use log::{debug, info};

/// The calibrated reference metrics for the session, or unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Baseline {
    snapshot: Option<MetricSnapshot>,
}

impl Baseline {
    /// Whether calibration has happened.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The calibrated metrics, if set.
    ///
    /// All three reference values are returned together so a reader never
    /// mixes fields from different calibrations.
    #[must_use]
    pub fn snapshot(&self) -> Option<MetricSnapshot> {
        self.snapshot
    }
}

/// Owns the baseline and decides when it changes.
///
/// The controller is the baseline's only writer; the classifier reads it
/// through [`CalibrationController::baseline`].
#[derive(Debug, Default)]
pub struct CalibrationController {
    baseline: Baseline,
}

impl CalibrationController {
    /// Create a controller with an unset baseline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the baseline.
    #[must_use]
    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Auto-calibration step, invoked once per frame by the driver.
    ///
    /// The first frame whose metrics are complete seeds the baseline;
    /// afterwards this is a no-op until an explicit reset. Returns true
    /// when this call performed the seeding.
    pub fn observe(&mut self, metrics: &PostureMetrics) -> bool {
        if self.baseline.is_set() {
            return false;
        }
        match metrics.complete() {
            Some(snapshot) => {
                self.baseline.snapshot = Some(snapshot);
                info!(
                    "Baseline auto-calibrated: eye_height={:.1} eye_distance={:.1} shoulder_height={:.1}",
                    snapshot.eye_height, snapshot.eye_distance, snapshot.shoulder_height
                );
                true
            }
            None => false,
        }
    }

    /// Manual reset from the current frame's metrics.
    ///
    /// Recalibrates when all three metrics are present; otherwise the
    /// previous baseline is retained and false is returned. Repeating the
    /// reset with equal metrics yields an identical baseline.
    pub fn reset_from(&mut self, metrics: &PostureMetrics) -> bool {
        match metrics.complete() {
            Some(snapshot) => {
                self.baseline.snapshot = Some(snapshot);
                info!(
                    "Baseline reset: eye_height={:.1} eye_distance={:.1} shoulder_height={:.1}",
                    snapshot.eye_height, snapshot.eye_distance, snapshot.shoulder_height
                );
                true
            }
            None => {
                debug!("Baseline reset ignored: current metrics incomplete");
                false
            }
        }
    }
}
