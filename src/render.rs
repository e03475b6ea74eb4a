//! Rendering interface and UI-facing state.
//!
//! The engine emits [`RenderRequest`]s describing what to draw; all pixel
//! and shape work belongs to the collaborator implementing [`Renderer`].
//! Display text (warning banners and the like) reads the decoupled
//! [`PostureReport`] instead.

use crate::classifier::Classification;
use crate::error::Result;
use crate::keypoints::KeypointFrame;
use crate::metrics::{MetricSnapshot, PostureMetrics};
use log::info;

/// Everything a renderer needs to annotate one frame.
#[derive(Debug)]
pub struct RenderRequest<'a> {
    /// Landmarks detected in this frame
    pub frame: &'a KeypointFrame,
    /// Width of the video surface, pixels
    pub frame_width: u32,
    /// Height of the video surface, pixels
    pub frame_height: u32,
    /// Calibrated reference metrics, if set
    pub baseline: Option<MetricSnapshot>,
    /// Deviation outcome for this frame, absent when metrics were incomplete
    pub classification: Option<Classification>,
}

/// Drawing collaborator fed once per processed frame.
pub trait Renderer {
    /// Annotate one frame. Implementations own all drawing primitives.
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<()>;
}

/// UI-facing state update, refreshed after every processed frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PostureReport {
    /// Metrics extracted from the most recent frame (possibly partial)
    pub metrics: PostureMetrics,
    /// Most recent classification, `None` before any frame classified
    pub classification: Option<Classification>,
}

/// Headless renderer that logs posture state transitions.
///
/// Logs only when the classified condition set changes, so a steady state
/// does not flood the log at frame rate.
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_state: Option<Classification>,
}

impl LogRenderer {
    /// Create a log renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<()> {
        let Some(classification) = request.classification else {
            return Ok(());
        };
        if self.last_state == Some(classification) {
            return Ok(());
        }

        match classification {
            Classification::Uncalibrated => info!("Posture: awaiting calibration"),
            Classification::Classified(result) => info!(
                "Posture: {} (eye_height {:+.1}, eye_distance {:+.1}, shoulder_height {:+.1})",
                result.state, result.eye_height_delta, result.eye_distance_delta, result.shoulder_height_delta
            ),
        }
        self.last_state = Some(classification);
        Ok(())
    }
}
