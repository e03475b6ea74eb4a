//! Frame pipeline driver.
//!
//! [`PostureApp`] owns the session: it pulls estimations from the pose
//! source one at a time, extracts metrics, seeds the baseline on the
//! first complete frame, classifies deviation, and hands the result to
//! the renderer. Single-frame faults skip emission and move on; the loop
//! only ends when the source is exhausted or the frame cap is reached.

use crate::calibration::CalibrationController;
use crate::classifier::{Classification, DeviationClassifier};
use crate::config::Config;
use crate::error::Result;
use crate::keypoints::KeypointFrame;
use crate::metrics::extract_metrics;
use crate::render::{PostureReport, RenderRequest, Renderer};
use crate::source::{Estimation, PoseSource};
use log::{debug, info};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Control commands accepted by the driver at arbitrary times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Recalibrate the baseline from the current frame's metrics
    ResetBaseline,
}

/// Handle through which a UI can send commands into the running loop.
#[derive(Debug, Clone)]
pub struct ControlHandle {
    sender: Sender<Command>,
}

impl ControlHandle {
    /// Request a baseline reset; applied before the next frame.
    ///
    /// Send failures mean the session already ended and are ignored, as
    /// the reset would have had no observable effect anyway.
    pub fn reset_baseline(&self) {
        let _ = self.sender.send(Command::ResetBaseline);
    }
}

/// The posture monitoring session driver.
pub struct PostureApp {
    config: Config,
    source: Box<dyn PoseSource>,
    renderer: Box<dyn Renderer>,
    calibration: CalibrationController,
    classifier: DeviationClassifier,
    commands: Receiver<Command>,
    control: ControlHandle,
    report: PostureReport,
    reset_pending: bool,
    frames_processed: usize,
}

impl PostureApp {
    /// Create a driver over the given source and renderer.
    pub fn new(config: Config, source: Box<dyn PoseSource>, renderer: Box<dyn Renderer>) -> Result<Self> {
        config.validate()?;
        let classifier = DeviationClassifier::new(config.classifier_thresholds());
        let (sender, commands) = channel();

        Ok(Self {
            config,
            source,
            renderer,
            calibration: CalibrationController::new(),
            classifier,
            commands,
            control: ControlHandle { sender },
            report: PostureReport::default(),
            reset_pending: false,
            frames_processed: 0,
        })
    }

    /// Handle for sending control commands from another thread.
    #[must_use]
    pub fn control_handle(&self) -> ControlHandle {
        self.control.clone()
    }

    /// The UI-facing state after the most recently processed frame.
    #[must_use]
    pub fn report(&self) -> &PostureReport {
        &self.report
    }

    /// Whether the session baseline has been calibrated.
    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.calibration.baseline().is_set()
    }

    /// Queue a manual baseline reset, applied on the next processed frame.
    ///
    /// The reset uses that frame's metrics; if they turn out incomplete
    /// the reset is dropped and the previous baseline is retained.
    pub fn reset_baseline(&mut self) {
        self.reset_pending = true;
    }

    /// Run the session until the source is exhausted or the configured
    /// frame cap is reached.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting posture monitoring loop");

        loop {
            if let Some(cap) = self.config.pipeline.max_frames {
                if self.frames_processed >= cap {
                    info!("Frame cap of {cap} reached");
                    break;
                }
            }

            self.drain_commands();

            // Blocking call; the next estimation is only requested after
            // this one resolves, so one is in flight at most.
            match self.source.estimate_current()? {
                Estimation::Pose(frame) => {
                    self.frames_processed += 1;
                    self.process_frame(&frame)?;
                }
                Estimation::Empty => {
                    self.frames_processed += 1;
                    debug!("No person detected, skipping frame");
                }
                Estimation::Exhausted => {
                    info!("Pose source exhausted, ending session");
                    break;
                }
            }

            if self.frames_processed % self.config.pipeline.status_interval == 0 {
                self.log_status();
            }
        }

        info!("Posture monitoring loop finished after {} frames", self.frames_processed);
        Ok(())
    }

    /// Process one keypoint frame: extract, calibrate, classify, render.
    ///
    /// Incomplete metrics suppress classification for the frame but still
    /// produce a render request so the keypoints themselves stay visible.
    pub fn process_frame(&mut self, frame: &KeypointFrame) -> Result<()> {
        let metrics = extract_metrics(frame, self.config.extraction.keypoint_confidence);

        if self.reset_pending {
            self.reset_pending = false;
            if !self.calibration.reset_from(&metrics) {
                debug!("Baseline reset dropped: frame metrics incomplete");
            }
        }
        self.calibration.observe(&metrics);

        let classification = metrics
            .complete()
            .map(|current| self.classifier.classify(&current, self.calibration.baseline()));
        if classification.is_none() {
            debug!("Metrics incomplete, classification suppressed for this frame");
        }

        self.report = PostureReport {
            metrics,
            classification: classification.or(self.report.classification),
        };

        let (frame_width, frame_height) = self.source.frame_size();
        self.renderer.render(&RenderRequest {
            frame,
            frame_width,
            frame_height,
            baseline: self.calibration.baseline().snapshot(),
            classification,
        })
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                Command::ResetBaseline => self.reset_baseline(),
            }
        }
    }

    fn log_status(&self) {
        match self.report.classification {
            Some(Classification::Classified(result)) => {
                info!("Frame {}: posture {}", self.frames_processed, result.state);
            }
            Some(Classification::Uncalibrated) | None => {
                info!("Frame {}: awaiting calibration", self.frames_processed);
            }
        }
    }
}
