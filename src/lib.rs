//! Posture deviation detection and calibration engine.
//!
//! This library turns a raw stream of body keypoints, produced by an
//! external pose-estimation model, into a calibrated baseline, per-frame
//! deviation measurements, and a classified posture state:
//!
//! 1. A [`source::PoseSource`] supplies one [`keypoints::KeypointFrame`]
//!    per estimation pass, at most one request in flight.
//! 2. [`metrics::extract_metrics`] derives eye height, eye distance and
//!    shoulder height, tolerating missing or low-confidence landmarks.
//! 3. The [`calibration::CalibrationController`] seeds the session
//!    baseline from the first fully-detected frame and handles manual
//!    resets.
//! 4. The [`classifier::DeviationClassifier`] compares live metrics to
//!    the baseline and reports which posture conditions are active.
//! 5. The [`app::PostureApp`] driver sequences the loop and forwards
//!    results to a [`render::Renderer`] collaborator.
//!
//! Camera acquisition, model inference and pixel drawing stay outside
//! this crate, behind the `PoseSource` and `Renderer` traits.
//!
//! # Examples
//!
//! ## Classifying a single frame
//!
//! ```
//! use posture_watch::calibration::CalibrationController;
//! use posture_watch::classifier::{Classification, DeviationClassifier};
//! use posture_watch::keypoints::{Keypoint, KeypointFrame, KeypointName};
//! use posture_watch::metrics::extract_metrics;
//!
//! let frame = KeypointFrame::new(vec![
//!     Keypoint::new(KeypointName::LeftEye, 100.0, 98.0, 0.9),
//!     Keypoint::new(KeypointName::RightEye, 150.0, 102.0, 0.9),
//!     Keypoint::new(KeypointName::LeftShoulder, 80.0, 148.0, 0.8),
//!     Keypoint::new(KeypointName::RightShoulder, 170.0, 152.0, 0.8),
//! ]);
//!
//! let metrics = extract_metrics(&frame, 0.3);
//! let mut calibration = CalibrationController::new();
//! calibration.observe(&metrics); // first complete frame sets the baseline
//!
//! let classifier = DeviationClassifier::default();
//! let current = metrics.complete().expect("all landmarks detected");
//! match classifier.classify(&current, calibration.baseline()) {
//!     Classification::Classified(result) => assert!(result.state.is_good()),
//!     Classification::Uncalibrated => unreachable!("baseline was just set"),
//! }
//! ```
//!
//! ## Running the pipeline over a recording
//!
//! ```no_run
//! use posture_watch::app::PostureApp;
//! use posture_watch::config::Config;
//! use posture_watch::render::LogRenderer;
//! use posture_watch::source::ReplaySource;
//!
//! # fn main() -> posture_watch::Result<()> {
//! let source = ReplaySource::from_file("session.jsonl", false)?;
//! let mut app = PostureApp::new(Config::default(), Box::new(source), Box::new(LogRenderer::new()))?;
//!
//! // A UI thread can request recalibration at any time.
//! let control = app.control_handle();
//! control.reset_baseline();
//!
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Body keypoint data model
pub mod keypoints;

/// Posture metric extraction
pub mod metrics;

/// Baseline storage and calibration control
pub mod calibration;

/// Deviation classification against the baseline
pub mod classifier;

/// Pose source interface and replay implementation
pub mod source;

/// Rendering interface and UI-facing state
pub mod render;

/// Frame pipeline driver
pub mod app;

/// Error types and result handling
pub mod error;

/// Configuration management
pub mod config;

/// Constants used throughout the engine
pub mod constants;

pub use error::{Error, Result};
