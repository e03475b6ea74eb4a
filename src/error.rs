//! Error types for the posture deviation engine.
//!
//! Missing keypoints, empty detections, uncalibrated classification and
//! reset-without-data are defined engine states, not errors; they never
//! appear here. The variants below cover genuinely external failures.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external pose source reported a fault
    #[error("Pose source error: {0}")]
    PoseSource(String),

    /// A replay recording could not be read
    #[error("Replay error: {0}")]
    Replay(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
