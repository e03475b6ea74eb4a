//! Constants used throughout the engine

/// Minimum keypoint confidence for a landmark to count as detected
pub const DEFAULT_KEYPOINT_CONFIDENCE: f32 = 0.3;

/// Slouch threshold: absolute eye-height deviation in pixels
pub const DEFAULT_EYE_HEIGHT_THRESHOLD: f32 = 25.0;

/// Shoulder-shrug threshold: absolute shoulder-height deviation in pixels
pub const DEFAULT_SHOULDER_HEIGHT_THRESHOLD: f32 = 25.0;

/// Too-close threshold: eye-distance deviation as a fraction of the baseline
pub const DEFAULT_EYE_DISTANCE_RATIO: f32 = 0.2;

/// Default frame dimensions reported by sources without a real video surface
pub const DEFAULT_FRAME_WIDTH: u32 = 640;

/// Default frame height counterpart of [`DEFAULT_FRAME_WIDTH`]
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;

/// How often the driver logs a posture status line, in frames
pub const DEFAULT_STATUS_INTERVAL: usize = 30;
