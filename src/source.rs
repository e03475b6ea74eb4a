//! Pose source interface and the replay implementation.
//!
//! The engine never runs the pose-estimation model itself; it consumes a
//! [`PoseSource`], a capability that estimates keypoints from whatever the
//! source's current image is. `estimate_current` is a blocking call and
//! the driver issues the next request only after the previous one
//! returns, so at most one estimation is ever outstanding. Frames that
//! arrive at the underlying surface while a call is in flight are simply
//! dropped, never queued.

use crate::constants::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH};
use crate::error::{Error, Result};
use crate::keypoints::{Keypoint, KeypointFrame};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of one estimation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Estimation {
    /// A person was detected; here are their landmarks
    Pose(KeypointFrame),
    /// No person detected in the current image; skip this frame
    Empty,
    /// The source has no further frames; the session is over
    Exhausted,
}

/// An asynchronous pose-estimation capability over a video surface.
pub trait PoseSource {
    /// Run pose estimation on the source's best-available current image.
    ///
    /// Must be called at most once concurrently; the driver guarantees
    /// this by awaiting each call's return before issuing the next.
    fn estimate_current(&mut self) -> Result<Estimation>;

    /// Current frame dimensions of the underlying surface, (width, height).
    fn frame_size(&self) -> (u32, u32);
}

/// One line of a replay recording.
///
/// A record with no keypoints stands for a frame where the model detected
/// nobody.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayRecord {
    /// Landmarks reported by the model for this frame
    pub keypoints: Vec<Keypoint>,
    /// Frame width at recording time
    #[serde(default = "default_width")]
    pub width: u32,
    /// Frame height at recording time
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    DEFAULT_FRAME_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_FRAME_HEIGHT
}

/// Plays back keypoint frames recorded as JSON Lines.
///
/// Malformed lines are skipped with a warning rather than aborting the
/// session, matching the driver's skip-and-continue policy for single
/// frame faults. With `looped` set, the recording restarts from the top
/// instead of exhausting.
pub struct ReplaySource {
    records: Vec<ReplayRecord>,
    cursor: usize,
    looped: bool,
    frame_size: (u32, u32),
}

impl ReplaySource {
    /// Load a recording from a JSONL file.
    pub fn from_file<P: AsRef<Path>>(path: P, looped: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Replay(format!("cannot open {}: {e}", path.display())))?;

        let mut records = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ReplayRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping malformed replay line {}: {e}", line_no + 1),
            }
        }

        if records.is_empty() {
            return Err(Error::Replay(format!("{} contains no usable frames", path.display())));
        }

        debug!("Loaded {} replay frames from {}", records.len(), path.display());
        Ok(Self::from_records(records, looped))
    }

    /// Build a source directly from records, e.g. for tests.
    #[must_use]
    pub fn from_records(records: Vec<ReplayRecord>, looped: bool) -> Self {
        let frame_size = records
            .first()
            .map_or((DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT), |r| (r.width, r.height));
        Self {
            records,
            cursor: 0,
            looped,
            frame_size,
        }
    }

    /// Number of frames in the recording.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the recording holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PoseSource for ReplaySource {
    fn estimate_current(&mut self) -> Result<Estimation> {
        if self.cursor >= self.records.len() {
            if !self.looped || self.records.is_empty() {
                return Ok(Estimation::Exhausted);
            }
            self.cursor = 0;
        }

        let record = &self.records[self.cursor];
        self.cursor += 1;
        self.frame_size = (record.width, record.height);

        if record.keypoints.is_empty() {
            Ok(Estimation::Empty)
        } else {
            Ok(Estimation::Pose(KeypointFrame::new(record.keypoints.clone())))
        }
    }

    fn frame_size(&self) -> (u32, u32) {
        self.frame_size
    }
}
