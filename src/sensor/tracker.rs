//! Turns raw pose readings into a smoothed world-space target.

use super::GestureSample;
use crate::core::{POSE_SMOOTHING_GAIN, POSE_SMOOTHING_RETAIN, SENSOR_STALE_TICKS};

/// One line from the pose detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoseReading {
    /// Shoulder-center height, normalized to `[0, 1]` from the top of the frame.
    Detected(f64),
    /// The detector saw no body this frame.
    Lost,
}

impl PoseReading {
    /// Parse a feed line: a number, or `-`/`none` for no pose.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line == "-" || line.eq_ignore_ascii_case("none") {
            return Some(PoseReading::Lost);
        }
        match line.parse::<f64>() {
            Ok(y) if y.is_finite() => Some(PoseReading::Detected(y)),
            _ => None,
        }
    }
}

/// Smoothed shoulder tracking.
///
/// The first detection snaps the target; later detections are low-pass
/// filtered. A lost pose, or a feed that stays silent for more than
/// `SENSOR_STALE_TICKS`, clears detection until the next reading.
#[derive(Debug, Clone)]
pub struct PoseTracker {
    world_height: f64,
    target_y: f64,
    detected: bool,
    silent_ticks: u32,
}

impl PoseTracker {
    pub fn new(world_height: f64) -> Self {
        Self {
            world_height,
            target_y: (world_height / 2.0).floor(),
            detected: false,
            silent_ticks: 0,
        }
    }

    pub fn observe(&mut self, reading: PoseReading) {
        self.silent_ticks = 0;
        match reading {
            PoseReading::Detected(y) => {
                let screen_y = (y.clamp(0.0, 1.0) * self.world_height).trunc();
                if self.detected {
                    self.target_y =
                        self.target_y * POSE_SMOOTHING_RETAIN + screen_y * POSE_SMOOTHING_GAIN;
                } else {
                    self.target_y = screen_y;
                    self.detected = true;
                }
            }
            PoseReading::Lost => self.detected = false,
        }
    }

    /// Called for each tick in which no reading arrived.
    pub fn idle_tick(&mut self) {
        self.silent_ticks = self.silent_ticks.saturating_add(1);
        if self.silent_ticks > SENSOR_STALE_TICKS {
            self.detected = false;
        }
    }

    pub fn sample(&self) -> GestureSample {
        GestureSample {
            target_y: self.target_y,
            acquired: self.detected,
        }
    }
}
