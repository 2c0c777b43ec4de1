//! Gesture sensor interface.
//!
//! The pose detector itself lives outside this crate. The game only sees a
//! per-tick sample: a vertical target in world units and whether a pose is
//! currently being tracked.

pub mod feed;
pub mod tracker;

pub use feed::FeedSensor;
pub use tracker::PoseTracker;

use std::io;

/// One reading handed to the actor each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Target for the actor's top edge, in `[0, world_height]`.
    pub target_y: f64,
    /// Whether a pose is tracked this tick. Re-evaluated every tick.
    pub acquired: bool,
}

impl GestureSample {
    pub fn is_acquired(sample: Option<&GestureSample>) -> bool {
        sample.is_some_and(|s| s.acquired)
    }
}

/// Source of gesture samples.
///
/// Implementations must never block the tick: `acquire` returns immediately
/// and `poll` only looks at data that has already arrived.
pub trait GestureSensor {
    /// Best-effort attach to the device with the given index. An error means
    /// the game continues in fallback-impulse mode.
    fn acquire(&mut self, index: u32) -> io::Result<()>;

    /// Latest sample, or `None` if nothing is attached.
    fn poll(&mut self) -> Option<GestureSample>;

    /// Detach from the device. Safe to call when nothing is attached.
    fn release(&mut self);
}
