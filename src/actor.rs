//! The player-controlled actor.
//!
//! The actor only moves vertically. With a tracked pose it eases toward the
//! gesture target; without one it falls under gravity and responds to jumps.

use crate::core::{GameConfig, Rect, GESTURE_FOLLOW_GAIN, GESTURE_FOLLOW_RETAIN};
use crate::sensor::GestureSample;

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Top edge, world units, y grows downward.
    pub position_y: f64,
    /// Vertical velocity per tick (positive = downward).
    pub velocity_y: f64,
    /// Fixed horizontal position of the left edge.
    pub x: f64,
    pub size: f64,
    max_y: f64,
    gravity: f64,
    jump_strength: f64,
}

impl Actor {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position_y: config.actor_start_y(),
            velocity_y: 0.0,
            x: config.actor_x,
            size: config.actor_size,
            max_y: config.actor_max_y(),
            gravity: config.gravity,
            jump_strength: config.jump_strength,
        }
    }

    /// Advance one tick.
    pub fn update(&mut self, sample: Option<GestureSample>) {
        match sample {
            Some(s) if s.acquired => {
                self.position_y =
                    self.position_y * GESTURE_FOLLOW_RETAIN + s.target_y * GESTURE_FOLLOW_GAIN;
            }
            _ => {
                self.velocity_y += self.gravity;
                self.position_y += self.velocity_y;
            }
        }

        if self.position_y < 0.0 {
            self.position_y = 0.0;
            self.velocity_y = 0.0;
        } else if self.position_y > self.max_y {
            self.position_y = self.max_y;
            self.velocity_y = 0.0;
        }
    }

    /// Fallback jump. Ignored while a gesture is acquired so the two control
    /// channels never fight.
    pub fn apply_impulse(&mut self, gesture_acquired: bool) {
        if !gesture_acquired {
            self.velocity_y = self.jump_strength;
        }
    }

    /// Put the actor back at its start position with zero velocity.
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Collision box on the pixel grid. The world-edge check uses the
    /// unrounded `position_y` instead.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.position_y, self.size, self.size).snapped()
    }

    /// Lowest position the top edge can reach.
    pub fn max_y(&self) -> f64 {
        self.max_y
    }
}
