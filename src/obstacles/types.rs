//! A single obstacle: a top wall and a bottom wall separated by a gap.

use crate::core::{GameConfig, Rect};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleUnit {
    /// Left edge in world units. Decreases every tick.
    pub x: f64,
    /// Top edge of the gap.
    pub gap_start_y: f64,
    pub gap_height: f64,
    pub width: f64,
    /// Set once the actor has passed this unit.
    pub scored: bool,
    world_height: f64,
}

impl ObstacleUnit {
    /// Create a unit at `spawn_x` with a random gap position. The gap's top
    /// edge is a uniform integer in `[min_margin, world_height - gap - min_margin]`.
    pub fn new<R: Rng>(spawn_x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let min_start = config.min_gap_start() as i64;
        let max_start = config.max_gap_start() as i64;
        let gap_start = if max_start > min_start {
            rng.gen_range(min_start..=max_start)
        } else {
            min_start
        };

        Self::with_gap(spawn_x, gap_start as f64, config)
    }

    /// Create a unit with a fixed gap position.
    pub fn with_gap(x: f64, gap_start_y: f64, config: &GameConfig) -> Self {
        Self {
            x,
            gap_start_y,
            gap_height: config.gap_height,
            width: config.obstacle_width,
            scored: false,
            world_height: config.world_height,
        }
    }

    pub fn advance(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// Returns true exactly once: the first time the trailing edge is left of
    /// `actor_x`. Later calls return false.
    pub fn check_passed(&mut self, actor_x: f64) -> bool {
        if !self.scored && self.x + self.width < actor_x {
            self.scored = true;
            return true;
        }
        false
    }

    pub fn is_expired(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn gap_end_y(&self) -> f64 {
        self.gap_start_y + self.gap_height
    }

    pub fn top_wall(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_start_y).snapped()
    }

    pub fn bottom_wall(&self) -> Rect {
        let gap_end = self.gap_end_y();
        Rect::new(self.x, gap_end, self.width, self.world_height - gap_end).snapped()
    }

    /// Walls and actor are compared on whole pixels, so a fractional
    /// position never collides early.
    pub fn collides_with(&self, actor_bounds: &Rect) -> bool {
        let actor = actor_bounds.snapped();
        self.top_wall().intersects(&actor) || self.bottom_wall().intersects(&actor)
    }

    /// Horizontal center, used to place score effects.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}
