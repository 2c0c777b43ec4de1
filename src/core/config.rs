//! Game configuration threaded through every simulation component.
//!
//! `GameConfig::default()` carries the canonical tuning from `constants`.
//! Tests build smaller or tweaked worlds by overriding individual fields.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub world_width: f64,
    pub world_height: f64,
    pub gravity: f64,
    pub jump_strength: f64,
    pub actor_size: f64,
    pub actor_x: f64,
    pub obstacle_width: f64,
    pub gap_height: f64,
    pub min_margin: f64,
    pub base_scroll_speed: f64,
    pub speed_increase: f64,
    /// Ticks between obstacle spawns.
    pub spawn_interval_ticks: u32,
    pub max_id_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            actor_size: ACTOR_SIZE,
            actor_x: ACTOR_X,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            min_margin: MIN_MARGIN,
            base_scroll_speed: BASE_SCROLL_SPEED,
            speed_increase: SPEED_INCREASE,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            max_id_len: MAX_ID_LEN,
        }
    }
}

impl GameConfig {
    /// Lowest allowed top edge of an obstacle gap.
    pub fn min_gap_start(&self) -> f64 {
        self.min_margin
    }

    /// Highest allowed top edge of an obstacle gap.
    pub fn max_gap_start(&self) -> f64 {
        self.world_height - self.gap_height - self.min_margin
    }

    /// Lowest position the actor's top edge may occupy.
    pub fn actor_max_y(&self) -> f64 {
        self.world_height - self.actor_size
    }

    /// Where the actor is placed on reset (integer midpoint of the world).
    pub fn actor_start_y(&self) -> f64 {
        (self.world_height / 2.0).floor()
    }

    /// Check that the geometry is playable, returning the config unchanged.
    pub fn validated(self) -> io::Result<Self> {
        fn invalid(msg: &str) -> io::Result<GameConfig> {
            Err(io::Error::new(io::ErrorKind::InvalidInput, msg.to_string()))
        }

        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return invalid("world dimensions must be positive");
        }
        if self.actor_size <= 0.0 || self.actor_size >= self.world_height {
            return invalid("actor must fit inside the world");
        }
        if self.gap_height <= 0.0 || self.max_gap_start() < self.min_gap_start() {
            return invalid("obstacle gap and margins do not fit inside the world");
        }
        if self.obstacle_width <= 0.0 {
            return invalid("obstacle width must be positive");
        }
        if self.spawn_interval_ticks == 0 {
            return invalid("spawn interval must be at least one tick");
        }
        if self.max_id_len == 0 {
            return invalid("player id length must be at least one");
        }
        Ok(self)
    }
}
