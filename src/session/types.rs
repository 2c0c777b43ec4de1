//! Session data structures.

use crate::actor::Actor;
use crate::collision::Collision;
use crate::core::GameConfig;
use crate::obstacles::ObstacleField;
use crate::ranking::RankingTable;
use crate::sensor::GestureSample;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entering a player id.
    Lobby,
    Playing,
    GameOver,
}

/// Player commands, already decoupled from concrete keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// Typed character (lobby only).
    Char(char),
    Backspace,
    /// Submit the player id.
    Confirm,
    /// Fallback jump.
    Jump,
    Restart,
    /// Leave the current run for the lobby.
    Abandon,
}

/// Events produced by one simulation tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub scored: u32,
    /// World x of each obstacle scored this tick.
    pub score_positions: Vec<f64>,
    /// Set on the tick the run ended.
    pub collision: Option<Collision>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub phase: Phase,
    pub config: GameConfig,
    /// Upper-case alphanumeric id, at most `config.max_id_len` long.
    pub player_id: String,
    pub score: u32,
    pub scroll_speed: f64,
    /// Guards against writing the same run to the rankings twice.
    pub score_persisted: bool,
    pub actor: Actor,
    pub field: ObstacleField,
    /// Which gesture device to attach to when a run starts.
    pub sensor_index: u32,
    /// Sample polled on the latest tick.
    pub gesture: Option<GestureSample>,
    /// Leaderboard shown in the lobby and on the game-over screen.
    pub rankings: RankingTable,
    /// Rank achieved by the last finished run.
    pub last_rank: Option<usize>,
    pub last_collision: Option<Collision>,
    /// Ticks simulated in the current run.
    pub tick_count: u64,
}

impl Session {
    pub fn new(config: GameConfig, sensor_index: u32, rankings: RankingTable) -> Self {
        Self {
            phase: Phase::Lobby,
            player_id: String::new(),
            score: 0,
            scroll_speed: config.base_scroll_speed,
            score_persisted: false,
            actor: Actor::new(&config),
            field: ObstacleField::new(&config),
            sensor_index,
            gesture: None,
            rankings,
            last_rank: None,
            last_collision: None,
            tick_count: 0,
            config,
        }
    }

    /// Start-of-run state: empty field, zero score, base speed, centered actor.
    pub fn reset(&mut self) {
        self.field.clear();
        self.score = 0;
        self.scroll_speed = self.config.base_scroll_speed;
        self.actor.reset(&self.config);
        self.score_persisted = false;
        self.gesture = None;
        self.last_rank = None;
        self.last_collision = None;
        self.tick_count = 0;
    }

    pub fn gesture_acquired(&self) -> bool {
        GestureSample::is_acquired(self.gesture.as_ref())
    }

    pub fn id_complete(&self) -> bool {
        self.player_id.chars().count() == self.config.max_id_len
    }

    pub fn best_score(&self) -> Option<u32> {
        self.rankings.best_score()
    }
}
