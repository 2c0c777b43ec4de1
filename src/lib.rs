//! Chin-up Flap - gesture-driven side-scrolling arcade game.
//!
//! Core modules:
//! - `actor`, `obstacles`, `collision`: per-tick physics and loss detection
//! - `session`: Lobby/Playing/GameOver state machine that drives each tick
//! - `ranking`: top-10 leaderboard and its persistence
//! - `sensor`: gesture sensor interface and the pose-feed implementation
//! - `ui`, `input`: terminal presentation and key mapping

pub mod actor;
pub mod collision;
pub mod core;
pub mod input;
pub mod obstacles;
pub mod ranking;
pub mod sensor;
pub mod session;
pub mod ui;
pub mod utils;

pub use actor::Actor;
pub use collision::Collision;
pub use crate::core::{GameConfig, Rect};
pub use obstacles::{FieldTick, ObstacleField, ObstacleUnit};
pub use ranking::{JsonRankingStore, MemoryRankingStore, RankingEntry, RankingStore, RankingTable};
pub use sensor::{FeedSensor, GestureSample, GestureSensor};
pub use session::{Phase, Session, SessionInput, TickOutcome};
