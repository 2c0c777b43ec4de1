//! Scrolling gated obstacles.
//!
//! `ObstacleUnit` is a single wall pair with a gap; `ObstacleField` owns the
//! live units, the spawn timer, and reports which units the actor passed.

pub mod field;
pub mod types;

pub use field::{FieldTick, ObstacleField};
pub use types::ObstacleUnit;
