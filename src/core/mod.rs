//! World configuration shared by every simulation component.

pub mod config;
pub mod constants;
pub mod geometry;

pub use config::GameConfig;
pub use constants::*;
pub use geometry::Rect;
