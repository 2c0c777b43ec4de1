//! Session state machine: Lobby → Playing → GameOver.
//!
//! A `Session` is the one owned piece of game state. The sensor, ranking
//! store and RNG are passed into each call rather than held globally.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
