//! Terminal presentation. Reads the session, never mutates it.

pub mod game_common;
pub mod game_over_scene;
pub mod lobby_scene;
pub mod play_scene;
pub mod rankings_panel;

use crate::session::{Phase, Session, TickOutcome};
use ratatui::Frame;

/// How long a "+" score marker stays on screen.
const FLASH_TICKS: u32 = 30;

/// Short-lived marker where an obstacle was scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFlash {
    /// World x of the scored obstacle's center.
    pub x: f64,
    pub ticks_left: u32,
}

impl ScoreFlash {
    pub fn new(x: f64) -> Self {
        Self {
            x,
            ticks_left: FLASH_TICKS,
        }
    }
}

/// Presentation-only state that outlives a single frame.
#[derive(Debug, Default)]
pub struct UiState {
    pub flashes: Vec<ScoreFlash>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Age existing effects and add the ones produced by `outcome`.
    pub fn apply_tick(&mut self, outcome: &TickOutcome) {
        for flash in &mut self.flashes {
            flash.ticks_left = flash.ticks_left.saturating_sub(1);
        }
        self.flashes.retain(|f| f.ticks_left > 0);
        self.flashes
            .extend(outcome.score_positions.iter().map(|&x| ScoreFlash::new(x)));
    }

    pub fn clear(&mut self) {
        self.flashes.clear();
    }
}

pub fn draw(frame: &mut Frame, session: &Session, ui: &UiState) {
    let area = frame.size();
    match session.phase {
        Phase::Lobby => lobby_scene::render_lobby(frame, area, session),
        Phase::Playing => play_scene::render_play(frame, area, session, &ui.flashes),
        Phase::GameOver => game_over_scene::render_game_over(frame, area, session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashes_expire() {
        let mut ui = UiState::new();
        ui.apply_tick(&TickOutcome {
            scored: 1,
            score_positions: vec![150.0],
            collision: None,
        });
        assert_eq!(ui.flashes.len(), 1);

        for _ in 0..FLASH_TICKS - 1 {
            ui.apply_tick(&TickOutcome::default());
        }
        assert_eq!(ui.flashes.len(), 1);
        ui.apply_tick(&TickOutcome::default());
        assert!(ui.flashes.is_empty());
    }
}
