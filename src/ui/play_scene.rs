//! Active play: the scaled world, HUD and controls.

use super::game_common::{frame_screen, label_value_line, render_panel_frame, render_footer};
use super::ScoreFlash;
use crate::session::Session;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Actor,
    Flash,
}

/// Sample the world at the center of every cell.
pub fn build_grid(session: &Session, flashes: &[ScoreFlash], width: usize, height: usize) -> Vec<Vec<Cell>> {
    let config = &session.config;
    let x_scale = config.world_width / width as f64;
    let y_scale = config.world_height / height as f64;
    let actor = session.actor.bounds();
    let flash_row = height / 2;

    let mut grid = vec![vec![Cell::Empty; width]; height];
    for (row, cells) in grid.iter_mut().enumerate() {
        let wy = (row as f64 + 0.5) * y_scale;
        for (col, cell) in cells.iter_mut().enumerate() {
            let wx = (col as f64 + 0.5) * x_scale;

            if wx >= actor.x && wx < actor.right() && wy >= actor.y && wy < actor.bottom() {
                *cell = Cell::Actor;
                continue;
            }

            let in_wall = session.field.units().iter().any(|u| {
                wx >= u.x && wx < u.x + u.width && (wy < u.gap_start_y || wy >= u.gap_end_y())
            });
            if in_wall {
                *cell = Cell::Wall;
            }
        }
    }

    for flash in flashes {
        let col = (flash.x / x_scale).floor();
        if col >= 0.0 && (col as usize) < width && flash_row < height {
            grid[flash_row][col as usize] = Cell::Flash;
        }
    }

    grid
}

fn render_world(frame: &mut Frame, area: Rect, session: &Session, flashes: &[ScoreFlash]) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let actor_char = if session.actor.velocity_y < -1.0 {
        "▲"
    } else if session.actor.velocity_y > 4.0 {
        "▼"
    } else {
        "█"
    };

    let lines: Vec<Line> = build_grid(session, flashes, width, height)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Cell::Empty => Span::raw(" "),
                    Cell::Wall => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::Actor => Span::styled(
                        actor_char,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::Flash => Span::styled(
                        "+",
                        Style::default()
                            .fg(Color::LightYellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_hud(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_panel_frame(frame, area, " Run ");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let acquired = session.gesture_acquired();
    let (pose_text, pose_color) = if acquired {
        ("ACTIVE", Color::LightGreen)
    } else {
        ("LOST", Color::Red)
    };
    let best = session
        .best_score()
        .map(|b| b.max(session.score).to_string())
        .unwrap_or_else(|| session.score.to_string());

    let lines = vec![
        Line::from(""),
        label_value_line("Player", session.player_id.clone(), Color::Cyan),
        label_value_line("Score", session.score.to_string(), Color::White),
        label_value_line("Best", best, Color::Yellow),
        label_value_line("Speed", format!("{:.1}", session.scroll_speed), Color::White),
        Line::from(""),
        label_value_line("Pose", pose_text.to_string(), pose_color),
        label_value_line(
            "Mode",
            if acquired { "Gesture" } else { "Jump" }.to_string(),
            Color::Gray,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_play(frame: &mut Frame, area: Rect, session: &Session, flashes: &[ScoreFlash]) {
    let layout = frame_screen(frame, area, " Chin-up Flap ", Color::Cyan, 22);

    render_world(frame, layout.main, session, flashes);

    let status = format!("Score: {}", session.score);
    render_footer(
        frame,
        layout.footer,
        &status,
        Color::Green,
        &[("[Space/Up]", "Jump"), ("[Esc]", "Lobby")],
    );

    render_hud(frame, layout.sidebar, session);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::obstacles::ObstacleUnit;
    use crate::ranking::RankingTable;

    fn session() -> Session {
        Session::new(GameConfig::default(), 0, RankingTable::new())
    }

    #[test]
    fn test_actor_drawn_at_scaled_position() {
        let session = session();
        // 120x80 grid: one cell per 10x10 world units.
        let grid = build_grid(&session, &[], 120, 80);
        assert_eq!(grid[40][20], Cell::Actor);
        assert_eq!(grid[45][25], Cell::Actor);
        assert_eq!(grid[40][26], Cell::Empty);
        assert_eq!(grid[39][20], Cell::Empty);
    }

    #[test]
    fn test_walls_leave_gap_open() {
        let mut session = session();
        let config = session.config;
        session.field.push(ObstacleUnit::with_gap(600.0, 200.0, &config));
        let grid = build_grid(&session, &[], 120, 80);
        assert_eq!(grid[0][60], Cell::Wall);
        assert_eq!(grid[19][65], Cell::Wall);
        assert_eq!(grid[20][65], Cell::Empty);
        assert_eq!(grid[47][65], Cell::Empty);
        assert_eq!(grid[48][65], Cell::Wall);
        assert_eq!(grid[79][69], Cell::Wall);
        assert_eq!(grid[0][70], Cell::Empty);
    }

    #[test]
    fn test_flash_drawn_mid_screen() {
        let session = session();
        let flashes = [ScoreFlash::new(150.0), ScoreFlash::new(-40.0)];
        let grid = build_grid(&session, &flashes, 120, 80);
        assert_eq!(grid[40][15], Cell::Flash);
    }
}
