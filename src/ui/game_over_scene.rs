//! Game-over summary.

use super::game_common::{frame_screen, render_footer};
use super::rankings_panel::render_rankings;
use crate::session::Session;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_game_over(frame: &mut Frame, area: Rect, session: &Session) {
    let layout = frame_screen(frame, area, " Chin-up Flap ", Color::Red, 24);

    let cause = session
        .last_collision
        .map(|c| c.describe())
        .unwrap_or("Run over");
    let rank_line = match session.last_rank {
        Some(1) => Line::from(Span::styled(
            "New high score!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Some(rank) => Line::from(Span::styled(
            format!("Ranked #{}", rank),
            Style::default().fg(Color::Cyan),
        )),
        None => Line::from(Span::styled(
            "Not in the top 10",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(cause, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} passed {} gates", session.player_id, session.score),
            Style::default().fg(Color::White),
        )),
        rank_line,
    ];

    let content_height = lines.len() as u16;
    let content = layout.main;
    let y = content.y + content.height.saturating_sub(content_height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(content.x, y, content.width, content_height.min(content.height)),
    );

    render_footer(
        frame,
        layout.footer,
        &format!("Final score: {}", session.score),
        Color::Yellow,
        &[("[R]", "Restart"), ("[Esc]", "Lobby")],
    );

    render_rankings(frame, layout.sidebar, &session.rankings, session.last_rank);
}
