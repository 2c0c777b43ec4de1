//! Lobby: player id entry and the leaderboard.

use super::game_common::{frame_screen, render_footer};
use super::rankings_panel::render_rankings;
use crate::session::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_lobby(frame: &mut Frame, area: Rect, session: &Session) {
    let layout = frame_screen(frame, area, " Chin-up Flap ", Color::Cyan, 24);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input label
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Rules
            Constraint::Min(0),    // Filler
        ])
        .split(layout.main);

    let title = Paragraph::new("Enter your player ID")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(Paragraph::new("Player ID:"), chunks[2]);

    // Pad with underscores so the required length is visible.
    let max_len = session.config.max_id_len;
    let typed = session.player_id.chars().count();
    let input_text = format!(
        "{}{}",
        session.player_id,
        "_".repeat(max_len.saturating_sub(typed))
    );
    let input_width = (max_len as u16 + 4).min(chunks[3].width);
    let input_area = Rect {
        width: input_width,
        ..chunks[3]
    };
    let input_widget = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(input_widget, input_area);

    let rules = vec![
        Line::from(format!("• Exactly {} letters or digits", max_len)),
        Line::from("• Raise and lower your shoulders to fly"),
        Line::from("• No camera? Space makes you jump"),
    ];
    frame.render_widget(
        Paragraph::new(rules).style(Style::default().fg(Color::Gray)),
        chunks[5],
    );

    let (status, color) = if session.id_complete() {
        ("Ready! Press Enter to start".to_string(), Color::Green)
    } else {
        (
            format!("{} more character(s) needed", max_len.saturating_sub(typed)),
            Color::Yellow,
        )
    };
    render_footer(
        frame,
        layout.footer,
        &status,
        color,
        &[("[Enter]", "Start"), ("[Backspace]", "Delete"), ("[Esc]", "Quit")],
    );

    render_rankings(frame, layout.sidebar, &session.rankings, None);
}
