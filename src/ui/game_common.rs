//! Screen frame shared by the lobby, play and game-over scenes.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows reserved under the main area for the message and key hints.
const FOOTER_ROWS: u16 = 2;

/// Areas of a framed scene.
pub struct ScreenAreas {
    /// Playfield or form, left of the sidebar.
    pub main: Rect,
    /// Message row plus key-hint row under `main`.
    pub footer: Rect,
    pub sidebar: Rect,
}

/// Clear `area`, draw the titled border and carve it into main, footer and
/// a fixed-width sidebar on the right.
pub fn frame_screen(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    sidebar_width: u16,
) -> ScreenAreas {
    frame.render_widget(Clear, area);
    let border = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inside = border.inner(area);
    frame.render_widget(border, area);

    let columns = Layout::horizontal([Constraint::Min(20), Constraint::Length(sidebar_width)])
        .split(inside);
    let rows = Layout::vertical([Constraint::Min(5), Constraint::Length(FOOTER_ROWS)])
        .split(columns[0]);

    ScreenAreas {
        main: rows[0],
        footer: rows[1],
        sidebar: columns[1],
    }
}

/// `[Key] Action` pairs on one line.
pub fn hint_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Message on the first footer row, key hints on the second.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[(&str, &str)],
) {
    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    ))];
    if !hints.is_empty() {
        lines.push(hint_line(hints));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Bordered side panel with a title. Returns the inner area.
pub fn render_panel_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A "label: value" line for side panels.
pub fn label_value_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
