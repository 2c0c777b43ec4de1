use super::game_common::render_panel_frame;
use crate::core::RANKINGS_SHOWN;
use crate::ranking::RankingTable;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn medal_color(rank: usize) -> Color {
    match rank {
        1 => Color::Yellow,
        2 => Color::Gray,
        3 => Color::LightRed,
        _ => Color::White,
    }
}

/// Top entries of the leaderboard, highlighting `highlight` (1-based rank).
pub fn render_rankings(frame: &mut Frame, area: Rect, table: &RankingTable, highlight: Option<usize>) {
    let inner = render_panel_frame(frame, area, " Rankings ");
    if inner.height < 1 || inner.width < 6 {
        return;
    }

    if table.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                " No scores yet",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines = vec![Line::from("")];
    for (i, entry) in table.top(RANKINGS_SHOWN).iter().enumerate() {
        let rank = i + 1;
        let mut style = Style::default().fg(medal_color(rank));
        if highlight == Some(rank) {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>2}. ", rank), style),
            Span::styled(format!("{:<6}", entry.id), style),
            Span::styled(format!("{:>4}", entry.score), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
