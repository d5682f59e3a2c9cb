use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Red).fg(Color::White));
        f.render_widget(flash, area);
        return;
    }

    let progress = match state.progress() {
        Some((current, total)) => format!(" {}/{} ", current, total),
        None => " -/- ".to_string(),
    };
    let hints = " Space/Enter: flip or next  ?: help  q: quit ";

    let status = Paragraph::new(Line::from(vec![
        Span::styled(progress, Style::default().bg(Color::Blue).fg(Color::White)),
        Span::raw(hints),
        Span::styled(state.source.clone(), Style::default().fg(Color::Gray)),
    ]))
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
