use ratatui::prelude::*;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app_state::TuiState;
use super::{card_widget, status_bar};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Main layout: card area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    card_widget::draw(f, outer[0], state);
    status_bar::draw(f, outer[1], state);

    if state.show_help {
        draw_help(f, size);
    }
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("  Space, Enter, l, →   show definition / next word"),
        Line::from("  Mouse click          press the card button"),
        Line::from("  ?                    toggle this help"),
        Line::from("  q, Esc               quit"),
        Line::from(""),
    ];

    let width = 52.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
