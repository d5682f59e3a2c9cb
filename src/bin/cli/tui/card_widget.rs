use ratatui::prelude::*;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let block = Block::default()
        .title(" Flashcards ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.is_loading() {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading terms…",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        f.render_widget(loading, inner);
        state.button_area = None;
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner);

    let card = state.card().clone();

    let word = Paragraph::new(Line::from(Span::styled(
        card.word,
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(word, rows[1]);

    if card.definition_visible {
        let definition = Paragraph::new(card.definition)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(definition, rows[2]);
    }

    // Button: centered, sized to its label
    let label = format!(" {} ", card.button_label);
    let width = (label.chars().count() as u16 + 2).min(rows[3].width);
    let button_area = Rect {
        x: rows[3].x + (rows[3].width - width) / 2,
        y: rows[3].y,
        width,
        height: rows[3].height,
    };
    let enabled = !state.session.controller().is_empty();
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    f.render_widget(button, button_area);
    state.button_area = Some(button_area);
}
