use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::app_state::TuiState;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if state.show_help {
        state.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            state.press_button();
        }
        KeyCode::Char('?') => {
            state.show_help = true;
        }
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let col = mouse.column;
        let row = mouse.row;

        if let Some(ref area) = state.button_area {
            if col >= area.x && col < area.x + area.width
                && row >= area.y && row < area.y + area.height
            {
                state.flash_message = None;
                state.press_button();
            }
        }
    }
}
