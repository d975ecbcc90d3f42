use crate::ui::analysis::View;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.toggle_locale();
        return;
    }

    match app.view() {
        View::UploadPrompt => match key.code {
            KeyCode::Enter => {
                app.submit_input();
            }
            KeyCode::Backspace => app.pop_input(),
            KeyCode::Esc => app.clear_input(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.push_input(ch)
            }
            _ => {}
        },
        View::ResultCard | View::ErrorCard => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r') => app.reset(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
