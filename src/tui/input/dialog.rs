use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::edit_text;

pub(super) fn handle_add_dialog(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_add_dialog(),
        KeyCode::Enter => app.submit_add_dialog(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dialog.focus = app.dialog.focus.toggle();
        }
        _ => {
            edit_text(app.dialog.focused_mut(), key);
        }
    }
}
