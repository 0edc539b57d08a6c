use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::edit_text;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Tab | KeyCode::BackTab => {
            if let Some(editor) = &mut app.editor {
                editor.focus = editor.focus.toggle();
            }
        }
        _ => {
            if let Some(editor) = &mut app.editor {
                edit_text(editor.focused_mut(), key);
            }
        }
    }
}
