use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (m, KeyCode::Char('r')) if m.contains(KeyModifiers::CONTROL) => app.redo(),
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        (_, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (_, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.item_count().saturating_sub(1);
        }

        (_, KeyCode::Char('a')) => app.open_add_dialog(),
        (_, KeyCode::Char('e') | KeyCode::Enter) => app.begin_edit(),
        (_, KeyCode::Char('d') | KeyCode::Delete) => app.delete_cursor_item(),
        (_, KeyCode::Char('u')) => app.undo(),

        (_, KeyCode::Char('/')) => app.start_search(),
        (_, KeyCode::Char('n')) => app.jump_to_match(1),
        (_, KeyCode::Char('N')) => app.jump_to_match(-1),
        (_, KeyCode::Esc) => app.clear_search(),
        _ => {}
    }
}
