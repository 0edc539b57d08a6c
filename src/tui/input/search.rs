use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::edit_text;

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.confirm_search(),
        _ => {
            edit_text(&mut app.search_input, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::{app_with_items, press, type_keys};

    #[test]
    fn search_moves_cursor_to_match() {
        let mut app = app_with_items(&[("Milk", 1), ("Eggs", 1), ("Jam", 1)]);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Search);
        type_keys(&mut app, "egg");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.last_search.as_deref(), Some("egg"));
    }

    #[test]
    fn esc_keeps_previous_search() {
        let mut app = app_with_items(&[("Milk", 1)]);
        app.last_search = Some("milk".into());
        press(&mut app, KeyCode::Char('/'));
        type_keys(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.last_search.as_deref(), Some("milk"));
        // Esc in navigate clears it
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.last_search, None);
    }
}
