mod common;
mod dialog;
mod edit;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use common::*;
use dialog::handle_add_dialog;
use edit::handle_edit;
use navigate::handle_navigate;
use search::handle_search;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    let key = normalize_key(key);
    tracing::debug!(mode = ?app.mode, code = ?key.code, "key");
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Add => handle_add_dialog(app, key),
        Mode::Edit => handle_edit(app, key),
    }

    if app.take_list_changed() {
        app.sync_with_list();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;
    use crate::tui::render::test_helpers::{app_with_items, press, press_ctrl, type_keys};

    #[test]
    fn add_flow_through_keys() {
        let mut app = app_with_items(&[]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Add);
        type_keys(&mut app, "Milk");
        press(&mut app, KeyCode::Tab);
        type_keys(&mut app, "2");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.list().items().len(), 1);
        assert_eq!(app.list().items()[0].quantity, 2);
    }

    #[test]
    fn rejected_add_stays_in_dialog() {
        let mut app = app_with_items(&[]);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Add);
        assert!(app.dialog.invalid);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.list().is_empty());
    }

    #[test]
    fn edit_flow_through_keys() {
        let mut app = app_with_items(&[("Milk", 2), ("Eggs", 12)]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));
        assert!(app.list().is_editing(ItemId(2)));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_keys(&mut app, "6");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.list().items()[1].quantity, 6);
        assert_eq!(app.list().editing(), None);
    }

    #[test]
    fn delete_and_undo_through_keys() {
        let mut app = app_with_items(&[("Milk", 2), ("Eggs", 12)]);
        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.list().len(), 1);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.list().len(), 2);
        press_ctrl(&mut app, 'r');
        assert_eq!(app.list().len(), 1);
    }

    #[test]
    fn status_message_clears_on_next_key() {
        let mut app = app_with_items(&[("Milk", 2)]);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.status_message.is_some());
        press(&mut app, KeyCode::Char('j'));
        assert!(app.status_message.is_none());
    }
}
