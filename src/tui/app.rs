use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::model::{Config, ItemId, ShoppingItem, ShoppingList};
use crate::ops::{Action, ListError, Store};

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    /// The add-item dialog is open
    Add,
    /// An item's inline editor is open
    Edit,
}

/// Which input of a two-field form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Quantity,
}

impl Field {
    pub fn toggle(self) -> Self {
        match self {
            Field::Name => Field::Quantity,
            Field::Quantity => Field::Name,
        }
    }
}

/// Draft input held by the add-item dialog
#[derive(Debug, Clone, Default)]
pub struct AddDialog {
    pub name: TextInput,
    pub quantity: TextInput,
    pub focus: Field,
    /// Last submit was rejected
    pub invalid: bool,
    pub error: Option<String>,
}

impl AddDialog {
    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Quantity => &mut self.quantity,
        }
    }
}

/// Buffers of the inline editor, prefilled from the item
#[derive(Debug, Clone)]
pub struct ItemEditor {
    pub id: ItemId,
    pub name: TextInput,
    pub quantity: TextInput,
    pub focus: Field,
}

impl ItemEditor {
    pub fn for_item(item: &ShoppingItem) -> Self {
        ItemEditor {
            id: item.id,
            name: TextInput::with_text(item.name.clone()),
            quantity: TextInput::with_text(item.quantity.to_string()),
            focus: Field::Name,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Quantity => &mut self.quantity,
        }
    }
}

/// Main application state
pub struct App {
    pub store: Store,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Index of the highlighted item
    pub cursor: usize,
    /// First visible row of the list
    pub scroll: usize,
    /// Help overlay visible
    pub show_help: bool,
    pub dialog: AddDialog,
    pub editor: Option<ItemEditor>,
    /// Search mode: current query being typed
    pub search_input: TextInput,
    /// Last executed search pattern
    pub last_search: Option<String>,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Raised by the store subscription whenever the list changes
    list_changed: Rc<Cell<bool>>,
}

impl App {
    pub fn new(list: ShoppingList, config: &Config) -> Self {
        let mut store = Store::new(list, config.list.undo_limit);
        let list_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&list_changed);
        store.subscribe(move |_| flag.set(true));

        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll: 0,
            show_help: false,
            dialog: AddDialog::default(),
            editor: None,
            search_input: TextInput::default(),
            last_search: None,
            status_message: None,
            list_changed,
        }
    }

    pub fn list(&self) -> &ShoppingList {
        self.store.state()
    }

    pub fn item_count(&self) -> usize {
        self.list().len()
    }

    pub fn cursor_item(&self) -> Option<&ShoppingItem> {
        self.list().items().get(self.cursor)
    }

    /// Returns true once after each list change
    pub fn take_list_changed(&self) -> bool {
        self.list_changed.replace(false)
    }

    /// Bring UI-only state back in line with the list after it changed
    pub fn sync_with_list(&mut self) {
        self.clamp_cursor();
        let editing = self.list().editing();
        if self.editor.as_ref().map(|e| e.id) != editing {
            self.editor = None;
        }
        if self.mode == Mode::Edit && self.editor.is_none() {
            self.mode = Mode::Navigate;
        }
    }

    pub fn clamp_cursor(&mut self) {
        let count = self.item_count();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
    }

    // -----------------------------------------------------------------------
    // Add dialog
    // -----------------------------------------------------------------------

    /// Open the add dialog with empty drafts
    pub fn open_add_dialog(&mut self) {
        self.dialog = AddDialog::default();
        self.mode = Mode::Add;
    }

    pub fn cancel_add_dialog(&mut self) {
        self.mode = Mode::Navigate;
    }

    /// Try to add the drafted item. On rejection the dialog stays open with
    /// the invalid flag set and focus on the offending field.
    pub fn submit_add_dialog(&mut self) {
        let action = Action::Add {
            name: self.dialog.name.text().to_string(),
            quantity: self.dialog.quantity.text().to_string(),
        };
        match self.store.dispatch(&action) {
            Ok(()) => {
                self.mode = Mode::Navigate;
                self.cursor = self.item_count().saturating_sub(1);
                if let Some(item) = self.cursor_item() {
                    self.status_message = Some(format!("added \"{}\"", item.name));
                }
            }
            Err(e) => {
                self.dialog.focus = match e {
                    ListError::BlankName => Field::Name,
                    _ => Field::Quantity,
                };
                self.dialog.invalid = true;
                self.dialog.error = Some(e.to_string());
            }
        }
    }

    // -----------------------------------------------------------------------
    // Inline edit
    // -----------------------------------------------------------------------

    /// Open the inline editor on the item under the cursor
    pub fn begin_edit(&mut self) {
        let Some(item) = self.cursor_item().cloned() else {
            return;
        };
        if self.store.dispatch(&Action::BeginEdit { id: item.id }).is_ok() {
            self.editor = Some(ItemEditor::for_item(&item));
            self.mode = Mode::Edit;
        }
    }

    /// Save the editor's text into its item
    pub fn commit_edit(&mut self) {
        let Some(editor) = self.editor.take() else {
            self.mode = Mode::Navigate;
            return;
        };
        let action = Action::CommitEdit {
            id: editor.id,
            name: editor.name.text().to_string(),
            quantity: editor.quantity.text().to_string(),
        };
        if let Err(e) = self.store.dispatch(&action) {
            self.status_message = Some(e.to_string());
            self.close_editor();
        }
        self.mode = Mode::Navigate;
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
        self.close_editor();
        self.mode = Mode::Navigate;
    }

    /// Take the list out of edit mode, reporting a rejection in the status row
    fn close_editor(&mut self) {
        if let Err(e) = self.store.dispatch(&Action::CancelEdit) {
            self.status_message = Some(e.to_string());
        }
    }

    // -----------------------------------------------------------------------
    // Delete / undo
    // -----------------------------------------------------------------------

    pub fn delete_cursor_item(&mut self) {
        let Some(item) = self.cursor_item().cloned() else {
            return;
        };
        match self.store.dispatch(&Action::delete(&item)) {
            Ok(()) => {
                self.status_message = Some(format!("deleted \"{}\"  (u to undo)", item.name));
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    pub fn undo(&mut self) {
        self.editor = None;
        self.status_message = Some(if self.store.undo() {
            "undone".to_string()
        } else {
            "nothing to undo".to_string()
        });
    }

    pub fn redo(&mut self) {
        self.editor = None;
        self.status_message = Some(if self.store.redo() {
            "redone".to_string()
        } else {
            "nothing to redo".to_string()
        });
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. Otherwise: from last_search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.text().is_empty() => self.search_input.text(),
            Mode::Search => return None,
            _ => self.last_search.as_deref()?,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }

    /// Indices of items whose name matches `re`
    pub fn search_matches(&self, re: &Regex) -> Vec<usize> {
        self.list()
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| re.is_match(&item.name))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn start_search(&mut self) {
        self.search_input.clear();
        self.mode = Mode::Search;
    }

    pub fn cancel_search(&mut self) {
        self.search_input.clear();
        self.mode = Mode::Navigate;
    }

    /// Keep the typed pattern and jump to the first match at or after the cursor
    pub fn confirm_search(&mut self) {
        if !self.search_input.text().is_empty() {
            self.last_search = Some(self.search_input.text().to_string());
        }
        self.search_input.clear();
        self.mode = Mode::Navigate;
        if self.last_search.is_some() {
            self.jump_to_match(0);
        }
    }

    /// Move the cursor to the next (`direction > 0`), previous (`< 0`), or
    /// nearest-at-or-after (`0`) match, wrapping around
    pub fn jump_to_match(&mut self, direction: i32) {
        let Some(re) = self.active_search_re() else {
            return;
        };
        let matches = self.search_matches(&re);
        if matches.is_empty() {
            self.status_message = Some(format!(
                "no match for /{}",
                self.last_search.as_deref().unwrap_or_default()
            ));
            return;
        }
        let cursor = self.cursor;
        let target = if direction < 0 {
            matches
                .iter()
                .rev()
                .find(|&&i| i < cursor)
                .or(matches.last())
        } else if direction > 0 {
            matches.iter().find(|&&i| i > cursor).or(matches.first())
        } else {
            matches.iter().find(|&&i| i >= cursor).or(matches.first())
        };
        if let Some(&i) = target {
            self.cursor = i;
        }
    }

    pub fn clear_search(&mut self) {
        self.last_search = None;
    }
}

/// Run the TUI application
pub fn run(list: ShoppingList, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(list, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!(items = app.item_count(), "tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!(items = app.item_count(), "tui stopped");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|frame| render::render(frame, app))?;
            needs_redraw = false;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    needs_redraw = true;
                }
                Event::Resize(..) => needs_redraw = true,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
