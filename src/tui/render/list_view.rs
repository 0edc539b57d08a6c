use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::ShoppingItem;
use crate::tui::app::{App, Field, ItemEditor};
use crate::tui::text_input::TextInput;

use super::helpers::{display_width, pad_to_width, truncate_to_width};
use super::push_highlighted_spans;

const CURSOR_MARKER: &str = "\u{258C}";

/// Render the item list, one row per item. The row of the item being edited
/// is replaced by its inline editor.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.item_count() == 0 {
        let empty = Paragraph::new(" No items yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row on screen
    let height = area.height as usize;
    if app.cursor < app.scroll {
        app.scroll = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll + height {
        app.scroll = app.cursor + 1 - height;
    }

    let app: &App = app;
    let width = area.width as usize;
    let search_re = app.active_search_re();
    let edit_index = app
        .editor
        .as_ref()
        .filter(|editor| app.list().is_editing(editor.id))
        .and_then(|editor| app.list().position(editor.id));

    let lines: Vec<Line> = app
        .list()
        .items()
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(i, item)| match &app.editor {
            Some(editor) if edit_index == Some(i) => editor_line(app, editor, width),
            _ => item_line(app, item, i == app.cursor, search_re.as_ref(), width),
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn item_line<'a>(
    app: &App,
    item: &ShoppingItem,
    is_cursor: bool,
    search_re: Option<&Regex>,
    width: usize,
) -> Line<'a> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let row_style = Style::default().bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    if is_cursor {
        spans.push(Span::styled(
            CURSOR_MARKER,
            Style::default().fg(theme.highlight).bg(bg),
        ));
    } else {
        spans.push(Span::styled(" ", row_style));
    }
    spans.push(Span::styled(" ", row_style));

    let qty_text = format!("Qty: {}", item.quantity);
    let qty_width = display_width(&qty_text);
    // marker + space, two-cell gap before the quantity, one-cell right margin
    let name_budget = width.saturating_sub(2 + 2 + qty_width + 1);
    let name = truncate_to_width(&item.name, name_budget);

    let name_style = if is_cursor {
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);
    push_highlighted_spans(&mut spans, &name, name_style, match_style, search_re);

    pad_to_width(&mut spans, width.saturating_sub(qty_width + 1), row_style);
    let qty_color = if is_cursor { theme.text_bright } else { theme.dim };
    spans.push(Span::styled(qty_text, Style::default().fg(qty_color).bg(bg)));
    pad_to_width(&mut spans, width, row_style);

    Line::from(spans)
}

fn editor_line<'a>(app: &App, editor: &ItemEditor, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let bg = theme.selection_bg;
    let row_style = Style::default().bg(bg);
    let label_style = Style::default().fg(theme.dim).bg(bg);

    let mut spans: Vec<Span> = vec![
        Span::styled(CURSOR_MARKER, Style::default().fg(theme.highlight).bg(bg)),
        Span::styled(" \u{270E} ", Style::default().fg(theme.highlight).bg(bg)),
    ];
    push_field(app, &mut spans, &editor.name, editor.focus == Field::Name);
    spans.push(Span::styled("  Qty: ", label_style));
    push_field(app, &mut spans, &editor.quantity, editor.focus == Field::Quantity);
    pad_to_width(&mut spans, width, row_style);

    Line::from(spans)
}

/// `[text]`, with a cursor glyph at the input's cursor when focused
fn push_field(app: &App, spans: &mut Vec<Span<'_>>, input: &TextInput, focused: bool) {
    let theme = &app.theme;
    let bg = theme.selection_bg;
    let bracket = Style::default().fg(theme.dim).bg(bg);
    spans.push(Span::styled("[", bracket));
    if focused {
        let (before, after) = input.split_at_cursor();
        let style = Style::default().fg(theme.text_bright).bg(bg);
        spans.push(Span::styled(before.to_string(), style));
        spans.push(Span::styled(
            CURSOR_MARKER,
            Style::default().fg(theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after.to_string(), style));
    } else {
        spans.push(Span::styled(
            input.text().to_string(),
            Style::default().fg(theme.text).bg(bg),
        ));
    }
    spans.push(Span::styled("]", bracket));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| render_list_view(frame, app, area))
    }

    #[test]
    fn empty_list_prompts_to_add() {
        let mut app = app_with_items(&[]);
        let output = render(&mut app, 50, 3);
        assert_eq!(output, " No items yet. Press a to add one.");
    }

    #[test]
    fn rows_show_name_and_quantity() {
        let mut app = app_with_items(&[("Milk", 2), ("Eggs", 12)]);
        let output = render(&mut app, 30, 4);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\u{258C} Milk"));
        assert!(lines[0].ends_with("Qty: 2"));
        assert!(lines[1].starts_with("  Eggs"));
        assert!(lines[1].ends_with("Qty: 12"));
        // quantity is right-aligned with a one-cell margin
        assert_eq!(lines[1].chars().count(), 29);
    }

    #[test]
    fn long_names_are_truncated() {
        let mut app = app_with_items(&[("Extra virgin olive oil, cold pressed", 1)]);
        let output = render(&mut app, 24, 1);
        assert!(output.contains("\u{2026}"));
        assert!(output.ends_with("Qty: 1"));
    }

    #[test]
    fn editing_row_shows_inputs() {
        let mut app = app_with_items(&[("Milk", 2), ("Eggs", 12)]);
        app.cursor = 1;
        app.begin_edit();
        let output = render(&mut app, 40, 3);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("Milk"));
        assert!(lines[1].contains("[Eggs\u{258C}]"));
        assert!(lines[1].contains("Qty: [12]"));
    }

    #[test]
    fn scroll_follows_cursor() {
        let items: Vec<(String, i32)> = (1..=10).map(|i| (format!("Item {}", i), i)).collect();
        let refs: Vec<(&str, i32)> = items.iter().map(|(n, q)| (n.as_str(), *q)).collect();
        let mut app = app_with_items(&refs);
        app.cursor = 7;
        let output = render(&mut app, 30, 3);
        assert_eq!(app.scroll, 5);
        assert!(output.lines().next().unwrap().contains("Item 6"));
        assert!(output.contains("Item 8"));
        assert!(!output.contains("Item 9"));
    }
}
