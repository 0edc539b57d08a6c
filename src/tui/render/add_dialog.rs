use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Field};
use crate::tui::text_input::TextInput;

use super::helpers::{centered_fixed, pad_to_width};

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 9;

/// Render the add-item dialog centered over `area`
pub fn render_add_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let dialog_area = centered_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog_area);

    let theme = &app.theme;
    let bg = theme.background;
    let dialog = &app.dialog;

    let accent = if dialog.invalid {
        theme.red
    } else {
        theme.highlight
    };
    let label_style = Style::default().fg(accent).bg(bg);
    let inner_width = dialog_area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Item Name", label_style)));
    lines.push(input_line(
        app,
        &dialog.name,
        dialog.focus == Field::Name,
        inner_width,
    ));
    lines.push(Line::from(Span::styled(" Item Quantity", label_style)));
    lines.push(input_line(
        app,
        &dialog.quantity,
        dialog.focus == Field::Quantity,
        inner_width,
    ));

    match &dialog.error {
        Some(message) if dialog.invalid => lines.push(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(theme.red).bg(bg),
        ))),
        _ => lines.push(Line::from("")),
    }

    let key_style = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(theme.dim).bg(bg);
    lines.push(Line::from(vec![
        Span::styled(" Enter", key_style),
        Span::styled(" add  ", hint_style),
        Span::styled("Tab", key_style),
        Span::styled(" next field  ", hint_style),
        Span::styled("Esc", key_style),
        Span::styled(" cancel", hint_style),
    ]));

    let block = Block::default()
        .title(Span::styled(
            " Add Shopping Item ",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, dialog_area);
}

/// ` > text▌` for the focused input, `   text` otherwise
fn input_line<'a>(app: &App, input: &TextInput, focused: bool, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let bg = if focused {
        theme.selection_bg
    } else {
        theme.background
    };
    let text_style = Style::default().fg(theme.text_bright).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    if focused {
        let (before, after) = input.split_at_cursor();
        spans.push(Span::styled(
            " > ",
            Style::default().fg(theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(before.to_string(), text_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after.to_string(), text_style));
    } else {
        spans.push(Span::styled("   ", Style::default().bg(bg)));
        spans.push(Span::styled(
            input.text().to_string(),
            Style::default().fg(theme.text).bg(bg),
        ));
    }
    pad_to_width(&mut spans, width, Style::default().bg(bg));
    Line::from(spans)
}
