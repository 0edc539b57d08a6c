use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

const KEY_COLUMN: usize = 14;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "List",
        &[
            ("\u{2191}\u{2193}/jk", "Move cursor"),
            ("g/G", "Jump to top/bottom"),
            ("a", "Add item"),
            ("e/Enter", "Edit item"),
            ("d/Del", "Delete item"),
            ("u / Ctrl+R", "Undo / redo"),
            ("/  n/N", "Search, next/prev match"),
        ],
    ),
    (
        "Dialog & editor",
        &[("Tab", "Switch field"), ("Enter", "Save"), ("Esc", "Cancel")],
    ),
    ("Global", &[("?", "Toggle this help"), ("q / Ctrl+C", "Quit")]),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(70, 90, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
    ];
    for (i, (title, bindings)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(format!(" {}", title), header_style)));
        lines.extend(bindings.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<w$}", key, w = KEY_COLUMN - 1), key_style),
                Span::styled(*desc, desc_style),
            ])
        }));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay_area,
    );
}
