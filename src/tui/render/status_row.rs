use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::spans_width;

const NAVIGATE_HINTS: &str = "a add  e edit  d delete  u undo  / search  ? help  q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    let hint = match app.mode {
        Mode::Navigate => {
            if let Some(message) = &app.status_message {
                spans.push(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ));
                None
            } else if let Some(pattern) = &app.last_search {
                spans.push(Span::styled(format!("/{}", pattern), dim));
                Some("n/N next/prev  Esc clear")
            } else if app.show_key_hints {
                spans.push(Span::styled(format!(" {}", NAVIGATE_HINTS), dim));
                None
            } else {
                None
            }
        }
        Mode::Search => {
            // Search prompt: /pattern▌
            spans.push(Span::styled(
                format!("/{}", app.search_input.text()),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
            Some("Enter search  Esc cancel")
        }
        Mode::Add => Some("Enter add  Tab next field  Esc cancel"),
        Mode::Edit => {
            spans.push(Span::styled(
                " editing",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
            Some("Enter save  Tab next field  Esc cancel")
        }
    };

    // Right-aligned hint, dropped when it does not fit
    if let Some(hint) = hint {
        let content_width = spans_width(&spans);
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, dim));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
