use ratatui::style::Color;

use crate::model::UiConfig;

/// Colors used by the TUI. Every field can be overridden from `[ui.colors]`
/// by its name.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Cursor marker, focused input, dialog accent
    pub highlight: Color,
    pub dim: Color,
    /// Invalid input
    pub red: Color,
    pub selection_bg: Color,
    pub border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x12),
            text: Color::Rgb(0xC8, 0xD6, 0xC0),
            text_bright: Color::Rgb(0xF4, 0xF8, 0xF0),
            highlight: Color::Rgb(0x8F, 0xD1, 0x4F),
            dim: Color::Rgb(0x6E, 0x7F, 0x68),
            red: Color::Rgb(0xF0, 0x5A, 0x4A),
            selection_bg: Color::Rgb(0x24, 0x33, 0x1F),
            border: Color::Rgb(0x6E, 0x7F, 0x68),
            search_match_bg: Color::Rgb(0xF2, 0xC9, 0x4C),
            search_match_fg: Color::Rgb(0x10, 0x14, 0x12),
        }
    }
}

/// `#RRGGBB` (either case) into an RGB color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Defaults with the `[ui.colors]` overrides applied. Unknown names and
    /// unparseable values are logged and skipped.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (name, value) in &ui.colors {
            match (theme.slot_mut(name), parse_hex_color(value)) {
                (Some(slot), Some(color)) => *slot = color,
                (None, _) => tracing::warn!(name = %name, "unknown theme color"),
                (_, None) => {
                    tracing::warn!(name = %name, value = %value, "ignoring unparseable theme color")
                }
            }
        }
        theme
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Color> {
        Some(match name {
            "background" => &mut self.background,
            "text" => &mut self.text,
            "text_bright" => &mut self.text_bright,
            "highlight" => &mut self.highlight,
            "dim" => &mut self.dim,
            "red" => &mut self.red,
            "selection_bg" => &mut self.selection_bg,
            "border" => &mut self.border,
            "search_match_bg" => &mut self.search_match_bg,
            "search_match_fg" => &mut self.search_match_fg,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#8FD14F"), Some(Color::Rgb(0x8F, 0xD1, 0x4F)));
        assert_eq!(parse_hex_color("#8fd14f"), Some(Color::Rgb(0x8F, 0xD1, 0x4F)));
        assert_eq!(parse_hex_color("8FD14F"), None);
        assert_eq!(parse_hex_color("#8FD1"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#\u{e9}\u{e9}\u{e9}"), None);
    }

    #[test]
    fn config_overrides_known_names_only() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("highlight".into(), "#112233".into());
        ui.colors.insert("text".into(), "green".into());
        ui.colors.insert("tag_bug".into(), "#FFFFFF".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.highlight, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Theme::from_config(&UiConfig::default()), Theme::default());
    }
}
