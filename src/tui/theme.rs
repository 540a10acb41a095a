//! # Theme
//!
//! Colours and column frames, resolved once from config and handed to
//! whatever renders. Nothing here is global: each render call derives its
//! styling from the `Theme` it is given and the column's focus flag.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use crate::core::config::ThemeConfig;

pub const DEFAULT_ACCENT: Color = Color::Indexed(62);
pub const DEFAULT_MUTED: Color = Color::DarkGray;
pub const DEFAULT_SELECTED: Color = Color::Indexed(170);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Focused column frame and list title badge.
    pub accent: Color,
    /// Descriptions, status lines and help text.
    pub muted: Color,
    /// The item under the cursor.
    pub selected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
            muted: DEFAULT_MUTED,
            selected: DEFAULT_SELECTED,
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: parse_color("accent", config.accent.as_deref(), DEFAULT_ACCENT),
            muted: parse_color("muted", config.muted.as_deref(), DEFAULT_MUTED),
            selected: parse_color("selected", config.selected.as_deref(), DEFAULT_SELECTED),
        }
    }

    /// Frame around a column.
    ///
    /// Both variants are one cell thick on every side, so moving focus only
    /// changes how the frame looks, never where the list sits.
    pub fn column_block(&self, focused: bool) -> Block<'static> {
        if focused {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.accent))
        } else {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::Reset))
                .border_set(HIDDEN_BORDER)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

/// A border drawn entirely in spaces: takes up room, shows nothing.
const HIDDEN_BORDER: ratatui::symbols::border::Set = ratatui::symbols::border::Set {
    top_left: " ",
    top_right: " ",
    bottom_left: " ",
    bottom_right: " ",
    vertical_left: " ",
    vertical_right: " ",
    horizontal_top: " ",
    horizontal_bottom: " ",
};

/// Parses a colour name, palette index or hex string, falling back on error.
fn parse_color(key: &str, value: Option<&str>, fallback: Color) -> Color {
    let Some(value) = value else {
        return fallback;
    };
    match Color::from_str(value.trim()) {
        Ok(color) => color,
        Err(_) => {
            warn!("Invalid colour {:?} for theme.{}, using default", value, key);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_theme_colours_parse() {
        let config = ThemeConfig {
            accent: Some("cyan".to_string()),
            muted: Some("#ff0000".to_string()),
            selected: Some("33".to_string()),
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.muted, Color::Rgb(255, 0, 0));
        assert_eq!(theme.selected, Color::Indexed(33));
    }

    #[test]
    fn test_missing_colours_use_defaults() {
        assert_eq!(Theme::from_config(&ThemeConfig::default()), Theme::default());
    }

    #[test]
    fn test_invalid_colour_falls_back() {
        let config = ThemeConfig {
            accent: Some("not-a-colour".to_string()),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config).accent, DEFAULT_ACCENT);
    }

    fn corner_symbol(focused: bool) -> String {
        let backend = TestBackend::new(6, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| f.render_widget(theme.column_block(focused), f.area()))
            .unwrap();
        terminal.backend().buffer()[(0, 0)].symbol().to_string()
    }

    #[test]
    fn test_focused_frame_is_rounded() {
        assert_eq!(corner_symbol(true), "╭");
    }

    #[test]
    fn test_unfocused_frame_is_blank() {
        assert_eq!(corner_symbol(false), " ");
    }

    #[test]
    fn test_frames_have_same_inner_area() {
        let theme = Theme::default();
        let area = ratatui::layout::Rect::new(0, 0, 20, 10);
        assert_eq!(
            theme.column_block(true).inner(area),
            theme.column_block(false).inner(area)
        );
    }
}
