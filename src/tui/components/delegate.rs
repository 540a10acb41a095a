//! # Item Delegate
//!
//! Decides how one `ListItem` looks inside a `ColumnList`: a title line,
//! an optional dimmed description line, then `spacing` blank lines.
//!
//! ```text
//! │ one title          ← cursor row: bar + selected colour
//! │ one description
//!
//!   two title
//!   two description
//! ```

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::ListItem as ListRow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::task::ListItem;
use crate::tui::theme::Theme;

const CURSOR_BAR: &str = "│ ";
const NO_CURSOR: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDelegate {
    pub show_description: bool,
    pub spacing: u16,
    pub theme: Theme,
}

impl Default for ItemDelegate {
    fn default() -> Self {
        Self {
            show_description: true,
            spacing: 1,
            theme: Theme::default(),
        }
    }
}

impl ItemDelegate {
    /// Rows one item occupies, spacing included.
    pub fn height(&self) -> u16 {
        1 + u16::from(self.show_description) + self.spacing
    }

    pub fn render<T: ListItem>(&self, item: &T, selected: bool, width: u16) -> ListRow<'static> {
        let text_width = (width as usize).saturating_sub(NO_CURSOR.width());

        let (bar, title_style, desc_style) = if selected {
            let style = Style::default().fg(self.theme.selected);
            (
                Span::styled(CURSOR_BAR, style),
                style.add_modifier(Modifier::BOLD),
                style,
            )
        } else {
            (
                Span::raw(NO_CURSOR),
                Style::default(),
                self.theme.muted_style(),
            )
        };

        let mut lines = vec![Line::from(vec![
            bar.clone(),
            Span::styled(truncate(item.title(), text_width), title_style),
        ])];
        if self.show_description {
            lines.push(Line::from(vec![
                bar,
                Span::styled(truncate(item.description(), text_width), desc_style),
            ]));
        }
        for _ in 0..self.spacing {
            lines.push(Line::default());
        }

        ListRow::new(Text::from(lines))
    }
}

/// Truncates `s` to `max_width` display columns, ending with "…" if cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::{Column, Task};

    #[test]
    fn test_height_counts_description_and_spacing() {
        let mut delegate = ItemDelegate::default();
        assert_eq!(delegate.height(), 3);
        delegate.show_description = false;
        assert_eq!(delegate.height(), 2);
        delegate.spacing = 0;
        assert_eq!(delegate.height(), 1);
    }

    #[test]
    fn test_render_row_height_matches() {
        let delegate = ItemDelegate::default();
        let task = Task::new(Column::Todo, "one title", "one description");
        let row = delegate.render(&task, false, 20);
        assert_eq!(row.height(), delegate.height() as usize);
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("one title", 20), "one title");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("three title", 6), "three…");
        assert_eq!(truncate("three title", 1), "…");
        assert_eq!(truncate("three title", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate("漢字漢字", 5), "漢字…");
    }
}
