//! # HelpBar Component
//!
//! One line of global key hints drawn under the columns.
//!
//! Stateless: everything it shows comes from its props. The hint text
//! changes when the focused column is typing a filter, since the board's
//! own keys are then passed through to the query.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct HelpBar {
    pub theme: Theme,
    /// Whether the focused column is typing a filter query.
    pub filtering: bool,
}

impl HelpBar {
    pub fn new(theme: Theme, filtering: bool) -> Self {
        Self { theme, filtering }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.filtering {
            &[("enter", "apply filter"), ("esc", "cancel"), ("ctrl+c", "quit")]
        } else {
            &[
                ("←/h", "prev column"),
                ("→/l", "next column"),
                ("↑/↓", "move"),
                ("/", "filter"),
                ("q", "quit"),
            ]
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = self.theme.muted_style().fg(self.theme.accent);
        let mut spans = Vec::new();
        for (i, (key, description)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", self.theme.muted_style()));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {description}"), self.theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(filtering: bool) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut help = HelpBar::new(Theme::default(), filtering);
        terminal.draw(|f| help.render(f, f.area())).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_navigation_hints() {
        let text = render(false);
        assert!(text.contains("next column"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_filter_hints() {
        let text = render(true);
        assert!(text.contains("apply filter"));
        assert!(text.contains("ctrl+c quit"));
        assert!(!text.contains("next column"));
    }
}
