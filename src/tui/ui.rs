use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::board::Board;
use crate::tui::component::Component;
use crate::tui::components::HelpBar;

/// Draws one frame: the columns, then the help bar directly beneath them
/// if the terminal has a spare row.
pub fn draw_ui(frame: &mut Frame, board: &mut Board) {
    let area = frame.area();
    board.render(frame, area);

    if !board.state().is_visible() {
        return;
    }

    let columns_height = board.state().layout.outer.height;
    if columns_height >= area.height {
        return;
    }
    let help_area = Rect {
        y: area.y + columns_height,
        height: 1,
        ..area
    };
    let filtering = board
        .column(board.focused())
        .is_some_and(|list| list.is_filtering());
    HelpBar::new(*board.theme(), filtering).render(frame, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, key_char, loaded_board};
    use crate::tui::component::EventHandler;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_help_bar_under_columns() {
        let mut board = loaded_board(120, 40);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, &mut board)).unwrap();

        // Columns take rows 0..20; the help bar sits on row 20
        let buffer = terminal.backend().buffer();
        let row: String = (0..120).map(|x| buffer[(x, 20)].symbol()).collect();
        assert!(row.contains("next column"));
    }

    #[test]
    fn test_help_bar_follows_filter_mode() {
        let mut board = loaded_board(120, 40);
        board.handle_event(&key_char('/'));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, &mut board)).unwrap();
        assert!(buffer_text(&terminal).contains("apply filter"));
    }

    #[test]
    fn test_no_help_bar_without_spare_row() {
        // Laid out for 40 rows, drawn into 20: the columns fill the frame
        let mut board = loaded_board(120, 40);
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, &mut board)).unwrap();
        assert!(!buffer_text(&terminal).contains("next column"));
    }

    #[test]
    fn test_nothing_drawn_before_load() {
        let mut board = Board::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, &mut board)).unwrap();
        assert!(buffer_text(&terminal).trim().is_empty());
    }
}
