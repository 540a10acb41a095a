//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::tui::board::Board;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// A key press with no modifiers.
pub fn key(code: KeyCode) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn key_char(c: char) -> TuiEvent {
    key(KeyCode::Char(c))
}

/// A default board that has seen its first resize.
pub fn loaded_board(width: u16, height: u16) -> Board {
    let mut board = Board::new();
    board.handle_event(&TuiEvent::Resize(width, height));
    board
}

/// Renders `board` into a fresh test terminal of the given size.
pub fn render_board(board: &mut Board, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| board.render(f, f.area())).unwrap();
    terminal
}

/// Every cell symbol of the terminal's buffer, row after row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
