//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, turns crossterm events
//! into `TuiEvent`s, hands them to the `Board` one at a time and redraws.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - Every delivered event marks the frame dirty; the next loop iteration
//!   draws once after all queued events are drained.
//! - When the poll times out a `Tick` is delivered to the focused column.
//!   Ticks never change what is on screen, so they do not force a redraw.
//!
//! ## Startup
//!
//! crossterm only reports resizes that happen after start, so the loop
//! synthesises the first `Resize` from the current terminal size. That first
//! resize is what seeds the board.

pub mod board;
pub mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::tui::board::{Board, BoardEvent};
use crate::tui::component::EventHandler;
use crate::tui::event::{TuiEvent, poll_event, poll_event_immediate};

/// How long to wait for input before delivering a `Tick`.
const TICK_RATE: Duration = Duration::from_millis(250);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> crate::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new().and_then(|guard| {
        let result = event_loop(&mut terminal, Board::from_config(&config));
        drop(guard);
        result
    });
    ratatui::restore();
    result.map_err(Into::into)
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, mut board: Board) -> std::io::Result<()> {
    let size = terminal.size()?;
    let mut pending = vec![TuiEvent::Resize(size.width, size.height)];
    let mut needs_redraw = true;

    loop {
        for event in pending.drain(..) {
            if !matches!(event, TuiEvent::Tick) {
                needs_redraw = true;
            }
            match board.handle_event(&event) {
                Some(BoardEvent::Quit) => {
                    info!("Event loop stopping");
                    return Ok(());
                }
                Some(BoardEvent::List(column, list_event)) => {
                    debug!("Follow-up from {:?}: {:?}", column, list_event);
                }
                None => {}
            }
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &mut board))?;
            needs_redraw = false;
        }

        // Block for the first event, then drain anything already queued
        if let Some(event) = poll_event(TICK_RATE)? {
            pending.push(event);
        }
        while let Some(event) = poll_event_immediate()? {
            pending.push(event);
        }
    }
}
