//! # Actions
//!
//! Everything the board itself reacts to becomes an `Action`.
//! Terminal resized? That's `Action::Resize`. User pressed `l`? That's
//! `Action::FocusNext`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what to do with
//! the widgets it owns. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Once `quitting` is set every action is ignored.

use log::debug;

use crate::core::layout::{ColumnLayout, Dimensions};
use crate::core::state::BoardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Resize { width: u16, height: u16 },
    FocusNext,
    FocusPrev,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fill every column with its seed tasks and size it to the layout.
    Seed(ColumnLayout),
    /// Resize the columns, leaving their contents alone.
    Relayout(ColumnLayout),
    /// Stop the program.
    Quit,
}

pub fn update(state: &mut BoardState, action: Action) -> Effect {
    if state.quitting {
        return Effect::None;
    }

    match action {
        Action::Resize { width, height } => {
            state.dimensions = Dimensions { width, height };
            state.layout = ColumnLayout::compute(width, height, state.chrome_height);
            debug!(
                "Resize to {}x{}: column {:?}",
                width, height, state.layout.outer
            );
            if !state.loaded {
                state.loaded = true;
                Effect::Seed(state.layout)
            } else if state.reseed_on_resize {
                Effect::Seed(state.layout)
            } else {
                Effect::Relayout(state.layout)
            }
        }
        Action::FocusNext => {
            state.focused = state.focused.next();
            debug!("Focus moved to {:?}", state.focused);
            Effect::None
        }
        Action::FocusPrev => {
            state.focused = state.focused.prev();
            debug!("Focus moved to {:?}", state.focused);
            Effect::None
        }
        Action::Quit => {
            state.quitting = true;
            Effect::Quit
        }
    }
}
