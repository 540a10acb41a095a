//! # Board State
//!
//! The UI-agnostic half of the board. The list widgets that hold each
//! column's items live in the `tui` module; everything here is plain data.
//!
//! ```text
//! BoardState
//! ├── focused: Column           // column receiving keys + highlight
//! ├── dimensions: Dimensions    // last terminal size seen
//! ├── layout: ColumnLayout      // per-column sizes derived from it
//! ├── loaded: bool              // a first resize has been observed
//! ├── quitting: bool            // one-way terminal flag
//! ├── chrome_height: u16        // rows reserved below the lists
//! └── reseed_on_resize: bool    // re-initialise items on every resize
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::layout::{ColumnLayout, DEFAULT_CHROME_HEIGHT, Dimensions};
use crate::core::task::Column;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub focused: Column,
    pub dimensions: Dimensions,
    pub layout: ColumnLayout,
    pub loaded: bool,
    pub quitting: bool,
    pub chrome_height: u16,
    pub reseed_on_resize: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            focused: Column::Todo,
            dimensions: Dimensions::default(),
            layout: ColumnLayout::default(),
            loaded: false,
            quitting: false,
            chrome_height: DEFAULT_CHROME_HEIGHT,
            reseed_on_resize: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            focused: config.start_column,
            chrome_height: config.chrome_height,
            reseed_on_resize: config.reseed_on_resize,
            ..Self::new()
        }
    }

    /// Whether there is anything to draw.
    pub fn is_visible(&self) -> bool {
        self.loaded && !self.quitting
    }
}
