//! # Board
//!
//! Three `ColumnList`s side by side plus the `BoardState` that decides which
//! one has focus.
//!
//! ## Event Routing
//!
//! ```text
//!                 TuiEvent
//!                    │
//!        ┌───────────┼─────────────────────┐
//!        ▼           ▼                     ▼
//!     Resize     Key: q / ctrl+c       anything else
//!        │       Key: ←/h  →/l             │
//!        ▼           │                     ▼
//!  core::update ◀────┘          focused ColumnList only
//!        │                                 │
//!        ▼                                 ▼
//!  Seed / Relayout widgets       Option<ListEvent> → driver
//! ```
//!
//! While the focused list is typing a filter, only `ctrl+c` is kept back;
//! every other key belongs to the query.

use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::layout::ColumnLayout;
use crate::core::state::BoardState;
use crate::core::task::{Column, Seed, Task, default_seed};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{ColumnList, ItemDelegate, ListEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// What the board asks of the driver after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// Stop the event loop and restore the terminal.
    Quit,
    /// Follow-up from the focused column's list.
    List(Column, ListEvent),
}

pub struct Board {
    state: BoardState,
    /// `None` until the first resize, then one list per column in `Column::ALL` order.
    columns: Option<[ColumnList<Task>; 3]>,
    seed: Seed,
    theme: Theme,
    show_help: bool,
    show_description: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            state: BoardState::new(),
            columns: None,
            seed: default_seed(),
            theme: Theme::default(),
            show_help: false,
            show_description: true,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            state: BoardState::from_config(config),
            columns: None,
            seed: config.seed.clone(),
            theme: Theme::from_config(&config.theme),
            show_help: config.show_help,
            show_description: config.show_description,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn focused(&self) -> Column {
        self.state.focused
    }

    pub fn is_loaded(&self) -> bool {
        self.state.loaded
    }

    pub fn is_quitting(&self) -> bool {
        self.state.quitting
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The list for `column`, once the board has been laid out.
    pub fn column(&self, column: Column) -> Option<&ColumnList<Task>> {
        self.columns.as_ref().map(|columns| &columns[column.index()])
    }

    fn focused_list_mut(&mut self) -> Option<&mut ColumnList<Task>> {
        let index = self.state.focused.index();
        self.columns.as_mut().map(|columns| &mut columns[index])
    }

    fn focused_is_filtering(&self) -> bool {
        self.column(self.state.focused)
            .is_some_and(ColumnList::is_filtering)
    }

    /// Builds the three lists from the seed, sized to `layout`.
    fn init_columns(&mut self, layout: ColumnLayout) {
        let delegate = ItemDelegate {
            show_description: self.show_description,
            theme: self.theme,
            ..ItemDelegate::default()
        };
        self.columns = Some(Column::ALL.map(|column| {
            let mut list = ColumnList::new(
                column.title(),
                self.seed[column.index()].clone(),
                delegate,
                layout.inner.width,
                layout.inner.height,
            );
            list.set_show_help(self.show_help);
            list
        }));
        info!(
            "Board loaded: {} / {} / {} tasks",
            self.seed[0].len(),
            self.seed[1].len(),
            self.seed[2].len()
        );
    }

    fn relayout(&mut self, layout: ColumnLayout) {
        for list in self.columns.iter_mut().flatten() {
            list.set_size(layout.inner.width, layout.inner.height);
        }
    }

    fn apply(&mut self, action: Action) -> Option<BoardEvent> {
        match update(&mut self.state, action) {
            Effect::None => None,
            Effect::Seed(layout) => {
                self.init_columns(layout);
                None
            }
            Effect::Relayout(layout) => {
                self.relayout(layout);
                None
            }
            Effect::Quit => {
                info!("Quit requested");
                Some(BoardEvent::Quit)
            }
        }
    }

    fn forward(&mut self, event: &TuiEvent) -> Option<BoardEvent> {
        let column = self.state.focused;
        let list_event = self.focused_list_mut()?.handle_event(event)?;
        debug!("{:?} list: {:?}", column, list_event);
        Some(BoardEvent::List(column, list_event))
    }
}

impl EventHandler for Board {
    type Event = BoardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.state.quitting {
            return None;
        }

        match event {
            TuiEvent::Resize(width, height) => self.apply(Action::Resize {
                width: *width,
                height: *height,
            }),
            TuiEvent::Key(key) => {
                let name = crate::tui::event::key_name(key);
                if self.focused_is_filtering() && name != "ctrl+c" {
                    return self.forward(event);
                }
                match name.as_str() {
                    "q" | "ctrl+c" => self.apply(Action::Quit),
                    "right" | "l" => self.apply(Action::FocusNext),
                    "left" | "h" => self.apply(Action::FocusPrev),
                    _ => self.forward(event),
                }
            }
            TuiEvent::Mouse(_) | TuiEvent::Paste(_) | TuiEvent::Tick => self.forward(event),
        }
    }
}

impl Component for Board {
    /// Draws the columns left to right in fixed order.
    ///
    /// Nothing is drawn before the first resize or once quitting.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.state.is_visible() {
            return;
        }
        let Some(columns) = self.columns.as_mut() else {
            return;
        };

        let outer = self.state.layout.outer;
        let focused = self.state.focused;
        for (column, list) in Column::ALL.iter().zip(columns.iter_mut()) {
            let column_area = Rect {
                x: area.x.saturating_add(outer.width * column.index() as u16),
                y: area.y,
                width: outer.width,
                height: outer.height,
            }
            .intersection(area);
            if column_area.is_empty() {
                continue;
            }

            let block = self.theme.column_block(*column == focused);
            let inner = block.inner(column_area);
            frame.render_widget(block, column_area);
            list.render(frame, inner);
        }
    }
}
