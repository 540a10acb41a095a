//! # ColumnList Component
//!
//! Scrollable, filterable list of items for one board column.
//!
//! ## Responsibilities
//!
//! - Hold the column's items and its display title
//! - Keep a cursor and scroll offset (`ListState`)
//! - Filter items by their `filter_value()` with a typed query
//! - Render title badge, status line, items and an optional help footer
//!
//! ## Filter States
//!
//! ```text
//!            "/"                 enter (non-empty)
//!   Off ──────────▶ Editing ─────────────────────▶ Applied
//!    ▲                 │ esc / enter (empty)          │ esc
//!    └─────────────────┴──────────────────────────────┘
//! ```
//!
//! While `Editing`, printable keys extend the query instead of moving the
//! cursor. The parent checks `is_filtering()` before intercepting keys of
//! its own.

use crossterm::event::MouseEventKind;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListState, Paragraph};

use crate::core::task::ListItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::delegate::ItemDelegate;
use crate::tui::event::{TuiEvent, key_name};

/// Follow-up events emitted by a `ColumnList`.
///
/// Indices refer to the full item sequence, not the filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    CursorMoved(usize),
    Chosen(usize),
    FilterChanged(String),
    FilterApplied(String),
    FilterCleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Filter {
    Off,
    Editing(String),
    Applied(String),
}

impl Filter {
    fn query(&self) -> Option<&str> {
        match self {
            Filter::Off => None,
            Filter::Editing(q) | Filter::Applied(q) => Some(q),
        }
    }
}

pub struct ColumnList<T> {
    title: String,
    items: Vec<T>,
    delegate: ItemDelegate,
    width: u16,
    height: u16,
    show_help: bool,
    filter: Filter,
    /// Indices into `items` that pass the current filter, in order.
    visible: Vec<usize>,
    list_state: ListState,
}

impl<T: ListItem> ColumnList<T> {
    pub fn new(
        title: impl Into<String>,
        items: Vec<T>,
        delegate: ItemDelegate,
        width: u16,
        height: u16,
    ) -> Self {
        let mut list = Self {
            title: title.into(),
            items,
            delegate,
            width,
            height,
            show_help: true,
            filter: Filter::Off,
            visible: Vec::new(),
            list_state: ListState::default(),
        };
        list.refresh_visible();
        list
    }

    /// Replace every item. An active filter is re-applied to the new items.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.list_state.select(None);
        self.refresh_visible();
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Items passing the current filter, in display order.
    pub fn visible_items(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    /// Index into `items()` of the item under the cursor.
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state
            .selected()
            .and_then(|pos| self.visible.get(pos).copied())
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected_index().map(|i| &self.items[i])
    }

    /// True while the user is typing a filter query.
    pub fn is_filtering(&self) -> bool {
        matches!(self.filter, Filter::Editing(_))
    }

    pub fn filter_query(&self) -> Option<&str> {
        self.filter.query()
    }

    fn header_height(&self) -> u16 {
        2
    }

    fn footer_height(&self) -> u16 {
        u16::from(self.show_help)
    }

    /// Whole items that fit in the body at the current size.
    pub fn page_size(&self) -> usize {
        let body = self
            .height
            .saturating_sub(self.header_height() + self.footer_height());
        (body / self.delegate.height().max(1)).max(1) as usize
    }

    /// Recomputes `visible`, keeping the cursor on the same item if it
    /// still passes the filter and clamping its position otherwise.
    fn refresh_visible(&mut self) {
        let previous = self.selected_index();
        let query = self.filter.query().unwrap_or("");
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| fuzzy_match(item.filter_value(), query))
            .map(|(i, _)| i)
            .collect();

        if self.visible.is_empty() {
            self.list_state.select(None);
        } else {
            let pos = previous
                .and_then(|item| self.visible.iter().position(|&i| i == item))
                .unwrap_or_else(|| {
                    let pos = self.list_state.selected().unwrap_or(0);
                    pos.min(self.visible.len() - 1)
                });
            self.list_state.select(Some(pos));
        }
    }

    fn move_to(&mut self, pos: usize) -> Option<ListEvent> {
        if self.visible.is_empty() {
            return None;
        }
        let pos = pos.min(self.visible.len() - 1);
        if self.list_state.selected() == Some(pos) {
            return None;
        }
        self.list_state.select(Some(pos));
        Some(ListEvent::CursorMoved(self.visible[pos]))
    }

    fn move_up(&mut self, by: usize) -> Option<ListEvent> {
        let pos = self.list_state.selected().unwrap_or(0);
        self.move_to(pos.saturating_sub(by))
    }

    fn move_down(&mut self, by: usize) -> Option<ListEvent> {
        let pos = self.list_state.selected().unwrap_or(0);
        self.move_to(pos.saturating_add(by))
    }

    fn handle_filter_key(&mut self, name: &str) -> Option<ListEvent> {
        let Filter::Editing(query) = &mut self.filter else {
            return None;
        };
        match name {
            "esc" => {
                self.filter = Filter::Off;
                self.refresh_visible();
                Some(ListEvent::FilterCleared)
            }
            "enter" => {
                if query.is_empty() {
                    self.filter = Filter::Off;
                    self.refresh_visible();
                    Some(ListEvent::FilterCleared)
                } else {
                    let query = query.clone();
                    self.filter = Filter::Applied(query.clone());
                    Some(ListEvent::FilterApplied(query))
                }
            }
            "backspace" => {
                query.pop()?;
                let query = query.clone();
                self.refresh_visible();
                Some(ListEvent::FilterChanged(query))
            }
            "up" => self.move_up(1),
            "down" => self.move_down(1),
            _ => {
                let c = match name {
                    "space" => ' ',
                    _ => {
                        let mut chars = name.chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => c,
                            _ => return None,
                        }
                    }
                };
                query.push(c);
                let query = query.clone();
                self.refresh_visible();
                Some(ListEvent::FilterChanged(query))
            }
        }
    }

    fn handle_key(&mut self, name: &str) -> Option<ListEvent> {
        if self.is_filtering() {
            return self.handle_filter_key(name);
        }
        match name {
            "up" | "k" => self.move_up(1),
            "down" | "j" => self.move_down(1),
            "pgup" | "b" => self.move_up(self.page_size()),
            "pgdown" | "f" => self.move_down(self.page_size()),
            "home" | "g" => self.move_to(0),
            "end" | "G" => self.move_to(usize::MAX),
            "enter" => self.selected_index().map(ListEvent::Chosen),
            "/" => {
                self.filter = Filter::Editing(String::new());
                self.refresh_visible();
                Some(ListEvent::FilterChanged(String::new()))
            }
            "esc" if matches!(self.filter, Filter::Applied(_)) => {
                self.filter = Filter::Off;
                self.refresh_visible();
                Some(ListEvent::FilterCleared)
            }
            _ => None,
        }
    }

    fn status_line(&self) -> String {
        let total = self.items.len();
        if total == 0 {
            return "No items".to_string();
        }
        let noun = if total == 1 { "item" } else { "items" };
        match self.filter.query() {
            Some(q) if !q.is_empty() => format!("{} of {} {}", self.visible.len(), total, noun),
            _ => format!("{} {}", total, noun),
        }
    }

    fn help_line(&self) -> &'static str {
        if self.is_filtering() {
            "enter apply • esc cancel"
        } else if matches!(self.filter, Filter::Applied(_)) {
            "↑/k up • ↓/j down • esc clear filter"
        } else {
            "↑/k up • ↓/j down • / filter"
        }
    }
}

impl<T: ListItem> EventHandler for ColumnList<T> {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Key(key) => self.handle_key(&key_name(key)),
            TuiEvent::Paste(text) => {
                let Filter::Editing(query) = &mut self.filter else {
                    return None;
                };
                query.extend(text.chars().filter(|c| !c.is_control()));
                let query = query.clone();
                self.refresh_visible();
                Some(ListEvent::FilterChanged(query))
            }
            TuiEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.move_up(1),
                MouseEventKind::ScrollDown => self.move_down(1),
                _ => None,
            },
            TuiEvent::Resize(..) | TuiEvent::Tick => None,
        }
    }
}

impl<T: ListItem> Component for ColumnList<T> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        };
        if area.is_empty() {
            return;
        }

        let theme = self.delegate.theme;
        let [title_area, status_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(self.footer_height()),
        ])
        .areas(area);

        let title = match &self.filter {
            Filter::Editing(q) => Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(theme.accent)),
                Span::raw(format!("{q}▏")),
            ]),
            _ => Line::from(Span::styled(format!(" {} ", self.title), theme.title_style())),
        };
        frame.render_widget(Paragraph::new(title), title_area);
        frame.render_widget(
            Paragraph::new(self.status_line()).style(theme.muted_style()),
            status_area,
        );

        let selected = self.list_state.selected();
        let rows: Vec<_> = self
            .visible
            .iter()
            .enumerate()
            .map(|(pos, &i)| {
                self.delegate
                    .render(&self.items[i], selected == Some(pos), body_area.width)
            })
            .collect();
        frame.render_stateful_widget(List::new(rows), body_area, &mut self.list_state);

        if self.show_help {
            frame.render_widget(
                Paragraph::new(self.help_line()).style(theme.muted_style()),
                help_area,
            );
        }
    }
}

/// Case-insensitive subsequence match: every char of `needle` appears in
/// `haystack` in order. An empty needle matches everything.
pub fn fuzzy_match(haystack: &str, needle: &str) -> bool {
    let mut hay = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|n| hay.any(|h| h == n))
}
