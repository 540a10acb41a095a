//! # Columns and Tasks
//!
//! `Column` is the closed set of kanban stages. It doubles as the focus
//! state machine: `next()` and `prev()` walk the three stages cyclically.
//!
//! ```text
//!   ┌──────┐  next  ┌─────────────┐  next  ┌──────┐
//!   │ Todo │ ─────▶ │ In progress │ ─────▶ │ Done │
//!   └──────┘        └─────────────┘        └──────┘
//!       ▲                                      │
//!       └──────────────── next ────────────────┘
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the three fixed kanban stages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Column {
    /// All columns in left-to-right display order.
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    pub fn index(self) -> usize {
        match self {
            Column::Todo => 0,
            Column::InProgress => 1,
            Column::Done => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Column::Todo => Column::InProgress,
            Column::InProgress => Column::Done,
            Column::Done => Column::Todo,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Column::Todo => Column::Done,
            Column::InProgress => Column::Todo,
            Column::Done => Column::InProgress,
        }
    }

    /// Heading shown at the top of the column's list.
    pub fn title(self) -> &'static str {
        match self {
            Column::Todo => "Todo lists",
            Column::InProgress => "In progress",
            Column::Done => "Done",
        }
    }
}

/// Something a list widget can display and filter.
pub trait ListItem {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn filter_value(&self) -> &str;
}

/// A card on the board. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub status: Column,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(status: Column, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }
}

impl ListItem for Task {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn filter_value(&self) -> &str {
        &self.title
    }
}

/// Tasks grouped by column, indexed with `Column::index()`.
pub type Seed = [Vec<Task>; 3];

/// The built-in board contents used when the config supplies no tasks.
pub fn default_seed() -> Seed {
    [
        vec![
            Task::new(Column::Todo, "one title", "one description"),
            Task::new(Column::Todo, "two title", "two description"),
            Task::new(Column::Todo, "three title", "three description"),
        ],
        vec![Task::new(Column::InProgress, "four title", "four description")],
        vec![Task::new(Column::Done, "five title", "five description")],
    ]
}

/// Groups tasks into their columns, preserving input order within each.
///
/// Every task lands in the list matching its own `status`, so a task can
/// never be cross-listed.
pub fn group_by_column(tasks: impl IntoIterator<Item = Task>) -> Seed {
    let mut seed: Seed = Default::default();
    for task in tasks {
        seed[task.status.index()].push(task);
    }
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_then_prev_is_identity() {
        for column in Column::ALL {
            assert_eq!(column.next().prev(), column);
            assert_eq!(column.prev().next(), column);
        }
    }

    #[test]
    fn test_three_steps_wrap_around() {
        for column in Column::ALL {
            assert_eq!(column.next().next().next(), column);
            assert_eq!(column.prev().prev().prev(), column);
        }
    }

    #[test]
    fn test_next_order() {
        assert_eq!(Column::Todo.next(), Column::InProgress);
        assert_eq!(Column::InProgress.next(), Column::Done);
        assert_eq!(Column::Done.next(), Column::Todo);
    }

    #[test]
    fn test_index_matches_display_order() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn test_cli_spellings() {
        assert_eq!(Column::from_str("todo", true), Ok(Column::Todo));
        assert_eq!(Column::from_str("In-Progress", true), Ok(Column::InProgress));
        assert_eq!(Column::from_str("done", false), Ok(Column::Done));
        assert!(Column::from_str("backlog", true).is_err());
    }

    #[test]
    fn test_default_seed_contents() {
        let seed = default_seed();
        let titles: Vec<&str> = seed[0].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["one title", "two title", "three title"]);
        assert_eq!(seed[1].len(), 1);
        assert_eq!(seed[1][0].title, "four title");
        assert_eq!(seed[2].len(), 1);
        assert_eq!(seed[2][0].title, "five title");
    }

    #[test]
    fn test_seed_status_matches_column() {
        for (column, tasks) in Column::ALL.iter().zip(default_seed()) {
            assert!(tasks.iter().all(|t| t.status == *column));
        }
    }

    #[test]
    fn test_group_by_column_keeps_order() {
        let seed = group_by_column([
            Task::new(Column::Done, "a", ""),
            Task::new(Column::Todo, "b", ""),
            Task::new(Column::Done, "c", ""),
        ]);
        assert_eq!(seed[0].len(), 1);
        assert!(seed[1].is_empty());
        let done: Vec<&str> = seed[2].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(done, ["a", "c"]);
    }

    #[test]
    fn test_task_filters_on_title() {
        let task = Task::new(Column::Todo, "write docs", "for the list widget");
        assert_eq!(task.filter_value(), "write docs");
        assert_eq!(ListItem::description(&task), "for the list widget");
    }
}
