//! # TUI Components
//!
//! UI building blocks for the board.
//!
//! ## Component Architecture
//!
//! ### Stateless Helpers (Props-Based Rendering)
//!
//! - `ItemDelegate`: turns one `ListItem` into list rows
//! - `HelpBar`: the global key hints under the columns
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ColumnList`: cursor, filter and scroll state for one column
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into global
//! state. Styling arrives as a `Theme` value inside the delegate or as a
//! render parameter:
//!
//! ```rust,ignore
//! // Good: the caller decides how a focused column looks
//! let block = theme.column_block(column == focused);
//!
//! // Bad: hidden dependency on a process-wide style
//! let block = FOCUSED_STYLE.lock().block();
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── column_list.rs   (Scrollable, filterable list)
//! ├── delegate.rs      (Item row rendering)
//! └── help_bar.rs      (Global key hints)
//! ```

pub mod column_list;
pub mod delegate;
pub mod help_bar;

pub use column_list::{ColumnList, ListEvent};
pub use delegate::ItemDelegate;
pub use help_bar::HelpBar;
