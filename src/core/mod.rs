//! # Core Board Logic
//!
//! The board's business rules: columns, tasks, focus movement and the
//! column layout math. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • BoardState (focus)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • layout (column math) │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: `Column`, `Task` and the `ListItem` capability
//! - [`layout`]: per-column sizing from terminal dimensions
//! - [`state`]: `BoardState`, the focus/flags half of the board
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod layout;
pub mod state;
pub mod task;

pub use action::{Action, Effect, update};
pub use state::BoardState;
pub use task::{Column, ListItem, Task};
