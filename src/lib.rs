//! Kanban library exports for the binary and integration tests

pub mod core;
pub mod error;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use error::{Error, Result};
