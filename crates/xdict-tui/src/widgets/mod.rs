//! Ratatui widgets for the xdict TUI.

pub mod help;
pub mod results;
pub mod search_bar;
