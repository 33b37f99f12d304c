//! xdict-core: word lookup core for xdict.
//!
//! This crate holds everything that does not touch the terminal: the fixed
//! [`Dictionary`], the [`LookupView`] state machine that the UI drives, and
//! the user [`config`].
//!
//! # Architecture
//!
//! ```text
//! keystroke ──► LookupView::on_input_change ──┐
//!                                             ├──► render(SearchState)
//! Enter/click ─► LookupView::on_search_triggered
//!                      │
//!                      └──► Dictionary::lookup
//! ```
//!
//! Everything is synchronous; each action runs to completion before the
//! caller redraws.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod types;
pub mod view;

pub use dictionary::{normalize, Dictionary, Lookup};
pub use error::ConfigError;
pub use types::{Entry, Outcome, NOT_FOUND_MESSAGE};
pub use view::{LookupView, SearchState};
