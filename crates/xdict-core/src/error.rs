//! Error types for xdict-core.
//!
//! A word missing from the dictionary is a normal [`Outcome`](crate::Outcome),
//! not an error. Only configuration I/O can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to create config file '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("ui.card_width must be at least {min}, got {got}")]
    CardTooNarrow { min: u16, got: u16 },
}
