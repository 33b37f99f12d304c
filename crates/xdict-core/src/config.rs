//! Configuration types for xdict.
//!
//! [`Config::load`] reads `~/.config/xdict/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
title       = "Dictionary App"
placeholder = "Search for a word..."
button      = "Search"
theme       = "default"
card_width  = 64
"#;

/// Narrowest card that still fits the input, the button, and their borders.
pub const MIN_CARD_WIDTH: u16 = 30;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/xdict/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Dimmed hint shown in the empty input field.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Label of the search button.
    #[serde(default = "default_button")]
    pub button: String,
    /// Theme name: `default` or `gruvbox`.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Maximum width of the centred card, in columns.
    #[serde(default = "default_card_width")]
    pub card_width: u16,
}

fn default_title() -> String { "Dictionary App".to_string() }
fn default_placeholder() -> String { "Search for a word...".to_string() }
fn default_button() -> String { "Search".to_string() }
fn default_theme() -> String { "default".to_string() }
fn default_card_width() -> u16 { 64 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
            button: default_button(),
            theme: default_theme(),
            card_width: default_card_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/xdict/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();

        if !path.exists() {
            write_default(&path)?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.card_width < MIN_CARD_WIDTH {
            return Err(ConfigError::CardTooNarrow {
                min: MIN_CARD_WIDTH,
                got: self.ui.card_width,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    config_path_from(std::env::var("XDG_CONFIG_HOME").ok(), std::env::var("HOME").ok())
}

/// Resolve the config file path from `XDG_CONFIG_HOME` and `HOME`. Empty
/// values count as unset.
fn config_path_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    let non_empty = |v: &String| !v.is_empty();
    xdg_config_home
        .filter(non_empty)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(home.filter(non_empty).unwrap_or_else(|| ".".to_string()))
                .join(".config")
        })
        .join("xdict")
        .join("config.toml")
}

fn write_default(path: &Path) -> Result<(), ConfigError> {
    let create = |source: std::io::Error| ConfigError::Create {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(create)?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start()).map_err(create)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
