//! xdict TUI, the ratatui application shell.

pub mod app;
pub mod event;
pub mod layout;
pub mod theme;
pub mod widgets;

pub use app::App;

use xdict_core::config::Config;

/// Start the TUI.
///
/// `theme_override` wins over the configured theme name. A config file that
/// fails to load is reported and replaced by the built-in defaults.
pub fn run(theme_override: Option<&str>) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config load failed, using defaults");
        Config::defaults()
    });
    let theme_name = theme_override.unwrap_or(config.ui.theme.as_str());
    let theme = theme::Theme::named(theme_name);
    tracing::info!(theme = theme_name, "starting tui");
    App::new(config, theme).run()
}
