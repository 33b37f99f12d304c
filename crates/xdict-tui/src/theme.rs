//! Colour theme for the xdict TUI.
//!
//! Themes are TOML files embedded in the binary via [`include_str!`], so the
//! application works without any files on disk. Resolve one at startup with
//! [`Theme::named`] and pass it through the application by reference.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use xdict_core::Outcome;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_THEME_SRC: &str = include_str!("themes/gruvbox.toml");

/// Names accepted by [`Theme::named`], in the order the help popup lists them.
pub const THEME_NAMES: &[&str] = &["default", "gruvbox"];

// ---------------------------------------------------------------------------
// Raw (serde) types mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawButton {
    idle: RawStyle,
    focused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    label: RawStyle,
    meaning: RawStyle,
    not_found: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    title: RawStyle,
    borders: RawBorders,
    button: RawButton,
    placeholder: RawStyle,
    results: RawResults,
    hint: RawStyle,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title: Style,

    /// Border style for the focused control.
    pub border_focused: Style,
    pub border_unfocused: Style,

    pub button_idle: Style,
    pub button_focused: Style,

    /// Hint text in the empty input field.
    pub placeholder: Style,

    /// The `Definition:` label.
    pub results_label: Style,
    /// A found meaning, or the empty result.
    pub results_meaning: Style,
    /// The not-found message.
    pub results_not_found: Style,

    /// Key hint line at the bottom of the screen.
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::load_default()
    }
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox() -> Self {
        Self::from_toml_str(GRUVBOX_THEME_SRC).expect("embedded gruvbox theme must be valid TOML")
    }

    /// Resolve a theme by name, falling back to the default theme for
    /// unknown names.
    pub fn named(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "default" => Self::load_default(),
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::load_default()
            }
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored; every section listed in the default theme
    /// is required.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            title: raw.title.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            button_idle: raw.button.idle.into_style(),
            button_focused: raw.button.focused.into_style(),
            placeholder: raw.placeholder.into_style(),
            results_label: raw.results.label.into_style(),
            results_meaning: raw.results.meaning.into_style(),
            results_not_found: raw.results.not_found.into_style(),
            hint: raw.hint.into_style(),
        })
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }

    /// Style for the text under the `Definition:` label. Only the not-found
    /// message is styled differently; an empty result uses the normal style.
    pub fn result_style(&self, outcome: Outcome) -> Style {
        match outcome {
            Outcome::NotFound => self.results_not_found,
            Outcome::Found | Outcome::Empty => self.results_meaning,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - `reset` for the terminal's own foreground/background
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "reset" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 && s.is_ascii() => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_themes_load() {
        for name in THEME_NAMES {
            let theme = Theme::named(name);
            assert_ne!(theme.results_not_found, Style::default(), "{name}");
            assert_ne!(theme.border_focused, theme.border_unfocused, "{name}");
            assert_ne!(theme.button_focused, theme.button_idle, "{name}");
        }
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Theme::named("solarized"), Theme::load_default());
        assert_eq!(Theme::named("Gruvbox"), Theme::load_gruvbox());
    }

    #[test]
    fn not_found_is_styled_apart_from_empty_and_found() {
        let theme = Theme::load_default();
        assert_eq!(
            theme.result_style(Outcome::Empty),
            theme.result_style(Outcome::Found)
        );
        assert_ne!(
            theme.result_style(Outcome::NotFound),
            theme.result_style(Outcome::Found)
        );
    }

    #[test]
    fn missing_section_is_an_error() {
        assert!(Theme::from_toml_str("[title]\nfg = \"red\"\n").is_err());
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
    }

    #[test]
    fn parse_indexed_color() {
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
    }

    #[test]
    fn parse_reset_and_unknown() {
        assert_eq!(parse_color("Reset"), Some(Color::Reset));
        assert_eq!(parse_color("chartreuse"), None);
    }
}
