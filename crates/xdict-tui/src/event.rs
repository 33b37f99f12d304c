//! Semantic application events: crossterm events mapped to a widget-agnostic
//! vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `Ctrl+c`                | `Quit`                     |
//! | `q` (button focused)    | `Quit`                     |
//! | `Tab`, `Shift+Tab`      | `FocusNext`                |
//! | `F1`                    | `Help`                     |
//! | `←` / `→`               | `Move(Left)` / `Move(Right)` |
//! | `Home` / `End`          | `Move(Home)` / `Move(End)` |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | `Esc`                   | `Escape`                   |
//! | left mouse button down  | `Click(col, row)`          |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! While the input field is focused the event loop calls
//! [`to_app_event_insert`] instead of [`to_app_event`]. The only difference is
//! that `q` types a literal `q` rather than quitting.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Cursor movement within the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Home,
    End,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus between the input field and the search button.
    FocusNext,
    /// Toggle the keybinding help popup.
    Help,
    /// Move the text cursor.
    Move(Direction),
    /// A printable character.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Submit the search (input) or press the focused button.
    Enter,
    /// Close the help popup, or quit when it is not open.
    Escape,
    /// Left mouse button pressed at (column, row).
    Click(u16, u16),
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] while the search button
/// has focus.
///
/// Returns `None` for events with no meaning for the application (mouse
/// moves, scrolls, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => map_key(key),
        other => map_non_key(other),
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] while the input field has
/// focus. Every printable character, `q` included, is forwarded as
/// [`AppEvent::Char`].
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => map_key_insert(key),
        other => map_non_key(other),
    }
}

fn map_non_key(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(AppEvent::Click(mouse.column, mouse.row))
            }
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        _ => map_key_insert(key),
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab | BackTab => Some(AppEvent::FocusNext),
        F(1) => Some(AppEvent::Help),

        Left => Some(AppEvent::Move(Direction::Left)),
        Right => Some(AppEvent::Move(Direction::Right)),
        Home => Some(AppEvent::Move(Direction::Home)),
        End => Some(AppEvent::Move(Direction::End)),

        // Shifted characters arrive with SHIFT set on most terminals
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
