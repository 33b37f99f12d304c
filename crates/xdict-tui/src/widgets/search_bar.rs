//! Search row widgets: the text input and the search button.
//!
//! The input text itself lives in [`xdict_core::LookupView`]; this module
//! only tracks the cursor. [`SearchInputState::edit`] turns an editing event
//! into the full new text, which the app shell hands to
//! `LookupView::on_input_change`.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Move(Left | Right | Home | End)` moves the cursor without changing
//!   the text.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchInputState {
    /// Byte offset of the cursor within the input text.
    pub cursor: usize,
}

impl SearchInputState {
    /// Apply an editing event to `text`.
    ///
    /// Returns the new text when the event changed it, `None` otherwise
    /// (including pure cursor moves and unrelated events).
    pub fn edit(&mut self, text: &str, event: &AppEvent) -> Option<String> {
        self.clamp(text);

        match event {
            AppEvent::Char(c) => {
                let mut next = text.to_string();
                next.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(input = %next, cursor = self.cursor, "input: char inserted");
                Some(next)
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_boundary(text, self.cursor);
                let mut next = text.to_string();
                next.remove(prev);
                self.cursor = prev;
                tracing::debug!(input = %next, cursor = self.cursor, "input: backspace");
                Some(next)
            }
            AppEvent::Move(dir) => {
                self.cursor = match dir {
                    Direction::Left => prev_boundary(text, self.cursor),
                    Direction::Right => next_boundary(text, self.cursor),
                    Direction::Home => 0,
                    Direction::End => text.len(),
                };
                tracing::debug!(cursor = self.cursor, "input: cursor moved");
                None
            }
            _ => None,
        }
    }

    /// Column of the cursor, counted in characters from the start of `text`.
    pub fn column(&self, text: &str) -> u16 {
        let end = self.cursor.min(text.len());
        text.get(..end).map_or(0, |s| s.chars().count()) as u16
    }

    /// Pull the cursor back onto a char boundary inside `text`.
    fn clamp(&mut self, text: &str) {
        if self.cursor > text.len() || !text.is_char_boundary(self.cursor) {
            self.cursor = text.len();
        }
    }
}

fn prev_boundary(text: &str, cursor: usize) -> usize {
    text[..cursor]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(text.len())
}

// ---------------------------------------------------------------------------
// Input widget
// ---------------------------------------------------------------------------

pub struct SearchInput<'a> {
    text: &'a str,
    state: &'a SearchInputState,
    placeholder: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchInput<'a> {
    pub fn new(
        text: &'a str,
        state: &'a SearchInputState,
        placeholder: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { text, state, placeholder, focused, theme }
    }

    /// Horizontal scroll that keeps the cursor inside the visible width.
    fn scroll(&self, area: Rect) -> u16 {
        let visible = area.width.saturating_sub(2).max(1);
        self.state.column(self.text).saturating_sub(visible - 1)
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.column(self.text) - self.scroll(area);
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(self.theme.border(self.focused));

        let line = if self.text.is_empty() {
            Line::from(Span::styled(self.placeholder, self.theme.placeholder))
        } else {
            Line::from(self.text)
        };

        let scroll = self.scroll(area);
        Paragraph::new(line)
            .block(block)
            .scroll((0, scroll))
            .render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Button widget
// ---------------------------------------------------------------------------

pub struct SearchButton<'a> {
    label: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchButton<'a> {
    pub fn new(label: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self { label, focused, theme }
    }
}

impl Widget for SearchButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            self.theme.button_focused
        } else {
            self.theme.button_idle
        };
        let block = Block::bordered()
            .border_style(self.theme.border(self.focused))
            .style(style);

        Paragraph::new(Line::from(self.label))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed `events` starting from `text`, returning the final text.
    fn type_events(state: &mut SearchInputState, text: &str, events: &[AppEvent]) -> String {
        let mut current = text.to_string();
        for ev in events {
            if let Some(next) = state.edit(&current, ev) {
                current = next;
            }
        }
        current
    }

    #[test]
    fn chars_insert_at_cursor() {
        let mut s = SearchInputState::default();
        let text = type_events(&mut s, "", &[AppEvent::Char('R'), AppEvent::Char('e')]);
        assert_eq!(text, "Re");
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn backspace_removes_previous_char() {
        let mut s = SearchInputState { cursor: 5 };
        let text = type_events(&mut s, "React", &[AppEvent::Backspace]);
        assert_eq!(text, "Reac");
        assert_eq!(s.cursor, 4);
    }

    #[test]
    fn backspace_at_start_is_not_an_edit() {
        let mut s = SearchInputState::default();
        assert_eq!(s.edit("React", &AppEvent::Backspace), None);
    }

    #[test]
    fn cursor_moves_are_not_edits() {
        let mut s = SearchInputState { cursor: 3 };
        assert_eq!(s.edit("abc", &AppEvent::Move(Direction::Left)), None);
        assert_eq!(s.cursor, 2);
        assert_eq!(s.edit("abc", &AppEvent::Move(Direction::Home)), None);
        assert_eq!(s.cursor, 0);
        assert_eq!(s.edit("abc", &AppEvent::Move(Direction::End)), None);
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut s = SearchInputState { cursor: 5 };
        let text = type_events(
            &mut s,
            "Stte",
            &[
                AppEvent::Move(Direction::Home),
                AppEvent::Move(Direction::Right),
                AppEvent::Move(Direction::Right),
                AppEvent::Char('a'),
            ],
        );
        assert_eq!(text, "State");
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn multibyte_chars_respect_boundaries() {
        let mut s = SearchInputState::default();
        let text = type_events(
            &mut s,
            "",
            &[AppEvent::Char('é'), AppEvent::Char('x'), AppEvent::Backspace, AppEvent::Backspace],
        );
        assert_eq!(text, "");
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn stale_cursor_is_clamped() {
        let mut s = SearchInputState { cursor: 99 };
        let text = type_events(&mut s, "ab", &[AppEvent::Char('c')]);
        assert_eq!(text, "abc");
    }

    #[test]
    fn column_counts_chars() {
        let s = SearchInputState { cursor: "éé".len() };
        assert_eq!(s.column("ééa"), 2);
    }

    #[test]
    fn cursor_stays_inside_narrow_input() {
        let theme = Theme::load_default();
        let text = "a".repeat(40);
        let state = SearchInputState { cursor: text.len() };
        let input = SearchInput::new(&text, &state, "", true, &theme);
        let area = Rect::new(0, 0, 12, 3);
        let (x, y) = input.cursor_position(area);
        assert!(x < area.right() - 1);
        assert_eq!(y, 1);
    }
}
