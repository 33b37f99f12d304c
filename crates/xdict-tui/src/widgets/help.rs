//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `F1`; close with `F1` or `Escape`.

use crate::layout::centered_rect;
use crate::theme::{Theme, THEME_NAMES};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Enter", "Search (input) / press button"),
    ("Space", "Press the focused button"),
    ("Tab  /  Shift+Tab", "Switch focus: input ↔ button"),
    ("← →  Home  End", "Move the text cursor"),
    ("Backspace", "Delete before the cursor"),
    ("Mouse click", "Focus input / press button"),
    ("F1", "Toggle this help popup"),
    ("Esc", "Close help / quit"),
    ("Ctrl+c", "Quit"),
    ("q", "Quit (button focused)"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = BINDINGS.len() as u16 + 4;
        let popup = centered_rect(60, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" xdict: keybindings (F1 to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("  themes: {}", THEME_NAMES.join(", ")),
            self.theme.hint,
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
