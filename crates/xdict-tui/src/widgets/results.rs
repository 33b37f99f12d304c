//! Results region: the `Definition:` label followed by the display text.
//!
//! The label is always drawn, even before the first search, so the layout
//! never shifts. The not-found message takes the theme's error style.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use xdict_core::LookupView;

pub const DEFINITION_LABEL: &str = "Definition:";

pub struct Results<'a> {
    view: &'a LookupView,
    theme: &'a Theme,
}

impl<'a> Results<'a> {
    pub fn new(view: &'a LookupView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for Results<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_style = self.theme.result_style(self.view.outcome());
        let lines = vec![
            Line::from(Span::styled(DEFINITION_LABEL, self.theme.results_label)),
            Line::from(Span::styled(self.view.display_text(), text_style)),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
