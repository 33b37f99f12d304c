//! Screen geometry: computed once per frame and kept for mouse hit-testing.
//!
//! ```text
//! ┌──────────── card ────────────┐
//! │            title             │
//! │                              │
//! │ ┌─ input ─────────┐ ┌──────┐ │
//! │ │                 │ │Search│ │
//! │ └─────────────────┘ └──────┘ │
//! │                              │
//! │ results                      │
//! └──────────────────────────────┘
//!  hint (last screen row)
//! ```

use ratatui::layout::{Constraint, Direction as LayoutDir, Layout, Position, Rect};

/// Total card height including its border.
pub const CARD_HEIGHT: u16 = 13;

/// Rectangles of every region drawn by the app shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regions {
    pub card: Rect,
    pub title: Rect,
    pub input: Rect,
    pub button: Rect,
    pub results: Rect,
    pub hint: Rect,
}

impl Regions {
    /// Split `area` into regions. `card_width` caps the card width;
    /// `button_label` sizes the button.
    pub fn compute(area: Rect, card_width: u16, button_label: &str) -> Self {
        let hint = Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        let body = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let card = centered_rect(card_width, CARD_HEIGHT, body);
        let inner = card.inner(ratatui::layout::Margin::new(2, 1));

        let rows = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(inner);

        let button_width = button_label.chars().count() as u16 + 4;
        let search_row = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(button_width),
            ])
            .split(rows[2]);

        Self {
            card,
            title: rows[0],
            input: search_row[0],
            button: search_row[2],
            results: rows[4],
            hint,
        }
    }

    pub fn hit_button(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }

    pub fn hit_input(&self, column: u16, row: u16) -> bool {
        self.input.contains(Position::new(column, row))
    }
}

/// A `width` × `height` rectangle centred in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_centred_and_capped() {
        let regions = Regions::compute(Rect::new(0, 0, 100, 30), 64, "Search");
        assert_eq!(regions.card.width, 64);
        assert_eq!(regions.card.x, 18);
        assert_eq!(regions.card.height, CARD_HEIGHT);
    }

    #[test]
    fn button_fits_label_and_sits_right_of_input() {
        let regions = Regions::compute(Rect::new(0, 0, 100, 30), 64, "Search");
        assert_eq!(regions.button.width, 10);
        assert_eq!(regions.button.height, 3);
        assert!(regions.input.right() < regions.button.x);
        assert_eq!(regions.input.y, regions.button.y);
    }

    #[test]
    fn results_below_search_row() {
        let regions = Regions::compute(Rect::new(0, 0, 100, 30), 64, "Search");
        assert!(regions.results.y > regions.input.bottom());
        assert!(regions.results.height >= 2);
    }

    #[test]
    fn hint_is_last_row() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 24), 64, "Search");
        assert_eq!(regions.hint.y, 23);
        assert_eq!(regions.hint.height, 1);
    }

    #[test]
    fn hit_testing() {
        let regions = Regions::compute(Rect::new(0, 0, 100, 30), 64, "Search");
        let b = regions.button;
        assert!(regions.hit_button(b.x, b.y));
        assert!(!regions.hit_button(b.right(), b.y));
        assert!(regions.hit_input(regions.input.x + 1, regions.input.y + 1));
        assert!(!regions.hit_input(b.x, b.y));
    }

    #[test]
    fn default_regions_hit_nothing() {
        let regions = Regions::default();
        assert!(!regions.hit_button(0, 0));
        assert!(!regions.hit_input(0, 0));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let regions = Regions::compute(Rect::new(0, 0, 5, 2), 64, "Search");
        assert!(regions.card.width <= 5);
    }
}
