//! Lookup view: the state the UI renders and the two actions that change it.
//!
//! [`LookupView`] owns the raw input text, the display text, and the
//! [`Dictionary`]. The UI calls [`LookupView::on_input_change`] on every edit
//! and [`LookupView::on_search_triggered`] on Enter or a button press, then
//! redraws from [`LookupView::state`].
//!
//! The display text is always one of: empty, exactly one entry's meaning, or
//! [`NOT_FOUND_MESSAGE`]. It is replaced wholesale on every search.

use crate::dictionary::{Dictionary, Lookup};
use crate::types::{Outcome, NOT_FOUND_MESSAGE};
use serde::Serialize;

/// Serializable snapshot of the view, as printed by `xdict --format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub input_text: String,
    pub display_text: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct LookupView {
    dictionary: Dictionary,
    input_text: String,
    display_text: String,
}

impl LookupView {
    /// Empty view over `dictionary`.
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            input_text: String::new(),
            display_text: String::new(),
        }
    }

    /// Replace the input text and clear any shown result.
    pub fn on_input_change(&mut self, new_text: impl Into<String>) {
        self.input_text = new_text.into();
        self.display_text.clear();
        tracing::debug!(input = %self.input_text, "view: input changed");
    }

    /// Look up the current input and replace the display text.
    ///
    /// Blank input (after trimming) leaves the display text empty.
    pub fn on_search_triggered(&mut self) {
        self.display_text.clear();

        match self.dictionary.lookup(&self.input_text) {
            Lookup::Empty => {
                tracing::debug!("view: search skipped, blank input");
            }
            Lookup::Found(entry) => {
                tracing::debug!(word = entry.word, "view: found");
                self.display_text.push_str(entry.meaning);
            }
            Lookup::NotFound => {
                tracing::debug!(input = %self.input_text, "view: not found");
                self.display_text.push_str(NOT_FOUND_MESSAGE);
            }
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::of(&self.display_text)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Owned copy of the current state.
    pub fn state(&self) -> SearchState {
        SearchState {
            input_text: self.input_text.clone(),
            display_text: self.display_text.clone(),
            outcome: self.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn search(input: &str) -> LookupView {
        let mut view = LookupView::default();
        view.on_input_change(input);
        view.on_search_triggered();
        view
    }

    #[test]
    fn starts_empty() {
        let view = LookupView::default();
        assert_eq!(view.input_text(), "");
        assert_eq!(view.display_text(), "");
        assert_eq!(view.outcome(), Outcome::Empty);
    }

    #[test]
    fn found_meaning_is_verbatim() {
        let view = search("React");
        assert_eq!(
            view.display_text(),
            "A JavaScript library for building user interfaces."
        );
        assert_eq!(view.outcome(), Outcome::Found);
    }

    #[test]
    fn not_found_sets_literal() {
        let view = search("Banana");
        assert_eq!(view.display_text(), NOT_FOUND_MESSAGE);
        assert_eq!(view.outcome(), Outcome::NotFound);
    }

    #[test]
    fn input_is_kept_raw() {
        let view = search("  state  ");
        assert_eq!(view.input_text(), "  state  ");
        assert_eq!(
            view.display_text(),
            "An object that stores data for a component."
        );
    }

    #[test]
    fn blank_search_clears_previous_result() {
        let mut view = search("React");
        view.on_input_change("   ");
        view.on_search_triggered();
        assert_eq!(view.display_text(), "");
    }

    #[test]
    fn search_replaces_not_found_with_meaning() {
        let mut view = search("nope");
        view.on_input_change("state");
        view.on_search_triggered();
        assert_eq!(view.outcome(), Outcome::Found);
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let mut view = search("component");
        let first = view.state();
        view.on_search_triggered();
        assert_eq!(view.state(), first);
    }

    #[test]
    fn search_agrees_with_dictionary_lookup() {
        let dict = Dictionary::builtin();
        for input in ["React", "  state ", "COMPONENT", "Banana", "Reac", "", " \t "] {
            let expected = match dict.lookup(input) {
                Lookup::Empty => "",
                Lookup::Found(entry) => entry.meaning,
                Lookup::NotFound => NOT_FOUND_MESSAGE,
            };
            assert_eq!(search(input).display_text(), expected, "input {input:?}");
        }
    }

    #[test]
    fn typing_clears_display() {
        let mut view = search("React");
        view.on_input_change("Reac");
        assert_eq!(view.display_text(), "");
        assert_eq!(view.input_text(), "Reac");
    }
}
