//! Core types for xdict-core.
//!
//! This module defines the dictionary [`Entry`], the [`Outcome`] of the last
//! search, and the fixed not-found message shown to the user.

use serde::Serialize;

/// Text shown in the results region when the normalised input matches no
/// entry. Compared verbatim when classifying the display text.
pub const NOT_FOUND_MESSAGE: &str = "Word not found in the dictionary.";

/// A fixed word/definition pair in the reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Headword as written in the dictionary. Matching lower-cases it first.
    pub word: &'static str,
    /// Definition, returned verbatim on a match.
    pub meaning: &'static str,
}

impl Entry {
    pub const fn new(word: &'static str, meaning: &'static str) -> Self {
        Self { word, meaning }
    }
}

/// Classification of the text currently in the results region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No search yet, blank input, or the input was edited since.
    Empty,
    /// The display text is an entry's meaning.
    Found,
    /// The display text is [`NOT_FOUND_MESSAGE`].
    NotFound,
}

impl Outcome {
    /// Classify a display string.
    pub fn of(display_text: &str) -> Self {
        if display_text.is_empty() {
            Outcome::Empty
        } else if display_text == NOT_FOUND_MESSAGE {
            Outcome::NotFound
        } else {
            Outcome::Found
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Empty => write!(f, "empty"),
            Outcome::Found => write!(f, "found"),
            Outcome::NotFound => write!(f, "not_found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_classification() {
        assert_eq!(Outcome::of(""), Outcome::Empty);
        assert_eq!(Outcome::of(NOT_FOUND_MESSAGE), Outcome::NotFound);
        assert_eq!(Outcome::of("An object."), Outcome::Found);
    }

    #[test]
    fn outcome_display_matches_serde_names() {
        assert_eq!(Outcome::NotFound.to_string(), "not_found");
        assert_eq!(Outcome::Empty.to_string(), "empty");
    }
}
