//! The fixed reference dictionary and its lookup rule.
//!
//! Matching is exact after normalisation: the user input is trimmed and
//! lower-cased, each headword is lower-cased, and the first equal pair wins.
//! Entries are scanned in declaration order.

use crate::types::Entry;

const BUILTIN: [Entry; 3] = [
    Entry::new("React", "A JavaScript library for building user interfaces."),
    Entry::new("Component", "A reusable building block in React."),
    Entry::new("State", "An object that stores data for a component."),
];

/// Result of a single [`Dictionary::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The input was blank after trimming; nothing was searched.
    Empty,
    Found(&'a Entry),
    NotFound,
}

/// Immutable, ordered list of entries.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    entries: &'static [Entry],
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Dictionary {
    /// The three built-in entries.
    pub fn builtin() -> Self {
        Self { entries: &BUILTIN }
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries
    }

    /// First entry whose lower-cased word equals `key`.
    ///
    /// `key` must already be normalised with [`normalize`].
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.word.to_lowercase() == key)
    }

    /// Normalise raw user input and look it up.
    pub fn lookup(&self, raw: &str) -> Lookup<'_> {
        let key = normalize(raw);
        if key.is_empty() {
            return Lookup::Empty;
        }
        match self.find(&key) {
            Some(entry) => Lookup::Found(entry),
            None => Lookup::NotFound,
        }
    }
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_entries_in_order() {
        let words: Vec<_> = Dictionary::builtin().entries().iter().map(|e| e.word).collect();
        assert_eq!(words, ["React", "Component", "State"]);
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  StAtE\t\n"), "state");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn find_expects_normalised_key() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.find("react").map(|e| e.word), Some("React"));
        // Raw casing is not normalised by find.
        assert_eq!(dict.find("React"), None);
    }

    #[test]
    fn lookup_outcomes() {
        let dict = Dictionary::builtin();
        assert!(matches!(dict.lookup(" COMPONENT "), Lookup::Found(e) if e.word == "Component"));
        assert_eq!(dict.lookup("Banana"), Lookup::NotFound);
        assert_eq!(dict.lookup(" \t "), Lookup::Empty);
    }

    #[test]
    fn partial_words_do_not_match() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.lookup("Reac"), Lookup::NotFound);
        assert_eq!(dict.lookup("React library"), Lookup::NotFound);
    }
}
