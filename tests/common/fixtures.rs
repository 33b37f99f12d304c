//! Fixed inputs and expected outputs shared by the harnesses.

use xdict_core::NOT_FOUND_MESSAGE;

/// `(word, meaning)` for every built-in entry, in dictionary order.
pub const ENTRIES: &[(&str, &str)] = &[
    ("React", "A JavaScript library for building user interfaces."),
    ("Component", "A reusable building block in React."),
    ("State", "An object that stores data for a component."),
];

/// `(input, expected display text)` for a single type-then-search cycle.
pub const SCENARIOS: &[(&str, &str)] = &[
    ("React", "A JavaScript library for building user interfaces."),
    ("  state  ", "An object that stores data for a component."),
    ("component", "A reusable building block in React."),
    ("Banana", NOT_FOUND_MESSAGE),
    ("", ""),
];

/// Re-case an ASCII word: bit `i` of `mask` upper-cases char `i`.
pub fn recase(word: &str, mask: u32) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 32)) != 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
