//! Domain-specific assertion macros for xdict harnesses.
//!
//! These add the input and outcome to the failure message so a broken
//! lookup is obvious at a glance.

/// Assert the display text of a `LookupView`.
///
/// ```rust
/// assert_display!(view, "An object that stores data for a component.");
/// ```
#[macro_export]
macro_rules! assert_display {
    ($view:expr, $expected:expr) => {{
        let view: &xdict_core::LookupView = &$view;
        let expected: &str = $expected;
        if view.display_text() != expected {
            panic!(
                "assert_display! failed:\n  input:    {:?}\n  expected: {:?}\n  actual:   {:?}\n  outcome:  {}",
                view.input_text(),
                expected,
                view.display_text(),
                view.outcome()
            );
        }
    }};
}

/// Assert the outcome of a `LookupView`.
#[macro_export]
macro_rules! assert_outcome {
    ($view:expr, $outcome:expr) => {{
        let view: &xdict_core::LookupView = &$view;
        let expected: xdict_core::Outcome = $outcome;
        pretty_assertions::assert_eq!(
            view.outcome(),
            expected,
            "input {:?} displayed {:?}",
            view.input_text(),
            view.display_text()
        );
    }};
}
