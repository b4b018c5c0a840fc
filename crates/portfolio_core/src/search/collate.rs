//! Locale-style string ordering for titles and tags.

use std::cmp::Ordering;

/// Compares two strings the way a default UI collator orders them.
///
/// Primary order ignores case; strings that differ only by case put the
/// lower-case form first. Returns `Equal` only for identical strings.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}
