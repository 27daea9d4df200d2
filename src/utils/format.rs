//! Formatting helpers for display labels.

use folio_core::ALL_CATEGORY;

/// Capitalize the first character (`"trading"` -> `"Trading"`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Button label for a filter option; the wildcard reads "All".
pub fn filter_label(category: &str) -> String {
    if category == ALL_CATEGORY {
        "All".to_string()
    } else {
        capitalize(category)
    }
}

/// Initials for an avatar placeholder (`"Sarah Johnson"` -> `"SJ"`).
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// `1 / 6` style position label, `0 / 0` when empty.
pub fn position_label(index: Option<usize>, len: usize) -> String {
    match index {
        Some(i) => format!("{} / {}", i + 1, len),
        None => format!("0 / {len}"),
    }
}
