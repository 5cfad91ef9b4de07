/// Helpers shared by sortable list headers
use std::cmp::Ordering;

/// Locale-style string comparison.
///
/// Case-insensitive first; on a tie lowercase sorts before uppercase, the way
/// browser collation orders "apple" before "Apple".
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Sort indicator for a column header
pub fn get_sort_indicator(is_active: bool, ascending: bool) -> &'static str {
    match (is_active, ascending) {
        (true, true) => " ▲",
        (true, false) => " ▼",
        (false, _) => " ⇅",
    }
}

pub fn get_sort_class(is_active: bool) -> &'static str {
    if is_active {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_ignores_case_first() {
        assert_eq!(locale_compare("alice", "Bob"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "adam"), Ordering::Greater);
    }

    #[test]
    fn lowercase_wins_ties() {
        assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn indicator_reflects_state() {
        assert_eq!(get_sort_indicator(true, true), " ▲");
        assert_eq!(get_sort_indicator(true, false), " ▼");
        assert_eq!(get_sort_indicator(false, false), " ⇅");
    }
}
