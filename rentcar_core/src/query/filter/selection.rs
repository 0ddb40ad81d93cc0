//! Membership predicates over categories, brands and text attributes

/// Set-membership test for category/brand style filters.
///
/// An empty allowed list is no constraint. An item without the field
/// fails a non-empty constraint (fail-closed): a tour with no brand never
/// matches a brand filter.
pub(super) fn matches_membership(value: Option<&str>, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match value {
        Some(value) => allowed.iter().any(|a| a.eq_ignore_ascii_case(value)),
        None => false,
    }
}

/// Test whether a multi-valued text attribute contains the wanted value.
/// Used for transmission and fuel-type selections against array-capable
/// attributes; a missing attribute fails closed.
pub(super) fn matches_selection(values: Option<&[String]>, wanted: &str) -> bool {
    match values {
        Some(values) => values.iter().any(|v| v.eq_ignore_ascii_case(wanted)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_allowed_list_passes() {
        assert!(matches_membership(Some("MPV"), &[]));
        assert!(matches_membership(None, &[]));
    }

    #[test]
    fn test_membership_case_insensitive() {
        let allowed = list(&["mpv", "suv"]);
        assert!(matches_membership(Some("MPV"), &allowed));
        assert!(matches_membership(Some("Suv"), &allowed));
    }

    #[test]
    fn test_missing_value_fails_nonempty_constraint() {
        assert!(!matches_membership(None, &list(&["Toyota"])));
    }

    #[test]
    fn test_value_not_in_list_fails() {
        assert!(!matches_membership(Some("Sedan"), &list(&["MPV", "SUV"])));
    }

    #[test]
    fn test_selection_matches_any_element() {
        let values = list(&["Manual", "Matic"]);
        assert!(matches_selection(Some(&values), "matic"));
        assert!(matches_selection(Some(&values), "MANUAL"));
    }

    #[test]
    fn test_selection_missing_attribute_fails_closed() {
        assert!(!matches_selection(None, "Matic"));
    }

    #[test]
    fn test_selection_no_matching_element_fails() {
        let values = list(&["Manual"]);
        assert!(!matches_selection(Some(&values), "Matic"));
    }
}
