//! Substring search predicate

/// Case-insensitive substring test against an item's search text.
/// An empty or whitespace-only query passes everything.
pub(super) fn matches_search(searchable: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    searchable.to_lowercase().contains(&query.to_lowercase())
}
