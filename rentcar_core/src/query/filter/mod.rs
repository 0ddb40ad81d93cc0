//! Filter state and matching logic

mod numeric;
mod search;
mod selection;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::CatalogItem;

/// Inclusive price bounds.
///
/// Construction swaps inverted bounds instead of rejecting them, so a
/// buggy slider can never put the filter state in an unusable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: Decimal,
    max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Decimal {
        self.max
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// A record of independent, optional constraints over catalog items.
///
/// Every field has an "unconstrained" value (empty string, empty list,
/// `None`, empty map); the default filter set passes every item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Case-insensitive substring test against the item's search text.
    pub search: String,
    /// Category membership; empty passes all categories.
    pub categories: Vec<String>,
    /// Brand membership; empty passes all brands.
    pub brands: Vec<String>,
    /// Inclusive price bounds; `None` is unconstrained.
    pub price_range: Option<PriceRange>,
    /// Named numeric minimums: `numeric_attributes[field] >= value`.
    pub thresholds: BTreeMap<String, f64>,
    /// Named text selections: `text_attributes[field]` must contain the
    /// value (case-insensitive). Covers transmission and fuel type.
    pub selections: BTreeMap<String, String>,
}

impl FilterSet {
    /// Decide whether an item belongs in the filtered result.
    ///
    /// Pure: the logical AND of the sub-predicates. An item missing an
    /// attribute named by a threshold or selection fails that predicate
    /// (fail-closed), it never errors.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        search::matches_search(item.searchable_text(), &self.search)
            && selection::matches_membership(item.category.as_deref(), &self.categories)
            && selection::matches_membership(item.brand.as_deref(), &self.brands)
            && numeric::matches_price(item.price, self.price_range.as_ref())
            && self
                .thresholds
                .iter()
                .all(|(field, min)| numeric::meets_threshold(item.numeric_attribute(field), *min))
            && self
                .selections
                .iter()
                .all(|(field, wanted)| selection::matches_selection(item.text_attribute(field), wanted))
    }

    /// Merge a partial update into this filter set, returning the new set.
    pub fn merge(&self, patch: &FilterPatch) -> FilterSet {
        let mut next = self.clone();
        if let Some(search) = &patch.search {
            next.search = search.clone();
        }
        if let Some(categories) = &patch.categories {
            next.categories = categories.clone();
        }
        if let Some(brands) = &patch.brands {
            next.brands = brands.clone();
        }
        if let Some(price_range) = &patch.price_range {
            next.price_range = *price_range;
        }
        for (field, value) in &patch.thresholds {
            match value {
                Some(min) => {
                    next.thresholds.insert(field.clone(), *min);
                }
                None => {
                    next.thresholds.remove(field);
                }
            }
        }
        for (field, value) in &patch.selections {
            match value {
                Some(wanted) => {
                    next.selections.insert(field.clone(), wanted.clone());
                }
                None => {
                    next.selections.remove(field);
                }
            }
        }
        next
    }
}

/// A partial filter update, merged field by field by [`FilterSet::merge`].
///
/// Unset fields leave the current value alone, so UI controls can each
/// patch only the constraint they own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    search: Option<String>,
    categories: Option<Vec<String>>,
    brands: Option<Vec<String>>,
    // Outer Option: whether the patch touches the range at all.
    // Inner Option: the new value, where None clears the constraint.
    price_range: Option<Option<PriceRange>>,
    thresholds: BTreeMap<String, Option<f64>>,
    selections: BTreeMap<String, Option<String>>,
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn brands(mut self, brands: Vec<String>) -> Self {
        self.brands = Some(brands);
        self
    }

    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(Some(range));
        self
    }

    pub fn clear_price_range(mut self) -> Self {
        self.price_range = Some(None);
        self
    }

    pub fn threshold(mut self, field: impl Into<String>, min: f64) -> Self {
        self.thresholds.insert(field.into(), Some(min));
        self
    }

    pub fn clear_threshold(mut self, field: impl Into<String>) -> Self {
        self.thresholds.insert(field.into(), None);
        self
    }

    pub fn selection(mut self, field: impl Into<String>, wanted: impl Into<String>) -> Self {
        self.selections.insert(field.into(), Some(wanted.into()));
        self
    }

    pub fn clear_selection(mut self, field: impl Into<String>) -> Self {
        self.selections.insert(field.into(), None);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::item::ItemId;

    fn avanza() -> CatalogItem {
        CatalogItem::new(ItemId::new("car-1"), "Toyota Avanza", Decimal::from(350_000))
            .with_category("MPV")
            .with_brand("Toyota")
            .with_numeric_attribute(attrs::CAPACITY, 7.0)
            .with_text_attribute(
                attrs::TRANSMISSION,
                vec!["Manual".to_string(), "Matic".to_string()],
            )
    }

    #[test]
    fn test_default_filter_passes_everything() {
        assert!(FilterSet::default().matches(&avanza()));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let filters = FilterSet {
            search: "avanza".to_string(),
            categories: vec!["MPV".to_string()],
            ..FilterSet::default()
        };
        assert!(filters.matches(&avanza()));

        // Same search, wrong category: the AND fails
        let filters = FilterSet {
            search: "avanza".to_string(),
            categories: vec!["City Car".to_string()],
            ..FilterSet::default()
        };
        assert!(!filters.matches(&avanza()));
    }

    #[test]
    fn test_threshold_fails_closed_on_missing_attribute() {
        let filters = FilterSet {
            thresholds: BTreeMap::from([(attrs::RATING.to_string(), 4.0)]),
            ..FilterSet::default()
        };
        // avanza() has no rating attribute
        assert!(!filters.matches(&avanza()));
    }

    #[test]
    fn test_selection_matches_any_listed_value() {
        let filters = FilterSet {
            selections: BTreeMap::from([(attrs::TRANSMISSION.to_string(), "matic".to_string())]),
            ..FilterSet::default()
        };
        assert!(filters.matches(&avanza()));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let filters = FilterSet {
            price_range: Some(PriceRange::new(
                Decimal::from(350_000),
                Decimal::from(400_000),
            )),
            ..FilterSet::default()
        };
        assert!(filters.matches(&avanza()));
    }

    #[test]
    fn test_inverted_price_range_is_swapped() {
        let range = PriceRange::new(Decimal::from(300), Decimal::from(100));
        assert_eq!(range.min(), Decimal::from(100));
        assert_eq!(range.max(), Decimal::from(300));
        assert!(range.contains(Decimal::from(200)));
    }

    #[test]
    fn test_merge_empty_patch_is_identity() {
        let filters = FilterSet {
            search: "avanza".to_string(),
            thresholds: BTreeMap::from([(attrs::CAPACITY.to_string(), 4.0)]),
            ..FilterSet::default()
        };
        assert_eq!(filters.merge(&FilterPatch::new()), filters);
    }

    #[test]
    fn test_merge_updates_only_patched_fields() {
        let filters = FilterSet {
            search: "avanza".to_string(),
            categories: vec!["MPV".to_string()],
            ..FilterSet::default()
        };
        let merged = filters.merge(&FilterPatch::new().search("brio"));
        assert_eq!(merged.search, "brio");
        assert_eq!(merged.categories, vec!["MPV".to_string()]);
    }

    #[test]
    fn test_merge_clears_threshold_and_price_range() {
        let filters = FilterSet {
            price_range: Some(PriceRange::new(Decimal::ZERO, Decimal::from(100))),
            thresholds: BTreeMap::from([(attrs::CAPACITY.to_string(), 4.0)]),
            ..FilterSet::default()
        };
        let merged = filters.merge(
            &FilterPatch::new()
                .clear_price_range()
                .clear_threshold(attrs::CAPACITY),
        );
        assert_eq!(merged, FilterSet::default());
    }

    #[test]
    fn test_merge_sets_selection() {
        let merged = FilterSet::default().merge(
            &FilterPatch::new().selection(attrs::FUEL_TYPE, "Bensin"),
        );
        assert_eq!(
            merged.selections.get(attrs::FUEL_TYPE).map(String::as_str),
            Some("Bensin")
        );
    }
}
